use fltk::{
    app::Sender,
    button::CheckButton,
    enums::{Align, CallbackTrigger, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    input::FloatInput,
    prelude::*,
    valuator::HorNiceSlider,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

const WINDOW_WIDTH: i32 = 360;
const WINDOW_HEIGHT: i32 = 300;
const ROW_HEIGHT: i32 = 34;
const CAPTION_WIDTH: i32 = 110;

pub struct MainWidgets {
    pub wind: Window,
    pub bill_input: FloatInput,
    pub tip_slider: HorNiceSlider,
    pub percent_frame: Frame,
    pub rating_frame: Frame,
    pub tip_amount_frame: Frame,
    pub total_amount_frame: Frame,
    pub theme_switch: CheckButton,
    /// Static row captions, recolored with the theme
    pub captions: Vec<Frame>,
}

/// Start a captioned row inside `column`. The caller adds the value widget and ends the row.
fn begin_row(column: &mut Flex, caption: &str) -> (Flex, Frame) {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    let caption = Frame::default()
        .with_label(caption)
        .with_align(Align::Left | Align::Inside);
    row.fixed(&caption, CAPTION_WIDTH);
    column.fixed(&row, ROW_HEIGHT);
    (row, caption)
}

fn value_frame() -> Frame {
    let mut frame = Frame::default().with_align(Align::Left | Align::Inside);
    frame.set_label_size(16);
    frame
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "\u{1f980} FerrisTip");
    wind.set_xclass("FerrisTip");

    let mut column = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    column.set_type(FlexType::Column);
    column.set_margin(16);
    column.set_pad(8);

    let mut captions = Vec::new();

    // Bill amount
    let (row, caption) = begin_row(&mut column, "Bill amount");
    let mut bill_input = FloatInput::default();
    bill_input.set_trigger(CallbackTrigger::Changed);
    bill_input.set_callback({
        let s = *sender;
        move |i| s.send(Message::BillAmountChanged(i.value()))
    });
    row.end();
    captions.push(caption);

    // Tip percent: the caption slot carries the live percentage
    let (row, mut percent_frame) = begin_row(&mut column, "");
    percent_frame.set_label_size(16);
    let mut tip_slider = HorNiceSlider::default();
    tip_slider.set_bounds(0.0, f64::from(settings.tip_max_percent));
    tip_slider.set_step(1.0, 1);
    tip_slider.set_value(f64::from(settings.initial_tip_percent));
    tip_slider.set_trigger(CallbackTrigger::Changed);
    tip_slider.set_callback({
        let s = *sender;
        move |sl| s.send(Message::TipPercentChanged(sl.value().round().max(0.0) as u32))
    });
    row.end();

    // Rating
    let (row, caption) = begin_row(&mut column, "Rating");
    let mut rating_frame = value_frame();
    rating_frame.set_label_font(fltk::enums::Font::HelveticaBold);
    row.end();
    captions.push(caption);

    // Tip amount
    let (row, caption) = begin_row(&mut column, "Tip");
    let tip_amount_frame = value_frame();
    row.end();
    captions.push(caption);

    // Total amount
    let (row, caption) = begin_row(&mut column, "Total");
    let total_amount_frame = value_frame();
    row.end();
    captions.push(caption);

    // Spacer pushes the switch to the bottom
    Frame::default();

    let mut theme_switch = CheckButton::default().with_label("Dark mode");
    theme_switch.set_frame(FrameType::FlatBox);
    theme_switch.set_callback({
        let s = *sender;
        move |b| s.send(Message::DarkModeToggled(b.is_checked()))
    });
    column.fixed(&theme_switch, ROW_HEIGHT);

    column.end();
    wind.end();
    wind.resizable(&column);

    MainWidgets {
        wind,
        bill_input,
        tip_slider,
        percent_frame,
        rating_frame,
        tip_amount_frame,
        total_amount_frame,
        theme_switch,
        captions,
    }
}
