use fltk::{enums::Color, prelude::*, window::Window};

use super::main_window::MainWidgets;
use crate::app::controllers::theme::DisplayMode;
use crate::app::domain::rating::RatingColor;

struct ThemeColors {
    window_bg: Color,
    text: Color,
    input_bg: Color,
    input_text: Color,
    selection: Color,
    slider_track: Color,
}

fn theme_colors(mode: DisplayMode) -> ThemeColors {
    if mode.is_dark() {
        ThemeColors {
            window_bg: Color::from_rgb(25, 25, 25),
            text: Color::from_rgb(220, 220, 220),
            input_bg: Color::from_rgb(40, 40, 40),
            input_text: Color::from_rgb(230, 230, 230),
            selection: Color::from_rgb(70, 70, 100),
            slider_track: Color::from_rgb(60, 60, 60),
        }
    } else {
        ThemeColors {
            window_bg: Color::from_rgb(240, 240, 240),
            text: Color::Black,
            input_bg: Color::White,
            input_text: Color::Black,
            selection: Color::from_rgb(173, 216, 230),
            slider_track: Color::from_rgb(200, 200, 200),
        }
    }
}

/// Concrete color for a rating token in the given mode
pub fn rating_color(token: RatingColor, mode: DisplayMode) -> Color {
    let (r, g, b) = if mode.is_dark() { token.to_rgb_dark() } else { token.to_rgb() };
    Color::from_rgb(r, g, b)
}

pub fn apply_theme(widgets: &mut MainWidgets, mode: DisplayMode) {
    let colors = theme_colors(mode);

    widgets.wind.set_color(colors.window_bg);
    widgets.wind.set_label_color(colors.text);

    widgets.bill_input.set_color(colors.input_bg);
    widgets.bill_input.set_text_color(colors.input_text);
    widgets.bill_input.set_cursor_color(colors.input_text);
    widgets.bill_input.set_selection_color(colors.selection);

    widgets.tip_slider.set_color(colors.slider_track);
    widgets.tip_slider.set_selection_color(colors.selection);

    for frame in widgets
        .captions
        .iter_mut()
        .chain([
            &mut widgets.percent_frame,
            &mut widgets.tip_amount_frame,
            &mut widgets.total_amount_frame,
        ])
    {
        frame.set_label_color(colors.text);
    }

    widgets.theme_switch.set_color(colors.window_bg);
    widgets.theme_switch.set_label_color(colors.text);
    widgets.theme_switch.set_selection_color(colors.text);

    widgets.wind.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 on Windows 11 / Windows 10 2004+
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Attribute 19 on Windows 10 1809-1903
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}

#[cfg(not(target_os = "windows"))]
pub fn set_windows_titlebar_theme(_window: &Window, _is_dark: bool) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_color_follows_mode() {
        let light = rating_color(RatingColor::TipGreat, DisplayMode::Light);
        let dark = rating_color(RatingColor::TipGreat, DisplayMode::Dark);
        assert_eq!(light, Color::from_rgb(80, 160, 60));
        assert_eq!(dark, Color::from_rgb(140, 210, 110));
    }

    #[test]
    fn test_theme_colors_differ() {
        let light = theme_colors(DisplayMode::Light);
        let dark = theme_colors(DisplayMode::Dark);
        assert_ne!(light.window_bg, dark.window_bg);
        assert_ne!(light.text, dark.text);
    }
}
