use fltk::prelude::*;

use super::controllers::screen::{Effect, ScreenController, ScreenView};
use super::controllers::theme::DisplayMode;
use super::domain::messages::Message;
use super::infrastructure::preferences::JsonPreferenceStore;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::{apply_theme, rating_color, set_windows_titlebar_theme};

/// Owns the widgets and the screen controller; turns effects into pixels.
pub struct AppState {
    pub widgets: MainWidgets,
    pub screen: ScreenController<JsonPreferenceStore>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, screen: ScreenController<JsonPreferenceStore>) -> Self {
        Self { widgets, screen }
    }

    /// Apply the stored theme and draw the first frame.
    pub fn start(&mut self) {
        let startup = self.screen.start();

        // set_checked does not fire the callback, so no write-back happens here
        self.widgets.theme_switch.set_checked(startup.dark_mode);
        self.widgets.tip_slider.set_value(f64::from(startup.view.tip_percent));

        let mode = self.screen.theme().display_mode();
        self.apply_display_mode(mode);
        self.render(&startup.view);
    }

    pub fn handle(&mut self, msg: Message) {
        match self.screen.handle(msg) {
            Effect::Render(view) => self.render(&view),
            Effect::ApplyTheme(mode) => {
                self.apply_display_mode(mode);
                // Rating color depends on the mode
                let view = self.screen.view();
                self.render(&view);
            }
        }
    }

    /// Sync the native title bar; needs a shown window.
    pub fn refresh_titlebar(&self) {
        if self.widgets.wind.shown() {
            set_windows_titlebar_theme(&self.widgets.wind, self.screen.theme().is_dark());
        }
    }

    fn apply_display_mode(&mut self, mode: DisplayMode) {
        apply_theme(&mut self.widgets, mode);
        self.refresh_titlebar();
    }

    fn render(&mut self, view: &ScreenView) {
        let mode = self.screen.theme().display_mode();
        let w = &mut self.widgets;

        w.percent_frame.set_label(&view.percent_label);
        w.rating_frame.set_label(view.rating.label());
        w.rating_frame.set_label_color(rating_color(view.rating.color(), mode));
        w.tip_amount_frame
            .set_label(view.tip_amount.as_deref().unwrap_or(""));
        w.total_amount_frame
            .set_label(view.total_amount.as_deref().unwrap_or(""));

        w.wind.redraw();
    }
}
