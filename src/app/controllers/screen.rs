//! Event handling for the tip screen, independent of any widget toolkit.
//!
//! One [`Message`] in, one [`Effect`] out. The FLTK layer only renders
//! effects, so the whole screen can be driven from tests.

use tracing::debug;

use super::theme::{DisplayMode, ThemeController};
use crate::app::domain::messages::Message;
use crate::app::domain::rating::TipRating;
use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::preferences::PreferenceStore;
use crate::app::services::tip_engine::{classify_tip, compute_from_text, format_currency, format_percent};

/// Everything the screen displays for the current inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub tip_percent: u32,
    pub percent_label: String,
    pub rating: TipRating,
    /// `None` means the field is cleared
    pub tip_amount: Option<String>,
    pub total_amount: Option<String>,
}

/// What the UI must do after a message was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render(ScreenView),
    ApplyTheme(DisplayMode),
}

/// Result of [`ScreenController::start`].
#[derive(Debug, Clone, PartialEq)]
pub struct Startup {
    /// Position for the theme switch, set without triggering its callback
    pub dark_mode: bool,
    pub view: ScreenView,
}

pub struct ScreenController<S: PreferenceStore> {
    settings: AppSettings,
    theme: ThemeController<S>,
    bill_text: String,
    tip_percent: u32,
}

impl<S: PreferenceStore> ScreenController<S> {
    pub fn new(settings: AppSettings, theme: ThemeController<S>) -> Self {
        let settings = settings.sanitized();
        let tip_percent = settings.initial_tip_percent;
        Self {
            settings,
            theme,
            bill_text: String::new(),
            tip_percent,
        }
    }

    /// Initialize the theme and produce the first frame.
    pub fn start(&mut self) -> Startup {
        let dark_mode = self.theme.initialize();
        Startup {
            dark_mode,
            view: self.view(),
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        debug!(?msg, "screen message");
        match msg {
            Message::TipPercentChanged(percent) => {
                self.tip_percent = self.settings.clamp_percent(percent);
                Effect::Render(self.view())
            }
            Message::BillAmountChanged(text) => {
                self.bill_text = text;
                Effect::Render(self.view())
            }
            Message::DarkModeToggled(is_dark) => {
                self.theme.toggle(is_dark);
                Effect::ApplyTheme(self.theme.display_mode())
            }
        }
    }

    /// Recompute the view from the current inputs.
    pub fn view(&self) -> ScreenView {
        let symbol = &self.settings.currency_symbol;
        let amounts = compute_from_text(&self.bill_text, self.tip_percent);
        ScreenView {
            tip_percent: self.tip_percent,
            percent_label: format_percent(self.tip_percent),
            rating: classify_tip(self.tip_percent),
            tip_amount: amounts.map(|a| format_currency(a.tip, symbol)),
            total_amount: amounts.map(|a| format_currency(a.total, symbol)),
        }
    }

    pub fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    pub fn bill_text(&self) -> &str {
        &self.bill_text
    }

    pub fn tip_percent(&self) -> u32 {
        self.tip_percent
    }
}
