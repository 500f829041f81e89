use fltk::{app, prelude::*};

use ferris_tip::app::controllers::theme::THEME_STORE_NAME;
use ferris_tip::app::infrastructure::logging::init_logging;
use ferris_tip::app::state::AppState;
use ferris_tip::app::{AppSettings, JsonPreferenceStore, Message, ScreenController, ThemeController};
use ferris_tip::ui::main_window::build_main_window;

fn main() {
    init_logging();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&settings, &sender);

    let theme = ThemeController::new(JsonPreferenceStore::open_named(THEME_STORE_NAME));
    let screen = ScreenController::new(settings, theme);
    let mut state = AppState::new(widgets, screen);

    // Theme is applied before the window is first drawn
    state.start();
    state.widgets.wind.show();
    state.refresh_titlebar();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
