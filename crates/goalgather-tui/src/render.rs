//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;

use crate::features::auth::{login, signup, welcome};
use crate::features::{RenderCtx, shell};
use crate::overlays::OverlayExt;
use crate::state::{AppState, Session};

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    match &state.session {
        Session::Welcome(welcome) => welcome::render(welcome, frame, area),
        Session::Login(login) => login::render(login, state.spinner_frame, frame, area),
        Session::SignUp(signup) => signup::render(signup, state.spinner_frame, frame, area),
        Session::Main(main) => {
            let ctx = RenderCtx {
                fixtures: &state.fixtures,
                images: &state.images,
                spinner_frame: state.spinner_frame,
            };
            shell::render(main, &ctx, frame, area);
        }
    }

    app.overlay.render(frame, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use goalgather_core::config::Config;
    use goalgather_core::fixtures::Fixtures;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::events::UiEvent;
    use crate::update::update;

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, modifiers))),
        );
    }

    fn main_app() -> AppState {
        let config = Config {
            skip_welcome: true,
            ..Config::default()
        };
        AppState::new(config, Fixtures::demo())
    }

    #[test]
    fn test_welcome_screen_shows_choices() {
        let app = AppState::new(Config::default(), Fixtures::demo());
        let screen = draw(&app, 80, 24);
        assert!(screen.contains("GoalGather"));
        assert!(screen.contains("Try Demo"));
    }

    #[test]
    fn test_main_shell_shows_tab_bar() {
        let app = main_app();
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("GoalGather"));
        assert!(screen.contains("Discover"));
        assert!(screen.contains("Profile"));
    }

    #[test]
    fn test_every_tab_renders() {
        let mut app = main_app();
        for _ in 0..5 {
            let screen = draw(&app, 100, 30);
            assert!(screen.contains("GoalGather"));
            press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_settings_sheet_draws_over_screen() {
        let mut app = main_app();
        press(&mut app, KeyCode::Char('p'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.overlay.is_some());
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Edit Profile"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = main_app();
        draw(&app, 12, 4);
        press(&mut app, KeyCode::Char('p'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        draw(&app, 12, 4);
    }
}
