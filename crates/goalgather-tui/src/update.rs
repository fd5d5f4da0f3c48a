//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use goalgather_core::forms::AuthOutcome;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::ScreenAction;
use crate::features::auth::{AuthAction, LoginState, SignUpState, WelcomeState};
use crate::features::shell::MainShell;
use crate::mutations::StateMutation;
use crate::overlays::{Overlay, OverlayTransition};
use crate::state::{AppState, Session, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.viewport = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            if app.tui.session.awaits(kind) {
                vec![]
            } else {
                // The form was left before the task spawned.
                let token = app.tui.tasks.state_mut(kind).take_cancel();
                vec![UiEffect::CancelTask { kind, token }]
            }
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
        UiEvent::AuthFinished { kind, outcome } => handle_auth_finished(app, kind, outcome),
        UiEvent::AuthCancelled { kind } => {
            tracing::debug!(?kind, "Sign-in cancelled");
            vec![]
        }
        UiEvent::ImageLoaded { url, image } => {
            app.tui.images.resolve(url, image);
            vec![]
        }
    }
}

/// Image loads for whatever screen the app starts on.
pub fn initial_effects(app: &mut AppState) -> Vec<UiEffect> {
    request_images(&mut app.tui)
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return quit(app);
    }

    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        apply_mutations(&mut app.tui, update.mutations);
        if update.transition == OverlayTransition::Close {
            app.overlay = None;
        }
        return vec![];
    }

    let TuiState {
        session, fixtures, ..
    } = &mut app.tui;
    match session {
        Session::Welcome(state) => {
            let action = state.handle_key(key);
            handle_auth_action(app, action)
        }
        Session::Login(state) => {
            let action = state.handle_key(key);
            handle_auth_action(app, action)
        }
        Session::SignUp(state) => {
            let action = state.handle_key(key);
            handle_auth_action(app, action)
        }
        Session::Main(shell) => {
            if key.code == KeyCode::Char('q')
                && key.modifiers.is_empty()
                && !shell.screen.captures_text()
            {
                return quit(app);
            }
            let action = shell.handle_key(fixtures, key);
            handle_screen_action(app, action)
        }
    }
}

fn handle_paste(app: &mut AppState, text: &str) {
    if app.overlay.is_some() {
        return;
    }
    match &mut app.tui.session {
        Session::Login(state) => state.paste(text),
        Session::SignUp(state) => state.paste(text),
        Session::Main(shell) => shell.screen.paste(text),
        Session::Welcome(_) => {}
    }
}

fn handle_auth_action(app: &mut AppState, action: AuthAction) -> Vec<UiEffect> {
    match action {
        AuthAction::Stay => vec![],
        AuthAction::ShowWelcome => {
            let effects = cancel_auth_tasks(&mut app.tui);
            switch_session(&mut app.tui, Session::Welcome(WelcomeState::default()));
            effects
        }
        AuthAction::ShowLogin => {
            let effects = cancel_auth_tasks(&mut app.tui);
            switch_session(&mut app.tui, Session::Login(LoginState::default()));
            effects
        }
        AuthAction::ShowSignUp => {
            let effects = cancel_auth_tasks(&mut app.tui);
            switch_session(&mut app.tui, Session::SignUp(SignUpState::default()));
            effects
        }
        AuthAction::EnterDemo => {
            tracing::info!("Entering demo mode");
            enter_main(&mut app.tui)
        }
        AuthAction::Quit => quit(app),
        AuthAction::Submit { kind, outcome } => {
            let task = app.tui.task_seq.next_id();
            let delay = app.tui.config.auth_delay();
            tracing::info!(?kind, delay_ms = delay.as_millis(), "Submitting sign-in");
            vec![UiEffect::StartAuth {
                task,
                kind,
                outcome,
                delay,
            }]
        }
    }
}

fn handle_auth_finished(app: &mut AppState, kind: TaskKind, outcome: AuthOutcome) -> Vec<UiEffect> {
    if !app.tui.session.awaits(kind) {
        tracing::debug!(?kind, "Ignoring sign-in result for a closed form");
        return vec![];
    }
    match outcome {
        AuthOutcome::Success => {
            tracing::info!(?kind, "Signed in");
            enter_main(&mut app.tui)
        }
        AuthOutcome::Failure(_) => {
            tracing::warn!(?kind, "Sign-in rejected");
            if let Session::Login(state) = &mut app.tui.session {
                state.finish(&outcome);
            }
            vec![]
        }
    }
}

fn handle_screen_action(app: &mut AppState, action: ScreenAction) -> Vec<UiEffect> {
    match action {
        ScreenAction::None => vec![],
        ScreenAction::Navigate(nav) => {
            let TuiState {
                session,
                fixtures,
                config,
                ..
            } = &mut app.tui;
            let changed = match session {
                Session::Main(shell) => shell.navigate(nav, fixtures, config),
                _ => false,
            };
            if changed {
                request_images(&mut app.tui)
            } else {
                vec![]
            }
        }
        ScreenAction::OpenOverlay(request) => {
            let overlay = Overlay::open(request);
            tracing::debug!(overlay = overlay.name(), "Sheet opened");
            app.overlay = Some(overlay);
            vec![]
        }
        ScreenAction::SignOut => {
            tracing::info!("Signed out");
            app.overlay = None;
            switch_session(&mut app.tui, Session::Welcome(WelcomeState::default()));
            vec![]
        }
    }
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Settings(mutation) => {
                match tui.shell_mut().and_then(MainShell::settings_mut) {
                    Some(settings) => settings.apply(mutation),
                    None => tracing::warn!(?mutation, "Settings change with no settings screen"),
                }
            }
        }
    }
}

fn switch_session(tui: &mut TuiState, next: Session) {
    tracing::debug!(from = tui.session.name(), to = next.name(), "Session changed");
    tui.session = next;
}

fn enter_main(tui: &mut TuiState) -> Vec<UiEffect> {
    let shell = MainShell::new(&tui.fixtures, &tui.config);
    switch_session(tui, Session::Main(shell));
    request_images(tui)
}

/// Requests images for the current screen that have not been asked for yet.
fn request_images(tui: &mut TuiState) -> Vec<UiEffect> {
    let Session::Main(shell) = &tui.session else {
        return vec![];
    };
    let urls = shell.screen.image_urls(&tui.fixtures);
    urls.into_iter()
        .filter(|url| tui.images.request(url))
        .map(|url| UiEffect::LoadImage { url })
        .collect()
}

fn cancel_auth_tasks(tui: &mut TuiState) -> Vec<UiEffect> {
    [TaskKind::Login, TaskKind::SignUp]
        .into_iter()
        .filter_map(|kind| {
            if !tui.tasks.state(kind).is_running() {
                return None;
            }
            Some(UiEffect::CancelTask {
                kind,
                token: tui.tasks.state_mut(kind).take_cancel(),
            })
        })
        .collect()
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = cancel_auth_tasks(&mut app.tui);
    app.tui.should_quit = true;
    effects.push(UiEffect::Quit);
    effects
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use goalgather_core::config::Config;
    use goalgather_core::fixtures::Fixtures;
    use goalgather_core::images::LoadedImage;
    use goalgather_core::navigation::Route;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};
    use crate::features::settings::{self, SettingsRow};
    use crate::features::shell::Screen;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    fn welcome_app() -> AppState {
        AppState::new(Config::default(), Fixtures::demo())
    }

    fn main_app() -> AppState {
        let config = Config {
            skip_welcome: true,
            ..Config::default()
        };
        AppState::new(config, Fixtures::demo())
    }

    fn route(app: &AppState) -> Option<&Route> {
        match &app.tui.session {
            Session::Main(shell) => Some(&shell.route),
            _ => None,
        }
    }

    /// Drives the login form to a submitted state and returns the task id.
    fn submit_login(app: &mut AppState, password: &str) -> TaskId {
        update(app, key(KeyCode::Char('l')));
        type_text(app, "fan@example.com");
        update(app, key(KeyCode::Tab));
        type_text(app, password);
        let effects = update(app, key(KeyCode::Enter));
        match effects.as_slice() {
            [UiEffect::StartAuth { task, delay, .. }] => {
                assert_eq!(*delay, Duration::from_millis(1500));
                *task
            }
            other => panic!("expected StartAuth, got {other:?}"),
        }
    }

    fn started(app: &mut AppState, id: TaskId, token: CancellationToken) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskStarted {
                kind: TaskKind::Login,
                started: TaskStarted {
                    id,
                    cancel: Some(token),
                },
            },
        )
    }

    fn completed(app: &mut AppState, id: TaskId, outcome: AuthOutcome) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Login,
                completed: TaskCompleted {
                    id,
                    result: Box::new(UiEvent::AuthFinished {
                        kind: TaskKind::Login,
                        outcome,
                    }),
                },
            },
        )
    }

    #[test]
    fn test_demo_enters_main_and_requests_each_banner_once() {
        let mut app = welcome_app();
        let effects = update(&mut app, key(KeyCode::Char('d')));
        assert_eq!(route(&app), Some(&Route::Discovery));

        let urls: HashSet<_> = app
            .tui
            .fixtures
            .events
            .iter()
            .map(|e| e.image_url.clone())
            .filter(|u| !u.is_empty())
            .collect();
        let loads = effects
            .iter()
            .filter(|e| matches!(e, UiEffect::LoadImage { .. }))
            .count();
        assert_eq!(loads, urls.len());
    }

    #[test]
    fn test_login_success_after_task_completes() {
        let mut app = welcome_app();
        let id = submit_login(&mut app, "secret123");
        assert!(started(&mut app, id, CancellationToken::new()).is_empty());
        assert!(app.tui.tasks.is_any_running());

        completed(&mut app, id, AuthOutcome::Success);
        assert_eq!(route(&app), Some(&Route::Discovery));
        assert!(!app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_session_switches_between_auth_screens() {
        let mut app = welcome_app();
        assert_eq!(app.tui.session.name(), "welcome");
        let steps = [
            (key(KeyCode::Char('l')), "login"),
            (ctrl('n'), "sign-up"),
            (ctrl('l'), "login"),
            (key(KeyCode::Esc), "welcome"),
            (key(KeyCode::Char('d')), "main"),
        ];
        for (event, expected) in steps {
            update(&mut app, event);
            assert_eq!(app.tui.session.name(), expected);
        }
    }

    #[test]
    fn test_login_failure_keeps_form_with_error() {
        let mut app = welcome_app();
        let id = submit_login(&mut app, "abc");
        started(&mut app, id, CancellationToken::new());
        completed(
            &mut app,
            id,
            AuthOutcome::Failure("Invalid email or password. Please try again.".into()),
        );
        match &app.tui.session {
            Session::Login(state) => {
                assert!(!state.submitting);
                assert!(state.error.as_deref().unwrap_or("").contains("Invalid"));
            }
            _ => panic!("expected login screen"),
        }
    }

    #[test]
    fn test_leaving_login_cancels_and_ignores_late_result() {
        let mut app = welcome_app();
        let id = submit_login(&mut app, "secret123");
        let token = CancellationToken::new();
        started(&mut app, id, token.clone());

        let effects = update(&mut app, key(KeyCode::Esc));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask {
                kind: TaskKind::Login,
                token: Some(_)
            }]
        ));
        assert!(matches!(app.tui.session, Session::Welcome(_)));

        assert!(completed(&mut app, id, AuthOutcome::Success).is_empty());
        assert!(matches!(app.tui.session, Session::Welcome(_)));
    }

    #[test]
    fn test_task_started_after_leaving_is_cancelled() {
        let mut app = welcome_app();
        let id = submit_login(&mut app, "secret123");
        update(&mut app, key(KeyCode::Esc));

        let effects = started(&mut app, id, CancellationToken::new());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask { token: Some(_), .. }]
        ));
        assert!(!app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_q_quits_unless_typing() {
        let mut app = main_app();
        update(&mut app, key(KeyCode::Char('2')));
        assert_eq!(route(&app), Some(&Route::Search));
        assert!(update(&mut app, key(KeyCode::Char('q'))).is_empty());
        assert!(!app.tui.should_quit);

        update(&mut app, key(KeyCode::BackTab));
        assert_eq!(route(&app), Some(&Route::Discovery));
        let effects = update(&mut app, key(KeyCode::Char('q')));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
        assert!(app.tui.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = welcome_app();
        update(&mut app, key(KeyCode::Char('s')));
        let effects = update(&mut app, ctrl('c'));
        assert!(matches!(effects.last(), Some(UiEffect::Quit)));
    }

    #[test]
    fn test_blocked_users_sheet_unblocks_on_settings_screen() {
        let mut app = main_app();
        update(&mut app, ctrl('p'));
        update(&mut app, key(KeyCode::Char('s')));
        assert_eq!(route(&app), Some(&Route::Settings));

        let row = settings::rows()
            .position(|r| r == SettingsRow::BlockedUsers)
            .unwrap_or_default();
        if let Some(settings) = app.tui.shell_mut().and_then(MainShell::settings_mut) {
            settings.selected = row;
        }
        update(&mut app, key(KeyCode::Enter));
        assert!(app.overlay.is_some());

        update(&mut app, key(KeyCode::Char('u')));
        update(&mut app, key(KeyCode::Esc));
        assert!(app.overlay.is_none());

        let settings = app
            .tui
            .shell_mut()
            .and_then(MainShell::settings_mut)
            .map(|s| s.blocked.users().len());
        assert_eq!(settings, Some(1));
    }

    #[test]
    fn test_sign_out_returns_to_welcome() {
        let mut app = main_app();
        update(&mut app, ctrl('p'));
        update(&mut app, key(KeyCode::Char('s')));
        let row = settings::rows()
            .position(|r| r == SettingsRow::SignOut)
            .unwrap_or_default();
        if let Some(settings) = app.tui.shell_mut().and_then(MainShell::settings_mut) {
            settings.selected = row;
        }
        update(&mut app, key(KeyCode::Enter));
        assert!(matches!(app.tui.session, Session::Welcome(_)));
    }

    #[test]
    fn test_paste_goes_to_chat_input() {
        let mut app = main_app();
        update(&mut app, key(KeyCode::Char('4')));
        update(&mut app, key(KeyCode::Enter));
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("See you at gate B".into())),
        );
        match app.tui.shell_mut().map(|s| &s.screen) {
            Some(Screen::Chat(state)) => assert_eq!(state.input.text(), "See you at gate B"),
            _ => panic!("expected chat screen"),
        }
    }

    #[test]
    fn test_image_loaded_resolves_cache() {
        let mut app = main_app();
        let url = app.tui.fixtures.events[0].image_url.clone();
        update(
            &mut app,
            UiEvent::ImageLoaded {
                url: url.clone(),
                image: LoadedImage::Placeholder,
            },
        );
        assert_eq!(app.tui.images.get(&url), Some(&LoadedImage::Placeholder));
    }
}
