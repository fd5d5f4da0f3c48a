//! Main shell: header, the routed screen and the bottom tab bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use goalgather_core::config::Config;
use goalgather_core::fixtures::Fixtures;
use goalgather_core::navigation::{NavAction, Route, Tab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::chat::{self, ChatState};
use super::chats::{self, ChatsState};
use super::discovery::{self, DiscoveryState};
use super::event_detail::{self, EventDetailState};
use super::live::{self, LiveState};
use super::matchday::{self, MatchdayState};
use super::profile::{self, ProfileState};
use super::search::{self, SearchState};
use super::settings::{self, SettingsState};
use super::{RenderCtx, ScreenAction};
use crate::common::theme;

/// State of the screen for the current route.
#[derive(Debug)]
pub enum Screen {
    Discovery(DiscoveryState),
    Search(SearchState),
    Live(LiveState),
    Chats(ChatsState),
    EventDetail(EventDetailState),
    Chat(ChatState),
    Matchday(MatchdayState),
    Profile(ProfileState),
    Settings(SettingsState),
}

impl Screen {
    pub fn for_route(route: &Route, fixtures: &Fixtures, config: &Config) -> Self {
        let display_name = config.effective_display_name();
        match route {
            Route::Discovery => Screen::Discovery(DiscoveryState::default()),
            Route::Search => Screen::Search(SearchState::new(
                config.venue_filter().unwrap_or_default(),
            )),
            Route::Live => Screen::Live(LiveState::default()),
            Route::Chats => Screen::Chats(ChatsState::default()),
            Route::EventDetail { event_id } => {
                Screen::EventDetail(EventDetailState::new(fixtures, event_id))
            }
            Route::Chat { chat_id } => Screen::Chat(ChatState::new(fixtures, chat_id, display_name)),
            Route::Matchday { event_id } => {
                Screen::Matchday(MatchdayState::new(fixtures, event_id, display_name))
            }
            Route::Profile => Screen::Profile(ProfileState::new(fixtures)),
            Route::Settings => Screen::Settings(SettingsState::new(fixtures)),
        }
    }

    /// Screens with a text input take printable keys for themselves.
    pub fn captures_text(&self) -> bool {
        matches!(
            self,
            Screen::Search(_) | Screen::Chat(_) | Screen::Matchday(_)
        )
    }

    /// Inserts pasted text into the screen's text input, if it has one.
    pub fn paste(&mut self, text: &str) {
        match self {
            Screen::Search(state) => {
                state.query.insert_str(text);
                state.selected = 0;
            }
            Screen::Chat(state) => state.input.insert_str(text),
            Screen::Matchday(state) => state.compose.insert_str(text),
            _ => {}
        }
    }

    /// Image URLs shown on this screen.
    pub fn image_urls(&self, fixtures: &Fixtures) -> Vec<String> {
        match self {
            Screen::Discovery(_) => fixtures.events.iter().map(|e| e.image_url.clone()).collect(),
            Screen::EventDetail(state) => state
                .event
                .iter()
                .map(|e| e.image_url.clone())
                .collect(),
            Screen::Live(_) => fixtures
                .live_matches
                .iter()
                .chain(&fixtures.upcoming_matches)
                .map(|m| m.image_url.clone())
                .collect(),
            Screen::Matchday(state) => state
                .feed
                .posts()
                .iter()
                .filter_map(|p| p.image_url.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn handle_key(&mut self, fixtures: &Fixtures, key: KeyEvent) -> ScreenAction {
        match self {
            Screen::Discovery(state) => state.handle_key(fixtures, key),
            Screen::Search(state) => state.handle_key(fixtures, key),
            Screen::Live(state) => state.handle_key(fixtures, key),
            Screen::Chats(state) => state.handle_key(fixtures, key),
            Screen::EventDetail(state) => state.handle_key(key),
            Screen::Chat(state) => state.handle_key(key),
            Screen::Matchday(state) => state.handle_key(key),
            Screen::Profile(state) => state.handle_key(key),
            Screen::Settings(state) => state.handle_key(key),
        }
    }
}

#[derive(Debug)]
pub struct MainShell {
    pub route: Route,
    pub screen: Screen,
}

impl MainShell {
    pub fn new(fixtures: &Fixtures, config: &Config) -> Self {
        let route = Route::default();
        let screen = Screen::for_route(&route, fixtures, config);
        Self { route, screen }
    }

    /// Moves to a new route. Returns false when the route did not change,
    /// in which case the current screen state is kept.
    pub fn navigate(&mut self, action: NavAction, fixtures: &Fixtures, config: &Config) -> bool {
        let next = self.route.apply(action);
        if next == self.route {
            return false;
        }
        tracing::debug!(from = %self.route, to = %next, "Route changed");
        self.screen = Screen::for_route(&next, fixtures, config);
        self.route = next;
        true
    }

    /// Shell-level keys first, then the screen's own handler.
    pub fn handle_key(&mut self, fixtures: &Fixtures, key: KeyEvent) -> ScreenAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let typing = self.screen.captures_text();
        match key.code {
            KeyCode::Char('p') if ctrl => ScreenAction::Navigate(NavAction::OpenProfile),
            KeyCode::Tab => ScreenAction::Navigate(NavAction::SelectTab(self.cycle_tab(true))),
            KeyCode::BackTab => ScreenAction::Navigate(NavAction::SelectTab(self.cycle_tab(false))),
            KeyCode::Esc => ScreenAction::Navigate(NavAction::Back),
            KeyCode::Char(c @ '1'..='5') if !typing && !ctrl => {
                let index = (c as usize) - ('1' as usize);
                match Tab::all().get(index) {
                    Some(tab) => ScreenAction::Navigate(NavAction::SelectTab(*tab)),
                    None => ScreenAction::None,
                }
            }
            _ => self.screen.handle_key(fixtures, key),
        }
    }

    fn cycle_tab(&self, forward: bool) -> Tab {
        let tabs = Tab::all();
        let current = self
            .route
            .active_tab()
            .and_then(|tab| tabs.iter().position(|t| *t == tab));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % tabs.len(),
            (Some(i), false) => (i + tabs.len() - 1) % tabs.len(),
            (None, _) => 0,
        };
        tabs[next]
    }

    pub fn settings_mut(&mut self) -> Option<&mut SettingsState> {
        match &mut self.screen {
            Screen::Settings(state) => Some(state),
            _ => None,
        }
    }
}

pub fn render(shell: &MainShell, ctx: &RenderCtx<'_>, frame: &mut Frame, area: Rect) {
    let [header, body, tabs] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    render_header(frame, header);

    match &shell.screen {
        Screen::Discovery(state) => discovery::render(state, ctx, frame, body),
        Screen::Search(state) => search::render(state, ctx, frame, body),
        Screen::Live(state) => live::render(state, ctx, frame, body),
        Screen::Chats(state) => chats::render(state, ctx, frame, body),
        Screen::EventDetail(state) => event_detail::render(state, ctx, frame, body),
        Screen::Chat(state) => chat::render(state, frame, body),
        Screen::Matchday(state) => matchday::render(state, ctx, frame, body),
        Screen::Profile(state) => profile::render(state, frame, body),
        Screen::Settings(state) => settings::render(state, frame, body),
    }

    render_tab_bar(shell.route.active_tab(), frame, tabs);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(20)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ⚽ GoalGather",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))),
        left,
    );
    frame.render_widget(
        Paragraph::new(theme::hints(&[("Ctrl+P", "profile")])).right_aligned(),
        right,
    );
}

fn render_tab_bar(active: Option<Tab>, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, tab) in Tab::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(theme::chip(
            &format!("{} {}", i + 1, tab.label()),
            active == Some(*tab),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans).centered())
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shell() -> (MainShell, Fixtures, Config) {
        let fixtures = Fixtures::demo();
        let config = Config::default();
        (MainShell::new(&fixtures, &config), fixtures, config)
    }

    #[test]
    fn test_digit_selects_tab_outside_text_screens() {
        let (mut shell, fixtures, _) = shell();
        assert!(matches!(
            shell.handle_key(&fixtures, key(KeyCode::Char('3'))),
            ScreenAction::Navigate(NavAction::SelectTab(Tab::Live))
        ));
    }

    #[test]
    fn test_digit_is_typed_on_search() {
        let (mut shell, fixtures, config) = shell();
        shell.navigate(NavAction::SelectTab(Tab::Search), &fixtures, &config);
        shell.handle_key(&fixtures, key(KeyCode::Char('3')));
        match &shell.screen {
            Screen::Search(state) => assert_eq!(state.query.text(), "3"),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_tab_cycles_from_detail_to_first_tab() {
        let (mut shell, fixtures, config) = shell();
        shell.navigate(NavAction::OpenEvent("1".into()), &fixtures, &config);
        assert!(matches!(
            shell.handle_key(&fixtures, key(KeyCode::Tab)),
            ScreenAction::Navigate(NavAction::SelectTab(Tab::Discover))
        ));
        assert_eq!(shell.cycle_tab(false), Tab::Discover);
    }

    #[test]
    fn test_navigate_to_same_route_keeps_screen_state() {
        let (mut shell, fixtures, config) = shell();
        shell.navigate(NavAction::SelectTab(Tab::Live), &fixtures, &config);
        if let Screen::Live(state) = &mut shell.screen {
            state.selected = 2;
        }
        assert!(!shell.navigate(NavAction::SelectTab(Tab::Live), &fixtures, &config));
        match &shell.screen {
            Screen::Live(state) => assert_eq!(state.selected, 2),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_matchday_requests_post_images() {
        let (mut shell, fixtures, config) = shell();
        shell.navigate(NavAction::StartMatchday("1".into()), &fixtures, &config);
        let expected = fixtures
            .posts
            .iter()
            .filter(|p| p.image_url.is_some())
            .count();
        assert_eq!(shell.screen.image_urls(&fixtures).len(), expected);
    }
}
