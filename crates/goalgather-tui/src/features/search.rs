//! Search screen: free-text query, venue chips, result count, Clear.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use goalgather_core::filter::{EventFilter, LeagueFilter, VenueFilter, filter_events};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::{Event, VenueType};
use goalgather_core::navigation::NavAction;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::discovery::{EVENT_CARD_HEIGHT, event_card};
use super::{RenderCtx, ScreenAction, scroll_for_selection, step_selection};
use crate::common::{TextField, theme};

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: TextField,
    pub venue: VenueFilter,
    pub selected: usize,
}

impl SearchState {
    pub fn new(default_venue: VenueFilter) -> Self {
        Self {
            venue: default_venue,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> EventFilter {
        EventFilter::new(self.query.text(), self.venue, LeagueFilter::All)
    }

    pub fn results<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        filter_events(events, &self.filter())
    }

    /// Resets query and venue to their "all" defaults.
    pub fn clear(&mut self) {
        let mut filter = self.filter();
        filter.reset();
        self.query.set_text(filter.query);
        self.venue = filter.venue;
        self.selected = 0;
    }

    pub fn handle_key(&mut self, fixtures: &Fixtures, key: KeyEvent) -> ScreenAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Up => {
                let count = self.results(&fixtures.events).len();
                self.selected = step_selection(self.selected, count, false);
            }
            KeyCode::Down => {
                let count = self.results(&fixtures.events).len();
                self.selected = step_selection(self.selected, count, true);
            }
            KeyCode::Enter => {
                if let Some(event) = self.results(&fixtures.events).get(self.selected) {
                    return ScreenAction::Navigate(NavAction::OpenEvent(event.id.clone()));
                }
            }
            KeyCode::Char('f') if ctrl => {
                self.venue = self.venue.next();
                self.selected = 0;
            }
            KeyCode::Char('x') if ctrl => self.clear(),
            _ => {
                if self.query.handle_key(&key) {
                    self.selected = 0;
                }
            }
        }
        ScreenAction::None
    }
}

pub fn render(state: &SearchState, ctx: &RenderCtx<'_>, frame: &mut Frame, area: Rect) {
    let [input_area, chips_area, summary_area, body_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let query_line = if state.query.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(theme::ACCENT)),
            theme::muted("Search teams, leagues, venues..."),
        ])
    } else {
        Line::from(vec![
            Span::raw(state.query.text().to_string()),
            Span::styled("█", Style::default().fg(theme::ACCENT)),
        ])
    };
    frame.render_widget(
        Paragraph::new(query_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" 🔍 Search "),
        ),
        input_area,
    );

    let mut chips = vec![theme::chip(
        VenueFilter::All.label(),
        state.venue == VenueFilter::All,
    )];
    for venue_type in VenueType::all() {
        let option = VenueFilter::Only(*venue_type);
        chips.push(Span::raw(" "));
        chips.push(theme::chip(option.label(), state.venue == option));
    }
    frame.render_widget(Paragraph::new(Line::from(chips)), chips_area);

    let results = state.results(&ctx.fixtures.events);
    let noun = if results.len() == 1 {
        "result"
    } else {
        "results"
    };
    let mut summary = vec![Span::raw(format!("{} {noun}", results.len()))];
    if !state.filter().is_default() {
        summary.push(theme::muted("  (Ctrl+X to clear)"));
    }
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(summary),
            theme::hints(&[("Ctrl+F", "venue"), ("↑↓", "select"), ("Enter", "open")]),
        ]),
        summary_area,
    );

    if results.is_empty() {
        frame.render_widget(
            Paragraph::new(theme::empty_state(
                "🔍",
                "No events found",
                "Try a different search or clear your filters",
            )),
            body_area,
        );
        return;
    }

    let lines: Vec<Line> = results
        .iter()
        .enumerate()
        .flat_map(|(i, e)| event_card(e, ctx.images, i == state.selected))
        .collect();
    let scroll = scroll_for_selection(state.selected, EVENT_CARD_HEIGHT, body_area.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut SearchState, fixtures: &Fixtures, text: &str) {
        for c in text.chars() {
            state.handle_key(fixtures, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_query_and_venue_combine() {
        let fixtures = Fixtures::demo();
        let mut state = SearchState::default();
        type_text(&mut state, &fixtures, "LONDON");
        assert_eq!(state.results(&fixtures.events).len(), 2);

        // All -> Stadium
        state.handle_key(&fixtures, ctrl('f'));
        let ids: Vec<_> = state
            .results(&fixtures.events)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["4"]);
    }

    #[test]
    fn test_clear_resets_both_axes() {
        let fixtures = Fixtures::demo();
        let mut state = SearchState::new(VenueFilter::Only(VenueType::Bar));
        type_text(&mut state, &fixtures, "zzz");
        assert!(state.results(&fixtures.events).is_empty());

        state.handle_key(&fixtures, ctrl('x'));
        assert!(state.query.is_empty());
        assert_eq!(state.venue, VenueFilter::All);
        assert_eq!(state.results(&fixtures.events).len(), fixtures.events.len());
    }

    #[test]
    fn test_typing_resets_selection() {
        let fixtures = Fixtures::demo();
        let mut state = SearchState::default();
        state.handle_key(&fixtures, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(state.selected, 1);
        type_text(&mut state, &fixtures, "a");
        assert_eq!(state.selected, 0);
    }
}
