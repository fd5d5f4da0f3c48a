//! Event detail: venue, about, safety notice, attendees, join/matchday actions.
//!
//! An id with no matching event renders an empty state and offers no actions.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::{Attendee, Event, Vibe};
use goalgather_core::navigation::NavAction;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{RenderCtx, ScreenAction};
use crate::common::theme;

#[derive(Debug, Clone)]
pub struct EventDetailState {
    pub event: Option<Event>,
    pub attendees: Vec<Attendee>,
    pub scroll: u16,
}

impl EventDetailState {
    pub fn new(fixtures: &Fixtures, event_id: &str) -> Self {
        Self {
            event: fixtures.event(event_id).cloned(),
            attendees: fixtures.attendees.clone(),
            scroll: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let Some(event) = &self.event else {
            return ScreenAction::None;
        };
        match key.code {
            KeyCode::Char('j') => ScreenAction::Navigate(NavAction::JoinChat(event.id.clone())),
            KeyCode::Char('m') => {
                ScreenAction::Navigate(NavAction::StartMatchday(event.id.clone()))
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                ScreenAction::None
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }
}

fn vibe_badge(vibe: Vibe) -> Span<'static> {
    let color = match vibe {
        Vibe::Chill => Color::Blue,
        Vibe::CheerSquad => Color::Magenta,
        Vibe::FirstTimer => Color::Cyan,
    };
    Span::styled(format!(" {} ", vibe.label()), Style::default().fg(color))
}

pub fn render(state: &EventDetailState, ctx: &RenderCtx<'_>, frame: &mut Frame, area: Rect) {
    let Some(event) = &state.event else {
        frame.render_widget(
            Paragraph::new(theme::empty_state(
                "🤷",
                "Event not found",
                "Press Esc to go back",
            )),
            area,
        );
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(theme::muted(ctx.images.caption(&event.image_url))),
        Line::from(Span::styled(event.matchup(), bold)),
        Line::from(vec![
            Span::styled(event.league.clone(), Style::default().fg(theme::ACCENT)),
            theme::muted(format!(" • {} at {}", event.date, event.time)),
        ]),
        Line::from(""),
        theme::title("Venue"),
        Line::from(format!(
            "{} {} ({})",
            event.venue_type.icon(),
            event.venue,
            event.venue_type.label()
        )),
        Line::from(theme::muted(format!(
            "📍 {} • {} away",
            event.location, event.distance
        ))),
        Line::from(""),
        theme::title("About"),
        Line::from(event.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "🛡  Safety first: meet in public areas, verified fans are marked ✔, report anything that feels off.",
            Style::default().fg(theme::HIGHLIGHT),
        )),
        Line::from(""),
        theme::title(format!("Who's going ({})", event.attendees)),
    ];
    for attendee in &state.attendees {
        let check = if attendee.verified { " ✔" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", attendee.avatar), bold),
            Span::raw(format!("{}{check}", attendee.name)),
            theme::muted(format!(
                "  {} • {}  ",
                attendee.favorite_team, attendee.age_range
            )),
            vibe_badge(attendee.vibe),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(theme::hints(&[
        ("j", "Join Group Chat"),
        ("m", "Start Matchday"),
        ("↑↓", "scroll"),
        ("Esc", "back"),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((state.scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_join_reuses_event_id_as_chat_id() {
        let fixtures = Fixtures::demo();
        let mut state = EventDetailState::new(&fixtures, "3");
        assert!(matches!(
            state.handle_key(key('j')),
            ScreenAction::Navigate(NavAction::JoinChat(id)) if id == "3"
        ));
        assert!(matches!(
            state.handle_key(key('m')),
            ScreenAction::Navigate(NavAction::StartMatchday(id)) if id == "3"
        ));
    }

    #[test]
    fn test_unknown_event_has_no_actions() {
        let fixtures = Fixtures::demo();
        let mut state = EventDetailState::new(&fixtures, "missing");
        assert!(state.event.is_none());
        assert!(matches!(state.handle_key(key('j')), ScreenAction::None));
    }
}
