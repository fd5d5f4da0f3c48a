//! Live screen: in-play and upcoming matches with status badges.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::{LiveMatch, MatchStatus};
use goalgather_core::navigation::NavAction;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{RenderCtx, ScreenAction, step_selection};
use crate::common::theme;

/// Ticks per half-cycle of the LIVE badge pulse.
const PULSE_TICKS: usize = 8;

const MATCH_CARD_HEIGHT: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct LiveState {
    pub selected: usize,
}

/// Live matches first, then upcoming ones.
fn rows(fixtures: &Fixtures) -> impl Iterator<Item = &LiveMatch> {
    fixtures
        .live_matches
        .iter()
        .chain(fixtures.upcoming_matches.iter())
}

impl LiveState {
    pub fn handle_key(&mut self, fixtures: &Fixtures, key: KeyEvent) -> ScreenAction {
        let count = rows(fixtures).count();
        match key.code {
            KeyCode::Up => self.selected = step_selection(self.selected, count, false),
            KeyCode::Down => self.selected = step_selection(self.selected, count, true),
            KeyCode::Enter => {
                if let Some(m) = rows(fixtures).nth(self.selected) {
                    return ScreenAction::Navigate(NavAction::OpenEvent(m.id.clone()));
                }
            }
            KeyCode::Char('m') => {
                if let Some(m) = rows(fixtures).nth(self.selected)
                    && m.status.is_in_play()
                {
                    return ScreenAction::Navigate(NavAction::StartMatchday(m.id.clone()));
                }
            }
            _ => {}
        }
        ScreenAction::None
    }
}

/// Status badge; the LIVE badge alternates intensity with the tick counter.
pub fn status_badge(m: &LiveMatch, spinner_frame: usize) -> Span<'static> {
    match m.status {
        MatchStatus::Live => {
            let bright = (spinner_frame / PULSE_TICKS) % 2 == 0;
            let style = if bright {
                Style::default()
                    .fg(Color::White)
                    .bg(theme::LIVE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::LIVE).add_modifier(Modifier::DIM)
            };
            let minute = m.minute.as_deref().unwrap_or_default();
            Span::styled(format!(" ● LIVE {minute} "), style)
        }
        MatchStatus::HalfTime => Span::styled(
            format!(" {} ", m.status.label()),
            Style::default().fg(Color::Black).bg(theme::HIGHLIGHT),
        ),
        MatchStatus::Upcoming => {
            let kickoff = m.minute.as_deref().unwrap_or("TBD");
            Span::styled(format!(" Kickoff {kickoff} "), Style::default().fg(theme::MUTED))
        }
    }
}

fn match_card(m: &LiveMatch, ctx: &RenderCtx<'_>, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let teams = Style::default()
        .add_modifier(Modifier::BOLD)
        .patch(theme::selected_style(selected));
    vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{}  {}  {}", m.home_team, m.score_line(), m.away_team),
                teams,
            ),
            Span::raw("  "),
            status_badge(m, ctx.spinner_frame),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(m.league.clone(), Style::default().fg(theme::ACCENT)),
            theme::muted(format!(" • {} fans watching together", m.attendees)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            theme::muted(ctx.images.caption(&m.image_url)),
        ]),
        Line::from(""),
    ]
}

pub fn render(state: &LiveState, ctx: &RenderCtx<'_>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        theme::hints(&[("↑↓", "select"), ("Enter", "details"), ("m", "matchday")]),
        Line::from(""),
        theme::title("🔴 Live Now"),
    ];
    let mut index = 0;
    let mut selected_line = 0;
    for m in &ctx.fixtures.live_matches {
        if index == state.selected {
            selected_line = lines.len();
        }
        lines.extend(match_card(m, ctx, index == state.selected));
        index += 1;
    }
    if ctx.fixtures.live_matches.is_empty() {
        lines.push(Line::from(theme::muted("  No matches in play right now")));
    }
    lines.push(theme::title("📅 Upcoming"));
    for m in &ctx.fixtures.upcoming_matches {
        if index == state.selected {
            selected_line = lines.len();
        }
        lines.extend(match_card(m, ctx, index == state.selected));
        index += 1;
    }

    let bottom = selected_line + MATCH_CARD_HEIGHT;
    let scroll = u16::try_from(bottom.saturating_sub(area.height as usize)).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_matchday_only_for_matches_in_play() {
        let fixtures = Fixtures::demo();
        let mut state = LiveState::default();
        assert!(matches!(
            state.handle_key(&fixtures, key(KeyCode::Char('m'))),
            ScreenAction::Navigate(NavAction::StartMatchday(id)) if id == "1"
        ));

        state.selected = 2;
        assert!(matches!(
            state.handle_key(&fixtures, key(KeyCode::Char('m'))),
            ScreenAction::None
        ));
        assert!(matches!(
            state.handle_key(&fixtures, key(KeyCode::Enter)),
            ScreenAction::Navigate(NavAction::OpenEvent(id)) if id == "3"
        ));
    }

    #[test]
    fn test_live_badge_pulses() {
        let fixtures = Fixtures::demo();
        let live = &fixtures.live_matches[0];
        let on = status_badge(live, 0);
        let off = status_badge(live, PULSE_TICKS);
        assert_ne!(on.style, off.style);
        assert_eq!(on.content, off.content);
        assert!(on.content.contains("67'"));
    }
}
