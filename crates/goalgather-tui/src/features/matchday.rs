//! Matchday mode: score header, reaction feed, composer, like toggle.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::{LiveMatch, MatchdayPost};
use goalgather_core::social::Feed;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::live::status_badge;
use super::{RenderCtx, ScreenAction, step_selection};
use crate::common::{TextField, theme, wrap_text};

/// What the header shows for the matchday's event id.
#[derive(Debug, Clone)]
pub enum MatchHeader {
    Score(LiveMatch),
    Fixture { matchup: String, league: String },
    Unknown,
}

#[derive(Debug, Clone)]
pub struct MatchdayState {
    pub event_id: String,
    pub header: MatchHeader,
    pub feed: Feed,
    pub compose: TextField,
    pub selected: usize,
}

impl MatchdayState {
    /// Header looks up a live or upcoming match first, then a plain event.
    pub fn new(fixtures: &Fixtures, event_id: &str, display_name: &str) -> Self {
        let header = if let Some(m) = fixtures.live_match(event_id) {
            MatchHeader::Score(m.clone())
        } else if let Some(event) = fixtures.event(event_id) {
            MatchHeader::Fixture {
                matchup: event.matchup(),
                league: event.league.clone(),
            }
        } else {
            MatchHeader::Unknown
        };
        Self {
            event_id: event_id.to_string(),
            header,
            feed: Feed::new(fixtures.posts.clone(), display_name),
            compose: TextField::new(),
            selected: 0,
        }
    }

    pub fn selected_post(&self) -> Option<&MatchdayPost> {
        self.feed.posts().get(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let count = self.feed.posts().len();
        match key.code {
            KeyCode::Enter => {
                if self.feed.create_post(self.compose.text()).is_some() {
                    tracing::debug!(event_id = %self.event_id, "Matchday post created");
                    self.compose.clear();
                    self.selected = 0;
                }
            }
            KeyCode::Up => self.selected = step_selection(self.selected, count, false),
            KeyCode::Down => self.selected = step_selection(self.selected, count, true),
            KeyCode::Char('l') if ctrl => {
                if let Some(id) = self.selected_post().map(|p| p.id.clone()) {
                    self.feed.toggle_like(&id);
                }
            }
            _ => {
                self.compose.handle_key(&key);
            }
        }
        ScreenAction::None
    }
}

fn post_lines(
    post: &MatchdayPost,
    ctx: &RenderCtx<'_>,
    width: usize,
    selected: bool,
) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(
            format!("[{}] {}", post.user_avatar, post.user_name),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .patch(theme::selected_style(selected)),
        ),
        theme::muted(format!("  {}", post.timestamp)),
    ])];
    for line in wrap_text(&post.content, width.saturating_sub(4).max(10)) {
        lines.push(Line::from(format!("    {line}")));
    }
    if let Some(url) = &post.image_url {
        lines.push(Line::from(vec![
            Span::raw("    "),
            theme::muted(ctx.images.caption(url)),
        ]));
    }
    let heart = if post.is_liked {
        Span::styled(
            format!("♥ {}", post.likes),
            Style::default().fg(theme::LIVE),
        )
    } else {
        theme::muted(format!("♡ {}", post.likes))
    };
    lines.push(Line::from(vec![
        Span::raw("    "),
        heart,
        theme::muted(format!("   💬 {}", post.comments)),
    ]));
    lines.push(Line::from(""));
    lines
}

fn header_lines(state: &MatchdayState, ctx: &RenderCtx<'_>) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    match &state.header {
        MatchHeader::Score(m) => vec![
            Line::from(vec![
                Span::styled(
                    format!("{}  {}  {}", m.home_team, m.score_line(), m.away_team),
                    bold,
                ),
                Span::raw("  "),
                status_badge(m, ctx.spinner_frame),
            ]),
            Line::from(theme::muted(format!(
                "{} • Matchday Mode • {} fans here",
                m.league, m.attendees
            ))),
        ],
        MatchHeader::Fixture { matchup, league } => vec![
            Line::from(Span::styled(matchup.clone(), bold)),
            Line::from(theme::muted(format!("{league} • Matchday Mode"))),
        ],
        MatchHeader::Unknown => vec![
            Line::from(Span::styled("Matchday Mode", bold)),
            Line::from(theme::muted("Match details unavailable")),
        ],
    }
}

pub fn render(state: &MatchdayState, ctx: &RenderCtx<'_>, frame: &mut Frame, area: Rect) {
    let [header_area, feed_area, hint_area, input_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(header_lines(state, ctx)), header_area);

    let mut lines = Vec::new();
    let mut selected_top = 0;
    for (i, post) in state.feed.posts().iter().enumerate() {
        if i == state.selected {
            selected_top = lines.len();
        }
        lines.extend(post_lines(post, ctx, feed_area.width as usize, i == state.selected));
    }
    let scroll = u16::try_from(selected_top.saturating_sub(1)).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), feed_area);

    frame.render_widget(
        Paragraph::new(theme::hints(&[
            ("Enter", "post"),
            ("↑↓", "select"),
            ("Ctrl+L", "like"),
            ("Esc", "back"),
        ])),
        hint_area,
    );

    let text = if state.compose.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(theme::ACCENT)),
            theme::muted("Share your reaction..."),
        ])
    } else {
        Line::from(vec![
            Span::raw(state.compose.text().to_string()),
            Span::styled("█", Style::default().fg(theme::ACCENT)),
        ])
    };
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::MUTED)),
        ),
        input_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_post_is_prepended_and_selected() {
        let fixtures = Fixtures::demo();
        let mut state = MatchdayState::new(&fixtures, "1", "You");
        state.selected = 2;
        for c in "GOAL!".chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
        state.handle_key(key(KeyCode::Enter));

        let first = &state.feed.posts()[0];
        assert_eq!(first.content, "GOAL!");
        assert_eq!(state.feed.posts().len(), fixtures.posts.len() + 1);
        assert_eq!(state.selected, 0);
        assert!(state.compose.is_empty());
    }

    #[test]
    fn test_ctrl_l_toggles_like_on_selected_post() {
        let fixtures = Fixtures::demo();
        let mut state = MatchdayState::new(&fixtures, "1", "You");
        let original = state.feed.posts()[1].clone();
        state.handle_key(key(KeyCode::Down));
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);

        state.handle_key(ctrl_l);
        assert_ne!(state.feed.posts()[1].is_liked, original.is_liked);
        state.handle_key(ctrl_l);
        assert_eq!(state.feed.posts()[1], original);
    }

    #[test]
    fn test_header_fallbacks() {
        let fixtures = Fixtures::demo();
        assert!(matches!(
            MatchdayState::new(&fixtures, "1", "You").header,
            MatchHeader::Score(_)
        ));
        assert!(matches!(
            MatchdayState::new(&fixtures, "5", "You").header,
            MatchHeader::Fixture { .. }
        ));
        assert!(matches!(
            MatchdayState::new(&fixtures, "x", "You").header,
            MatchHeader::Unknown
        ));
    }
}
