//! Group chat: transcript, icebreaker insertion, message composer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::ChatMessage;
use goalgather_core::social::ChatLog;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::ScreenAction;
use crate::common::{TextField, theme, truncate_with_ellipsis, wrap_text};

#[derive(Debug, Clone)]
pub struct ChatState {
    pub chat_id: String,
    pub title: String,
    pub members: Option<u32>,
    pub log: ChatLog,
    pub input: TextField,
    pub icebreakers: Vec<String>,
    pub next_icebreaker: usize,
    /// Lines scrolled up from the newest message.
    pub scroll_back: u16,
}

impl ChatState {
    /// Title comes from the chat preview, then from an event with the same id.
    pub fn new(fixtures: &Fixtures, chat_id: &str, display_name: &str) -> Self {
        let preview = fixtures.chat(chat_id);
        let title = preview
            .map(|c| format!("{} vs {}", c.home_team, c.away_team))
            .or_else(|| fixtures.event(chat_id).map(|e| e.matchup()))
            .unwrap_or_else(|| "Group Chat".to_string());
        Self {
            chat_id: chat_id.to_string(),
            title,
            members: preview.map(|c| c.members),
            log: ChatLog::new(fixtures.chat_messages.clone(), display_name),
            input: TextField::new(),
            icebreakers: fixtures.icebreakers.clone(),
            next_icebreaker: 0,
            scroll_back: 0,
        }
    }

    /// Puts the next canned icebreaker into the composer.
    pub fn insert_icebreaker(&mut self) {
        if let Some(text) = self.icebreakers.get(self.next_icebreaker) {
            self.input.set_text(text.clone());
            self.next_icebreaker = (self.next_icebreaker + 1) % self.icebreakers.len();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                if self.log.send(self.input.text()).is_some() {
                    tracing::debug!(chat_id = %self.chat_id, "Message sent");
                    self.input.clear();
                    self.scroll_back = 0;
                }
            }
            KeyCode::Char('b') if ctrl => self.insert_icebreaker(),
            KeyCode::PageUp => self.scroll_back = self.scroll_back.saturating_add(5),
            KeyCode::PageDown => self.scroll_back = self.scroll_back.saturating_sub(5),
            _ => {
                self.input.handle_key(&key);
            }
        }
        ScreenAction::None
    }
}

fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(4).max(10);
    if message.is_system() {
        let style = if message.is_icebreaker {
            Style::default()
                .fg(theme::HIGHLIGHT)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(theme::MUTED)
        };
        let prefix = if message.is_icebreaker { "💬 " } else { "" };
        return wrap_text(&format!("{prefix}{}", message.text), body_width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, style)).centered())
            .chain(std::iter::once(Line::from("")))
            .collect();
    }

    let own = message.is_current_user();
    let alignment = if own {
        Alignment::Right
    } else {
        Alignment::Left
    };
    let name_style = if own {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] {}", message.sender_avatar, message.sender_name),
                name_style,
            ),
            theme::muted(format!(" {}", message.timestamp)),
        ])
        .alignment(alignment),
    ];
    lines.extend(
        wrap_text(&message.text, body_width)
            .into_iter()
            .map(|l| Line::from(l).alignment(alignment)),
    );
    lines.push(Line::from(""));
    lines
}

pub fn render(state: &ChatState, frame: &mut Frame, area: Rect) {
    let [header_area, transcript_area, icebreaker_area, input_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let members = state
        .members
        .map(|m| format!("  👥 {m} members"))
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    state.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                theme::muted(members),
            ]),
            theme::hints(&[
                ("Enter", "send"),
                ("Ctrl+B", "icebreaker"),
                ("PgUp/PgDn", "scroll"),
                ("Esc", "back"),
            ]),
        ]),
        header_area,
    );

    let lines: Vec<Line> = state
        .log
        .messages()
        .iter()
        .flat_map(|m| message_lines(m, transcript_area.width as usize))
        .collect();
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(transcript_area.height);
    let scroll = max_scroll.saturating_sub(state.scroll_back);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), transcript_area);

    if let Some(next) = state.icebreakers.get(state.next_icebreaker) {
        let width = (icebreaker_area.width as usize).saturating_sub(14);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Icebreaker: ", Style::default().fg(theme::HIGHLIGHT)),
                theme::muted(truncate_with_ellipsis(next, width)),
            ])),
            icebreaker_area,
        );
    }

    let text = if state.input.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(theme::ACCENT)),
            theme::muted("Type a message..."),
        ])
    } else {
        Line::from(vec![
            Span::raw(state.input.text().to_string()),
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
