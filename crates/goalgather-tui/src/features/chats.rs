//! Chats screen: active and past group chat previews.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::ChatPreview;
use goalgather_core::navigation::NavAction;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{RenderCtx, ScreenAction, step_selection};
use crate::common::{theme, truncate_with_ellipsis};

#[derive(Debug, Clone, Default)]
pub struct ChatsState {
    pub selected: usize,
}

impl ChatsState {
    fn previews(fixtures: &Fixtures) -> impl Iterator<Item = &ChatPreview> {
        fixtures.active_chats.iter().chain(fixtures.past_chats.iter())
    }

    pub fn handle_key(&mut self, fixtures: &Fixtures, key: KeyEvent) -> ScreenAction {
        let count = Self::previews(fixtures).count();
        match key.code {
            KeyCode::Up => self.selected = step_selection(self.selected, count, false),
            KeyCode::Down => self.selected = step_selection(self.selected, count, true),
            KeyCode::Enter => {
                if let Some(chat) = Self::previews(fixtures).nth(self.selected) {
                    return ScreenAction::Navigate(NavAction::OpenChat(chat.id.clone()));
                }
            }
            _ => {}
        }
        ScreenAction::None
    }
}

fn preview_lines(chat: &ChatPreview, width: u16, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let mut header = vec![
        Span::raw(marker),
        Span::styled(
            format!("{} vs {}", chat.home_team, chat.away_team),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .patch(theme::selected_style(selected)),
        ),
        theme::muted(format!("  {}", chat.last_message_time)),
    ];
    if chat.unread_count > 0 {
        header.push(Span::raw(" "));
        header.push(Span::styled(
            format!(" {} ", chat.unread_count),
            Style::default()
                .fg(Color::Black)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let message_width = (width as usize).saturating_sub(4);
    vec![
        Line::from(header),
        Line::from(vec![
            Span::raw("    "),
            Span::raw(truncate_with_ellipsis(&chat.last_message, message_width)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            theme::muted(format!("{} • 👥 {} members", chat.event_name, chat.members)),
        ]),
        Line::from(""),
    ]
}

pub fn render(state: &ChatsState, ctx: &RenderCtx<'_>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        theme::hints(&[("↑↓", "select"), ("Enter", "open chat")]),
        Line::from(""),
        theme::title("Active chats"),
    ];
    let mut index = 0;
    for chat in &ctx.fixtures.active_chats {
        lines.extend(preview_lines(chat, area.width, index == state.selected));
        index += 1;
    }
    lines.push(theme::title("Past chats"));
    for chat in &ctx.fixtures.past_chats {
        lines.extend(preview_lines(chat, area.width, index == state.selected));
        index += 1;
    }
    if index == 0 {
        lines = theme::empty_state("💬", "No chats yet", "Join an event to meet fellow fans");
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_past_chats_follow_active_ones() {
        let fixtures = Fixtures::demo();
        let mut state = ChatsState { selected: 2 };
        let action = state.handle_key(&fixtures, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(
            action,
            ScreenAction::Navigate(NavAction::OpenChat(id)) if id == fixtures.past_chats[0].id
        ));
    }
}
