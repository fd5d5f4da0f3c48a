//! Blocked Users sheet. Unblocking is immediate, with no confirmation.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::models::initials;
use goalgather_core::social::BlockList;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::common::theme;
use crate::mutations::{SettingsMutation, StateMutation};

#[derive(Debug, Clone)]
pub struct BlockedUsersState {
    pub blocked: BlockList,
    pub selected: usize,
}

impl BlockedUsersState {
    pub fn open(blocked: BlockList) -> Self {
        Self {
            blocked,
            selected: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let count = self.blocked.users().len();
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(count.saturating_sub(1));
                OverlayUpdate::stay()
            }
            KeyCode::Enter | KeyCode::Char('u') => {
                let Some(id) = self.blocked.users().get(self.selected).map(|u| u.id.clone())
                else {
                    return OverlayUpdate::stay();
                };
                self.blocked.unblock(&id);
                self.selected = self
                    .selected
                    .min(self.blocked.users().len().saturating_sub(1));
                OverlayUpdate::stay().with_mutations(vec![StateMutation::Settings(
                    SettingsMutation::Unblock(id),
                )])
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("u", "unblock"),
            InputHint::new("Esc", "close"),
        ];
        let height = u16::try_from(self.blocked.users().len().max(3) + 4).unwrap_or(10);
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Blocked Users",
                border_color: Color::Red,
                width: 50,
                height,
                hints: &hints,
            },
        );

        let lines: Vec<Line> = if self.blocked.is_empty() {
            vec![
                Line::from("🚫").centered(),
                Line::from("No blocked users").centered(),
                Line::from(theme::muted("People you block will appear here")).centered(),
            ]
        } else {
            self.blocked
                .users()
                .iter()
                .enumerate()
                .map(|(i, user)| {
                    let selected = i == self.selected;
                    let marker = if selected { "▶ " } else { "  " };
                    Line::from(vec![
                        Span::raw(marker),
                        Span::styled(
                            format!("[{}] {}", initials(&user.name), user.name),
                            Style::default()
                                .add_modifier(Modifier::BOLD)
                                .patch(theme::selected_style(selected)),
                        ),
                        theme::muted(format!("  {}", user.username)),
                    ])
                })
                .collect()
        };
        frame.render_widget(Paragraph::new(lines), body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use goalgather_core::fixtures::Fixtures;

    use super::*;

    #[test]
    fn test_unblock_removes_and_reports() {
        let mut state = BlockedUsersState::open(BlockList::new(Fixtures::demo().blocked_users));
        state.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        let update = state.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Settings(SettingsMutation::Unblock(id))] if id == "2"
        ));
        assert_eq!(state.blocked.users().len(), 1);
        assert_eq!(state.selected, 0);

        state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(state.blocked.is_empty());
        let update = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(update.mutations.is_empty());
    }
}
