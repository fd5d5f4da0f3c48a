//! Change Password sheet. Nothing is persisted; a valid submit only confirms.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::forms::{ChangePasswordForm, NEW_PASSWORD_MIN_LEN};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::common::{TextField, theme};
use crate::mutations::{SettingsMutation, StateMutation};

const LABELS: [&str; 3] = ["Current password", "New password", "Confirm password"];

#[derive(Debug, Clone, Default)]
pub struct ChangePasswordState {
    fields: [TextField; 3],
    focus: usize,
    error: Option<String>,
}

impl ChangePasswordState {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn form(&self) -> ChangePasswordForm {
        let [current, new, confirm] = &self.fields;
        ChangePasswordForm {
            current: current.text().to_string(),
            new: new.text().to_string(),
            confirm: confirm.text().to_string(),
        }
    }

    fn problem(&self) -> Option<String> {
        let form = self.form();
        if form.current.is_empty() {
            Some("Enter your current password".to_string())
        } else if form.new.chars().count() < NEW_PASSWORD_MIN_LEN {
            Some(format!(
                "New password must be at least {NEW_PASSWORD_MIN_LEN} characters"
            ))
        } else if form.new != form.confirm {
            Some("Passwords do not match".to_string())
        } else {
            None
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
                OverlayUpdate::stay()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                if self.form().is_valid() {
                    OverlayUpdate::close().with_mutations(vec![StateMutation::Settings(
                        SettingsMutation::PasswordChanged,
                    )])
                } else {
                    self.error = self.problem();
                    OverlayUpdate::stay()
                }
            }
            _ => {
                if self.fields[self.focus].handle_key(&key) {
                    self.error = None;
                }
                OverlayUpdate::stay()
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let hints = [
            InputHint::new("Tab", "next field"),
            InputHint::new("Enter", "update"),
            InputHint::new("Esc", "cancel"),
        ];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Change Password",
                border_color: Color::Yellow,
                width: 60,
                height: 9,
                hints: &hints,
            },
        );

        let mut lines: Vec<Line> = LABELS
            .iter()
            .zip(&self.fields)
            .enumerate()
            .map(|(i, (label, field))| theme::field_line(label, field, true, i == self.focus))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(match &self.error {
            Some(error) => Span::styled(error.clone(), Style::default().fg(theme::ERROR)),
            None => theme::muted(format!(
                "At least {NEW_PASSWORD_MIN_LEN} characters, entered twice"
            )),
        }));
        frame.render_widget(Paragraph::new(lines), body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn fill(state: &mut ChangePasswordState, values: [&str; 3]) {
        for (i, value) in values.iter().enumerate() {
            state.fields[i].set_text(*value);
        }
    }

    #[test]
    fn test_mismatch_stays_open_with_error() {
        let mut state = ChangePasswordState::open();
        fill(&mut state, ["old", "longenough", "different"]);
        let update = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(state.error.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_valid_change_closes() {
        let mut state = ChangePasswordState::open();
        fill(&mut state, ["old", "longenough", "longenough"]);
        let update = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(update.mutations.len(), 1);
    }
}
