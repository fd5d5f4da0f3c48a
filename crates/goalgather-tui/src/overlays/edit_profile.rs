//! Edit Profile sheet.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::forms::EditProfileForm;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::common::{TextField, theme};
use crate::mutations::{SettingsMutation, StateMutation};

const LABELS: [&str; 4] = ["Full name", "Username", "Bio", "Favorite team"];

#[derive(Debug, Clone)]
pub struct EditProfileState {
    fields: [TextField; 4],
    focus: usize,
    error: Option<String>,
}

impl EditProfileState {
    pub fn open(form: EditProfileForm) -> Self {
        Self {
            fields: [
                TextField::with_text(form.full_name),
                TextField::with_text(form.username),
                TextField::with_text(form.bio),
                TextField::with_text(form.favorite_team),
            ],
            focus: 0,
            error: None,
        }
    }

    pub fn form(&self) -> EditProfileForm {
        let [full_name, username, bio, favorite_team] = &self.fields;
        EditProfileForm {
            full_name: full_name.text().to_string(),
            username: username.text().to_string(),
            bio: bio.text().to_string(),
            favorite_team: favorite_team.text().to_string(),
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
                let form = self.form();
                if form.is_valid() {
                    OverlayUpdate::close().with_mutations(vec![StateMutation::Settings(
                        SettingsMutation::SaveProfile(form),
                    )])
                } else {
                    self.error = Some("Name and username are required".to_string());
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
            InputHint::new("Enter", "save"),
            InputHint::new("Esc", "cancel"),
        ];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Edit Profile",
                border_color: Color::Green,
                width: 60,
                height: 10,
                hints: &hints,
            },
        );

        let mut lines: Vec<Line> = LABELS
            .iter()
            .zip(&self.fields)
            .enumerate()
            .map(|(i, (label, field))| theme::field_line(label, field, false, i == self.focus))
            .collect();
        lines.push(Line::from(""));
        let status = match &self.error {
            Some(error) => Span::styled(error.clone(), Style::default().fg(theme::ERROR)),
            None if self.form().is_valid() => theme::muted("Ready to save"),
            None => theme::muted("Name and username are required"),
        };
        lines.push(Line::from(status));
        frame.render_widget(Paragraph::new(lines), body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn form() -> EditProfileForm {
        EditProfileForm {
            full_name: "Your Name".into(),
            username: "yourname".into(),
            bio: String::new(),
            favorite_team: "Manchester United".into(),
        }
    }

    #[test]
    fn test_save_emits_profile_mutation() {
        let mut state = EditProfileState::open(form());
        state.focus = 2;
        for c in "Red devil".chars() {
            state.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let update = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Settings(SettingsMutation::SaveProfile(f))] if f.bio == "Red devil"
        ));
    }

    #[test]
    fn test_blank_name_blocks_save() {
        let mut state = EditProfileState::open(EditProfileForm {
            full_name: "  ".into(),
            ..form()
        });
        let update = state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert!(update.mutations.is_empty());
        assert!(state.error.is_some());
    }
}
