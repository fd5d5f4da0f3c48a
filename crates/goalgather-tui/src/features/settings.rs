//! Settings: toggle rows, sheet rows and sign out.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::forms::EditProfileForm;
use goalgather_core::preferences::{
    EmailPreferences, ProfileVisibility, SettingsPreferences, Toggle,
};
use goalgather_core::social::BlockList;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{ScreenAction, step_selection};
use crate::common::{pad_to_width, theme};
use crate::mutations::SettingsMutation;
use crate::overlays::OverlayRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    EditProfile,
    ChangePassword,
    EmailPreferences,
    Toggle(Toggle),
    ProfileVisibility,
    BlockedUsers,
    SignOut,
}

/// Rows grouped under their section headings, in display order.
const SECTIONS: &[(&str, &[SettingsRow])] = &[
    (
        "Account",
        &[
            SettingsRow::EditProfile,
            SettingsRow::ChangePassword,
            SettingsRow::EmailPreferences,
        ],
    ),
    (
        "Notifications",
        &[
            SettingsRow::Toggle(Toggle::PushNotifications),
            SettingsRow::Toggle(Toggle::ChatMessages),
            SettingsRow::Toggle(Toggle::EventReminders),
        ],
    ),
    (
        "Privacy",
        &[
            SettingsRow::Toggle(Toggle::Location),
            SettingsRow::ProfileVisibility,
            SettingsRow::BlockedUsers,
        ],
    ),
    ("Appearance", &[SettingsRow::Toggle(Toggle::DarkMode)]),
    ("", &[SettingsRow::SignOut]),
];

pub fn rows() -> impl Iterator<Item = SettingsRow> {
    SECTIONS.iter().flat_map(|(_, rows)| rows.iter().copied())
}

#[derive(Debug, Clone)]
pub struct SettingsState {
    pub preferences: SettingsPreferences,
    pub email: EmailPreferences,
    pub visibility: ProfileVisibility,
    pub blocked: BlockList,
    pub profile: EditProfileForm,
    pub selected: usize,
    /// Confirmation shown after a sheet saves.
    pub notice: Option<String>,
}

impl SettingsState {
    pub fn new(fixtures: &Fixtures) -> Self {
        let profile = &fixtures.profile;
        Self {
            preferences: SettingsPreferences::default(),
            email: EmailPreferences::default(),
            visibility: ProfileVisibility::default(),
            blocked: BlockList::new(fixtures.blocked_users.clone()),
            profile: EditProfileForm {
                full_name: profile.name.clone(),
                username: profile.username.trim_start_matches('@').to_string(),
                bio: String::new(),
                favorite_team: profile.favorite_team.clone(),
            },
            selected: 0,
            notice: None,
        }
    }

    pub fn selected_row(&self) -> Option<SettingsRow> {
        rows().nth(self.selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let count = rows().count();
        match key.code {
            KeyCode::Up => self.selected = step_selection(self.selected, count, false),
            KeyCode::Down => self.selected = step_selection(self.selected, count, true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.notice = None;
                if let Some(row) = self.selected_row() {
                    return self.activate(row);
                }
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn activate(&mut self, row: SettingsRow) -> ScreenAction {
        match row {
            SettingsRow::Toggle(toggle) => {
                let on = self.preferences.toggle(toggle);
                tracing::debug!(setting = toggle.label(), on, "Setting toggled");
                ScreenAction::None
            }
            SettingsRow::EditProfile => {
                ScreenAction::OpenOverlay(OverlayRequest::EditProfile(self.profile.clone()))
            }
            SettingsRow::ChangePassword => ScreenAction::OpenOverlay(OverlayRequest::ChangePassword),
            SettingsRow::EmailPreferences => {
                ScreenAction::OpenOverlay(OverlayRequest::EmailPreferences(self.email))
            }
            SettingsRow::ProfileVisibility => {
                ScreenAction::OpenOverlay(OverlayRequest::ProfileVisibility(self.visibility))
            }
            SettingsRow::BlockedUsers => {
                ScreenAction::OpenOverlay(OverlayRequest::BlockedUsers(self.blocked.clone()))
            }
            SettingsRow::SignOut => ScreenAction::SignOut,
        }
    }

    pub fn apply(&mut self, mutation: SettingsMutation) {
        match mutation {
            SettingsMutation::SaveProfile(form) => {
                self.profile = form;
                self.notice = Some("Profile updated".to_string());
            }
            SettingsMutation::PasswordChanged => {
                self.notice = Some("Password changed".to_string());
            }
            SettingsMutation::SetEmailPreferences(email) => self.email = email,
            SettingsMutation::SetVisibility(visibility) => {
                self.visibility = visibility;
                self.notice = Some(format!("Profile visible to: {}", visibility.label()));
            }
            SettingsMutation::Unblock(id) => {
                if let Some(user) = self.blocked.unblock(&id) {
                    tracing::info!(user = %user.name, "User unblocked");
                }
            }
        }
    }

    fn row_label(&self, row: SettingsRow) -> (String, String) {
        match row {
            SettingsRow::EditProfile => ("Edit Profile".into(), self.profile.full_name.clone()),
            SettingsRow::ChangePassword => ("Change Password".into(), String::new()),
            SettingsRow::EmailPreferences => {
                let on = [
                    self.email.event_updates,
                    self.email.chat_summaries,
                    self.email.promotions,
                ]
                .iter()
                .filter(|v| **v)
                .count();
                ("Email Preferences".into(), format!("{on} on"))
            }
            SettingsRow::Toggle(toggle) => {
                let state = if self.preferences.get(toggle) {
                    "[on ]"
                } else {
                    "[off]"
                };
                (toggle.label().into(), state.into())
            }
            SettingsRow::ProfileVisibility => (
                "Profile Visibility".into(),
                self.visibility.label().to_string(),
            ),
            SettingsRow::BlockedUsers => (
                "Blocked Users".into(),
                self.blocked.users().len().to_string(),
            ),
            SettingsRow::SignOut => ("Sign Out".into(), String::new()),
        }
    }
}

pub fn render(state: &SettingsState, frame: &mut Frame, area: Rect) {
    let label_width = 24;
    let mut lines = vec![
        theme::hints(&[("↑↓", "select"), ("Enter/Space", "change"), ("Esc", "back")]),
        Line::from(""),
    ];
    if let Some(notice) = &state.notice {
        lines.push(Line::from(Span::styled(
            format!("✔ {notice}"),
            Style::default().fg(theme::ACCENT),
        )));
        lines.push(Line::from(""));
    }

    let mut index = 0;
    for (section, section_rows) in SECTIONS {
        if !section.is_empty() {
            lines.push(Line::from(Span::styled(
                section.to_uppercase(),
                Style::default()
                    .fg(theme::MUTED)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        for row in *section_rows {
            let selected = index == state.selected;
            let (label, value) = state.row_label(*row);
            let marker = if selected { "▶ " } else { "  " };
            let label_style = if *row == SettingsRow::SignOut {
                Style::default().fg(theme::ERROR)
            } else {
                Style::default()
            };
            let arrow = match row {
                SettingsRow::Toggle(_) | SettingsRow::SignOut => "",
                _ => " ›",
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    pad_to_width(&label, label_width),
                    label_style.patch(theme::selected_style(selected)),
                ),
                theme::muted(format!("{value}{arrow}")),
            ]));
            index += 1;
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn select(state: &mut SettingsState, row: SettingsRow) {
        state.selected = rows().position(|r| r == row).unwrap();
    }

    #[test]
    fn test_toggle_row_flips_preference() {
        let mut state = SettingsState::new(&Fixtures::demo());
        select(&mut state, SettingsRow::Toggle(Toggle::DarkMode));
        state.handle_key(key(KeyCode::Char(' ')));
        assert!(state.preferences.dark_mode);
    }

    #[test]
    fn test_sheet_rows_open_overlays() {
        let mut state = SettingsState::new(&Fixtures::demo());
        select(&mut state, SettingsRow::BlockedUsers);
        assert!(matches!(
            state.handle_key(key(KeyCode::Enter)),
            ScreenAction::OpenOverlay(OverlayRequest::BlockedUsers(list)) if list.users().len() == 2
        ));
    }

    #[test]
    fn test_sign_out_row() {
        let mut state = SettingsState::new(&Fixtures::demo());
        select(&mut state, SettingsRow::SignOut);
        assert!(matches!(
            state.handle_key(key(KeyCode::Enter)),
            ScreenAction::SignOut
        ));
    }

    #[test]
    fn test_mutations_update_state() {
        let mut state = SettingsState::new(&Fixtures::demo());
        state.apply(SettingsMutation::Unblock("1".into()));
        assert_eq!(state.blocked.users().len(), 1);
        state.apply(SettingsMutation::SetVisibility(ProfileVisibility::OnlyMe));
        assert_eq!(state.visibility, ProfileVisibility::OnlyMe);
        assert!(state.notice.is_some());
    }
}
