//! Email Preferences sheet. Each toggle applies immediately.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::preferences::{EmailOption, EmailPreferences};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::common::theme;
use crate::mutations::{SettingsMutation, StateMutation};

#[derive(Debug, Clone)]
pub struct EmailPreferencesState {
    pub preferences: EmailPreferences,
    pub selected: usize,
}

impl EmailPreferencesState {
    pub fn open(preferences: EmailPreferences) -> Self {
        Self {
            preferences,
            selected: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let options = EmailOption::all();
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(options.len() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let Some(option) = options.get(self.selected) else {
                    return OverlayUpdate::stay();
                };
                self.preferences.toggle(*option);
                OverlayUpdate::stay().with_mutations(vec![StateMutation::Settings(
                    SettingsMutation::SetEmailPreferences(self.preferences),
                )])
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let hints = [
            InputHint::new("Space", "toggle"),
            InputHint::new("Esc", "done"),
        ];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Email Preferences",
                border_color: Color::Cyan,
                width: 50,
                height: 8,
                hints: &hints,
            },
        );

        let mut lines = vec![Line::from(theme::muted("Choose which emails you receive"))];
        for (i, option) in EmailOption::all().iter().enumerate() {
            lines.push(theme::checkbox_line(
                option.label(),
                self.preferences.get(*option),
                i == self.selected,
            ));
        }
        frame.render_widget(Paragraph::new(lines), body);
    }
}
