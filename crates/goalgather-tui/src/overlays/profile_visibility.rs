//! Profile Visibility sheet: pick one of three audiences.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::preferences::ProfileVisibility;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::OverlayUpdate;
use crate::common::theme;
use crate::mutations::{SettingsMutation, StateMutation};

#[derive(Debug, Clone)]
pub struct ProfileVisibilityState {
    pub current: ProfileVisibility,
    pub selected: usize,
}

impl ProfileVisibilityState {
    pub fn open(current: ProfileVisibility) -> Self {
        let selected = ProfileVisibility::all()
            .iter()
            .position(|v| *v == current)
            .unwrap_or(0);
        Self { current, selected }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(ProfileVisibility::all().len() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let Some(&choice) = ProfileVisibility::all().get(self.selected) else {
                    return OverlayUpdate::close();
                };
                OverlayUpdate::close().with_mutations(vec![StateMutation::Settings(
                    SettingsMutation::SetVisibility(choice),
                )])
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let options = ProfileVisibility::all();
        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "select"),
            InputHint::new("Esc", "cancel"),
        ];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Profile Visibility",
                border_color: Color::Magenta,
                width: 70,
                height: u16::try_from(options.len() * 2 + 3).unwrap_or(9),
                hints: &hints,
            },
        );

        let items: Vec<ListItem> = options
            .iter()
            .map(|option| {
                let radio = if *option == self.current { "◉" } else { "○" };
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("{radio} {}", option.label()),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(theme::muted(format!("  {}", option.description()))),
                ])
            })
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Magenta))
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, body, &mut list_state);
    }
}
