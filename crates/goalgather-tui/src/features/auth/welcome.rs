use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::AuthAction;
use crate::common::theme;

const CHOICES: [(&str, AuthAction); 3] = [
    ("Sign Up", AuthAction::ShowSignUp),
    ("Log In", AuthAction::ShowLogin),
    ("Try Demo", AuthAction::EnterDemo),
];

#[derive(Debug, Clone, Default)]
pub struct WelcomeState {
    pub selected: usize,
}

impl WelcomeState {
    pub fn handle_key(&mut self, key: KeyEvent) -> AuthAction {
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(CHOICES.len() - 1),
            KeyCode::Enter => {
                if let Some((_, action)) = CHOICES.get(self.selected) {
                    return action.clone();
                }
            }
            KeyCode::Char('s') => return AuthAction::ShowSignUp,
            KeyCode::Char('l') => return AuthAction::ShowLogin,
            KeyCode::Char('d') => return AuthAction::EnterDemo,
            KeyCode::Char('q') | KeyCode::Esc => return AuthAction::Quit,
            _ => {}
        }
        AuthAction::Stay
    }
}

pub fn render(state: &WelcomeState, frame: &mut Frame, area: Rect) {
    let [_, body, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .areas(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            "⚽ GoalGather",
            bold.fg(theme::ACCENT),
        ))
        .centered(),
        Line::from("Never watch the match alone").centered(),
        Line::from(""),
        Line::from(theme::muted("🏟  Find watch parties and stadium meetups near you")).centered(),
        Line::from(theme::muted("💬 Break the ice in match group chats")).centered(),
        Line::from(theme::muted("🔴 React live with fellow fans in Matchday Mode")).centered(),
        Line::from(""),
    ];
    for (i, (label, _)) in CHOICES.iter().enumerate() {
        let selected = i == state.selected;
        let text = if selected {
            format!("▶ {label} ◀")
        } else {
            (*label).to_string()
        };
        lines.push(Line::from(Span::styled(text, theme::selected_style(selected))).centered());
    }
    lines.push(Line::from(""));
    lines.push(theme::hints(&[("↑↓", "choose"), ("Enter", "continue"), ("q", "quit")]).centered());

    frame.render_widget(Paragraph::new(lines), body);
}
