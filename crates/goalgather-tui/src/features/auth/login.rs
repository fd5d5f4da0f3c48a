use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use goalgather_core::forms::{AuthOutcome, LoginForm};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::AuthAction;
use crate::common::{TaskKind, TextField, theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginState {
    pub fn form(&self) -> LoginForm {
        LoginForm {
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AuthAction {
        if key.code == KeyCode::Esc {
            return AuthAction::ShowWelcome;
        }
        if self.submitting {
            return AuthAction::Stay;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.switch_focus(),
            KeyCode::Char('n') if ctrl => return AuthAction::ShowSignUp,
            KeyCode::Enter if self.focus == LoginField::Email => {
                self.focus = LoginField::Password;
            }
            KeyCode::Enter => {
                let form = self.form();
                if form.is_valid() {
                    self.submitting = true;
                    self.error = None;
                    return AuthAction::Submit {
                        kind: TaskKind::Login,
                        outcome: form.outcome(),
                    };
                }
                self.error = Some("Enter a valid email and your password".to_string());
            }
            _ => {
                let field = match self.focus {
                    LoginField::Email => &mut self.email,
                    LoginField::Password => &mut self.password,
                };
                if field.handle_key(&key) {
                    self.error = None;
                }
            }
        }
        AuthAction::Stay
    }

    pub fn paste(&mut self, text: &str) {
        if self.submitting {
            return;
        }
        match self.focus {
            LoginField::Email => self.email.insert_str(text),
            LoginField::Password => self.password.insert_str(text),
        }
        self.error = None;
    }

    /// Applies a failed outcome. Success is handled by leaving the screen.
    pub fn finish(&mut self, outcome: &AuthOutcome) {
        self.submitting = false;
        if let AuthOutcome::Failure(message) = outcome {
            self.error = Some(message.clone());
        }
    }
}

pub fn render(state: &LoginState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    let [_, card, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(60),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, card, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .areas(card);

    let valid = state.form().is_valid();
    let button = if state.submitting {
        Line::from(Span::styled(
            format!("{} Logging in...", theme::spinner(spinner_frame)),
            Style::default().fg(theme::ACCENT),
        ))
    } else {
        Line::from(Span::styled(" Log In ", theme::selected_style(valid)))
    };
    let status = match &state.error {
        Some(error) => Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme::ERROR),
        )),
        None => Line::from(""),
    };

    let lines = vec![
        Line::from(theme::muted("Welcome back! Log in to find your crew.")),
        Line::from(""),
        theme::field_line(
            "Email",
            &state.email,
            false,
            state.focus == LoginField::Email,
        ),
        theme::field_line(
            "Password",
            &state.password,
            true,
            state.focus == LoginField::Password,
        ),
        Line::from(""),
        button,
        status,
        Line::from(""),
        theme::hints(&[
            ("Tab", "switch field"),
            ("Enter", "log in"),
            ("Ctrl+N", "sign up"),
            ("Esc", "back"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" Log In "),
        ),
        card,
    );
}
