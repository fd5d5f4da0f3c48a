use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use goalgather_core::forms::{AuthOutcome, SignUpForm};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::AuthAction;
use crate::common::{TaskKind, TextField, theme};

const FIELD_LABELS: [&str; 6] = [
    "Full name",
    "Username",
    "Email",
    "Password",
    "Confirm password",
    "Favorite team",
];
const MASKED: [bool; 6] = [false, false, false, true, true, false];
/// Focus index of the terms checkbox, after the text fields.
const TERMS_FOCUS: usize = FIELD_LABELS.len();

#[derive(Debug, Clone, Default)]
pub struct SignUpState {
    pub fields: [TextField; 6],
    pub agree: bool,
    pub focus: usize,
    pub submitting: bool,
    pub error: Option<String>,
}

impl SignUpState {
    pub fn form(&self) -> SignUpForm {
        let [full_name, username, email, password, confirm_password, favorite_team] =
            self.fields.clone().map(|f| f.text().to_string());
        SignUpForm {
            full_name,
            username,
            email,
            password,
            confirm_password,
            favorite_team,
            agree_to_terms: self.agree,
        }
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
            KeyCode::Char('l') if ctrl => return AuthAction::ShowLogin,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % (TERMS_FOCUS + 1),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + TERMS_FOCUS) % (TERMS_FOCUS + 1);
            }
            KeyCode::Char(' ') if self.focus == TERMS_FOCUS => {
                self.agree = !self.agree;
                self.error = None;
            }
            KeyCode::Enter => {
                let form = self.form();
                match form.first_problem() {
                    None => {
                        self.submitting = true;
                        self.error = None;
                        return AuthAction::Submit {
                            kind: TaskKind::SignUp,
                            outcome: AuthOutcome::Success,
                        };
                    }
                    Some(problem) => self.error = Some(problem.to_string()),
                }
            }
            _ => {
                if let Some(field) = self.fields.get_mut(self.focus)
                    && field.handle_key(&key)
                {
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
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.insert_str(text);
            self.error = None;
        }
    }
}

pub fn render(state: &SignUpState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    let [_, card, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(64),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, card, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(17),
        Constraint::Fill(1),
    ])
    .areas(card);

    let mut lines = vec![
        Line::from(theme::muted("Join fans who never watch the match alone.")),
        Line::from(""),
    ];
    for (i, label) in FIELD_LABELS.iter().enumerate() {
        lines.push(theme::field_line(
            label,
            &state.fields[i],
            MASKED[i],
            state.focus == i,
        ));
    }
    lines.push(theme::checkbox_line(
        "I agree to the Terms of Service and Privacy Policy",
        state.agree,
        state.focus == TERMS_FOCUS,
    ));
    lines.push(Line::from(""));

    let valid = state.form().is_valid();
    lines.push(if state.submitting {
        Line::from(Span::styled(
            format!("{} Creating account...", theme::spinner(spinner_frame)),
            Style::default().fg(theme::ACCENT),
        ))
    } else {
        Line::from(Span::styled(" Create Account ", theme::selected_style(valid)))
    });
    lines.push(match &state.error {
        Some(error) => Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme::ERROR),
        )),
        None => Line::from(""),
    });
    lines.push(theme::hints(&[
        ("Tab", "next"),
        ("Space", "agree"),
        ("Enter", "create"),
        ("Ctrl+L", "log in"),
        ("Esc", "back"),
    ]));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" Create Account "),
        ),
        card,
    );
}
