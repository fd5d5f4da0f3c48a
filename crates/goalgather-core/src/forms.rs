//! Form validation and the simulated sign-in backend.
//!
//! Forms only decide whether their submit action is enabled. The one
//! "server" rule is the login password check in [`LoginForm::outcome`].

use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length accepted by the simulated login.
pub const LOGIN_MIN_PASSWORD_LEN: usize = 6;

/// Minimum password length for new accounts and password changes.
pub const NEW_PASSWORD_MIN_LEN: usize = 8;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$")
        .unwrap_or_else(|e| panic!("email pattern is valid: {e}"))
});

/// Whole-string check that `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Result of the simulated login round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_valid(&self) -> bool {
        is_valid_email(&self.email) && !self.password.is_empty()
    }

    /// What the pretend backend answers once the delay elapses.
    pub fn outcome(&self) -> AuthOutcome {
        if char_len(&self.password) >= LOGIN_MIN_PASSWORD_LEN {
            AuthOutcome::Success
        } else {
            AuthOutcome::Failure(LOGIN_FAILED_MESSAGE.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Optional.
    pub favorite_team: String,
    pub agree_to_terms: bool,
}

impl SignUpForm {
    pub fn is_valid(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.username.trim().is_empty()
            && is_valid_email(&self.email)
            && char_len(&self.password) >= NEW_PASSWORD_MIN_LEN
            && self.password == self.confirm_password
            && self.agree_to_terms
    }

    /// Hint for the first unmet requirement, in field order.
    pub fn first_problem(&self) -> Option<&'static str> {
        if self.full_name.trim().is_empty() {
            Some("Enter your full name")
        } else if self.username.trim().is_empty() {
            Some("Choose a username")
        } else if !is_valid_email(&self.email) {
            Some("Enter a valid email address")
        } else if char_len(&self.password) < NEW_PASSWORD_MIN_LEN {
            Some("Password must be at least 8 characters")
        } else if self.password != self.confirm_password {
            Some("Passwords do not match")
        } else if !self.agree_to_terms {
            Some("Accept the terms to continue")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl ChangePasswordForm {
    pub fn is_valid(&self) -> bool {
        !self.current.is_empty()
            && char_len(&self.new) >= NEW_PASSWORD_MIN_LEN
            && self.new == self.confirm
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditProfileForm {
    pub full_name: String,
    pub username: String,
    pub bio: String,
    pub favorite_team: String,
}

impl EditProfileForm {
    pub fn is_valid(&self) -> bool {
        !self.full_name.trim().is_empty() && !self.username.trim().is_empty()
    }
}
