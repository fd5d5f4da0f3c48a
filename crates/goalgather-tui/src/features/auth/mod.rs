//! Pre-shell screens: welcome, login and sign up.
//!
//! Submitting a form does not authenticate anything. The reducer starts a
//! cancellable delay and applies the precomputed outcome when it elapses.

pub mod login;
pub mod signup;
pub mod welcome;

use goalgather_core::forms::AuthOutcome;
pub use login::LoginState;
pub use signup::SignUpState;
pub use welcome::WelcomeState;

use crate::common::TaskKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    Stay,
    ShowWelcome,
    ShowLogin,
    ShowSignUp,
    EnterDemo,
    Quit,
    Submit { kind: TaskKind, outcome: AuthOutcome },
}
