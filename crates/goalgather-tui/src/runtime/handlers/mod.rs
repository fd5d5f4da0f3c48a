//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that return a `UiEvent`. They never touch
//! state; the runtime spawns them and forwards the result to the inbox.

pub mod auth;
pub mod images;

pub use auth::*;
pub use images::*;
