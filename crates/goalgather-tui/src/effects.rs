//! Side effects returned by the reducer.
//!
//! The reducer never spawns or sleeps; it describes work as `UiEffect`s and
//! the runtime executes them.

use std::time::Duration;

use goalgather_core::forms::AuthOutcome;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

#[derive(Debug)]
pub enum UiEffect {
    Quit,

    /// Resolve `outcome` after `delay` unless the task is cancelled first.
    StartAuth {
        task: TaskId,
        kind: TaskKind,
        outcome: AuthOutcome,
        delay: Duration,
    },

    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },

    LoadImage {
        url: String,
    },
}
