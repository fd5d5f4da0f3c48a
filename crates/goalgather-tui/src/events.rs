//! UI event types.
//!
//! All external inputs (terminal, timers, async results) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Async work uses a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`
//!
//! ## Cancellation Convention
//!
//! - `TaskStarted` carries the `CancellationToken` for the reducer to store
//! - Handlers `select!` on `token.cancelled()` against the simulated delay
//! - The reducer cancels via `UiEffect::CancelTask`; the runtime only calls `token.cancel()`

use crossterm::event::Event as CrosstermEvent;
use goalgather_core::forms::AuthOutcome;
use goalgather_core::images::LoadedImage;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation tick. The only event that schedules a redraw.
    Tick,

    /// Current terminal size, prepended to every batch.
    Frame { width: u16, height: u16 },

    Terminal(CrosstermEvent),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// The simulated sign-in delay elapsed.
    AuthFinished {
        kind: TaskKind,
        outcome: AuthOutcome,
    },
    AuthCancelled {
        kind: TaskKind,
    },

    ImageLoaded {
        url: String,
        image: LoadedImage,
    },
}
