//! Shared leaf types for TUI features.
//!
//! Contains types with no feature dependencies (tasks, text helpers, input
//! fields, image slots, colors).
//!
//! IMPORTANT: This module must NOT import UiEvent or feature-specific state
//! to avoid circular dependencies.

pub mod image_cache;
pub mod task;
pub mod text;
pub mod text_field;
pub mod theme;

pub use image_cache::ImageCache;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text::{pad_to_width, truncate_with_ellipsis, wrap_text};
pub use text_field::TextField;
