//! Screen feature modules.
//!
//! Each screen owns its state, a key handler that returns a [`ScreenAction`],
//! and a render function. Screen state is built from the fixtures when its
//! route is entered and dropped when the route changes.

pub mod auth;
pub mod chat;
pub mod chats;
pub mod discovery;
pub mod event_detail;
pub mod live;
pub mod matchday;
pub mod profile;
pub mod search;
pub mod settings;
pub mod shell;

use goalgather_core::fixtures::Fixtures;
use goalgather_core::navigation::NavAction;

use crate::common::ImageCache;
use crate::overlays::OverlayRequest;

/// What a screen asks the shell to do after handling a key.
#[derive(Debug)]
pub enum ScreenAction {
    None,
    Navigate(NavAction),
    OpenOverlay(OverlayRequest),
    SignOut,
}

/// Read-only context shared by screen renderers.
pub struct RenderCtx<'a> {
    pub fixtures: &'a Fixtures,
    pub images: &'a ImageCache,
    pub spinner_frame: usize,
}

/// Moves a list selection one step, clamped to `len`.
pub fn step_selection(selected: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}

/// First line to draw so that the selected card of `card_height` rows is visible.
pub fn scroll_for_selection(selected: usize, card_height: usize, viewport: u16) -> u16 {
    let bottom = (selected + 1) * card_height;
    let offset = bottom.saturating_sub(viewport as usize);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
