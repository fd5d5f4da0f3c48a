//! Overlay modules for the TUI.
//!
//! Overlays are the settings sheets. Each is modal: while open it takes over
//! keyboard input, and it owns its state, key handler and render function.
//! Sheets edit a working copy and report changes back to the settings
//! screen as [`StateMutation`]s.

pub mod blocked_users;
pub mod change_password;
pub mod edit_profile;
pub mod email_preferences;
pub mod profile_visibility;
pub mod render_utils;

pub use blocked_users::BlockedUsersState;
pub use change_password::ChangePasswordState;
use crossterm::event::KeyEvent;
pub use edit_profile::EditProfileState;
pub use email_preferences::EmailPreferencesState;
use goalgather_core::forms::EditProfileForm;
use goalgather_core::preferences::{EmailPreferences, ProfileVisibility};
use goalgather_core::social::BlockList;
pub use profile_visibility::ProfileVisibilityState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::mutations::StateMutation;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a sheet, carrying the values it starts from.
#[derive(Debug)]
pub enum OverlayRequest {
    EditProfile(EditProfileForm),
    ChangePassword,
    EmailPreferences(EmailPreferences),
    ProfileVisibility(ProfileVisibility),
    BlockedUsers(BlockList),
}

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    EditProfile(EditProfileState),
    ChangePassword(ChangePasswordState),
    EmailPreferences(EmailPreferencesState),
    ProfileVisibility(ProfileVisibilityState),
    BlockedUsers(BlockedUsersState),
}

impl Overlay {
    pub fn open(request: OverlayRequest) -> Self {
        match request {
            OverlayRequest::EditProfile(form) => Overlay::EditProfile(EditProfileState::open(form)),
            OverlayRequest::ChangePassword => Overlay::ChangePassword(ChangePasswordState::open()),
            OverlayRequest::EmailPreferences(prefs) => {
                Overlay::EmailPreferences(EmailPreferencesState::open(prefs))
            }
            OverlayRequest::ProfileVisibility(current) => {
                Overlay::ProfileVisibility(ProfileVisibilityState::open(current))
            }
            OverlayRequest::BlockedUsers(list) => {
                Overlay::BlockedUsers(BlockedUsersState::open(list))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Overlay::EditProfile(_) => "edit-profile",
            Overlay::ChangePassword(_) => "change-password",
            Overlay::EmailPreferences(_) => "email-preferences",
            Overlay::ProfileVisibility(_) => "profile-visibility",
            Overlay::BlockedUsers(_) => "blocked-users",
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::EditProfile(o) => o.render(frame, area),
            Overlay::ChangePassword(o) => o.render(frame, area),
            Overlay::EmailPreferences(o) => o.render(frame, area),
            Overlay::ProfileVisibility(o) => o.render(frame, area),
            Overlay::BlockedUsers(o) => o.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::EditProfile(o) => o.handle_key(key),
            Overlay::ChangePassword(o) => o.handle_key(key),
            Overlay::EmailPreferences(o) => o.handle_key(key),
            Overlay::ProfileVisibility(o) => o.handle_key(key),
            Overlay::BlockedUsers(o) => o.handle_key(key),
        }
    }
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_matches_request() {
        let overlay = Overlay::open(OverlayRequest::ProfileVisibility(
            ProfileVisibility::OnlyMe,
        ));
        assert_eq!(overlay.name(), "profile-visibility");
        assert!(matches!(
            overlay,
            Overlay::ProfileVisibility(ProfileVisibilityState { selected: 2, .. })
        ));

        let overlay = Overlay::open(OverlayRequest::BlockedUsers(BlockList::default()));
        assert_eq!(overlay.name(), "blocked-users");
    }
}
