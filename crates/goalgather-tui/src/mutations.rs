//! Cross-slice state mutations.
//!
//! Overlays return these to request changes to the screen underneath them.
//! The reducer applies them in order.

use goalgather_core::forms::EditProfileForm;
use goalgather_core::preferences::{EmailPreferences, ProfileVisibility};

#[derive(Debug)]
pub enum StateMutation {
    Settings(SettingsMutation),
}

/// Settings screen mutations requested by its sheets.
#[derive(Debug)]
pub enum SettingsMutation {
    SaveProfile(EditProfileForm),
    PasswordChanged,
    SetEmailPreferences(EmailPreferences),
    SetVisibility(ProfileVisibility),
    Unblock(String),
}
