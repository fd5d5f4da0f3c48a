//! Settings toggles and sheet choices. Held in memory for the session only.

/// Switches shown on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    PushNotifications,
    ChatMessages,
    EventReminders,
    Location,
    DarkMode,
}

impl Toggle {
    pub fn all() -> &'static [Toggle] {
        &[
            Toggle::PushNotifications,
            Toggle::ChatMessages,
            Toggle::EventReminders,
            Toggle::Location,
            Toggle::DarkMode,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Toggle::PushNotifications => "Push Notifications",
            Toggle::ChatMessages => "Chat Messages",
            Toggle::EventReminders => "Event Reminders",
            Toggle::Location => "Location Services",
            Toggle::DarkMode => "Dark Mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPreferences {
    pub push_notifications: bool,
    pub chat_messages: bool,
    pub event_reminders: bool,
    pub location: bool,
    pub dark_mode: bool,
}

impl Default for SettingsPreferences {
    fn default() -> Self {
        Self {
            push_notifications: true,
            chat_messages: true,
            event_reminders: true,
            location: true,
            dark_mode: false,
        }
    }
}

impl SettingsPreferences {
    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::PushNotifications => self.push_notifications,
            Toggle::ChatMessages => self.chat_messages,
            Toggle::EventReminders => self.event_reminders,
            Toggle::Location => self.location,
            Toggle::DarkMode => self.dark_mode,
        }
    }

    /// Flips one switch and returns its new value.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let slot = match toggle {
            Toggle::PushNotifications => &mut self.push_notifications,
            Toggle::ChatMessages => &mut self.chat_messages,
            Toggle::EventReminders => &mut self.event_reminders,
            Toggle::Location => &mut self.location,
            Toggle::DarkMode => &mut self.dark_mode,
        };
        *slot = !*slot;
        *slot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailOption {
    EventUpdates,
    ChatSummaries,
    Promotions,
}

impl EmailOption {
    pub fn all() -> &'static [EmailOption] {
        &[
            EmailOption::EventUpdates,
            EmailOption::ChatSummaries,
            EmailOption::Promotions,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmailOption::EventUpdates => "Event updates",
            EmailOption::ChatSummaries => "Chat summaries",
            EmailOption::Promotions => "Promotions & offers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailPreferences {
    pub event_updates: bool,
    pub chat_summaries: bool,
    pub promotions: bool,
}

impl Default for EmailPreferences {
    fn default() -> Self {
        Self {
            event_updates: true,
            chat_summaries: true,
            promotions: false,
        }
    }
}

impl EmailPreferences {
    pub fn get(&self, option: EmailOption) -> bool {
        match option {
            EmailOption::EventUpdates => self.event_updates,
            EmailOption::ChatSummaries => self.chat_summaries,
            EmailOption::Promotions => self.promotions,
        }
    }

    pub fn toggle(&mut self, option: EmailOption) -> bool {
        let slot = match option {
            EmailOption::EventUpdates => &mut self.event_updates,
            EmailOption::ChatSummaries => &mut self.chat_summaries,
            EmailOption::Promotions => &mut self.promotions,
        };
        *slot = !*slot;
        *slot
    }
}

/// Who may view the user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileVisibility {
    #[default]
    Everyone,
    FriendsOnly,
    OnlyMe,
}

impl ProfileVisibility {
    pub fn all() -> &'static [ProfileVisibility] {
        &[
            ProfileVisibility::Everyone,
            ProfileVisibility::FriendsOnly,
            ProfileVisibility::OnlyMe,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileVisibility::Everyone => "Everyone",
            ProfileVisibility::FriendsOnly => "Friends only",
            ProfileVisibility::OnlyMe => "Only me",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProfileVisibility::Everyone => "Anyone on GoalGather can view your profile.",
            ProfileVisibility::FriendsOnly => {
                "Only GoalBuddies you've connected with can view your profile."
            }
            ProfileVisibility::OnlyMe => "Your profile is hidden from others. Only you can see it.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let prefs = SettingsPreferences::default();
        let on: Vec<_> = Toggle::all().iter().filter(|t| prefs.get(**t)).collect();
        assert_eq!(on.len(), 4);
        assert!(!prefs.get(Toggle::DarkMode));
    }

    #[test]
    fn test_toggle_flips_only_one_switch() {
        let mut prefs = SettingsPreferences::default();
        assert!(prefs.toggle(Toggle::DarkMode));
        assert!(!prefs.toggle(Toggle::Location));
        assert_eq!(
            prefs,
            SettingsPreferences {
                dark_mode: true,
                location: false,
                ..SettingsPreferences::default()
            }
        );
    }

    #[test]
    fn test_email_preferences_defaults_and_toggle() {
        let mut prefs = EmailPreferences::default();
        assert!(!prefs.get(EmailOption::Promotions));
        assert!(prefs.toggle(EmailOption::Promotions));
        assert!(!prefs.toggle(EmailOption::EventUpdates));
    }

    #[test]
    fn test_visibility_defaults_to_everyone() {
        assert_eq!(ProfileVisibility::default(), ProfileVisibility::Everyone);
        assert_eq!(ProfileVisibility::all().len(), 3);
        assert!(ProfileVisibility::OnlyMe.description().contains("hidden"));
    }
}
