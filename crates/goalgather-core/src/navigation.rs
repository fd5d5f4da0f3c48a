//! Screen routing.
//!
//! `Route` is the single "current view" of the main shell. Routes that need
//! context carry it in their payload, so a detail screen can never be entered
//! without the id it shows. Back navigation goes to a fixed parent per route,
//! not to whatever screen was visited before.

use std::fmt;

/// Bottom tab bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Discover,
    Search,
    Live,
    Chats,
    Profile,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Discover, Tab::Search, Tab::Live, Tab::Chats, Tab::Profile]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Discover => "Discover",
            Tab::Search => "Search",
            Tab::Live => "Live",
            Tab::Chats => "Chats",
            Tab::Profile => "Profile",
        }
    }

    /// Root route shown when the tab is tapped.
    pub fn root(&self) -> Route {
        match self {
            Tab::Discover => Route::Discovery,
            Tab::Search => Route::Search,
            Tab::Live => Route::Live,
            Tab::Chats => Route::Chats,
            Tab::Profile => Route::Profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Discovery,
    Search,
    Live,
    Chats,
    EventDetail {
        event_id: String,
    },
    Chat {
        chat_id: String,
    },
    Matchday {
        event_id: String,
    },
    Profile,
    Settings,
}

/// User actions that request a route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    SelectTab(Tab),
    OpenEvent(String),
    /// Joins the group chat of an event; the event id doubles as the chat id.
    JoinChat(String),
    /// Opens an existing chat from the chats list.
    OpenChat(String),
    StartMatchday(String),
    OpenProfile,
    OpenSettings,
    Back,
}

impl Route {
    /// Applies a navigation action. Total: every action yields a route.
    #[must_use]
    pub fn apply(&self, action: NavAction) -> Route {
        match action {
            NavAction::SelectTab(tab) => tab.root(),
            NavAction::OpenEvent(event_id) => Route::EventDetail { event_id },
            NavAction::JoinChat(chat_id) | NavAction::OpenChat(chat_id) => Route::Chat { chat_id },
            NavAction::StartMatchday(event_id) => Route::Matchday { event_id },
            NavAction::OpenProfile => Route::Profile,
            NavAction::OpenSettings => Route::Settings,
            NavAction::Back => self.parent().unwrap_or_else(|| self.clone()),
        }
    }

    /// Static back target. Tab roots have none.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Discovery | Route::Search | Route::Live | Route::Chats => None,
            Route::EventDetail { .. } | Route::Profile => Some(Route::Discovery),
            Route::Chat { .. } => Some(Route::Chats),
            Route::Matchday { .. } => Some(Route::Live),
            Route::Settings => Some(Route::Profile),
        }
    }

    /// Tab highlighted in the bottom bar while this route is shown.
    pub fn active_tab(&self) -> Option<Tab> {
        match self {
            Route::Discovery => Some(Tab::Discover),
            Route::Search => Some(Tab::Search),
            Route::Live | Route::Matchday { .. } => Some(Tab::Live),
            Route::Chats | Route::Chat { .. } => Some(Tab::Chats),
            Route::Profile => Some(Tab::Profile),
            Route::EventDetail { .. } | Route::Settings => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Discovery => write!(f, "discovery"),
            Route::Search => write!(f, "search"),
            Route::Live => write!(f, "live"),
            Route::Chats => write!(f, "chats"),
            Route::EventDetail { event_id } => write!(f, "event-detail({event_id})"),
            Route::Chat { chat_id } => write!(f, "chat({chat_id})"),
            Route::Matchday { event_id } => write!(f, "matchday({event_id})"),
            Route::Profile => write!(f, "profile"),
            Route::Settings => write!(f, "settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_selection_carries_id() {
        for start in [Route::Discovery, Route::Search, Route::Live] {
            let next = start.apply(NavAction::OpenEvent("3".into()));
            assert_eq!(
                next,
                Route::EventDetail {
                    event_id: "3".into()
                }
            );
        }
    }

    #[test]
    fn test_join_chat_reuses_event_id() {
        let detail = Route::EventDetail {
            event_id: "2".into(),
        };
        assert_eq!(
            detail.apply(NavAction::JoinChat("2".into())),
            Route::Chat {
                chat_id: "2".into()
            }
        );
    }

    #[test]
    fn test_start_matchday_keeps_event_id() {
        let detail = Route::EventDetail {
            event_id: "1".into(),
        };
        assert_eq!(
            detail.apply(NavAction::StartMatchday("1".into())),
            Route::Matchday {
                event_id: "1".into()
            }
        );
    }

    #[test]
    fn test_back_targets_static_parent() {
        let cases = [
            (
                Route::Chat {
                    chat_id: "1".into(),
                },
                Route::Chats,
            ),
            (
                Route::Matchday {
                    event_id: "1".into(),
                },
                Route::Live,
            ),
            (
                Route::EventDetail {
                    event_id: "1".into(),
                },
                Route::Discovery,
            ),
            (Route::Settings, Route::Profile),
            (Route::Profile, Route::Discovery),
        ];
        for (from, to) in cases {
            assert_eq!(from.apply(NavAction::Back), to, "from {from}");
        }
    }

    #[test]
    fn test_back_ignores_actual_history() {
        // Search -> detail -> chat, then back twice lands on discovery-side parents.
        let route = Route::Search
            .apply(NavAction::OpenEvent("4".into()))
            .apply(NavAction::JoinChat("4".into()))
            .apply(NavAction::Back);
        assert_eq!(route, Route::Chats);
        assert_eq!(route.apply(NavAction::Back), Route::Chats);
    }

    #[test]
    fn test_back_on_tab_root_is_noop() {
        for tab in Tab::all() {
            let root = tab.root();
            if root == Route::Profile {
                continue;
            }
            assert_eq!(root.apply(NavAction::Back), root);
        }
    }

    #[test]
    fn test_active_tab_groups_children() {
        assert_eq!(
            Route::Matchday {
                event_id: "1".into()
            }
            .active_tab(),
            Some(Tab::Live)
        );
        assert_eq!(
            Route::Chat {
                chat_id: "1".into()
            }
            .active_tab(),
            Some(Tab::Chats)
        );
        assert_eq!(Route::Settings.active_tab(), None);
    }

    #[test]
    fn test_tabs_round_trip_through_root() {
        for tab in Tab::all() {
            assert_eq!(tab.root().active_tab(), Some(*tab));
        }
    }
}
