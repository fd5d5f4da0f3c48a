//! Domain records shown by every screen.
//!
//! All records are plain values. Screens copy what they need out of
//! [`crate::fixtures::Fixtures`] and mutate only their local copies.

use serde::{Deserialize, Serialize};

/// Sender id used for messages and posts authored by the person at the keyboard.
pub const CURRENT_USER_ID: &str = "current-user";

/// Sender id used for welcome banners and icebreaker prompts.
pub const SYSTEM_SENDER_ID: &str = "system";

// ============================================================================
// Events
// ============================================================================

/// Where a match is being watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    Stadium,
    Bar,
    Screening,
}

impl VenueType {
    pub fn all() -> &'static [VenueType] {
        &[VenueType::Stadium, VenueType::Bar, VenueType::Screening]
    }

    /// Lowercase tag used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueType::Stadium => "stadium",
            VenueType::Bar => "bar",
            VenueType::Screening => "screening",
        }
    }

    /// Badge label shown next to an event.
    pub fn label(&self) -> &'static str {
        match self {
            VenueType::Stadium => "Stadium",
            VenueType::Bar => "Sports Bar",
            VenueType::Screening => "Screening",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VenueType::Stadium => "🏟",
            VenueType::Bar => "🍺",
            VenueType::Screening => "📺",
        }
    }
}

impl std::str::FromStr for VenueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stadium" => Ok(VenueType::Stadium),
            "bar" => Ok(VenueType::Bar),
            "screening" => Ok(VenueType::Screening),
            other => Err(format!(
                "unknown venue type '{other}' (expected stadium, bar or screening)"
            )),
        }
    }
}

/// A match meetup listed on the discovery and search screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub venue_type: VenueType,
    pub location: String,
    pub attendees: u32,
    pub image_url: String,
    pub distance: String,
    pub description: String,
}

impl Event {
    /// "Home vs Away" headline.
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

// ============================================================================
// Live scores
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Live,
    Upcoming,
    #[serde(rename = "halftime")]
    HalfTime,
}

impl MatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Live => "LIVE",
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::HalfTime => "Half Time",
        }
    }

    /// Whether the match has kicked off (live or at the break).
    pub fn is_in_play(&self) -> bool {
        !matches!(self, MatchStatus::Upcoming)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveMatch {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
    /// Minute marker ("67'", "HT") or kickoff time for upcoming matches.
    pub minute: Option<String>,
    pub league: String,
    pub attendees: u32,
    pub image_url: String,
}

impl LiveMatch {
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    /// "2 - 1" for matches in play, "vs" before kickoff.
    pub fn score_line(&self) -> String {
        if self.status.is_in_play() {
            format!("{} - {}", self.home_score, self.away_score)
        } else {
            "vs".to_string()
        }
    }
}

// ============================================================================
// Chats
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPreview {
    pub id: String,
    pub event_name: String,
    pub home_team: String,
    pub away_team: String,
    pub last_message: String,
    pub last_message_time: String,
    pub unread_count: u32,
    pub members: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_avatar: String,
    pub text: String,
    pub timestamp: String,
    pub is_icebreaker: bool,
}

impl ChatMessage {
    pub fn is_system(&self) -> bool {
        self.sender_id == SYSTEM_SENDER_ID
    }

    pub fn is_current_user(&self) -> bool {
        self.sender_id == CURRENT_USER_ID
    }
}

// ============================================================================
// Matchday
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchdayPost {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub content: String,
    pub image_url: Option<String>,
    pub timestamp: String,
    pub likes: i32,
    pub comments: u32,
    pub is_liked: bool,
}

// ============================================================================
// People
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vibe {
    Chill,
    #[serde(rename = "Cheer squad")]
    CheerSquad,
    #[serde(rename = "First-timer")]
    FirstTimer,
}

impl Vibe {
    pub fn label(&self) -> &'static str {
        match self {
            Vibe::Chill => "Chill",
            Vibe::CheerSquad => "Cheer squad",
            Vibe::FirstTimer => "First-timer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub favorite_team: String,
    pub vibe: Vibe,
    pub age_range: String,
    pub verified: bool,
}

/// A fan the user has met at previous events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalBuddy {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub events_met: u32,
}

impl GoalBuddy {
    /// "Met at 1 event" / "Met at 3 events".
    pub fn met_label(&self) -> String {
        let noun = if self.events_met == 1 { "event" } else { "events" };
        format!("Met at {} {noun}", self.events_met)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedUser {
    pub id: String,
    pub name: String,
    pub username: String,
}

/// Up to two initials from a display name ("Alex P." -> "AP").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .collect()
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingProfileEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub venue: String,
    pub attendees: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastProfileEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub venue: String,
    pub buddies_met: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub verified: bool,
    pub events_attended: u32,
    pub goal_buddies: u32,
    pub rating: f32,
    pub favorite_team: String,
    pub favorite_team_league: String,
    pub vibes: Vec<String>,
    pub achievements: Vec<String>,
    pub upcoming: Vec<UpcomingProfileEvent>,
    pub past: Vec<PastProfileEvent>,
    pub buddies: Vec<GoalBuddy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_take_first_two_words() {
        assert_eq!(initials("Alex P."), "AP");
        assert_eq!(initials("Jordan"), "J");
        assert_eq!(initials("Anna Maria Rossi"), "AM");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_venue_type_parses_case_insensitively() {
        assert_eq!("Stadium".parse::<VenueType>(), Ok(VenueType::Stadium));
        assert_eq!(" bar ".parse::<VenueType>(), Ok(VenueType::Bar));
        assert!("arena".parse::<VenueType>().is_err());
    }

    #[test]
    fn test_score_line_hides_scores_before_kickoff() {
        let mut m = LiveMatch {
            id: "1".into(),
            home_team: "Arsenal".into(),
            away_team: "Chelsea".into(),
            home_score: 0,
            away_score: 0,
            status: MatchStatus::Upcoming,
            minute: Some("19:30".into()),
            league: "Premier League".into(),
            attendees: 62,
            image_url: String::new(),
        };
        assert_eq!(m.score_line(), "vs");
        m.status = MatchStatus::HalfTime;
        m.home_score = 1;
        assert_eq!(m.score_line(), "1 - 0");
    }

    #[test]
    fn test_message_sender_flags() {
        let msg = ChatMessage {
            id: "1".into(),
            sender_id: CURRENT_USER_ID.into(),
            sender_name: "You".into(),
            sender_avatar: "YU".into(),
            text: "hi".into(),
            timestamp: "14:00".into(),
            is_icebreaker: false,
        };
        assert!(msg.is_current_user());
        assert!(!msg.is_system());
    }

    #[test]
    fn test_venue_and_status_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&VenueType::Bar).unwrap(), "\"bar\"");
        assert_eq!(
            serde_json::to_string(&MatchStatus::HalfTime).unwrap(),
            "\"halftime\""
        );
        assert_eq!(
            serde_json::from_str::<Vibe>("\"Cheer squad\"").unwrap(),
            Vibe::CheerSquad
        );
    }

    #[test]
    fn test_buddy_met_label_pluralizes() {
        let mut buddy = GoalBuddy {
            id: "1".into(),
            name: "Emma R.".into(),
            avatar: "ER".into(),
            events_met: 1,
        };
        assert_eq!(buddy.met_label(), "Met at 1 event");
        buddy.events_met = 2;
        assert_eq!(buddy.met_label(), "Met at 2 events");
    }
}
