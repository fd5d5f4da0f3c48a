//! Built-in demo data.
//!
//! Every screen seeds its local state from a [`Fixtures`] value handed to it,
//! so tests can swap in their own lists without touching global state.

use crate::models::{
    Attendee, BlockedUser, ChatMessage, ChatPreview, Event, GoalBuddy, LiveMatch, MatchStatus,
    MatchdayPost, PastProfileEvent, SYSTEM_SENDER_ID, UpcomingProfileEvent, UserProfile,
    VenueType, Vibe,
};

const STADIUM_CROWD_IMG: &str = "https://images.unsplash.com/photo-1686947079063-f1e7a7dfc6a9?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const SPORTS_BAR_IMG: &str = "https://images.unsplash.com/photo-1759171053149-d5cce4261405?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const FANS_CHEERING_IMG: &str = "https://images.unsplash.com/photo-1559930198-26e8d7f0a4f7?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// Every mock list the app renders.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub events: Vec<Event>,
    pub leagues: Vec<String>,
    pub live_matches: Vec<LiveMatch>,
    pub upcoming_matches: Vec<LiveMatch>,
    pub active_chats: Vec<ChatPreview>,
    pub past_chats: Vec<ChatPreview>,
    /// Transcript every group chat opens with.
    pub chat_messages: Vec<ChatMessage>,
    pub icebreakers: Vec<String>,
    pub posts: Vec<MatchdayPost>,
    pub attendees: Vec<Attendee>,
    pub profile: UserProfile,
    pub blocked_users: Vec<BlockedUser>,
}

impl Fixtures {
    /// The demo dataset shipped with the app.
    pub fn demo() -> Self {
        Self {
            events: demo_events(),
            leagues: ["Premier League", "Champions League", "La Liga", "Serie A"]
                .into_iter()
                .map(String::from)
                .collect(),
            live_matches: vec![
                live_match(
                    "1",
                    ("Manchester United", "Liverpool"),
                    (2, 1),
                    MatchStatus::Live,
                    "67'",
                    "Premier League",
                    47,
                    STADIUM_CROWD_IMG,
                ),
                live_match(
                    "2",
                    ("Real Madrid", "Bayern Munich"),
                    (1, 1),
                    MatchStatus::HalfTime,
                    "HT",
                    "Champions League",
                    23,
                    SPORTS_BAR_IMG,
                ),
            ],
            upcoming_matches: vec![
                live_match(
                    "3",
                    ("Barcelona", "Atletico Madrid"),
                    (0, 0),
                    MatchStatus::Upcoming,
                    "15:00",
                    "La Liga",
                    15,
                    FANS_CHEERING_IMG,
                ),
                live_match(
                    "4",
                    ("Arsenal", "Chelsea"),
                    (0, 0),
                    MatchStatus::Upcoming,
                    "19:30",
                    "Premier League",
                    62,
                    STADIUM_CROWD_IMG,
                ),
            ],
            active_chats: vec![
                chat_preview(
                    "1",
                    "Man Utd vs Liverpool",
                    ("Manchester United", "Liverpool"),
                    ("Emma: This is my first time at Old Trafford! So excited 🎉", "2m ago"),
                    3,
                    47,
                    true,
                ),
                chat_preview(
                    "2",
                    "Real Madrid vs Bayern",
                    ("Real Madrid", "Bayern Munich"),
                    ("Alex: See you all at the bar! 🍻", "15m ago"),
                    1,
                    23,
                    true,
                ),
            ],
            past_chats: vec![
                chat_preview(
                    "3",
                    "Chelsea vs Arsenal",
                    ("Chelsea", "Arsenal"),
                    ("Sarah: Thanks everyone, great match!", "2 days ago"),
                    0,
                    31,
                    false,
                ),
                chat_preview(
                    "4",
                    "Barcelona vs Real Madrid",
                    ("Barcelona", "Real Madrid"),
                    ("Mike: What a game! 🔥", "5 days ago"),
                    0,
                    19,
                    false,
                ),
            ],
            chat_messages: demo_messages(),
            icebreakers: [
                "Where are you sitting?",
                "Who's bringing the banner?",
                "Want to meet before kickoff?",
                "Anyone need a ride?",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            posts: demo_posts(),
            attendees: vec![
                attendee("1", "Sarah M.", "Manchester United", Vibe::CheerSquad, "25-30", true),
                attendee("2", "James K.", "Liverpool", Vibe::Chill, "30-35", true),
                attendee("3", "Emma R.", "Manchester United", Vibe::FirstTimer, "20-25", false),
                attendee("4", "David L.", "Neutral", Vibe::Chill, "28-32", true),
                attendee("5", "Mia T.", "Manchester United", Vibe::CheerSquad, "22-27", true),
            ],
            profile: demo_profile(),
            blocked_users: vec![
                BlockedUser {
                    id: "1".into(),
                    name: "Alex P.".into(),
                    username: "@alexp".into(),
                },
                BlockedUser {
                    id: "2".into(),
                    name: "Jordan R.".into(),
                    username: "@jordanr".into(),
                },
            ],
        }
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Looks up a chat preview among active and past chats.
    pub fn chat(&self, id: &str) -> Option<&ChatPreview> {
        self.active_chats
            .iter()
            .chain(self.past_chats.iter())
            .find(|c| c.id == id)
    }

    /// Looks up a match among live and upcoming matches.
    pub fn live_match(&self, id: &str) -> Option<&LiveMatch> {
        self.live_matches
            .iter()
            .chain(self.upcoming_matches.iter())
            .find(|m| m.id == id)
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::demo()
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    league: &str,
    teams: (&str, &str),
    when: (&str, &str),
    venue: (&str, VenueType),
    location: &str,
    attendees: u32,
    image_url: &str,
    distance: &str,
    description: &str,
) -> Event {
    Event {
        id: id.into(),
        title: league.into(),
        home_team: teams.0.into(),
        away_team: teams.1.into(),
        league: league.into(),
        date: when.0.into(),
        time: when.1.into(),
        venue: venue.0.into(),
        venue_type: venue.1,
        location: location.into(),
        attendees,
        image_url: image_url.into(),
        distance: distance.into(),
        description: description.into(),
    }
}

fn demo_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Premier League",
            ("Manchester United", "Liverpool"),
            ("Nov 9, 2024", "17:30"),
            ("Old Trafford", VenueType::Stadium),
            "Manchester, UK",
            47,
            STADIUM_CROWD_IMG,
            "2.3 km",
            "The biggest rivalry in English football! Join fellow fans for this epic showdown.",
        ),
        event(
            "2",
            "Champions League",
            ("Real Madrid", "Bayern Munich"),
            ("Nov 6, 2024", "20:00"),
            ("The Red Lion Sports Bar", VenueType::Bar),
            "London, UK",
            23,
            SPORTS_BAR_IMG,
            "0.8 km",
            "European heavyweights collide. Big screens, cold drinks and a room full of fans.",
        ),
        event(
            "3",
            "La Liga",
            ("Barcelona", "Atletico Madrid"),
            ("Nov 10, 2024", "15:00"),
            ("Community Center Screening", VenueType::Screening),
            "Birmingham, UK",
            15,
            FANS_CHEERING_IMG,
            "5.1 km",
            "A relaxed community screening. Families and first-timers welcome.",
        ),
        event(
            "4",
            "Premier League",
            ("Arsenal", "Chelsea"),
            ("Nov 7, 2024", "19:30"),
            ("Emirates Stadium", VenueType::Stadium),
            "London, UK",
            62,
            STADIUM_CROWD_IMG,
            "3.7 km",
            "London derby under the lights. Meet up before kickoff and head in together.",
        ),
        event(
            "5",
            "Serie A",
            ("AC Milan", "Inter Milan"),
            ("Nov 8, 2024", "18:00"),
            ("Milano Sports Lounge", VenueType::Bar),
            "Manchester, UK",
            18,
            SPORTS_BAR_IMG,
            "1.2 km",
            "Derby della Madonnina far from home. Italian food and a lively crowd.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn live_match(
    id: &str,
    teams: (&str, &str),
    score: (u32, u32),
    status: MatchStatus,
    minute: &str,
    league: &str,
    attendees: u32,
    image_url: &str,
) -> LiveMatch {
    LiveMatch {
        id: id.into(),
        home_team: teams.0.into(),
        away_team: teams.1.into(),
        home_score: score.0,
        away_score: score.1,
        status,
        minute: Some(minute.into()),
        league: league.into(),
        attendees,
        image_url: image_url.into(),
    }
}

fn chat_preview(
    id: &str,
    event_name: &str,
    teams: (&str, &str),
    last: (&str, &str),
    unread_count: u32,
    members: u32,
    is_active: bool,
) -> ChatPreview {
    ChatPreview {
        id: id.into(),
        event_name: event_name.into(),
        home_team: teams.0.into(),
        away_team: teams.1.into(),
        last_message: last.0.into(),
        last_message_time: last.1.into(),
        unread_count,
        members,
        is_active,
    }
}

fn message(id: &str, sender: (&str, &str, &str), text: &str, timestamp: &str) -> ChatMessage {
    ChatMessage {
        id: id.into(),
        sender_id: sender.0.into(),
        sender_name: sender.1.into(),
        sender_avatar: sender.2.into(),
        text: text.into(),
        timestamp: timestamp.into(),
        is_icebreaker: false,
    }
}

fn demo_messages() -> Vec<ChatMessage> {
    let mut icebreaker = message(
        "2",
        (SYSTEM_SENDER_ID, "Icebreaker", "💬"),
        "Where are you all sitting? Let's try to meet up!",
        "14:21",
    );
    icebreaker.is_icebreaker = true;

    vec![
        message(
            "1",
            (SYSTEM_SENDER_ID, "GoalGather", "⚽"),
            "Welcome to the Manchester United vs Liverpool match chat! Use these icebreakers to get started:",
            "14:20",
        ),
        icebreaker,
        message(
            "3",
            ("1", "Sarah M.", "SM"),
            "I'm in the Stretford End! Section 127. Anyone nearby?",
            "14:23",
        ),
        message(
            "4",
            ("2", "James K.", "JK"),
            "I'm in 125! Right next to you Sarah 👋",
            "14:24",
        ),
        message(
            "5",
            ("5", "Mia T.", "MT"),
            "Anyone planning to grab food before the match? There's a great pub nearby",
            "14:28",
        ),
        message(
            "6",
            ("4", "David L.", "DL"),
            "I'm down! What time and where?",
            "14:30",
        ),
        message(
            "7",
            ("3", "Emma R.", "ER"),
            "This is my first time at Old Trafford! So excited 🎉",
            "14:32",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    user: (&str, &str, &str),
    content: &str,
    image_url: Option<&str>,
    timestamp: &str,
    likes: i32,
    comments: u32,
    is_liked: bool,
) -> MatchdayPost {
    MatchdayPost {
        id: id.into(),
        user_id: user.0.into(),
        user_name: user.1.into(),
        user_avatar: user.2.into(),
        content: content.into(),
        image_url: image_url.map(String::from),
        timestamp: timestamp.into(),
        likes,
        comments,
        is_liked,
    }
}

fn demo_posts() -> Vec<MatchdayPost> {
    vec![
        post(
            "1",
            ("1", "Sarah M.", "SM"),
            "GOALLLLLL! ⚽🔴 What an opener from Rashford!",
            None,
            "2 min ago",
            23,
            5,
            true,
        ),
        post(
            "2",
            ("2", "James K.", "JK"),
            "The atmosphere here is INSANE! 🔥",
            Some(FANS_CHEERING_IMG),
            "5 min ago",
            41,
            8,
            false,
        ),
        post(
            "3",
            ("5", "Mia T.", "MT"),
            "Pre-match meetup was amazing! Love this community 💙",
            None,
            "12 min ago",
            18,
            3,
            true,
        ),
        post(
            "4",
            ("3", "Emma R.", "ER"),
            "First time at Old Trafford and it did not disappoint! Thanks everyone for the warm welcome 🙏",
            None,
            "18 min ago",
            34,
            12,
            true,
        ),
    ]
}

fn attendee(
    id: &str,
    name: &str,
    favorite_team: &str,
    vibe: Vibe,
    age_range: &str,
    verified: bool,
) -> Attendee {
    Attendee {
        id: id.into(),
        name: name.into(),
        avatar: crate::models::initials(name),
        favorite_team: favorite_team.into(),
        vibe,
        age_range: age_range.into(),
        verified,
    }
}

fn demo_profile() -> UserProfile {
    let buddy = |id: &str, name: &str, events_met: u32| GoalBuddy {
        id: id.into(),
        name: name.into(),
        avatar: crate::models::initials(name),
        events_met,
    };

    UserProfile {
        name: "Your Name".into(),
        username: "@yourname".into(),
        avatar: "YU".into(),
        verified: true,
        events_attended: 12,
        goal_buddies: 28,
        rating: 4.8,
        favorite_team: "Manchester United".into(),
        favorite_team_league: "Premier League".into(),
        vibes: vec!["Cheer squad".into(), "Social".into()],
        achievements: vec![
            "First Match".into(),
            "Social Butterfly".into(),
            "Top Rated".into(),
        ],
        upcoming: vec![
            UpcomingProfileEvent {
                id: "1".into(),
                title: "Man Utd vs Liverpool".into(),
                date: "Nov 9, 2024".into(),
                venue: "Old Trafford".into(),
                attendees: 47,
            },
            UpcomingProfileEvent {
                id: "2".into(),
                title: "Real Madrid vs Bayern".into(),
                date: "Nov 6, 2024".into(),
                venue: "The Red Lion Sports Bar".into(),
                attendees: 23,
            },
        ],
        past: vec![
            PastProfileEvent {
                id: "1".into(),
                title: "Chelsea vs Arsenal".into(),
                date: "Oct 28, 2024".into(),
                venue: "Stamford Bridge".into(),
                buddies_met: 5,
            },
            PastProfileEvent {
                id: "2".into(),
                title: "Barcelona vs Real Madrid".into(),
                date: "Oct 21, 2024".into(),
                venue: "Sports Hub Bar".into(),
                buddies_met: 3,
            },
            PastProfileEvent {
                id: "3".into(),
                title: "PSG vs Marseille".into(),
                date: "Oct 15, 2024".into(),
                venue: "Community Screening".into(),
                buddies_met: 7,
            },
        ],
        buddies: vec![
            buddy("1", "Sarah M.", 3),
            buddy("2", "James K.", 2),
            buddy("3", "Emma R.", 1),
            buddy("4", "David L.", 2),
            buddy("5", "Mia T.", 1),
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_demo_ids_are_unique_per_list() {
        let fixtures = Fixtures::demo();
        let ids: HashSet<_> = fixtures.events.iter().map(|e| &e.id).collect();
        assert_eq!(ids.len(), fixtures.events.len());
        let ids: HashSet<_> = fixtures.posts.iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), fixtures.posts.len());
    }

    #[test]
    fn test_every_event_league_is_listed() {
        let fixtures = Fixtures::demo();
        for event in &fixtures.events {
            assert!(fixtures.leagues.contains(&event.league), "{}", event.league);
        }
    }

    #[test]
    fn test_lookups_search_both_sections() {
        let fixtures = Fixtures::demo();
        assert_eq!(fixtures.chat("4").map(|c| c.is_active), Some(false));
        assert_eq!(
            fixtures.live_match("3").map(|m| m.status),
            Some(MatchStatus::Upcoming)
        );
        assert!(fixtures.event("99").is_none());
    }

    #[test]
    fn test_seed_transcript_starts_with_system_messages() {
        let fixtures = Fixtures::demo();
        assert!(fixtures.chat_messages[0].is_system());
        assert!(fixtures.chat_messages[1].is_icebreaker);
        assert!(
            fixtures
                .chat_messages
                .iter()
                .all(|m| !m.is_current_user())
        );
    }
}
