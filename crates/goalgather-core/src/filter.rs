//! Event search and filtering.
//!
//! One predicate shared by every screen that narrows the event list. The
//! discovery screen drives only the league axis; the search screen drives
//! the query and venue axes. All axes combine with AND, and results keep the
//! order of the input slice.

use crate::models::{Event, VenueType};

/// Venue-type axis of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VenueFilter {
    #[default]
    All,
    Only(VenueType),
}

impl VenueFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            VenueFilter::All => true,
            VenueFilter::Only(venue_type) => event.venue_type == *venue_type,
        }
    }

    /// Chip order: All, Stadium, Bar, Screening, then back to All.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            VenueFilter::All => VenueFilter::Only(VenueType::Stadium),
            VenueFilter::Only(VenueType::Stadium) => VenueFilter::Only(VenueType::Bar),
            VenueFilter::Only(VenueType::Bar) => VenueFilter::Only(VenueType::Screening),
            VenueFilter::Only(VenueType::Screening) => VenueFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VenueFilter::All => "All Venues",
            VenueFilter::Only(venue_type) => venue_type.label(),
        }
    }
}

impl std::str::FromStr for VenueFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(VenueFilter::All);
        }
        s.parse::<VenueType>().map(VenueFilter::Only)
    }
}

/// League axis of the filter. League names match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeagueFilter {
    #[default]
    All,
    Only(String),
}

impl LeagueFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::Only(league) => event.league == *league,
        }
    }

    /// Advances through `leagues`, wrapping back to `All` after the last one.
    #[must_use]
    pub fn next(&self, leagues: &[String]) -> Self {
        let next_index = match self {
            LeagueFilter::All => 0,
            LeagueFilter::Only(current) => leagues
                .iter()
                .position(|l| l == current)
                .map_or(leagues.len(), |i| i + 1),
        };
        leagues
            .get(next_index)
            .map_or(LeagueFilter::All, |l| LeagueFilter::Only(l.clone()))
    }

    /// Resolves a league name against `leagues`, ignoring case.
    ///
    /// `None`, a blank name and `all` select every league.
    pub fn resolve(name: Option<&str>, leagues: &[String]) -> Result<Self, String> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(LeagueFilter::All);
        };
        if name.eq_ignore_ascii_case("all") {
            return Ok(LeagueFilter::All);
        }
        leagues
            .iter()
            .find(|l| l.eq_ignore_ascii_case(name))
            .map(|l| LeagueFilter::Only(l.clone()))
            .ok_or_else(|| format!("unknown league '{name}' (known: {})", leagues.join(", ")))
    }

    pub fn label(&self) -> &str {
        match self {
            LeagueFilter::All => "All Leagues",
            LeagueFilter::Only(league) => league,
        }
    }
}

/// Returns true if the free-text query matches any searchable field.
///
/// Matching is a case-insensitive substring test over home team, away team,
/// league, venue name and location. Only the empty query matches every event;
/// whitespace is searched for like any other text.
pub fn matches_query(event: &Event, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [
        &event.home_team,
        &event.away_team,
        &event.league,
        &event.venue,
        &event.location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Combined filter over all axes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventFilter {
    pub query: String,
    pub venue: VenueFilter,
    pub league: LeagueFilter,
}

impl EventFilter {
    pub fn new(query: impl Into<String>, venue: VenueFilter, league: LeagueFilter) -> Self {
        Self {
            query: query.into(),
            venue,
            league,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        matches_query(event, &self.query) && self.venue.matches(event) && self.league.matches(event)
    }

    /// Clears every axis back to its "all" default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.query.is_empty()
            && self.venue == VenueFilter::All
            && self.league == LeagueFilter::All
    }
}

/// Returns the events that pass `filter`, in their original order.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|e| filter.matches(e)).collect()
}
