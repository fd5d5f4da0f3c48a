//! `goalgather events`: the discovery list without the UI.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use goalgather_core::filter::{EventFilter, LeagueFilter, VenueFilter, filter_events};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::Event;

pub struct EventsArgs<'a> {
    pub query: &'a str,
    pub venue: &'a str,
    pub league: Option<&'a str>,
    pub json: bool,
}

pub fn run(args: &EventsArgs<'_>) -> Result<()> {
    let fixtures = Fixtures::demo();
    let filter = build_filter(&fixtures, args)?;
    let events = filter_events(&fixtures.events, &filter);
    tracing::debug!(?filter, matched = events.len(), "Filtered events");

    if args.json {
        let json = serde_json::to_string_pretty(&events).context("serialize events")?;
        println!("{json}");
    } else if events.is_empty() {
        println!("No events found. Try adjusting your filters.");
    } else {
        println!("{}", render_table(&events));
    }
    Ok(())
}

fn build_filter(fixtures: &Fixtures, args: &EventsArgs<'_>) -> Result<EventFilter> {
    let venue = args
        .venue
        .parse::<VenueFilter>()
        .map_err(anyhow::Error::msg)
        .context("invalid --venue")?;
    let league = LeagueFilter::resolve(args.league, &fixtures.leagues)
        .map_err(anyhow::Error::msg)
        .context("invalid --league")?;
    Ok(EventFilter::new(args.query, venue, league))
}

fn render_table(events: &[&Event]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Match", "League", "When", "Venue", "Going", "Distance"]);
    for event in events {
        table.add_row(vec![
            event.id.clone(),
            event.matchup(),
            event.league.clone(),
            format!("{} {}", event.date, event.time),
            format!("{} {}", event.venue_type.icon(), event.venue),
            event.attendees.to_string(),
            event.distance.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>(query: &'a str, venue: &'a str, league: Option<&'a str>) -> EventsArgs<'a> {
        EventsArgs {
            query,
            venue,
            league,
            json: false,
        }
    }

    #[test]
    fn test_league_name_is_case_insensitive() {
        let fixtures = Fixtures::demo();
        let filter = build_filter(&fixtures, &args("", "all", Some("premier league"))).unwrap();
        assert_eq!(filter.league, LeagueFilter::Only("Premier League".into()));
    }

    #[test]
    fn test_unknown_league_lists_known_ones() {
        let fixtures = Fixtures::demo();
        let err = build_filter(&fixtures, &args("", "all", Some("MLS"))).unwrap_err();
        assert!(format!("{err:#}").contains("La Liga"));
    }

    #[test]
    fn test_bad_venue_is_rejected() {
        let fixtures = Fixtures::demo();
        let err = build_filter(&fixtures, &args("", "arena", None)).unwrap_err();
        assert!(format!("{err:#}").contains("arena"));
    }

    #[test]
    fn test_table_has_row_per_event() {
        let fixtures = Fixtures::demo();
        let events: Vec<&Event> = fixtures.events.iter().collect();
        let rendered = render_table(&events).to_string();
        for event in &fixtures.events {
            assert!(rendered.contains(&event.home_team));
        }
    }
}
