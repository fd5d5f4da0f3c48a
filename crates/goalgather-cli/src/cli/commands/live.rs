//! `goalgather live`: live and upcoming scores.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::LiveMatch;
use serde::Serialize;

#[derive(Serialize)]
struct LiveReport<'a> {
    live: &'a [LiveMatch],
    upcoming: &'a [LiveMatch],
}

pub fn run(json: bool) -> Result<()> {
    let fixtures = Fixtures::demo();

    if json {
        let report = LiveReport {
            live: &fixtures.live_matches,
            upcoming: &fixtures.upcoming_matches,
        };
        let json = serde_json::to_string_pretty(&report).context("serialize matches")?;
        println!("{json}");
        return Ok(());
    }

    println!("Live now");
    println!("{}", render_table(&fixtures.live_matches));
    println!();
    println!("Upcoming");
    println!("{}", render_table(&fixtures.upcoming_matches));
    Ok(())
}

fn render_table(matches: &[LiveMatch]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Home", "Score", "Away", "Status", "League", "Fans"]);
    for m in matches {
        let status = match &m.minute {
            Some(minute) => format!("{} {minute}", m.status.label()),
            None => m.status.label().to_string(),
        };
        table.add_row(vec![
            m.home_team.clone(),
            m.score_line(),
            m.away_team.clone(),
            status,
            m.league.clone(),
            m.attendees.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_rows_show_vs_and_kickoff() {
        let fixtures = Fixtures::demo();
        let rendered = render_table(&fixtures.upcoming_matches).to_string();
        assert!(rendered.contains("vs"));
        assert!(rendered.contains("Upcoming"));
    }
}
