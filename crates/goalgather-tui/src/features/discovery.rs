//! Discovery screen: league chips, list/map toggle, event cards.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::filter::{EventFilter, LeagueFilter, VenueFilter, filter_events};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::Event;
use goalgather_core::navigation::NavAction;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{RenderCtx, ScreenAction, scroll_for_selection, step_selection};
use crate::common::{ImageCache, theme};

/// Rows used by one event card, including the blank separator.
pub const EVENT_CARD_HEIGHT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryView {
    #[default]
    List,
    Map,
}

#[derive(Debug, Clone, Default)]
pub struct DiscoveryState {
    pub league: LeagueFilter,
    pub view: DiscoveryView,
    pub selected: usize,
}

impl DiscoveryState {
    pub fn filter(&self) -> EventFilter {
        EventFilter::new("", VenueFilter::All, self.league.clone())
    }

    pub fn visible<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        filter_events(events, &self.filter())
    }

    fn previous_league(&self, leagues: &[String]) -> LeagueFilter {
        let index = match &self.league {
            LeagueFilter::All => leagues.len(),
            LeagueFilter::Only(current) => leagues.iter().position(|l| l == current).unwrap_or(0),
        };
        match index.checked_sub(1).and_then(|i| leagues.get(i)) {
            Some(league) => LeagueFilter::Only(league.clone()),
            None => LeagueFilter::All,
        }
    }

    pub fn handle_key(&mut self, fixtures: &Fixtures, key: KeyEvent) -> ScreenAction {
        let count = self.visible(&fixtures.events).len();
        match key.code {
            KeyCode::Right => {
                self.league = self.league.next(&fixtures.leagues);
                self.selected = 0;
            }
            KeyCode::Left => {
                self.league = self.previous_league(&fixtures.leagues);
                self.selected = 0;
            }
            KeyCode::Char('m') => {
                self.view = match self.view {
                    DiscoveryView::List => DiscoveryView::Map,
                    DiscoveryView::Map => DiscoveryView::List,
                };
            }
            KeyCode::Up => self.selected = step_selection(self.selected, count, false),
            KeyCode::Down => self.selected = step_selection(self.selected, count, true),
            KeyCode::Enter => {
                if let Some(event) = self.visible(&fixtures.events).get(self.selected) {
                    return ScreenAction::Navigate(NavAction::OpenEvent(event.id.clone()));
                }
            }
            _ => {}
        }
        ScreenAction::None
    }
}

/// Card lines for one event, shared with the search screen.
pub fn event_card(event: &Event, images: &ImageCache, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let headline = Style::default()
        .add_modifier(Modifier::BOLD)
        .patch(theme::selected_style(selected));
    vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{} {}", event.venue_type.icon(), event.matchup()),
                headline,
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(event.league.clone(), Style::default().fg(theme::ACCENT)),
            theme::muted(format!(" • {} • {}", event.date, event.time)),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::raw(format!("📍 {}, {}", event.venue, event.location)),
            theme::muted(format!(
                " • {} • {} going",
                event.distance, event.attendees
            )),
        ]),
        Line::from(vec![
            Span::raw("    "),
            theme::muted(images.caption(&event.image_url)),
        ]),
        Line::from(""),
    ]
}

pub fn render(state: &DiscoveryState, ctx: &RenderCtx<'_>, frame: &mut Frame, area: Rect) {
    let [chips_area, summary_area, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut chips = vec![theme::chip(
        LeagueFilter::All.label(),
        state.league == LeagueFilter::All,
    )];
    for league in &ctx.fixtures.leagues {
        chips.push(Span::raw(" "));
        chips.push(theme::chip(
            league,
            state.league == LeagueFilter::Only(league.clone()),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(chips)), chips_area);

    let events = state.visible(&ctx.fixtures.events);
    let view_label = match state.view {
        DiscoveryView::List => "List",
        DiscoveryView::Map => "Map",
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    "Matches near you",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                theme::muted(format!("  {} events • {view_label} view", events.len())),
            ]),
            theme::hints(&[("←→", "league"), ("m", "map/list"), ("Enter", "open")]),
        ]),
        summary_area,
    );

    if events.is_empty() {
        frame.render_widget(
            Paragraph::new(theme::empty_state(
                "⚽",
                "No events in this league",
                "Pick another league chip",
            )),
            body_area,
        );
        return;
    }

    match state.view {
        DiscoveryView::List => {
            let lines: Vec<Line> = events
                .iter()
                .enumerate()
                .flat_map(|(i, e)| event_card(e, ctx.images, i == state.selected))
                .collect();
            let scroll = scroll_for_selection(state.selected, EVENT_CARD_HEIGHT, body_area.height);
            frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body_area);
        }
        DiscoveryView::Map => render_map(&events, state.selected, frame, body_area),
    }
}

fn render_map(events: &[&Event], selected: usize, frame: &mut Frame, area: Rect) {
    use ratatui::widgets::{Block, Borders};

    let mut lines = vec![
        Line::from(theme::muted("Pins sorted as listed; distances from your location")),
        Line::from(""),
    ];
    for (i, event) in events.iter().enumerate() {
        let style = theme::selected_style(i == selected);
        lines.push(Line::from(vec![
            Span::styled(format!("📍 {}", event.venue), style),
            theme::muted(format!(
                "  {} • {} • {}",
                event.location,
                event.distance,
                event.venue_type.label()
            )),
        ]));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::MUTED))
        .title(" 🗺  Map ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
