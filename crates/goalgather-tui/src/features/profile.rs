//! Profile: stats, favorite team, vibes, event tabs, achievements.

use crossterm::event::{KeyCode, KeyEvent};
use goalgather_core::fixtures::Fixtures;
use goalgather_core::models::UserProfile;
use goalgather_core::navigation::NavAction;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::ScreenAction;
use crate::common::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Upcoming,
    Past,
    Buddies,
}

impl ProfileTab {
    const ALL: [ProfileTab; 3] = [ProfileTab::Upcoming, ProfileTab::Past, ProfileTab::Buddies];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Upcoming => "Upcoming",
            ProfileTab::Past => "Past",
            ProfileTab::Buddies => "GoalBuddies",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct ProfileState {
    pub profile: UserProfile,
    pub tab: ProfileTab,
}

impl ProfileState {
    pub fn new(fixtures: &Fixtures) -> Self {
        Self {
            profile: fixtures.profile.clone(),
            tab: ProfileTab::default(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Right => self.tab = self.tab.next(),
            KeyCode::Left => self.tab = self.tab.previous(),
            KeyCode::Char('s') => return ScreenAction::Navigate(NavAction::OpenSettings),
            _ => {}
        }
        ScreenAction::None
    }
}

fn tab_lines(state: &ProfileState) -> Vec<Line<'static>> {
    let p = &state.profile;
    match state.tab {
        ProfileTab::Upcoming if p.upcoming.is_empty() => {
            vec![Line::from(theme::muted("  No upcoming events"))]
        }
        ProfileTab::Upcoming => p
            .upcoming
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::raw(format!("  📅 {}", e.title)),
                    theme::muted(format!(
                        "  {} • {} • {} going",
                        e.date, e.venue, e.attendees
                    )),
                ])
            })
            .collect(),
        ProfileTab::Past if p.past.is_empty() => {
            vec![Line::from(theme::muted("  No past events yet"))]
        }
        ProfileTab::Past => p
            .past
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::raw(format!("  ✅ {}", e.title)),
                    theme::muted(format!(
                        "  {} • {} • met {} buddies",
                        e.date, e.venue, e.buddies_met
                    )),
                ])
            })
            .collect(),
        ProfileTab::Buddies if p.buddies.is_empty() => {
            vec![Line::from(theme::muted("  Meet fans at events to add GoalBuddies"))]
        }
        ProfileTab::Buddies => p
            .buddies
            .iter()
            .map(|b| {
                Line::from(vec![
                    Span::styled(
                        format!("  [{}] {}", b.avatar, b.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    theme::muted(format!("  {}", b.met_label())),
                ])
            })
            .collect(),
    }
}

pub fn render(state: &ProfileState, frame: &mut Frame, area: Rect) {
    let p = &state.profile;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let verified = if p.verified { " ✔" } else { "" };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}] {}{verified}", p.avatar, p.name), bold),
            theme::muted(format!("  {}", p.username)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(p.events_attended.to_string(), bold),
            theme::muted(" events   "),
            Span::styled(p.goal_buddies.to_string(), bold),
            theme::muted(" GoalBuddies   "),
            Span::styled(format!("{:.1}", p.rating), bold),
            theme::muted(" ★ rating"),
        ]),
        Line::from(""),
        theme::title("Favorite team"),
        Line::from(vec![
            Span::raw(format!("⚽ {}", p.favorite_team)),
            theme::muted(format!("  {}", p.favorite_team_league)),
        ]),
        Line::from(""),
        theme::title("Vibes"),
    ];
    let vibes: Vec<Span> = p
        .vibes
        .iter()
        .flat_map(|v| [theme::chip(v, true), Span::raw(" ")])
        .collect();
    lines.push(Line::from(vibes));
    lines.push(Line::from(""));

    let mut tabs = Vec::new();
    for tab in ProfileTab::ALL {
        tabs.push(theme::chip(tab.label(), tab == state.tab));
        tabs.push(Span::raw(" "));
    }
    lines.push(Line::from(tabs));
    lines.extend(tab_lines(state));
    lines.push(Line::from(""));

    lines.push(theme::title("Achievements"));
    lines.push(Line::from(
        p.achievements
            .iter()
            .map(|a| format!("🏆 {a}"))
            .collect::<Vec<_>>()
            .join("   "),
    ));
    lines.push(Line::from(""));
    lines.push(theme::hints(&[("←→", "switch tab"), ("s", "settings")]));

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tabs_wrap_around() {
        assert_eq!(ProfileTab::Buddies.next(), ProfileTab::Upcoming);
        assert_eq!(ProfileTab::Upcoming.previous(), ProfileTab::Buddies);
    }

    #[test]
    fn test_settings_shortcut() {
        let mut state = ProfileState::new(&Fixtures::demo());
        state.handle_key(key(KeyCode::Right));
        assert_eq!(state.tab, ProfileTab::Past);
        assert!(matches!(
            state.handle_key(key(KeyCode::Char('s'))),
            ScreenAction::Navigate(NavAction::OpenSettings)
        ));
    }
}
