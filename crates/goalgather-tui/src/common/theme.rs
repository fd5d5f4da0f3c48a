//! Shared colors and small styled-text helpers.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const ACCENT: Color = Color::Green;
pub const LIVE: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;
pub const HIGHLIGHT: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;

pub fn title(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

pub fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(MUTED))
}

pub fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Chip like `[ Premier League ]`, filled when active.
pub fn chip(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    Span::styled(format!(" {label} "), style)
}

/// Key hint footer: `key action • key action`.
pub fn hints(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in pairs.iter().enumerate() {
        if i > 0 {
            spans.push(muted(" • "));
        }
        spans.push(Span::styled((*key).to_string(), Style::default().fg(HIGHLIGHT)));
        spans.push(muted(format!(" {action}")));
    }
    Line::from(spans)
}

/// Centered block of text shown instead of an empty list.
pub fn empty_state(icon: &str, headline: &str, detail: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(icon.to_string()).centered(),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(muted(detail.to_string())).centered(),
    ]
}

/// `Label  value█` row for a form field. The cursor block shows only when focused.
pub fn field_line(
    label: &str,
    field: &super::TextField,
    masked: bool,
    focused: bool,
) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    let mut spans = vec![
        Span::raw(marker),
        Span::styled(format!("{label:<18}"), label_style),
        Span::raw(field.display(masked)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

/// `[x] label` row for a checkbox.
pub fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{mark} {label}"), style),
    ])
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
