//! Layout and rendering
//!
//! Pure projection of [`SessionState`]; nothing here mutates state. Terminal
//! cells have one size, so the roaming font size maps onto text styling
//! instead of actual glyph scaling.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::HISTORY_SHOWN;
use crate::catalog::{self, MOODS};
use crate::session::SessionState;

mod colors {
    use ratatui::style::Color;
    pub const DIM: Color = Color::DarkGray;
    pub const TEXT: Color = Color::White;
    pub const STREAK: Color = Color::Magenta;
    pub const MASHUP: Color = Color::LightYellow;
}

pub fn render(frame: &mut Frame, state: &SessionState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // picker
            Constraint::Length(6),                     // message + streak
            Constraint::Length(4),                     // mashup card
            Constraint::Length(HISTORY_SHOWN as u16 + 2), // timeline
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_picker(frame, chunks[0], state);
    render_message(frame, chunks[1], state);
    render_mashup(frame, chunks[2], state);
    render_timeline(frame, chunks[3], state);
}

/// Mood picker populated from the catalog: "[1] Happy  [2] Sad ..."
fn render_picker(frame: &mut Frame, area: Rect, state: &SessionState) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, mood) in MOODS.iter().enumerate() {
        let selected = state.current_mood_id.as_deref() == Some(mood.id);
        let style = if selected {
            Style::default().fg(mood.color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(mood.color)
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, mood.label), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tell me your mood... if you dare! 🙃"),
        ),
        area,
    );
}

/// Current ironic message plus the streak banner when a streak is running.
fn render_message(frame: &mut Frame, area: Rect, state: &SessionState) {
    let mut lines: Vec<Line> = Vec::new();

    // Unknown ids resolve to nothing and render nothing
    if let Some(mood) = state.current_mood() {
        lines.push(Line::styled(
            mood.message,
            message_style(mood.color, state.display_font_size),
        ));
        lines.push(Line::raw(""));
    }

    if state.streak_count > 1 {
        let label = state.current_mood_id.as_deref().unwrap_or_default();
        lines.push(Line::styled(
            format!(
                "🎯 {}x STREAK OF {}! ARE YOU STUCK? 🎯",
                state.streak_count,
                label.to_uppercase()
            ),
            Style::default()
                .fg(colors::STREAK)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("font {}px", state.display_font_size)),
            ),
        area,
    );
}

/// Bigger "font" -> louder style.
fn message_style(color: Color, font_size: u16) -> Style {
    let style = Style::default().fg(color);
    match font_size {
        0..=20 => style,
        21..=27 => style.add_modifier(Modifier::BOLD),
        _ => style.add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}

fn render_mashup(frame: &mut Frame, area: Rect, state: &SessionState) {
    let lines: Vec<Line> = match &state.mashup_text {
        Some(text) => vec![
            Line::styled("🎲 Random Mood Mashup! 🎲", Style::default().fg(colors::TEXT)),
            Line::styled(
                text.as_str(),
                Style::default()
                    .fg(colors::MASHUP)
                    .add_modifier(Modifier::ITALIC),
            ),
        ],
        None => Vec::new(),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Last few selections, newest first.
fn render_timeline(frame: &mut Frame, area: Rect, state: &SessionState) {
    let mut lines: Vec<Line> = Vec::new();

    for entry in state.recent_history(HISTORY_SHOWN) {
        let mut spans = vec![Span::styled(
            entry.timestamp.clone(),
            Style::default().fg(colors::DIM),
        )];

        // Unknown moods show their bare timestamp only
        if let Some(mood) = catalog::find_by_id(&entry.mood_id) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(mood.label, Style::default().fg(mood.color)));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                mood.advice,
                Style::default()
                    .fg(colors::DIM)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Weird Mood Timeline 🎪"),
        ),
        area,
    );
}
