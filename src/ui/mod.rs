//! Scene rendering for the catalog and puzzle screens.

pub mod catalog_scene;
pub mod hanoi_scene;
pub mod sliding_scene;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

use crate::session::{format_time, PuzzleSession};

/// Build the "Moves: N   Time: m:ss" badge line shared by both puzzle
/// scenes. `extra` slots an additional badge between the two (the Hanoi
/// scene uses it for the known minimum).
pub fn session_badges(session: &PuzzleSession, extra: Option<(&str, String)>) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Moves: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", session.move_count),
            Style::default().fg(Color::White),
        ),
    ];

    if let Some((label, value)) = extra {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{}: ", label),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(value, Style::default().fg(Color::White)));
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled("Time: ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format_time(session.elapsed_seconds),
        Style::default().fg(Color::White),
    ));

    Line::from(spans)
}

/// A rect of the given size centered in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
