//! Sliding fifteen-puzzle game UI rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::SLIDING_SIDE;
use crate::session::format_time;
use crate::sliding::SlidingGame;
use crate::sliding_logic::can_move;
use crate::ui::{centered_rect, session_badges};

/// Render the sliding puzzle scene.
pub fn render_sliding(frame: &mut Frame, area: Rect, game: &SlidingGame) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(28),    // Grid area
            Constraint::Length(28), // Info panel
        ])
        .split(area);

    render_grid(frame, chunks[0], game);
    render_info_panel(frame, chunks[1], game);

    if game.session.won {
        render_win_overlay(frame, chunks[0], game);
    }
}

fn render_grid(frame: &mut Frame, area: Rect, game: &SlidingGame) {
    let block = Block::default()
        .title(" Fifteen Puzzle ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Each cell is 5 chars wide, 1 char tall, with a blank line between rows
    let grid_width = (SLIDING_SIDE * 5) as u16;
    let grid_height = (SLIDING_SIDE * 2 - 1) as u16;
    let x_offset = inner.x + (inner.width.saturating_sub(grid_width)) / 2;
    let y_offset = inner.y + (inner.height.saturating_sub(grid_height)) / 2;

    for row in 0..SLIDING_SIDE {
        let mut spans = Vec::new();
        for col in 0..SLIDING_SIDE {
            let index = row * SLIDING_SIDE + col;
            spans.push(cell_span(game, index));
        }

        let line = Paragraph::new(Line::from(spans));
        frame.render_widget(
            line,
            Rect::new(x_offset, y_offset + (row * 2) as u16, grid_width, 1),
        );
    }
}

/// Display text and style for one cell.
fn cell_span(game: &SlidingGame, index: usize) -> Span<'static> {
    let is_cursor = game.cursor_index() == index && !game.session.won;

    let (text, mut style) = match game.tiles[index] {
        Some(value) => {
            let color = if can_move(game, index) {
                Color::Green
            } else {
                Color::White
            };
            (format!(" {:>2}  ", value), Style::default().fg(color))
        }
        None => ("  .  ".to_string(), Style::default().fg(Color::DarkGray)),
    };

    if is_cursor {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }
    Span::styled(text, style)
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SlidingGame) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Fifteen Puzzle",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        session_badges(&game.session, None),
        Line::from(""),
    ];

    let status = if game.session.won {
        Span::styled("Solved!", Style::default().fg(Color::Green))
    } else if game.is_solved_layout() && game.session.move_count == 0 {
        Span::styled("Press S to shuffle", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Arrange 1 to 15 in order", Style::default().fg(Color::White))
    };
    lines.push(Line::from(status));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("[Arrows] Move cursor", dim)));
    lines.push(Line::from(Span::styled("[Enter] Slide tile", dim)));
    lines.push(Line::from(Span::styled("[S] Shuffle", dim)));
    lines.push(Line::from(Span::styled("[R] Reset", dim)));
    lines.push(Line::from(Span::styled("[Esc] Back", dim)));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_win_overlay(frame: &mut Frame, area: Rect, game: &SlidingGame) {
    let overlay = centered_rect(40, 6, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(Span::styled(
            "Well done!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Solved in {} moves and {}",
                game.session.move_count,
                format_time(game.session.elapsed_seconds)
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "[S] Shuffle again   [Esc] Back",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
