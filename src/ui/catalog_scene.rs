//! Catalog screen: puzzle grid, player progress header, leaderboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{PuzzleInfo, CATALOG};
use crate::leaderboard::LEADERS;
use crate::progress::PlayerProgress;

/// Columns in the card grid (matches the input handler's navigation).
const GRID_COLS: usize = 3;

/// Render the catalog screen.
pub fn render_catalog(frame: &mut Frame, area: Rect, selected: usize, progress: &PlayerProgress) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with progress bar
            Constraint::Min(10),   // Cards + leaderboard
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    render_header(frame, chunks[0], progress);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Card grid
            Constraint::Length(26), // Leaderboard
        ])
        .split(chunks[1]);

    render_cards(frame, body[0], selected);
    render_leaderboard(frame, body[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [Arrows] Select   [Enter] Play   [Esc] Quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, progress: &PlayerProgress) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " Puzzlebox — Online Brain Teasers",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Level {} ", progress.level)),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(progress.progress_percent())
        .label(format!("{} / {} XP", progress.xp, progress.xp_to_next()));
    frame.render_widget(gauge, chunks[1]);
}

fn render_cards(frame: &mut Frame, area: Rect, selected: usize) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(*row_area);

        for (col_index, col_area) in cols.iter().enumerate() {
            let index = row_index * GRID_COLS + col_index;
            if index < CATALOG.len() {
                render_card(frame, *col_area, &CATALOG[index], index == selected);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, puzzle: &PuzzleInfo, selected: bool) {
    let border_color = if selected { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {} ", puzzle.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(puzzle.category.name(), Style::default().fg(Color::Cyan)),
            Span::styled(" · ", dim),
            Span::styled(puzzle.difficulty.name(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:.1}", puzzle.rating), Style::default().fg(Color::Yellow)),
            Span::styled(format!(" · {} solvers", puzzle.solvers), dim),
        ]),
        Line::from(Span::styled(puzzle.description, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            format!("Level {} · ~{} min", puzzle.level, puzzle.est_minutes),
            dim,
        )),
    ];

    let action = if puzzle.playable.is_some() {
        Span::styled("[Enter] Play", Style::default().fg(Color::Green))
    } else {
        Span::styled("Coming soon", dim)
    };
    lines.push(Line::from(action));

    let text = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}

fn render_leaderboard(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Leaderboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for leader in &LEADERS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>3} ", leader.badge), Style::default().fg(Color::Yellow)),
            Span::styled(leader.name, Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {} pts · lvl {}", leader.points, leader.level),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
