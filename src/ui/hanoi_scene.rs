//! Tower of Hanoi game UI rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{HANOI_DISK_COUNT, HANOI_MIN_MOVES};
use crate::hanoi::{Disk, HanoiGame};
use crate::session::format_time;
use crate::ui::{centered_rect, session_badges};

/// Render the Tower of Hanoi scene.
pub fn render_hanoi(frame: &mut Frame, area: Rect, game: &HanoiGame) {
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Badges
            Constraint::Min(10),   // Pegs
            Constraint::Length(7), // Rules
        ])
        .split(area);

    render_badges(frame, chunks[0], game);
    render_pegs(frame, chunks[1], game);
    render_rules(frame, chunks[2]);

    if game.session.won {
        render_win_overlay(frame, chunks[1], game);
    }
}

fn render_badges(frame: &mut Frame, area: Rect, game: &HanoiGame) {
    let block = Block::default()
        .title(" Tower of Hanoi ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let badges = session_badges(
        &game.session,
        Some(("Minimum", format!("{}", HANOI_MIN_MOVES))),
    );
    frame.render_widget(Paragraph::new(badges), inner);
}

fn render_pegs(frame: &mut Frame, area: Rect, game: &HanoiGame) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (peg_index, column) in columns.iter().enumerate() {
        render_peg(frame, *column, game, peg_index);
    }
}

fn render_peg(frame: &mut Frame, area: Rect, game: &HanoiGame, peg_index: usize) {
    let selected = game.selected_peg == Some(peg_index);
    let border_color = if selected { Color::Magenta } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Tower {} ", peg_index + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let peg = &game.pegs[peg_index];
    let mut lines: Vec<Line> = vec![Line::from("")];

    // Draw slots top-down; the top disk of a selected peg is lifted
    for slot in (0..HANOI_DISK_COUNT).rev() {
        let line = match peg.get(slot) {
            Some(disk) => {
                let lifted = selected && slot == peg.len() - 1;
                disk_line(*disk, lifted)
            }
            None => Line::from(Span::styled("|", Style::default().fg(Color::DarkGray))),
        };
        lines.push(line);
    }

    // Base
    lines.push(Line::from(Span::styled(
        "=========",
        Style::default().fg(Color::Gray),
    )));

    let key_hint = format!("[{}]", peg_index + 1);
    lines.push(Line::from(Span::styled(
        key_hint,
        if selected {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        },
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// One disk drawn as a bar proportional to its size.
fn disk_line(disk: Disk, lifted: bool) -> Line<'static> {
    let color = match disk.size {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Red,
    };
    let bar = "#".repeat(disk.size as usize * 2 + 1);

    let mut style = Style::default().fg(color);
    if lifted {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    Line::from(Span::styled(bar, style))
}

fn render_rules(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Rules ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("Move all disks from the first tower to the third.", dim)),
        Line::from(Span::styled("Only the top disk can move; never onto a smaller one.", dim)),
        Line::from(Span::styled("Minimum number of moves: 2^n - 1 for n disks.", dim)),
        Line::from(""),
        Line::from(Span::styled("[1-3] Select/move   [R] Reset   [Esc] Back", dim)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_win_overlay(frame: &mut Frame, area: Rect, game: &HanoiGame) {
    let overlay = centered_rect(44, 7, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![
        Line::from(Span::styled(
            "Congratulations!",
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
    ];

    if game.session.move_count == HANOI_MIN_MOVES {
        lines.push(Line::from(Span::styled(
            "A perfect solution!",
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(Span::styled(
        "[R] Play again   [Esc] Back",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
