//! Input handling for the catalog and puzzle screens.
//!
//! Each screen has one handler mapping key events onto the engines'
//! command surface. The handlers also keep the per-screen clock in step
//! with the session flags after every command.

use crossterm::event::{KeyCode, KeyEvent};

use crate::catalog::{PuzzleKind, CATALOG};
use crate::clock::Clock;
use crate::constants::SLIDING_SHUFFLE_STEPS;
use crate::hanoi::HanoiGame;
use crate::hanoi_logic;
use crate::session::PuzzleSession;
use crate::sliding::SlidingGame;
use crate::sliding_logic;

/// Columns in the catalog grid.
const GRID_COLS: usize = 3;

/// Result of handling an input event.
pub enum InputResult {
    /// Continue the current screen.
    Continue,
    /// Open a playable puzzle from the catalog.
    OpenPuzzle(PuzzleKind),
    /// Leave the current puzzle for the catalog.
    ToCatalog,
    /// Quit the application.
    Quit,
}

/// Start or stop the clock according to the session flags. Called after
/// every command so a win or reset stops the tick stream immediately.
pub fn sync_clock(session: &PuzzleSession, clock: &mut Clock) {
    if session.running {
        if !clock.is_running() {
            clock.start();
        }
    } else {
        clock.stop();
    }
}

/// Catalog screen: grid navigation plus Enter to open a playable entry.
pub fn handle_catalog_input(key: KeyEvent, selected: &mut usize) -> InputResult {
    match key.code {
        KeyCode::Left => {
            if *selected % GRID_COLS > 0 {
                *selected -= 1;
            }
        }
        KeyCode::Right => {
            if *selected % GRID_COLS < GRID_COLS - 1 && *selected + 1 < CATALOG.len() {
                *selected += 1;
            }
        }
        KeyCode::Up => {
            if *selected >= GRID_COLS {
                *selected -= GRID_COLS;
            }
        }
        KeyCode::Down => {
            if *selected + GRID_COLS < CATALOG.len() {
                *selected += GRID_COLS;
            }
        }
        KeyCode::Enter => {
            if let Some(kind) = CATALOG[*selected].playable {
                return InputResult::OpenPuzzle(kind);
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

/// Hanoi screen: pegs are clicked with the 1-3 keys.
pub fn handle_hanoi_input(key: KeyEvent, game: &mut HanoiGame, clock: &mut Clock) -> InputResult {
    match key.code {
        KeyCode::Char(c @ '1'..='3') => {
            let peg = c as usize - '1' as usize;
            hanoi_logic::handle_peg_click(game, peg);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            hanoi_logic::reset(game);
        }
        KeyCode::Esc => {
            clock.stop();
            return InputResult::ToCatalog;
        }
        _ => {}
    }
    sync_clock(&game.session, clock);
    InputResult::Continue
}

/// Sliding screen: cursor keys select a cell, Enter slides it.
pub fn handle_sliding_input(
    key: KeyEvent,
    game: &mut SlidingGame,
    clock: &mut Clock,
) -> InputResult {
    match key.code {
        KeyCode::Up => game.move_cursor(-1, 0),
        KeyCode::Down => game.move_cursor(1, 0),
        KeyCode::Left => game.move_cursor(0, -1),
        KeyCode::Right => game.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = game.cursor_index();
            sliding_logic::move_tile(game, index);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            sliding_logic::shuffle(game, SLIDING_SHUFFLE_STEPS, &mut rand::thread_rng());
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            sliding_logic::reset(game);
        }
        KeyCode::Esc => {
            clock.stop();
            return InputResult::ToCatalog;
        }
        _ => {}
    }
    sync_clock(&game.session, clock);
    InputResult::Continue
}
