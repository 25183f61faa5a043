//! Sliding fifteen-puzzle minigame data structures.
//!
//! 4x4 grid of 15 numbered tiles plus one empty cell, stored row-major
//! (cell index -> row = index / 4, col = index % 4).

use crate::constants::{SLIDING_CELLS, SLIDING_SIDE};
use crate::session::PuzzleSession;

/// A cell: a numbered tile 1..=15, or `None` for the empty cell.
pub type Tile = Option<u8>;

/// The solved layout: 1..15 in row-major order, empty cell last.
pub const SOLVED: [Tile; SLIDING_CELLS] = [
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    Some(5),
    Some(6),
    Some(7),
    Some(8),
    Some(9),
    Some(10),
    Some(11),
    Some(12),
    Some(13),
    Some(14),
    Some(15),
    None,
];

/// Active sliding puzzle game.
#[derive(Debug, Clone)]
pub struct SlidingGame {
    /// The 16 cells, row-major. Exactly one is `None`.
    pub tiles: [Tile; SLIDING_CELLS],
    /// Current cursor position (row, col) for keyboard play.
    pub cursor: (usize, usize),
    /// Move count, timer, and win bookkeeping.
    pub session: PuzzleSession,
}

impl SlidingGame {
    /// Create a game showing the solved layout (play starts after a
    /// shuffle).
    pub fn new() -> Self {
        Self {
            tiles: SOLVED,
            cursor: (SLIDING_SIDE / 2, SLIDING_SIDE / 2),
            session: PuzzleSession::new(),
        }
    }

    /// Index of the single empty cell.
    pub fn empty_index(&self) -> usize {
        self.tiles.iter().position(|t| t.is_none()).unwrap_or(0)
    }

    /// Cell index under the cursor.
    pub fn cursor_index(&self) -> usize {
        self.cursor.0 * SLIDING_SIDE + self.cursor.1
    }

    /// Move the cursor in a direction, clamping to grid bounds.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let max = SLIDING_SIDE as i32 - 1;
        let new_row = (self.cursor.0 as i32 + d_row).clamp(0, max) as usize;
        let new_col = (self.cursor.1 as i32 + d_col).clamp(0, max) as usize;
        self.cursor = (new_row, new_col);
    }

    /// Whether the board matches the solved layout element-for-element.
    pub fn is_solved_layout(&self) -> bool {
        self.tiles == SOLVED
    }
}

impl Default for SlidingGame {
    fn default() -> Self {
        Self::new()
    }
}

/// (row, col) of a cell index.
pub fn cell_pos(index: usize) -> (usize, usize) {
    (index / SLIDING_SIDE, index % SLIDING_SIDE)
}
