//! Sliding puzzle game logic: adjacency moves and shuffle generation.
//!
//! The shuffle is a bounded random walk of legal empty-cell swaps starting
//! from the solved board, so every shuffled board is solvable by
//! construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{SLIDING_CELLS, SLIDING_SIDE};
use crate::sliding::{cell_pos, SlidingGame, Tile, SOLVED};

/// Whether the tile at `index` can slide into the empty cell: same row
/// with column distance 1, or same column with row distance 1. Diagonal
/// and non-adjacent cells are never movable.
pub fn can_move(game: &SlidingGame, index: usize) -> bool {
    if index >= SLIDING_CELLS || game.tiles[index].is_none() {
        return false;
    }

    let (row, col) = cell_pos(index);
    let (empty_row, empty_col) = cell_pos(game.empty_index());

    (row == empty_row && col.abs_diff(empty_col) == 1)
        || (col == empty_col && row.abs_diff(empty_row) == 1)
}

/// Slide the tile at `index` into the empty cell. Returns false (board
/// and move count untouched) if the tile is not adjacent to the empty
/// cell or the game is already won.
///
/// An accepted move starts the session timer, increments the move count,
/// and triggers the win check.
pub fn move_tile(game: &mut SlidingGame, index: usize) -> bool {
    if game.session.won || !can_move(game, index) {
        return false;
    }

    game.session.begin();
    let empty = game.empty_index();
    game.tiles.swap(index, empty);
    game.session.record_move();

    // The move-count guard keeps the fresh unshuffled board from being
    // reported as won before any interaction.
    if game.is_solved_layout() && game.session.move_count > 0 {
        game.session.complete();
    }
    true
}

/// Cell indices adjacent to `index` on the 4x4 grid (2 to 4 of them).
fn adjacent_cells(index: usize) -> Vec<usize> {
    let (row, col) = cell_pos(index);
    let mut cells = Vec::with_capacity(4);

    if row > 0 {
        cells.push(index - SLIDING_SIDE);
    }
    if row < SLIDING_SIDE - 1 {
        cells.push(index + SLIDING_SIDE);
    }
    if col > 0 {
        cells.push(index - 1);
    }
    if col < SLIDING_SIDE - 1 {
        cells.push(index + 1);
    }

    cells
}

/// Generate a board by walking `steps` uniform random legal swaps from
/// the solved layout. Always solvable; not guaranteed to differ from the
/// solved layout (a fully back-tracked walk can return to it).
pub fn shuffled_board<R: Rng>(steps: usize, rng: &mut R) -> [Tile; SLIDING_CELLS] {
    let mut tiles = SOLVED;

    for _ in 0..steps {
        let empty = tiles
            .iter()
            .position(|t| t.is_none())
            .unwrap_or(SLIDING_CELLS - 1);
        let candidates = adjacent_cells(empty);
        if let Some(&pick) = candidates.choose(rng) {
            tiles.swap(empty, pick);
        }
    }

    tiles
}

/// Replace the board with a fresh shuffle and zero the session record,
/// exactly as `reset` does apart from the board contents.
pub fn shuffle<R: Rng>(game: &mut SlidingGame, steps: usize, rng: &mut R) {
    game.tiles = shuffled_board(steps, rng);
    game.session.reset();
}

/// Restore the solved layout and a fresh session record.
pub fn reset(game: &mut SlidingGame) {
    let cursor = game.cursor;
    *game = SlidingGame::new();
    game.cursor = cursor;
}
