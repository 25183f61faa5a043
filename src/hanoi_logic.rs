//! Tower of Hanoi game logic: the two-click select/move protocol.
//!
//! Every illegal gesture (empty source peg, oversize disk onto a smaller
//! one) resolves to a silent no-op; there is no error channel.

use crate::hanoi::HanoiGame;

/// What a peg click did. The UI uses this only for highlighting; the
/// board and session are already updated when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PegClick {
    /// A non-empty peg became the selected source.
    Selected,
    /// The selected peg was clicked again and deselected.
    Deselected,
    /// A disk moved from the selected peg to the clicked peg.
    Moved,
    /// Nothing happened (empty source, or illegal destination).
    Ignored,
}

/// Handle a click on a peg.
///
/// First click selects a non-empty peg; clicking the selection again
/// deselects; a second click on another peg attempts the move. The
/// selection is always cleared after a second click, legal or not.
/// Any click starts the session timer.
pub fn handle_peg_click(game: &mut HanoiGame, peg: usize) -> PegClick {
    if peg >= game.pegs.len() || game.session.won {
        return PegClick::Ignored;
    }

    game.session.begin();

    match game.selected_peg {
        None => {
            if game.pegs[peg].is_empty() {
                PegClick::Ignored
            } else {
                game.selected_peg = Some(peg);
                PegClick::Selected
            }
        }
        Some(from) if from == peg => {
            game.selected_peg = None;
            PegClick::Deselected
        }
        Some(from) => {
            game.selected_peg = None;
            if try_move(game, from, peg) {
                PegClick::Moved
            } else {
                PegClick::Ignored
            }
        }
    }
}

/// Whether the top disk of `from` may be placed on `to`:
/// destination empty, or the moving disk is strictly smaller than the
/// destination's top disk.
pub fn is_legal_move(game: &HanoiGame, from: usize, to: usize) -> bool {
    let disk = match game.top(from) {
        Some(disk) => disk,
        None => return false,
    };
    match game.top(to) {
        Some(dest_top) => disk.size < dest_top.size,
        None => true,
    }
}

/// Attempt to move the top disk of `from` onto `to`. On success the move
/// count increments and the win condition is checked; on failure the
/// board and count are untouched.
fn try_move(game: &mut HanoiGame, from: usize, to: usize) -> bool {
    if !is_legal_move(game, from, to) {
        return false;
    }

    let disk = match game.pegs[from].pop() {
        Some(disk) => disk,
        None => return false,
    };
    game.pegs[to].push(disk);
    game.session.record_move();

    if game.is_solved() {
        game.session.complete();
    }
    true
}

/// Restore the canonical start state and a fresh session record.
pub fn reset(game: &mut HanoiGame) {
    *game = HanoiGame::new();
}
