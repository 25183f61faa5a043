//! Tower of Hanoi minigame data structures.
//!
//! Fixed 3-peg, 3-disk instance. Disks are identified by size; each peg
//! is a stack with index 0 at the bottom.

use serde::{Deserialize, Serialize};

use crate::constants::{HANOI_DISK_COUNT, HANOI_PEG_COUNT};
use crate::session::PuzzleSession;

/// A single disk, uniquely identified by its size (1..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    pub size: u8,
}

/// Active Tower of Hanoi game.
#[derive(Debug, Clone)]
pub struct HanoiGame {
    /// The three pegs. Within a peg, index 0 is the bottom disk and
    /// sizes strictly decrease toward the top.
    pub pegs: [Vec<Disk>; HANOI_PEG_COUNT],
    /// Currently selected source peg, if any.
    pub selected_peg: Option<usize>,
    /// Move count, timer, and win bookkeeping.
    pub session: PuzzleSession,
}

impl HanoiGame {
    /// Create a game in the canonical start state: all disks on peg 0,
    /// largest at the bottom.
    pub fn new() -> Self {
        Self {
            pegs: [
                vec![Disk { size: 3 }, Disk { size: 2 }, Disk { size: 1 }],
                Vec::new(),
                Vec::new(),
            ],
            selected_peg: None,
            session: PuzzleSession::new(),
        }
    }

    /// Top disk of a peg, if the peg is non-empty.
    pub fn top(&self, peg: usize) -> Option<Disk> {
        self.pegs[peg].last().copied()
    }

    /// Goal test: all disks stacked on peg 2. With only three disks in
    /// play and the ordering invariant, the length check is sufficient.
    pub fn is_solved(&self) -> bool {
        self.pegs[2].len() == HANOI_DISK_COUNT
    }

    /// Total disks currently on the board (always 3 under the invariant).
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(|peg| peg.len()).sum()
    }
}

impl Default for HanoiGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_start_state() {
        let game = HanoiGame::new();

        assert_eq!(game.pegs[0].len(), 3);
        assert!(game.pegs[1].is_empty());
        assert!(game.pegs[2].is_empty());

        // Bottom to top: 3, 2, 1
        let sizes: Vec<u8> = game.pegs[0].iter().map(|d| d.size).collect();
        assert_eq!(sizes, vec![3, 2, 1]);

        assert!(game.selected_peg.is_none());
        assert_eq!(game.session.move_count, 0);
        assert!(!game.session.won);
    }

    #[test]
    fn test_top_disk() {
        let game = HanoiGame::new();
        assert_eq!(game.top(0), Some(Disk { size: 1 }));
        assert_eq!(game.top(1), None);
        assert_eq!(game.top(2), None);
    }

    #[test]
    fn test_is_solved() {
        let mut game = HanoiGame::new();
        assert!(!game.is_solved());

        game.pegs[2] = std::mem::take(&mut game.pegs[0]);
        assert!(game.is_solved());
    }

    #[test]
    fn test_disk_count() {
        let game = HanoiGame::new();
        assert_eq!(game.disk_count(), 3);
    }
}
