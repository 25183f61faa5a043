//! Integration test: Tower of Hanoi play-throughs
//!
//! Drives the engine through full games via the public click protocol and
//! checks the board invariants, the session flags, and the timer gating
//! along the way.

use std::time::{Duration, Instant};

use puzzlebox::clock::Clock;
use puzzlebox::constants::HANOI_MIN_MOVES;
use puzzlebox::hanoi::HanoiGame;
use puzzlebox::hanoi_logic::{handle_peg_click, reset, PegClick};
use puzzlebox::session::format_time;

/// Perform one select-then-move pair of clicks.
fn make_move(game: &mut HanoiGame, from: usize, to: usize) -> PegClick {
    handle_peg_click(game, from);
    handle_peg_click(game, to)
}

/// Assert the tower invariants: strictly decreasing disk sizes within
/// each peg, and exactly the disks {1,2,3} across the whole board.
fn assert_tower_invariants(game: &HanoiGame) {
    for peg in &game.pegs {
        for pair in peg.windows(2) {
            assert!(pair[0].size > pair[1].size);
        }
    }
    let mut sizes: Vec<u8> = game
        .pegs
        .iter()
        .flat_map(|peg| peg.iter().map(|d| d.size))
        .collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![1, 2, 3]);
}

/// The standard optimal solution for 3 disks, peg 0 to peg 2.
const OPTIMAL: [(usize, usize); 7] = [
    (0, 2),
    (0, 1),
    (2, 1),
    (0, 2),
    (1, 0),
    (1, 2),
    (0, 2),
];

#[test]
fn test_first_move_scenario() {
    let mut game = HanoiGame::new();

    // Select peg 0, then click peg 2: the size-1 disk moves
    assert_eq!(handle_peg_click(&mut game, 0), PegClick::Selected);
    assert_eq!(handle_peg_click(&mut game, 2), PegClick::Moved);

    let peg0: Vec<u8> = game.pegs[0].iter().map(|d| d.size).collect();
    let peg2: Vec<u8> = game.pegs[2].iter().map(|d| d.size).collect();
    assert_eq!(peg0, vec![3, 2]);
    assert_eq!(peg2, vec![1]);
    assert_eq!(game.session.move_count, 1);
}

#[test]
fn test_optimal_solve_keeps_invariants_and_wins() {
    let mut game = HanoiGame::new();

    for (from, to) in OPTIMAL {
        assert_eq!(make_move(&mut game, from, to), PegClick::Moved);
        assert_tower_invariants(&game);
    }

    assert!(game.session.won);
    assert!(!game.session.running);
    assert_eq!(game.session.move_count, HANOI_MIN_MOVES);

    let peg2: Vec<u8> = game.pegs[2].iter().map(|d| d.size).collect();
    assert_eq!(peg2, vec![3, 2, 1]);
}

#[test]
fn test_illegal_moves_change_nothing_along_the_way() {
    let mut game = HanoiGame::new();

    // Disk 1 to peg 2
    make_move(&mut game, 0, 2);

    // Oversize: disk 2 onto disk 1
    assert_eq!(make_move(&mut game, 0, 2), PegClick::Ignored);
    assert_eq!(game.session.move_count, 1);
    assert_tower_invariants(&game);

    // Empty source peg
    assert_eq!(handle_peg_click(&mut game, 1), PegClick::Ignored);
    assert_eq!(game.session.move_count, 1);
}

#[test]
fn test_timer_runs_only_between_start_and_win() {
    let mut game = HanoiGame::new();
    let mut clock = Clock::new();
    let base = Instant::now();

    // Ticks before any gesture are ignored (clock not started)
    assert!(!clock.poll_at(base + Duration::from_secs(1)));
    assert_eq!(game.session.elapsed_seconds, 0);

    // First gesture starts the session; the orchestration starts the clock
    handle_peg_click(&mut game, 0);
    assert!(game.session.running);
    clock.start_at(base);

    // Two seconds of play
    for n in 1..=2 {
        assert!(clock.poll_at(base + Duration::from_secs(n)));
        game.session.tick();
    }
    assert_eq!(game.session.elapsed_seconds, 2);

    // Finish the game (the first move is already selected-then-cleared:
    // restart the solve from scratch for clarity)
    let mut game = HanoiGame::new();
    for (from, to) in OPTIMAL {
        make_move(&mut game, from, to);
    }
    assert!(game.session.won);

    // Ticks delivered after the win are discarded
    game.session.tick();
    game.session.tick();
    assert_eq!(game.session.elapsed_seconds, 0);
}

#[test]
fn test_win_is_terminal_until_reset() {
    let mut game = HanoiGame::new();
    for (from, to) in OPTIMAL {
        make_move(&mut game, from, to);
    }
    assert!(game.session.won);

    // Further clicks are no-ops
    assert_eq!(handle_peg_click(&mut game, 2), PegClick::Ignored);
    assert!(game.session.won);
    assert_eq!(game.session.move_count, HANOI_MIN_MOVES);

    // Reset is the only exit
    reset(&mut game);
    assert!(!game.session.won);
    assert_eq!(game.session.move_count, 0);
    assert_eq!(game.pegs[0].len(), 3);
    assert_tower_invariants(&game);
}

#[test]
fn test_win_banner_values() {
    let mut game = HanoiGame::new();
    for (from, to) in OPTIMAL {
        make_move(&mut game, from, to);
    }

    // The display layer derives these from the snapshot
    assert_eq!(game.session.move_count, HANOI_MIN_MOVES);
    assert_eq!(format_time(game.session.elapsed_seconds), "0:00");
}
