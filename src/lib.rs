//! Puzzlebox - Terminal Puzzle Catalog Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod catalog;
pub mod clock;
pub mod constants;
pub mod hanoi;
pub mod hanoi_logic;
pub mod leaderboard;
pub mod progress;
pub mod session;
pub mod sliding;
pub mod sliding_logic;

// UI and input modules are not exposed as they are tightly coupled to the
// terminal
