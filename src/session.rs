//! Shared per-puzzle session bookkeeping.
//!
//! Both playable puzzles layer the same record over their board state:
//! accepted moves, elapsed seconds, and the running/won flags that gate
//! the timer.

/// Bookkeeping for one play-through of a puzzle.
///
/// Created fresh on reset/shuffle; `won` is monotone until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSession {
    /// Number of accepted board-mutating moves.
    pub move_count: u32,
    /// Whole seconds elapsed while the session was running.
    pub elapsed_seconds: u32,
    /// Whether the timer is running.
    pub running: bool,
    /// Whether the puzzle has been solved this session.
    pub won: bool,
}

impl PuzzleSession {
    pub fn new() -> Self {
        Self {
            move_count: 0,
            elapsed_seconds: 0,
            running: false,
            won: false,
        }
    }

    /// Start the timer on the first accepted interaction.
    /// No effect if already running or already won.
    pub fn begin(&mut self) {
        if !self.running && !self.won {
            self.running = true;
        }
    }

    /// Record one accepted board-mutating move.
    pub fn record_move(&mut self) {
        self.move_count += 1;
    }

    /// Mark the puzzle solved. Terminal until the next reset.
    pub fn complete(&mut self) {
        self.won = true;
        self.running = false;
    }

    /// Advance the timer by one second. Ticks received while stopped
    /// or after a win are discarded, not queued.
    pub fn tick(&mut self) {
        if self.running && !self.won {
            self.elapsed_seconds += 1;
        }
    }

    /// Replace the whole record with a fresh one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PuzzleSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Format elapsed seconds as "m:ss" for display.
pub fn format_time(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = PuzzleSession::new();
        assert_eq!(session.move_count, 0);
        assert_eq!(session.elapsed_seconds, 0);
        assert!(!session.running);
        assert!(!session.won);
    }

    #[test]
    fn test_begin_starts_once() {
        let mut session = PuzzleSession::new();
        session.begin();
        assert!(session.running);

        // Begin again is a no-op
        session.begin();
        assert!(session.running);
    }

    #[test]
    fn test_begin_after_win_is_ignored() {
        let mut session = PuzzleSession::new();
        session.begin();
        session.complete();
        session.begin();
        assert!(!session.running, "Won session should not restart");
        assert!(session.won);
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut session = PuzzleSession::new();

        // Not running: ticks ignored
        session.tick();
        assert_eq!(session.elapsed_seconds, 0);

        session.begin();
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_seconds, 2);

        // After a win: ticks ignored
        session.complete();
        session.tick();
        assert_eq!(session.elapsed_seconds, 2);
    }

    #[test]
    fn test_win_is_monotone_until_reset() {
        let mut session = PuzzleSession::new();
        session.begin();
        session.record_move();
        session.complete();
        assert!(session.won);
        assert!(!session.running);

        // Still won after further ticks and begin attempts
        session.tick();
        session.begin();
        assert!(session.won);

        // Reset clears everything atomically
        session.reset();
        assert_eq!(session, PuzzleSession::new());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(125), "2:05");
        assert_eq!(format_time(3600), "60:00");
    }
}
