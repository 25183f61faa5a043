//! Player level/XP values for the catalog header bar.
//!
//! Display only; earning XP is outside this app's scope.

use crate::constants::XP_PER_LEVEL;

/// Player progress shown in the header.
#[derive(Debug, Clone, Copy)]
pub struct PlayerProgress {
    pub level: u32,
    pub xp: u32,
}

impl PlayerProgress {
    pub fn new(level: u32, xp: u32) -> Self {
        Self { level, xp }
    }

    /// XP needed to reach the next level.
    pub fn xp_to_next(&self) -> u32 {
        self.level * XP_PER_LEVEL
    }

    /// Progress toward the next level as a 0-100 percentage.
    pub fn progress_percent(&self) -> u16 {
        let needed = self.xp_to_next();
        if needed == 0 {
            return 0;
        }
        ((self.xp as u64 * 100 / needed as u64).min(100)) as u16
    }
}

impl Default for PlayerProgress {
    fn default() -> Self {
        // Matches the header shown on the original page
        Self::new(3, 1250)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_to_next() {
        assert_eq!(PlayerProgress::new(3, 1250).xp_to_next(), 3000);
        assert_eq!(PlayerProgress::new(1, 0).xp_to_next(), 1000);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(PlayerProgress::new(1, 500).progress_percent(), 50);
        assert_eq!(PlayerProgress::new(3, 1250).progress_percent(), 41);
        assert_eq!(PlayerProgress::new(1, 0).progress_percent(), 0);
        // Capped at 100 even if xp overshoots
        assert_eq!(PlayerProgress::new(1, 5000).progress_percent(), 100);
    }
}
