//! Puzzle catalog data: the six entries shown on the catalog grid.
//!
//! Only two entries are playable; the rest are listed with their
//! metadata and marked "coming soon" by the UI.

use serde::{Deserialize, Serialize};

/// Catalog category shown on each puzzle card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Logic,
    Math,
    Algorithms,
    Sudoku,
    Puzzles,
    Chess,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Logic => "Logic",
            Self::Math => "Math",
            Self::Algorithms => "Algorithms",
            Self::Sudoku => "Sudoku",
            Self::Puzzles => "Puzzles",
            Self::Chess => "Chess",
        }
    }
}

/// Difficulty rating shown on each puzzle card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogDifficulty {
    Medium,
    Hard,
}

impl CatalogDifficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// The playable puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleKind {
    Hanoi,
    Sliding,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleInfo {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub difficulty: CatalogDifficulty,
    /// Community rating out of 5.
    pub rating: f32,
    /// Number of players who have solved it.
    pub solvers: u32,
    pub description: &'static str,
    /// Level required to attempt the puzzle.
    pub level: u8,
    /// Estimated solve time in minutes.
    pub est_minutes: u32,
    /// Which engine runs this entry, if it is playable.
    pub playable: Option<PuzzleKind>,
}

/// The full catalog, in display order.
pub const CATALOG: [PuzzleInfo; 6] = [
    PuzzleInfo {
        id: 1,
        title: "Einstein's Riddle",
        category: Category::Logic,
        difficulty: CatalogDifficulty::Hard,
        rating: 4.8,
        solvers: 12453,
        description: "Who keeps the fish? The classic logic puzzle.",
        level: 1,
        est_minutes: 30,
        playable: None,
    },
    PuzzleInfo {
        id: 2,
        title: "Bridges of Konigsberg",
        category: Category::Math,
        difficulty: CatalogDifficulty::Medium,
        rating: 4.6,
        solvers: 8932,
        description: "Can you cross every bridge in the city exactly once?",
        level: 1,
        est_minutes: 20,
        playable: None,
    },
    PuzzleInfo {
        id: 3,
        title: "Tower of Hanoi",
        category: Category::Algorithms,
        difficulty: CatalogDifficulty::Medium,
        rating: 4.7,
        solvers: 15678,
        description: "Move every disk to another peg in the fewest moves.",
        level: 1,
        est_minutes: 15,
        playable: Some(PuzzleKind::Hanoi),
    },
    PuzzleInfo {
        id: 4,
        title: "Samurai Sudoku",
        category: Category::Sudoku,
        difficulty: CatalogDifficulty::Hard,
        rating: 4.9,
        solvers: 6234,
        description: "Five overlapping sudoku grids for true masters.",
        level: 2,
        est_minutes: 45,
        playable: None,
    },
    PuzzleInfo {
        id: 5,
        title: "Fifteen Puzzle",
        category: Category::Puzzles,
        difficulty: CatalogDifficulty::Medium,
        rating: 4.6,
        solvers: 18934,
        description: "The classic sliding-tile game.",
        level: 1,
        est_minutes: 15,
        playable: Some(PuzzleKind::Sliding),
    },
    PuzzleInfo {
        id: 6,
        title: "Chess Studies",
        category: Category::Chess,
        difficulty: CatalogDifficulty::Hard,
        rating: 4.8,
        solvers: 9876,
        description: "Mate in three. Find the only solution.",
        level: 2,
        est_minutes: 25,
        playable: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_entries_with_unique_ids() {
        let mut ids: Vec<u32> = CATALOG.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_exactly_two_playable_entries() {
        let playable: Vec<PuzzleKind> =
            CATALOG.iter().filter_map(|p| p.playable).collect();
        assert_eq!(playable, vec![PuzzleKind::Hanoi, PuzzleKind::Sliding]);
    }

    #[test]
    fn test_ratings_in_range() {
        for puzzle in &CATALOG {
            assert!(
                puzzle.rating >= 0.0 && puzzle.rating <= 5.0,
                "Rating out of range for {}",
                puzzle.title
            );
            assert!(puzzle.solvers > 0);
            assert!(puzzle.est_minutes > 0);
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Algorithms.name(), "Algorithms");
        assert_eq!(Category::Puzzles.name(), "Puzzles");
        assert_eq!(CatalogDifficulty::Medium.name(), "Medium");
        assert_eq!(CatalogDifficulty::Hard.name(), "Hard");
    }
}
