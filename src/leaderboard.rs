//! Static leaderboard data for the catalog side panel.
//!
//! Display only; no score computation or persistence behind it.

/// One leaderboard row.
#[derive(Debug, Clone, Copy)]
pub struct LeaderEntry {
    pub name: &'static str,
    pub points: u32,
    pub level: u32,
    /// Rank marker shown next to the name.
    pub badge: &'static str,
}

/// Top five players, highest score first.
pub const LEADERS: [LeaderEntry; 5] = [
    LeaderEntry {
        name: "Alexey K.",
        points: 12580,
        level: 15,
        badge: "1st",
    },
    LeaderEntry {
        name: "Maria S.",
        points: 11240,
        level: 14,
        badge: "2nd",
    },
    LeaderEntry {
        name: "Dmitry P.",
        points: 10890,
        level: 13,
        badge: "3rd",
    },
    LeaderEntry {
        name: "Elena V.",
        points: 9750,
        level: 12,
        badge: "*",
    },
    LeaderEntry {
        name: "Ivan L.",
        points: 8920,
        level: 11,
        badge: "*",
    },
];
