// Input polling
pub const INPUT_POLL_MS: u64 = 50;

// Session timer granularity (one tick per second)
pub const CLOCK_TICK_MS: u64 = 1000;

// Tower of Hanoi
pub const HANOI_PEG_COUNT: usize = 3;
pub const HANOI_DISK_COUNT: usize = 3;
pub const HANOI_MIN_MOVES: u32 = 7; // 2^3 - 1 for the fixed 3-disk instance

// Sliding puzzle
pub const SLIDING_SIDE: usize = 4;
pub const SLIDING_CELLS: usize = SLIDING_SIDE * SLIDING_SIDE;
pub const SLIDING_SHUFFLE_STEPS: usize = 200;

// Player progress display
pub const XP_PER_LEVEL: u32 = 1000;
