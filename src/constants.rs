// Limits shared by the trace aggregator, input handling and the TUI

/// Smallest generated array
pub const ARRAY_SIZE_MIN: usize = 5;

/// Largest generated or user-entered array
pub const ARRAY_SIZE_MAX: usize = 200;

/// Array size used when none is requested
pub const ARRAY_SIZE_DEFAULT: usize = 50;

/// Inclusive bounds for user-entered values
pub const VALUE_MIN: i64 = 1;
pub const VALUE_MAX: i64 = 1000;

/// Upper bound for randomly generated values
pub const RANDOM_VALUE_MAX: i64 = 100;

/// Longest input the trace aggregator will accept
/// Quadratic algorithms on this size already produce millions of steps
pub const MAX_INPUT_LEN: usize = 2000;

/// Memory budget for one retained trace (1 GB)
pub const TRACE_MEMORY_LIMIT: usize = 1024 * 1024 * 1024;

/// Auto-play interval bounds in milliseconds
pub const PLAY_INTERVAL_MIN_MS: u64 = 5;
pub const PLAY_INTERVAL_MAX_MS: u64 = 2000;
pub const PLAY_INTERVAL_DEFAULT_MS: u64 = 100;
