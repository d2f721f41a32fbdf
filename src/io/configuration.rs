//! Seed data, text format separators and runtime defaults

use crate::tiles::domino::{Pips, Tile};

/// Fixed dataset shown at startup and restored by reset
pub const SEED_TILES: [Tile; 7] = [
    Tile::new(6, 1),
    Tile::new(4, 3),
    Tile::new(5, 1),
    Tile::new(3, 4),
    Tile::new(1, 1),
    Tile::new(3, 4),
    Tile::new(1, 2),
];

// Free-text remove input and tile list arguments
/// Separates the two halves in a pair remove request and tiles in a list
pub const PAIR_SEPARATOR: char = ',';
/// Separates the two halves of one tile in a tile list argument
pub const HALF_SEPARATOR: char = '-';

// Random hand generation
/// Fixed seed for reproducible hands
pub const DEFAULT_SEED: u64 = 42;
/// Highest pip count of a standard double-six set
pub const DEFAULT_MAX_PIP: Pips = 6;
/// Largest supported half, a double-eighteen set
pub const MAX_PIP_LIMIT: Pips = 18;
// Keeps a typo in --random from allocating gigabytes
/// Maximum number of tiles in a generated hand
pub const MAX_HAND_SIZE: usize = 10_000;

// Logging filters used when RUST_LOG is unset
/// Filter for normal runs
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter with --verbose
pub const VERBOSE_LOG_FILTER: &str = "debug";
/// Filter with --quiet
pub const QUIET_LOG_FILTER: &str = "error";

/// Lines in a script file starting with this are ignored
pub const SCRIPT_COMMENT_PREFIX: char = '#';
