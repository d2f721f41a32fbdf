//! List transformations over domino tiles
//!
//! Every operation borrows the current list and returns a fresh one; callers
//! replace their list wholesale with the result. Nothing here mutates its
//! input or keeps state between calls.

use crate::io::error::{DominoError, Result, invalid_argument};
use crate::tiles::domino::{Pips, Tile};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Ordering applied by [`sort`] to both the total and the tie-break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest total first
    Asc,
    /// Largest total first
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result for this direction
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DominoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(invalid_argument(
                "direction",
                &s,
                &"expected 'asc' or 'desc'",
            )),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Number of doubles in the list
pub fn count_doubles(tiles: &[Tile]) -> usize {
    tiles.iter().filter(|tile| tile.is_double()).count()
}

/// Compare two tiles by total, then by their smaller half
pub fn compare(left: Tile, right: Tile, direction: SortDirection) -> Ordering {
    let ascending = left
        .total()
        .cmp(&right.total())
        .then_with(|| left.low().cmp(&right.low()));
    direction.apply(ascending)
}

/// Stable sort by total pip count with the smaller half as tie-break
///
/// Tiles equal on both keys keep their input order in either direction.
pub fn sort(tiles: &[Tile], direction: SortDirection) -> Vec<Tile> {
    let mut sorted = tiles.to_vec();
    sorted.sort_by(|&left, &right| compare(left, right, direction));
    sorted
}

/// Turn every tile around, keeping list order
pub fn flip(tiles: &[Tile]) -> Vec<Tile> {
    tiles.iter().map(|tile| tile.flipped()).collect()
}

/// Keep the first occurrence of each domino regardless of orientation
pub fn deduplicate(tiles: &[Tile]) -> Vec<Tile> {
    let mut seen = HashSet::with_capacity(tiles.len());
    tiles
        .iter()
        .copied()
        .filter(|tile| seen.insert(tile.canonical()))
        .collect()
}

/// Drop every tile whose total equals `total`
pub fn remove_by_total(tiles: &[Tile], total: u64) -> Vec<Tile> {
    tiles
        .iter()
        .copied()
        .filter(|tile| tile.total() != total)
        .collect()
}

/// Drop every tile that is exactly `(a, b)`
///
/// Orientation-sensitive: `(b, a)` survives.
pub fn remove_by_pair(tiles: &[Tile], a: Pips, b: Pips) -> Vec<Tile> {
    let target = Tile::new(a, b);
    tiles
        .iter()
        .copied()
        .filter(|&tile| tile != target)
        .collect()
}

/// A fresh copy of the seed list
pub fn reset(seed: &[Tile]) -> Vec<Tile> {
    seed.to_vec()
}
