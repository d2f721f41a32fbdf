//! Domino tile value type
//!
//! A tile is an ordered pair of pip counts. Orientation matters for display,
//! but duplicate detection compares tiles through their canonical key, so
//! `(3, 4)` and `(4, 3)` name the same physical domino.

use std::fmt;

/// Number of pips on one half of a tile
pub type Pips = u32;

/// Orientation-independent identity of a tile, `(min, max)`
pub type CanonicalKey = (Pips, Pips);

/// A domino tile with its two halves in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// First (top/left) half
    pub a: Pips,
    /// Second (bottom/right) half
    pub b: Pips,
}

impl Tile {
    /// Create a tile from its two halves in display order
    pub const fn new(a: Pips, b: Pips) -> Self {
        Self { a, b }
    }

    /// Sum of both halves
    ///
    /// Widened to `u64` so that two maximal halves still add up exactly.
    pub const fn total(self) -> u64 {
        self.a as u64 + self.b as u64
    }

    /// Whether both halves carry the same number of pips
    pub const fn is_double(self) -> bool {
        self.a == self.b
    }

    /// The smaller half, used as the sort tie-break
    pub const fn low(self) -> Pips {
        if self.a <= self.b { self.a } else { self.b }
    }

    /// The larger half
    pub const fn high(self) -> Pips {
        if self.a <= self.b { self.b } else { self.a }
    }

    /// Key under which flipped tiles compare equal
    pub const fn canonical(self) -> CanonicalKey {
        (self.low(), self.high())
    }

    /// The same tile turned around
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

impl From<(Pips, Pips)> for Tile {
    fn from((a, b): (Pips, Pips)) -> Self {
        Self::new(a, b)
    }
}

impl From<Tile> for (Pips, Pips) {
    fn from(tile: Tile) -> Self {
        (tile.a, tile.b)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.a, self.b)
    }
}
