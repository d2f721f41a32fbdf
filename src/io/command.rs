//! Parsing of user controls and the free-text remove request

use crate::io::configuration::PAIR_SEPARATOR;
use crate::io::error::{DominoError, Result};
use crate::tiles::domino::{Pips, Tile};
use crate::tiles::engine::{self, SortDirection};
use std::str::FromStr;

/// What a free-text remove input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveRequest {
    /// Remove every tile with this total
    Total(u64),
    /// Remove every tile exactly matching this orientation
    Pair(Tile),
}

impl RemoveRequest {
    /// Parse the remove input
    ///
    /// Text containing [`PAIR_SEPARATOR`] must be exactly two integers and
    /// becomes a pair request; anything else must be a single integer total.
    /// Malformed input yields `None` so the caller can ignore it.
    ///
    /// Each side must be a whole number: `"7a"` and `"3,4,5"` are malformed,
    /// not read as `7` and `(3, 4)`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if input.contains(PAIR_SEPARATOR) {
            let mut sides = input.split(PAIR_SEPARATOR);
            let a = sides.next()?.trim().parse::<Pips>().ok()?;
            let b = sides.next()?.trim().parse::<Pips>().ok()?;
            if sides.next().is_some() {
                return None;
            }
            Some(Self::Pair(Tile::new(a, b)))
        } else {
            input.parse::<u64>().ok().map(Self::Total)
        }
    }

    /// Produce the list with the requested tiles removed
    pub fn apply(self, tiles: &[Tile]) -> Vec<Tile> {
        match self {
            Self::Total(total) => engine::remove_by_total(tiles, total),
            Self::Pair(tile) => engine::remove_by_pair(tiles, tile.a, tile.b),
        }
    }
}

/// One user control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sort by total in the given direction
    Sort(SortDirection),
    /// Turn every tile around
    Flip,
    /// Drop duplicate dominoes
    Deduplicate,
    /// Restore the seed list
    Reset,
    /// Free-text remove input, parsed when applied
    Remove(String),
}

impl FromStr for Action {
    type Err = DominoError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (name, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(name, rest)| (name, rest.trim()));

        match (name.to_ascii_lowercase().as_str(), rest) {
            ("sort-asc" | "asc", "") => Ok(Self::Sort(SortDirection::Asc)),
            ("sort-desc" | "desc", "") => Ok(Self::Sort(SortDirection::Desc)),
            ("sort", direction) => direction.parse().map(Self::Sort),
            ("flip", "") => Ok(Self::Flip),
            ("dedup" | "remove-duplicates", "") => Ok(Self::Deduplicate),
            ("reset", "") => Ok(Self::Reset),
            ("remove", text) => Ok(Self::Remove(text.to_string())),
            _ => Err(DominoError::UnknownAction {
                input: trimmed.to_string(),
            }),
        }
    }
}
