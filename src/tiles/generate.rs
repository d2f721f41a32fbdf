//! Reproducible random hands and tile list parsing for alternative seed data

use crate::io::configuration::{HALF_SEPARATOR, MAX_HAND_SIZE, MAX_PIP_LIMIT, PAIR_SEPARATOR};
use crate::io::error::{Result, invalid_argument, invalid_tile_list};
use crate::tiles::domino::{Pips, Tile};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Draw `count` tiles with halves uniform in `0..=max_pip`
///
/// The same `(count, max_pip, seed)` always yields the same hand.
///
/// # Errors
///
/// Returns an error if `max_pip` exceeds [`MAX_PIP_LIMIT`] or `count`
/// exceeds [`MAX_HAND_SIZE`]
pub fn random_hand(count: usize, max_pip: Pips, seed: u64) -> Result<Vec<Tile>> {
    if max_pip > MAX_PIP_LIMIT {
        return Err(invalid_argument(
            "max_pip",
            &max_pip,
            &format!("must be at most {MAX_PIP_LIMIT}"),
        ));
    }
    if count > MAX_HAND_SIZE {
        return Err(invalid_argument(
            "count",
            &count,
            &format!("must be at most {MAX_HAND_SIZE}"),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| Tile::new(rng.random_range(0..=max_pip), rng.random_range(0..=max_pip)))
        .collect())
}

/// Parse a tile list such as `6-1, 4-3, 5-1`
///
/// An empty or blank string is an empty list.
///
/// # Errors
///
/// Returns an error if any entry is not two non-negative integers joined by
/// [`HALF_SEPARATOR`]
pub fn parse_tile_list(input: &str) -> Result<Vec<Tile>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(PAIR_SEPARATOR)
        .map(|entry| parse_tile(input, entry))
        .collect()
}

fn parse_tile(input: &str, entry: &str) -> Result<Tile> {
    let Some((a, b)) = entry.trim().split_once(HALF_SEPARATOR) else {
        return Err(invalid_tile_list(
            input,
            &format!("'{}' is not of the form A{HALF_SEPARATOR}B", entry.trim()),
        ));
    };

    let parse_half = |half: &str| {
        half.trim().parse::<Pips>().map_err(|err| {
            invalid_tile_list(input, &format!("'{}' is not a pip count: {err}", half.trim()))
        })
    };

    Ok(Tile::new(parse_half(a)?, parse_half(b)?))
}
