//! Interactive manipulation of domino tile lists
//!
//! A session holds an ordered list of tiles and replaces it wholesale with
//! the output of pure transformations: sorting by total pip count, flipping,
//! removing duplicates, removing by total or exact pair, and resetting to
//! the seed dataset.

#![forbid(unsafe_code)]

/// Terminal front end, configuration and error handling
pub mod io;
/// Tile type and list transformations
pub mod tiles;

pub use io::error::{DominoError, Result};
pub use tiles::domino::Tile;
pub use tiles::engine::SortDirection;
