//! Domino tiles and the list operations over them

/// Tile value type and its keys
pub mod domino;
/// Pure list transformations
pub mod engine;
/// Random hands and tile list parsing
pub mod generate;
