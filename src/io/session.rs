//! Caller-owned current list, replaced wholesale after every action

use crate::io::command::{Action, RemoveRequest};
use crate::io::configuration::SEED_TILES;
use crate::tiles::domino::Tile;
use crate::tiles::engine::{self, SortDirection};
use tracing::debug;

/// Holds the seed and the most recent list produced by the engine
#[derive(Debug, Clone)]
pub struct Session {
    seed: Vec<Tile>,
    tiles: Vec<Tile>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SEED_TILES.to_vec())
    }
}

impl Session {
    /// Start a session showing `seed`, which is also the reset target
    pub fn new(seed: Vec<Tile>) -> Self {
        let tiles = engine::reset(&seed);
        Self { seed, tiles }
    }

    /// The list reset restores
    pub fn seed(&self) -> &[Tile] {
        &self.seed
    }

    /// The current list
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Doubles in the current list
    pub fn doubles(&self) -> usize {
        engine::count_doubles(&self.tiles)
    }

    /// Sort the current list
    pub fn sort(&mut self, direction: SortDirection) {
        self.replace("sort", engine::sort(&self.tiles, direction));
    }

    /// Flip every tile
    pub fn flip(&mut self) {
        self.replace("flip", engine::flip(&self.tiles));
    }

    /// Drop duplicate dominoes
    pub fn deduplicate(&mut self) {
        self.replace("deduplicate", engine::deduplicate(&self.tiles));
    }

    /// Restore the seed
    pub fn reset(&mut self) {
        self.replace("reset", engine::reset(&self.seed));
    }

    /// Handle the free-text remove input
    ///
    /// Returns the parsed request, or `None` when the input was ignored.
    pub fn remove(&mut self, input: &str) -> Option<RemoveRequest> {
        let Some(request) = RemoveRequest::parse(input) else {
            debug!(input, "ignoring malformed remove input");
            return None;
        };
        self.replace("remove", request.apply(&self.tiles));
        Some(request)
    }

    /// Run one user control
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::Sort(direction) => self.sort(*direction),
            Action::Flip => self.flip(),
            Action::Deduplicate => self.deduplicate(),
            Action::Reset => self.reset(),
            Action::Remove(input) => {
                self.remove(input);
            }
        }
    }

    fn replace(&mut self, operation: &'static str, tiles: Vec<Tile>) {
        debug!(
            operation,
            before = self.tiles.len(),
            after = tiles.len(),
            "applied"
        );
        self.tiles = tiles;
    }
}
