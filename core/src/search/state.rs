use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

use crate::catalog::{Artist, ArtistId};
use crate::link::PathLink;

/// Mutable state for one search run. Created once per run and owned
/// exclusively by the engine; holds nothing across runs.
pub struct SearchState {
    /// Closed set: artists whose discographies have been expanded.
    pub visited: FxHashSet<ArtistId>,
    /// Artists discovered last round but not yet expanded, each with the
    /// link that reached them. `None` marks the root (the start artist).
    pub frontier: FxHashMap<ArtistId, Option<Arc<PathLink>>>,
    /// Fixed for the run.
    pub destinations: FxHashMap<ArtistId, Artist>,
    /// First link reaching each destination; write-once per key.
    pub discovered: FxHashMap<ArtistId, Arc<PathLink>>,
}

impl SearchState {
    pub fn new(start: &Artist, destinations: Vec<Artist>) -> Self {
        let mut frontier = FxHashMap::default();
        frontier.insert(start.id.clone(), None);

        Self {
            visited: FxHashSet::default(),
            frontier,
            destinations: destinations
                .into_iter()
                .map(|artist| (artist.id.clone(), artist))
                .collect(),
            discovered: FxHashMap::default(),
        }
    }

    pub fn all_found(&self) -> bool {
        self.discovered.len() == self.destinations.len()
    }
}
