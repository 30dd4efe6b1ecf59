mod engine;
mod state;

pub use engine::run_search;

use rustc_hash::FxHashMap;

use crate::catalog::{ArtistId, TrackId};

/// Outcome of a successful run: one track sequence per destination, plus
/// search statistics.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub paths: FxHashMap<ArtistId, Vec<TrackId>>,
    pub artists_visited: usize,
    pub rounds: usize,
    pub duration_secs: f64,
}
