use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::catalog::{ArtistId, TrackId};
use crate::link::PathLink;

/// Turns each destination's link chain into an ordered track sequence,
/// ready for a playlist builder to consume.
pub fn materialize(
    discovered: &FxHashMap<ArtistId, Arc<PathLink>>,
) -> FxHashMap<ArtistId, Vec<TrackId>> {
    discovered
        .iter()
        .map(|(artist_id, link)| (artist_id.clone(), link.tracks()))
        .collect()
}
