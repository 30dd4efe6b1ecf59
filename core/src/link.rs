use std::sync::Arc;

use crate::catalog::TrackId;

/// One edge on a discovered path: the track that reached an artist, chained
/// backward to the link that reached the previous artist. Immutable after
/// creation; shared between frontier branches with a common prefix. The start
/// artist has no link at all, so `Option<Arc<PathLink>>` models the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLink {
    prev: Option<Arc<PathLink>>,
    track: TrackId,
    depth: u32,
}

impl PathLink {
    /// Chains a new link onto `prev`. Depth starts at 0 when extending the
    /// empty root and grows by exactly one per hop.
    pub fn extend(prev: Option<&Arc<PathLink>>, track: TrackId) -> Arc<PathLink> {
        Arc::new(PathLink {
            depth: prev.map_or(0, |link| link.depth + 1),
            prev: prev.cloned(),
            track,
        })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn track(&self) -> &TrackId {
        &self.track
    }

    /// Walks the predecessor chain and returns the tracks ordered from the
    /// start artist outward. Always yields exactly `depth + 1` tracks.
    pub fn tracks(&self) -> Vec<TrackId> {
        let mut tracks = Vec::with_capacity(self.depth as usize + 1);
        let mut current = Some(self);
        while let Some(link) = current {
            tracks.push(link.track.clone());
            current = link.prev.as_deref();
        }
        tracks.reverse();
        tracks
    }
}
