use futures::future::try_join_all;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::SearchReport;
use super::state::SearchState;
use crate::catalog::{
    Album, AlbumId, AlbumType, Artist, ArtistId, Catalog, DETAIL_BATCH_LIMIT,
};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::link::PathLink;
use crate::materialize::materialize;

/// Compilations and live reissues are excluded: their credit lists create
/// spurious collaboration edges.
const SEARCH_ALBUM_TYPES: &[AlbumType] = &[AlbumType::Album, AlbumType::Single];

/// Round-based multi-target BFS over the implicit collaboration graph.
/// Succeeds once every destination has a discovered link; fails when the
/// frontier empties or a path would exceed `config.max_depth`.
pub async fn run_search<C: Catalog + ?Sized>(
    catalog: &C,
    start: &Artist,
    destinations: Vec<Artist>,
    config: &SearchConfig,
) -> Result<SearchReport, SearchError> {
    let search_timer = Instant::now();
    let mut state = SearchState::new(start, destinations);
    let mut rounds = 0;

    while !state.all_found() {
        if state.frontier.is_empty() {
            return Err(SearchError::Exhausted {
                artists_visited: state.visited.len(),
                found: state.discovered.len(),
                total: state.destinations.len(),
            });
        }

        rounds += 1;
        expand_round(catalog, &mut state, config).await?;
        info!(
            round = rounds,
            visited = state.visited.len(),
            found = state.discovered.len(),
            frontier = state.frontier.len(),
            "round complete"
        );
    }

    Ok(SearchReport {
        paths: materialize(&state.discovered),
        artists_visited: state.visited.len(),
        rounds,
        duration_secs: search_timer.elapsed().as_secs_f64(),
    })
}

/// Expands the whole frontier one level: all discography fetches go out
/// together, then album details in batches of [`DETAIL_BATCH_LIMIT`], and
/// the results are merged in a fixed order so "first track wins" is stable
/// for a given set of catalog responses.
async fn expand_round<C: Catalog + ?Sized>(
    catalog: &C,
    state: &mut SearchState,
    config: &SearchConfig,
) -> Result<(), SearchError> {
    let mut expansions: Vec<(ArtistId, Option<Arc<PathLink>>)> = state.frontier.drain().collect();
    expansions.sort_by(|a, b| a.0.cmp(&b.0));

    // Snapshot of everyone expanded in earlier rounds. The adjacency filter
    // runs against this snapshot, not the live set, so two artists expanded
    // in the same round cannot hide a shared album from each other.
    let expanded_before: FxHashSet<ArtistId> = state.visited.clone();

    for (artist_id, link) in &expansions {
        if let Some(link) = link {
            if link.depth() > config.max_depth {
                return Err(depth_exceeded(state, config));
            }
        }
        state.visited.insert(artist_id.clone());
    }

    let discography_fetches: Vec<_> = expansions
        .iter()
        .map(|(artist_id, _)| catalog.artist_albums(artist_id, SEARCH_ALBUM_TYPES))
        .collect();
    let discographies = try_join_all(discography_fetches).await?;

    // Queue albums that can still introduce unexplored collaborators, each
    // tagged with the link that reached the artist being expanded.
    let mut queued: Vec<(AlbumId, Option<Arc<PathLink>>)> = Vec::new();
    for ((artist_id, link), albums) in expansions.iter().zip(discographies) {
        for album in albums {
            if album_already_covered(&album, artist_id, &expanded_before) {
                continue;
            }
            queued.push((album.id, link.clone()));
        }
    }

    let batches: Vec<&[(AlbumId, Option<Arc<PathLink>>)]> =
        queued.chunks(DETAIL_BATCH_LIMIT).collect();
    let detail_fetches: Vec<_> = batches
        .iter()
        .map(|batch| {
            let album_ids: Vec<AlbumId> = batch.iter().map(|(id, _)| id.clone()).collect();
            async move { catalog.album_details(&album_ids).await }
        })
        .collect();
    let details = try_join_all(detail_fetches).await?;

    let mut next_frontier: FxHashMap<ArtistId, Option<Arc<PathLink>>> = FxHashMap::default();

    for (batch, albums) in batches.iter().zip(&details) {
        for ((_, origin), album) in batch.iter().zip(albums.iter()) {
            for track in &album.tracks {
                for credit in &track.artists {
                    if state.destinations.contains_key(&credit.id) {
                        if state.discovered.contains_key(&credit.id) {
                            continue;
                        }
                        let link = PathLink::extend(origin.as_ref(), track.id.clone());
                        if link.depth() > config.max_depth {
                            return Err(depth_exceeded(state, config));
                        }
                        info!(artist = %credit.name, depth = link.depth(), "destination reached");
                        state.discovered.insert(credit.id.clone(), link);
                        if state.all_found() {
                            // Remaining albums in the round are irrelevant.
                            return Ok(());
                        }
                    } else if !state.visited.contains(&credit.id)
                        && !next_frontier.contains_key(&credit.id)
                    {
                        let link = PathLink::extend(origin.as_ref(), track.id.clone());
                        debug!(artist = %credit.name, depth = link.depth(), "frontier grew");
                        next_frontier.insert(credit.id.clone(), Some(link));
                    }
                }
            }
        }
    }

    state.frontier = next_frontier;
    Ok(())
}

/// An album whose credits include an artist already expanded in an earlier
/// round was reachable through that artist; re-reading it can only rediscover
/// closed territory.
fn album_already_covered(
    album: &Album,
    expanding: &ArtistId,
    expanded_before: &FxHashSet<ArtistId>,
) -> bool {
    album
        .artists
        .iter()
        .any(|credit| credit.id != *expanding && expanded_before.contains(&credit.id))
}

fn depth_exceeded(state: &SearchState, config: &SearchConfig) -> SearchError {
    SearchError::DepthExceeded {
        max_depth: config.max_depth,
        found: state.discovered.len(),
        total: state.destinations.len(),
    }
}
