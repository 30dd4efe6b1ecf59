use rustc_hash::FxHashMap;

use collabpath_core::{Artist, ArtistId, CatalogError, Playlist, PlaylistSink, TrackId};

pub const PLAYLIST_DESCRIPTION: &str = "created by collabpath";

/// Builds one playlist per destination from the materialized track
/// sequences, named "<start> to <destination>".
pub async fn build_playlists<S: PlaylistSink + ?Sized>(
    sink: &S,
    start: &Artist,
    destinations: &[Artist],
    paths: &FxHashMap<ArtistId, Vec<TrackId>>,
) -> Result<Vec<Playlist>, CatalogError> {
    let mut playlists = Vec::with_capacity(paths.len());

    for destination in destinations {
        let Some(tracks) = paths.get(&destination.id) else {
            continue;
        };
        let name = format!("{} to {}", start.name, destination.name);
        let playlist = sink.create_playlist(&name, PLAYLIST_DESCRIPTION).await?;
        sink.append_tracks(&playlist.id, tracks).await?;
        playlists.push(playlist);
    }

    Ok(playlists)
}
