use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Upper bound on album ids per detail lookup, imposed by the catalog service.
pub const DETAIL_BATCH_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(pub String);

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ArtistId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for TrackId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<&str> for AlbumId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
}

/// Album as listed in a discography: credits only, no tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDetail {
    pub id: AlbumId,
    pub name: String,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
    AppearsOn,
}

impl AlbumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Single => "single",
            Self::Compilation => "compilation",
            Self::AppearsOn => "appears_on",
        }
    }
}

/// Read side of the catalog service. Implementations own pagination and
/// retries; callers see complete result sets and terminal errors only.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolves an artist name to the catalog's best match.
    async fn resolve_artist(&self, name: &str) -> Result<Artist, CatalogError>;

    /// Complete discography for an artist, limited to the given album types.
    async fn artist_albums(
        &self,
        artist: &ArtistId,
        album_types: &[AlbumType],
    ) -> Result<Vec<Album>, CatalogError>;

    /// Track-level detail for up to [`DETAIL_BATCH_LIMIT`] albums, returned
    /// in request order.
    async fn album_details(&self, albums: &[AlbumId]) -> Result<Vec<AlbumDetail>, CatalogError>;
}

/// Write side of the catalog service, consumed by the playlist builder.
#[async_trait]
pub trait PlaylistSink: Send + Sync {
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Playlist, CatalogError>;

    async fn append_tracks(
        &self,
        playlist: &PlaylistId,
        tracks: &[TrackId],
    ) -> Result<(), CatalogError>;
}
