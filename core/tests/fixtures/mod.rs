use async_trait::async_trait;
use collabpath_core::{
    Album, AlbumDetail, AlbumId, AlbumType, Artist, ArtistId, Catalog, CatalogError, Track,
    TrackId,
};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

pub fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: ArtistId::from(id),
        name: name.to_owned(),
    }
}

pub fn track(id: &str, name: &str, credits: &[&Artist]) -> Track {
    Track {
        id: TrackId::from(id),
        name: name.to_owned(),
        artists: credits.iter().map(|&a| a.clone()).collect(),
    }
}

/// In-memory catalog: albums registered once appear in every credited
/// artist's discography, in registration order. Detail lookups record the
/// size of each batch call for assertions.
pub struct MockCatalog {
    artists: FxHashMap<String, Artist>,
    discographies: FxHashMap<ArtistId, Vec<Album>>,
    details: FxHashMap<AlbumId, AlbumDetail>,
    pub detail_batches: Mutex<Vec<usize>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            artists: FxHashMap::default(),
            discographies: FxHashMap::default(),
            details: FxHashMap::default(),
            detail_batches: Mutex::new(Vec::new()),
        }
    }

    pub fn with_album(
        self,
        id: &str,
        name: &str,
        credits: &[&Artist],
        tracks: Vec<Track>,
    ) -> Self {
        self.with_album_for(credits, id, name, credits, tracks)
    }

    /// Registers an album into `owners`' discographies only, while crediting
    /// `credits`. Mirrors catalog listings where a credited artist does not
    /// carry the album in their own discography (appears-on style credits).
    pub fn with_album_for(
        mut self,
        owners: &[&Artist],
        id: &str,
        name: &str,
        credits: &[&Artist],
        tracks: Vec<Track>,
    ) -> Self {
        let album_id = AlbumId::from(id);
        let album = Album {
            id: album_id.clone(),
            name: name.to_owned(),
            artists: credits.iter().map(|&a| a.clone()).collect(),
        };

        for credit in credits {
            self.artists
                .insert(credit.name.clone(), (*credit).clone());
        }
        for owner in owners {
            self.discographies
                .entry(owner.id.clone())
                .or_default()
                .push(album.clone());
        }

        self.details.insert(
            album_id.clone(),
            AlbumDetail {
                id: album_id,
                name: name.to_owned(),
                tracks,
            },
        );
        self
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.detail_batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn resolve_artist(&self, name: &str) -> Result<Artist, CatalogError> {
        self.artists
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))
    }

    async fn artist_albums(
        &self,
        artist: &ArtistId,
        _album_types: &[AlbumType],
    ) -> Result<Vec<Album>, CatalogError> {
        Ok(self.discographies.get(artist).cloned().unwrap_or_default())
    }

    async fn album_details(&self, albums: &[AlbumId]) -> Result<Vec<AlbumDetail>, CatalogError> {
        self.detail_batches.lock().unwrap().push(albums.len());
        albums
            .iter()
            .map(|id| {
                self.details
                    .get(id)
                    .cloned()
                    .ok_or_else(|| CatalogError::NotFound(id.to_string()))
            })
            .collect()
    }
}
