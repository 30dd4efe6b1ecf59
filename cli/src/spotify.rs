use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::warn;

use async_trait::async_trait;
use collabpath_core::{
    Album, AlbumDetail, AlbumId, AlbumType, Artist, ArtistId, Catalog, CatalogError, Playlist,
    PlaylistId, PlaylistSink, Track, TrackId,
};

const API_BASE: &str = "https://api.spotify.com/v1";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const PAGE_LIMIT: &str = "50";
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub artists: Paging<ArtistObject>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumDetailObject {
    pub id: String,
    pub name: String,
    pub tracks: Paging<TrackObject>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumsResponse {
    pub albums: Vec<AlbumDetailObject>,
}

#[derive(Debug, Deserialize)]
pub struct TrackObject {
    // Local tracks carry no catalog id.
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Deserialize)]
pub struct UserObject {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Spotify Web API client. Owns pagination and the retry policy for rate
/// limits; the search engine upstream never retries.
pub struct SpotifyClient {
    http: Client,
    token: String,
    user_id: OnceCell<String>,
}

impl SpotifyClient {
    /// Builds a client from the environment: `SPOTIFY_ACCESS_TOKEN` if set
    /// (required for playlist writes), otherwise a client-credentials token
    /// from `SPOTIFY_CLIENT_ID`/`SPOTIFY_CLIENT_SECRET` (search only).
    pub async fn from_env() -> Result<Self, CatalogError> {
        let http = Client::builder()
            .user_agent(concat!("collabpath/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        if let Ok(token) = env::var("SPOTIFY_ACCESS_TOKEN") {
            return Ok(Self {
                http,
                token,
                user_id: OnceCell::new(),
            });
        }

        let client_id = env::var("SPOTIFY_CLIENT_ID").map_err(|_| {
            CatalogError::Auth(
                "set SPOTIFY_ACCESS_TOKEN, or SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET"
                    .to_owned(),
            )
        })?;
        let client_secret = env::var("SPOTIFY_CLIENT_SECRET").map_err(|_| {
            CatalogError::Auth("SPOTIFY_CLIENT_SECRET must be set alongside SPOTIFY_CLIENT_ID".to_owned())
        })?;

        let response = http
            .post(TOKEN_URL)
            .basic_auth(&client_id, Some(&client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Auth(format!(
                "token request failed with status {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(Self {
            http,
            token: token.access_token,
            user_id: OnceCell::new(),
        })
    }

    async fn send_with_retry(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, CatalogError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let try_request = request
                .try_clone()
                .ok_or_else(|| CatalogError::Http("request is not retryable".to_owned()))?;
            let response = try_request
                .send()
                .await
                .map_err(|e| CatalogError::Http(e.to_string()))?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_ATTEMPTS {
                let wait_secs = response
                    .headers()
                    .get(header::RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(1);
                warn!(seconds = wait_secs, "rate limited, backing off");
                tokio::time::sleep(Duration::from_secs(wait_secs)).await;
                continue;
            }
            if status.is_server_error() && attempt < MAX_ATTEMPTS {
                tokio::time::sleep(Duration::from_millis(500 * u64::from(attempt))).await;
                continue;
            }
            if !status.is_success() {
                return Err(CatalogError::Service {
                    status: status.as_u16(),
                    message: response.text().await.unwrap_or_default(),
                });
            }
            return Ok(response);
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let request = self.http.get(url).bearer_auth(&self.token).query(query);
        let response = self.send_with_retry(request).await?;
        response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, CatalogError> {
        let request = self.http.post(url).bearer_auth(&self.token).json(body);
        let response = self.send_with_retry(request).await?;
        response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    async fn current_user_id(&self) -> Result<&str, CatalogError> {
        self.user_id
            .get_or_try_init(|| async {
                let user: UserObject = self.get_json(&format!("{API_BASE}/me"), &[]).await?;
                Ok(user.id)
            })
            .await
            .map(String::as_str)
    }
}

fn convert_artist(artist: ArtistObject) -> Artist {
    Artist {
        id: ArtistId(artist.id),
        name: artist.name,
    }
}

fn convert_album(album: AlbumObject) -> Album {
    Album {
        id: AlbumId(album.id),
        name: album.name,
        artists: album.artists.into_iter().map(convert_artist).collect(),
    }
}

fn convert_album_detail(album: AlbumDetailObject) -> AlbumDetail {
    AlbumDetail {
        id: AlbumId(album.id),
        name: album.name,
        tracks: album
            .tracks
            .items
            .into_iter()
            .filter_map(|track| {
                track.id.map(|id| Track {
                    id: TrackId(id),
                    name: track.name,
                    artists: track.artists.into_iter().map(convert_artist).collect(),
                })
            })
            .collect(),
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn resolve_artist(&self, name: &str) -> Result<Artist, CatalogError> {
        let response: SearchResponse = self
            .get_json(
                &format!("{API_BASE}/search"),
                &[("q", name), ("type", "artist"), ("limit", "1")],
            )
            .await?;

        response
            .artists
            .items
            .into_iter()
            .next()
            .map(convert_artist)
            .ok_or_else(|| CatalogError::NotFound(name.to_owned()))
    }

    async fn artist_albums(
        &self,
        artist: &ArtistId,
        album_types: &[AlbumType],
    ) -> Result<Vec<Album>, CatalogError> {
        let include_groups = album_types
            .iter()
            .map(AlbumType::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let mut page: Paging<AlbumObject> = self
            .get_json(
                &format!("{API_BASE}/artists/{artist}/albums"),
                &[
                    ("include_groups", include_groups.as_str()),
                    ("limit", PAGE_LIMIT),
                ],
            )
            .await?;

        let mut albums: Vec<Album> = page.items.drain(..).map(convert_album).collect();
        while let Some(next_url) = page.next.take() {
            page = self.get_json(&next_url, &[]).await?;
            albums.extend(page.items.drain(..).map(convert_album));
        }

        Ok(albums)
    }

    async fn album_details(&self, album_ids: &[AlbumId]) -> Result<Vec<AlbumDetail>, CatalogError> {
        if album_ids.is_empty() {
            return Ok(vec![]);
        }

        let ids = album_ids
            .iter()
            .map(|id| id.0.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let mut response: AlbumsResponse = self
            .get_json(&format!("{API_BASE}/albums"), &[("ids", ids.as_str())])
            .await?;

        // Track listings are themselves paginated within each album.
        for album in &mut response.albums {
            while let Some(next_url) = album.tracks.next.take() {
                let page: Paging<TrackObject> = self.get_json(&next_url, &[]).await?;
                album.tracks.items.extend(page.items);
                album.tracks.next = page.next;
            }
        }

        Ok(response
            .albums
            .into_iter()
            .map(convert_album_detail)
            .collect())
    }
}

#[async_trait]
impl PlaylistSink for SpotifyClient {
    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Playlist, CatalogError> {
        let user_id = self.current_user_id().await?;
        let playlist: PlaylistObject = self
            .post_json(
                &format!("{API_BASE}/users/{user_id}/playlists"),
                &serde_json::json!({
                    "name": name,
                    "description": description,
                    "public": false,
                }),
            )
            .await?;

        Ok(Playlist {
            id: PlaylistId(playlist.id),
            name: playlist.name,
            url: playlist.external_urls.spotify,
        })
    }

    async fn append_tracks(
        &self,
        playlist: &PlaylistId,
        tracks: &[TrackId],
    ) -> Result<(), CatalogError> {
        let uris: Vec<String> = tracks
            .iter()
            .map(|track| format!("spotify:track:{track}"))
            .collect();

        let _: serde_json::Value = self
            .post_json(
                &format!("{API_BASE}/playlists/{playlist}/tracks"),
                &serde_json::json!({ "uris": uris }),
            )
            .await?;

        Ok(())
    }
}
