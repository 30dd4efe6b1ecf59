pub mod catalog;
pub mod config;
pub mod error;
pub mod link;
pub mod materialize;
pub mod search;

// Re-export commonly used items
pub use catalog::{
    Album, AlbumDetail, AlbumId, AlbumType, Artist, ArtistId, Catalog, DETAIL_BATCH_LIMIT,
    Playlist, PlaylistId, PlaylistSink, Track, TrackId,
};
pub use config::SearchConfig;
pub use error::{CatalogError, SearchError};
pub use link::PathLink;
pub use materialize::materialize;
pub use search::{SearchReport, run_search};
