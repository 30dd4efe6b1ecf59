use thiserror::Error;

/// Failures surfaced by a catalog client. The client applies its own retry
/// policy before returning any of these; the search engine never retries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Http(String),

    #[error("malformed catalog response: {0}")]
    Decode(String),

    #[error("catalog service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("no artist found matching \"{0}\"")]
    NotFound(String),
}

/// Terminal outcomes of a search run. `found`/`total` distinguish
/// "found 0 of N" from "found k of N then failed".
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("exhausted options after {artists_visited} artists ({found}/{total} destinations found)")]
    Exhausted {
        artists_visited: usize,
        found: usize,
        total: usize,
    },

    #[error("depth exceeded maximum of {max_depth} ({found}/{total} destinations found)")]
    DepthExceeded {
        max_depth: u32,
        found: usize,
        total: usize,
    },
}
