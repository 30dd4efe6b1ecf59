/// Configuration for the collaboration search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum path length in tracks before the run fails with
    /// `DepthExceeded`
    pub max_depth: u32,
}

impl SearchConfig {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 6 }
    }
}
