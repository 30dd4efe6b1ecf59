pub mod args;
pub mod colors;
pub mod display;
pub mod playlist;
pub mod spotify;

// Re-export commonly used items
pub use args::Args;
pub use colors::ColorScheme;
pub use playlist::build_playlists;
pub use spotify::SpotifyClient;
