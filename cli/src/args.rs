use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "collabpath")]
#[command(about = "Chain a starting artist to destination artists through shared track credits")]
pub struct Args {
    /// Artist to start from
    pub start: String,

    /// One or more destination artists to reach
    #[arg(required = true)]
    pub destinations: Vec<String>,

    /// Maximum path length in tracks
    #[arg(short = 'd', long, value_name = "DEPTH", default_value = "6")]
    pub max_depth: u32,

    /// Search only, skip playlist creation
    #[arg(long)]
    pub no_playlists: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show per-round search progress
    #[arg(short, long)]
    pub verbose: bool,
}
