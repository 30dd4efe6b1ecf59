use clap::Parser;
use tracing_subscriber::EnvFilter;

use collabpath::args::Args;
use collabpath::colors::ColorScheme;
use collabpath::display;
use collabpath::playlist::build_playlists;
use collabpath::spotify::SpotifyClient;
use collabpath_core::{Artist, Catalog, SearchConfig, run_search};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    let client = match SpotifyClient::from_env().await {
        Ok(client) => client,
        Err(error) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error);
            std::process::exit(1);
        }
    };

    let (start, destinations) = match resolve_artists(&client, &args).await {
        Ok(resolved) => resolved,
        Err(error) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error);
            std::process::exit(1);
        }
    };

    display::display_search_info(&start, &destinations, &args, &colors);

    let config = SearchConfig::new(args.max_depth);
    let report = match run_search(&client, &start, destinations.clone(), &config).await {
        Ok(report) => report,
        Err(error) => {
            display::display_failure(&error, &colors);
            std::process::exit(1);
        }
    };

    display::display_report(&report, &destinations, &colors);

    if !args.no_playlists {
        match build_playlists(&client, &start, &destinations, &report.paths).await {
            Ok(playlists) => display::display_playlists(&playlists, &colors),
            Err(error) => {
                eprintln!("{} {}", colors.error("❌ Playlist creation failed:"), error);
                std::process::exit(1);
            }
        }
    }
}

async fn resolve_artists(
    client: &SpotifyClient,
    args: &Args,
) -> Result<(Artist, Vec<Artist>), collabpath_core::CatalogError> {
    let start = client.resolve_artist(&args.start).await?;

    let mut destinations = Vec::with_capacity(args.destinations.len());
    for name in &args.destinations {
        destinations.push(client.resolve_artist(name).await?);
    }

    Ok((start, destinations))
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "collabpath=debug,collabpath_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}
