use collabpath_core::{Artist, Playlist, SearchError, SearchReport};

use crate::args::Args;
use crate::colors::ColorScheme;

pub fn display_search_info(
    start: &Artist,
    destinations: &[Artist],
    args: &Args,
    colors: &ColorScheme,
) {
    let destination_names = destinations
        .iter()
        .map(|artist| format!("\"{}\"", artist.name))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "🎵 Linking {} to {}",
        colors.artist_name(&format!("\"{}\"", start.name)),
        colors.artist_name(&destination_names)
    );

    if args.max_depth != 6 {
        println!(
            "⚙️  Allowing up to {} tracks per chain",
            colors.number(&args.max_depth.to_string())
        );
    }

    println!("🔍 Searching...");
}

pub fn display_report(report: &SearchReport, destinations: &[Artist], colors: &ColorScheme) {
    println!("\n---\n");

    for destination in destinations {
        let Some(tracks) = report.paths.get(&destination.id) else {
            continue;
        };

        println!(
            "{} {} {} {} tracks:",
            colors.success("✅ Reached"),
            colors.artist_name(&format!("\"{}\"", destination.name)),
            colors.success("through"),
            colors.number(&tracks.len().to_string())
        );

        for (index, track_id) in tracks.iter().enumerate() {
            println!(
                "{} {}",
                colors.step_number(&format!("{:3}.", index + 1)),
                colors.track_id(&track_id.to_string())
            );
        }
        println!();
    }

    println!(
        "📊 Explored {} artists in {} rounds ({:.3} sec)",
        colors.number(&report.artists_visited.to_string()),
        colors.number(&report.rounds.to_string()),
        report.duration_secs
    );
}

pub fn display_failure(error: &SearchError, colors: &ColorScheme) {
    println!("\n---\n");
    println!("{} {}", colors.error("❌ Search failed:"), error);
}

pub fn display_playlists(playlists: &[Playlist], colors: &ColorScheme) {
    println!();
    for playlist in playlists {
        match &playlist.url {
            Some(url) => println!(
                "💾 Saved {} - {}",
                colors.artist_name(&format!("\"{}\"", playlist.name)),
                url
            ),
            None => println!(
                "💾 Saved {}",
                colors.artist_name(&format!("\"{}\"", playlist.name))
            ),
        }
    }
}
