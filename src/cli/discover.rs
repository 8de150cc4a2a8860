use std::path::PathBuf;

use rand::{SeedableRng, rngs::StdRng};
use tabled::Table;

use crate::{
    cli, config, discovery, error, info, management::OutputManager, success, utils, warning,
};

/// Discovers one random artist per genre and writes the output document.
///
/// # Arguments
///
/// * `count` - Number of genres to pick from the built-in catalog
/// * `genres` - Explicit genres; when given, `count` is ignored
/// * `market` - Market for top tracks, defaults to `SPOTIFY_MARKET`
/// * `output` - Output file, defaults to `GENRESCOUT_OUTPUT`
/// * `seed` - Seed for genre selection and artist picks; a fresh OS seed is
///   used when absent
///
/// # Error Handling
///
/// Failing to obtain an access token or to write the output file ends the
/// program. Genres that yield no artist are reported and skipped. Without
/// any genre no token is requested and an empty document is written.
pub async fn discover(
    count: usize,
    genres: Vec<String>,
    market: Option<String>,
    output: Option<PathBuf>,
    seed: Option<u64>,
) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let selected = discovery::resolve_genres(count, &genres, &mut rng);

    let results = if selected.is_empty() {
        warning!("No genres to search for.");
        Vec::new()
    } else {
        info!("Selected genres: {}", selected.join(", "));

        let client = cli::authorize().await;
        let market = market.unwrap_or_else(config::spotify_market);
        let pb = cli::progress(selected.len() as u64);
        let results = discovery::run(&client, &selected, &market, &mut rng, &pb).await;
        pb.finish_and_clear();
        results
    };

    let path = output.unwrap_or_else(config::output_file);
    let manager = OutputManager::new(&path, Some(results));
    if let Err(e) = manager.persist().await {
        error!("Failed to write output document: {}", e);
    }

    if manager.count() > 0 {
        let table = Table::new(utils::artist_table_rows(manager.results()));
        println!("{table}");
    } else if !selected.is_empty() {
        warning!("No artists found for the selected genres.");
    }

    success!(
        "Wrote {} artists to {}",
        manager.count(),
        manager.path().display()
    );
}
