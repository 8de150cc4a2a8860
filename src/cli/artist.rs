use std::path::PathBuf;

use tabled::Table;

use crate::{
    cli, config, discovery, error,
    management::OutputManager,
    spotify, success,
    types::ArtistResult,
    utils,
};

/// Looks up one artist by id, adds its top track and writes it as a single
/// entry output document.
///
/// The record's `genre` is the artist's first genre tag since there was no
/// genre query.
pub async fn artist(id: String, market: Option<String>, output: Option<PathBuf>) {
    let artist_id = match utils::parse_spotify_id(&id, "artist") {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let client = cli::authorize().await;
    let market = market.unwrap_or_else(config::spotify_market);

    let pb = cli::spinner("Fetching artist...");
    let artist = match spotify::artists::get_artist(&client, &artist_id).await {
        Ok(artist) => artist,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch artist {}: {}", artist_id, e)
        }
    };

    pb.set_message(format!("Fetching top track of {}...", artist.name));
    let track = discovery::top_track(&client, &artist, &market, &pb).await;
    pb.finish_and_clear();

    let genre = artist.genres.first().cloned().unwrap_or_default();
    let result = ArtistResult::new(artist, &genre, track);

    let path = output.unwrap_or_else(config::output_file);
    let manager = OutputManager::new(&path, Some(vec![result]));
    if let Err(e) = manager.persist().await {
        error!("Failed to write output document: {}", e);
    }

    println!("{}", Table::new(utils::artist_table_rows(manager.results())));
    success!("Wrote artist to {}", manager.path().display());
}
