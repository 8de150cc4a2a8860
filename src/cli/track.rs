use tabled::Table;

use crate::{cli, config, error, spotify, utils};

pub async fn track(id: String, market: Option<String>) {
    let track_id = match utils::parse_spotify_id(&id, "track") {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let client = cli::authorize().await;
    let market = market.unwrap_or_else(config::spotify_market);

    let pb = cli::spinner("Fetching track...");
    let track = spotify::tracks::get_track(&client, &track_id, Some(&market)).await;
    pb.finish_and_clear();

    match track {
        Ok(track) => {
            println!("{}", Table::new(vec![utils::track_table_row(&track)]));
            if let Some(preview) = &track.preview {
                println!("Preview: {preview}");
            }
        }
        Err(e) => error!("Failed to fetch track {}: {}", track_id, e),
    }
}
