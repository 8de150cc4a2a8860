use crate::{
    error::SpotifyResult,
    spotify::SpotifyClient,
    types::{TrackDetails, TrackObject},
};

/// Retrieves a single track by id.
///
/// # Arguments
///
/// * `client` - Authorized Spotify client
/// * `track_id` - Bare track id, without share parameters
/// * `market` - Optional market; tracks unavailable there come back without
///   a preview
pub async fn get_track(
    client: &SpotifyClient,
    track_id: &str,
    market: Option<&str>,
) -> SpotifyResult<TrackDetails> {
    let path = format!("/tracks/{track_id}");
    let query: Vec<(&str, &str)> = market.map(|m| vec![("market", m)]).unwrap_or_default();
    let response: TrackObject = client.get_json(&path, &query).await?;

    Ok(response.validate()?)
}
