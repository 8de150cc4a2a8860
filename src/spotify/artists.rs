use crate::{
    error::SpotifyResult,
    spotify::SpotifyClient,
    types::{ArtistCandidate, ArtistObject, SearchResponse, TopTracksResponse, TrackSummary},
    utils,
};

/// Searches for artists tagged with a genre.
///
/// Issues a single `GET /search` with `type=artist` and returns every
/// well-formed candidate of the first page. No further pages are requested.
///
/// # Arguments
///
/// * `client` - Authorized Spotify client
/// * `genre` - Genre name, e.g. `"jazz"` or `"hip hop"`
/// * `limit` - Maximum number of artists to return (1-50)
///
/// # Returns
///
/// - `Ok(Vec<ArtistCandidate>)` - Candidates of the page, possibly empty
/// - `Err(SpotifyError)` - Transport error, error status, or a response
///   without the `artists.items` structure
///
/// # Example
///
/// ```
/// let candidates = search_by_genre(&client, "jazz", 50).await?;
/// println!("{} jazz artists", candidates.len());
/// ```
pub async fn search_by_genre(
    client: &SpotifyClient,
    genre: &str,
    limit: u32,
) -> SpotifyResult<Vec<ArtistCandidate>> {
    let query = utils::genre_query(genre);
    let limit = limit.clamp(1, 50).to_string();

    let response: SearchResponse = client
        .get_json(
            "/search",
            &[("q", query.as_str()), ("type", "artist"), ("limit", limit.as_str())],
        )
        .await?;

    Ok(response.into_candidates()?)
}

/// Retrieves an artist's top tracks in a market.
///
/// The list is ordered by Spotify's own popularity ranking, so the first
/// entry is the artist's most popular track. An artist without tracks in the
/// market yields an empty list.
pub async fn get_top_tracks(
    client: &SpotifyClient,
    artist_id: &str,
    market: &str,
) -> SpotifyResult<Vec<TrackSummary>> {
    let path = format!("/artists/{artist_id}/top-tracks");
    let response: TopTracksResponse = client.get_json(&path, &[("market", market)]).await?;

    Ok(response.into_summaries()?)
}

/// Retrieves a single artist by id.
pub async fn get_artist(client: &SpotifyClient, artist_id: &str) -> SpotifyResult<ArtistCandidate> {
    let path = format!("/artists/{artist_id}");
    let response: ArtistObject = client.get_json(&path, &[]).await?;

    Ok(response.validate()?)
}
