use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{ArtistResult, ArtistTableRow, TrackDetails, TrackTableRow};

/// Value of the `Authorization` header for the client credentials grant.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{client_id}:{client_secret}"));
    format!("Basic {encoded}")
}

/// Builds the search expression for a genre.
///
/// Multi-word genres are quoted so the search does not split them. Percent
/// encoding happens when the expression is put into the query string.
pub fn genre_query(genre: &str) -> String {
    let genre = genre.trim();
    if genre.chars().any(char::is_whitespace) {
        format!("genre:\"{genre}\"")
    } else {
        format!("genre:{genre}")
    }
}

/// Extracts a Spotify id from a raw id, a `spotify:<kind>:<id>` uri or an
/// `open.spotify.com/<kind>/<id>` link. Share parameters like `?si=...` are
/// stripped.
pub fn parse_spotify_id(input: &str, kind: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("id cannot be empty".to_string());
    }

    let uri_prefix = format!("spotify:{kind}:");
    let path_marker = format!("/{kind}/");

    let raw = if let Some(rest) = trimmed.strip_prefix(&uri_prefix) {
        rest
    } else if let Some(pos) = trimmed.find(&path_marker) {
        &trimmed[pos + path_marker.len()..]
    } else if trimmed.contains("://") || trimmed.starts_with("spotify:") {
        return Err(format!("'{trimmed}' is not a Spotify {kind} link"));
    } else {
        trimmed
    };

    let id = raw
        .split(['?', '#', '/'])
        .next()
        .unwrap_or_default()
        .to_string();

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("invalid {kind} id '{id}'"));
    }

    Ok(id)
}

pub fn artist_table_rows(results: &[ArtistResult]) -> Vec<ArtistTableRow> {
    results
        .iter()
        .map(|r| ArtistTableRow {
            genre: r.genre.clone(),
            name: r.name.clone(),
            followers: r.followers,
            top_track: r
                .top_track
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn track_table_row(track: &TrackDetails) -> TrackTableRow {
    TrackTableRow {
        name: track.name.clone(),
        artists: track.artists.join(", "),
        album: track.album.clone().unwrap_or_else(|| "-".to_string()),
        popularity: track
            .popularity
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string()),
        link: track.href.clone(),
    }
}
