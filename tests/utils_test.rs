use genrescout::types::{ArtistResult, TrackDetails, TrackSummary};
use genrescout::utils::*;

// Helper function to create a test result
fn create_test_result(genre: &str, name: &str, track: Option<&str>) -> ArtistResult {
    ArtistResult {
        id: format!("{}_id", name.to_lowercase()),
        name: name.to_string(),
        genres: vec![genre.to_string()],
        followers: 1200,
        image: String::new(),
        href: format!("https://open.spotify.com/artist/{}", name.to_lowercase()),
        genre: genre.to_string(),
        top_track: track.map(|t| TrackSummary {
            name: t.to_string(),
            href: "https://open.spotify.com/track/abc".to_string(),
            preview: None,
        }),
    }
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
    assert_eq!(
        basic_auth_header("client-id", "client-secret"),
        "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ="
    );
}

#[test]
fn test_genre_query() {
    assert_eq!(genre_query("jazz"), "genre:jazz");
    assert_eq!(genre_query("  k-pop "), "genre:k-pop");
    assert_eq!(genre_query("r&b"), "genre:r&b");

    // Multi-word genres are quoted
    assert_eq!(genre_query("hip hop"), "genre:\"hip hop\"");
}

#[test]
fn test_parse_spotify_id_plain() {
    assert_eq!(
        parse_spotify_id("2plbrEY59IikOBgBGLjaoe", "track").unwrap(),
        "2plbrEY59IikOBgBGLjaoe"
    );

    // Share parameters are stripped
    assert_eq!(
        parse_spotify_id("2plbrEY59IikOBgBGLjaoe?si=8fbdac58be9c4b91", "track").unwrap(),
        "2plbrEY59IikOBgBGLjaoe"
    );
}

#[test]
fn test_parse_spotify_id_links() {
    assert_eq!(
        parse_spotify_id(
            "https://open.spotify.com/track/2plbrEY59IikOBgBGLjaoe?si=8fbdac58be9c4b91",
            "track"
        )
        .unwrap(),
        "2plbrEY59IikOBgBGLjaoe"
    );

    assert_eq!(
        parse_spotify_id("spotify:artist:0TnOYISbd1XYRBk9myaseg", "artist").unwrap(),
        "0TnOYISbd1XYRBk9myaseg"
    );

    assert_eq!(
        parse_spotify_id("https://open.spotify.com/intl-de/artist/0TnOYISbd1XYRBk9myaseg", "artist")
            .unwrap(),
        "0TnOYISbd1XYRBk9myaseg"
    );
}

#[test]
fn test_parse_spotify_id_invalid() {
    let result = parse_spotify_id("   ", "track");
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Link for the wrong kind
    let result = parse_spotify_id("https://open.spotify.com/album/1DFixLWuPkv3KT3TnV35m3", "track");
    assert!(result.unwrap_err().contains("not a Spotify track link"));

    let result = parse_spotify_id("not an id", "artist");
    assert!(result.unwrap_err().contains("invalid artist id"));
}

#[test]
fn test_artist_table_rows() {
    let results = vec![
        create_test_result("jazz", "Artist A", Some("Track A")),
        create_test_result("rock", "Artist B", None),
    ];

    let rows = artist_table_rows(&results);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].genre, "jazz");
    assert_eq!(rows[0].top_track, "Track A");
    assert_eq!(rows[1].name, "Artist B");
    assert_eq!(rows[1].top_track, "-");
}

#[test]
fn test_track_table_row() {
    let track = TrackDetails {
        id: "abc".to_string(),
        name: "Song".to_string(),
        artists: vec!["Artist A".to_string(), "Artist B".to_string()],
        album: None,
        popularity: Some(71),
        href: "https://open.spotify.com/track/abc".to_string(),
        preview: None,
    };

    let row = track_table_row(&track);

    assert_eq!(row.artists, "Artist A, Artist B");
    assert_eq!(row.album, "-");
    assert_eq!(row.popularity, "71");
}
