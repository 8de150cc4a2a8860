use genrescout::error::DecodeError;
use genrescout::types::*;
use serde_json::json;

#[test]
fn test_token_response_defaults() {
    let token: TokenResponse =
        serde_json::from_value(json!({ "access_token": "abc" })).unwrap();
    let credential = token.validate().unwrap();

    assert_eq!(credential.token_type, "Bearer");
    assert_eq!(credential.expires_in, 3600);
    assert_eq!(credential.expires_at(), credential.obtained_at + 3600);
}

#[test]
fn test_token_response_empty_token() {
    let token: TokenResponse =
        serde_json::from_value(json!({ "access_token": "", "token_type": "Bearer" })).unwrap();

    assert!(matches!(
        token.validate(),
        Err(DecodeError::MissingField("access_token"))
    ));
}

#[test]
fn test_credential_seconds_remaining_expired() {
    let credential = Credential {
        access_token: "abc".to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        obtained_at: 0,
    };

    assert_eq!(credential.seconds_remaining(), 0);
}

#[test]
fn test_search_response_missing_containers() {
    let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
    assert!(matches!(
        response.into_candidates(),
        Err(DecodeError::MissingField("artists"))
    ));

    let response: SearchResponse =
        serde_json::from_value(json!({ "artists": { "items": null } })).unwrap();
    assert!(matches!(
        response.into_candidates(),
        Err(DecodeError::MissingField("artists.items"))
    ));
}

#[test]
fn test_search_response_empty_items() {
    let response: SearchResponse =
        serde_json::from_value(json!({ "artists": { "items": [], "total": 0 } })).unwrap();

    assert!(response.into_candidates().unwrap().is_empty());
}

#[test]
fn test_artist_object_optional_fields() {
    let artist: ArtistObject =
        serde_json::from_value(json!({ "id": "a1", "name": "Artist One" })).unwrap();
    let candidate = artist.validate().unwrap();

    assert!(candidate.genres.is_empty());
    assert_eq!(candidate.followers, 0);
    assert_eq!(candidate.primary_image(), "");
    assert_eq!(candidate.href, "");
}

#[test]
fn test_artist_object_images_without_url() {
    let artist: ArtistObject = serde_json::from_value(json!({
        "id": "a1",
        "name": "Artist One",
        "images": [{ "height": 300 }, { "url": "https://i.scdn.co/image/small" }]
    }))
    .unwrap();

    let candidate = artist.validate().unwrap();
    assert_eq!(candidate.images.len(), 2);
    assert_eq!(candidate.primary_image(), "");
}

#[test]
fn test_top_tracks_response() {
    let response: TopTracksResponse = serde_json::from_value(json!({
        "tracks": [
            { "name": "Hit", "external_urls": { "spotify": "https://open.spotify.com/track/1" } },
            { "name": "B-Side" },
            { "id": "no-name" },
            { "name": "Deep Cut" }
        ]
    }))
    .unwrap();

    let tracks = response.into_summaries().unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "Hit");
    assert_eq!(tracks[0].href, "https://open.spotify.com/track/1");
    assert_eq!(tracks[1].name, "B-Side");
    assert_eq!(tracks[1].href, "");

    let response: TopTracksResponse = serde_json::from_value(json!({ "error": {} })).unwrap();
    assert!(response.into_summaries().is_err());
}

#[test]
fn test_top_tracks_unreadable_first_entry() {
    let response: TopTracksResponse = serde_json::from_value(json!({
        "tracks": [{ "id": "top", "popularity": 99 }, { "name": "Deep Cut" }]
    }))
    .unwrap();
    assert!(response.into_summaries().unwrap().is_empty());

    let response: TopTracksResponse =
        serde_json::from_value(json!({ "tracks": [null, { "name": "Deep Cut" }] })).unwrap();
    assert!(response.into_summaries().unwrap().is_empty());
}

#[test]
fn test_artist_result_from_candidate() {
    let candidate = ArtistCandidate {
        id: "a1".to_string(),
        name: "Artist One".to_string(),
        genres: vec!["bebop".to_string()],
        followers: 10,
        images: vec!["https://i.scdn.co/large".to_string(), "https://i.scdn.co/small".to_string()],
        href: "https://open.spotify.com/artist/a1".to_string(),
    };

    let result = ArtistResult::new(candidate, "jazz", None);

    assert_eq!(result.image, "https://i.scdn.co/large");
    assert_eq!(result.genre, "jazz");
    assert_eq!(result.genres, vec!["bebop"]);
    assert!(result.top_track.is_none());
}
