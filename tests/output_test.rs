use genrescout::management::OutputManager;
use genrescout::types::{ArtistResult, TrackSummary};

fn create_test_result(genre: &str, id: &str, track: Option<TrackSummary>) -> ArtistResult {
    ArtistResult {
        id: id.to_string(),
        name: format!("Artist {id}"),
        genres: vec![genre.to_string(), "modern".to_string()],
        followers: 98765,
        image: format!("https://i.scdn.co/image/{id}"),
        href: format!("https://open.spotify.com/artist/{id}"),
        genre: genre.to_string(),
        top_track: track,
    }
}

fn create_test_track(name: &str, preview: Option<&str>) -> TrackSummary {
    TrackSummary {
        name: name.to_string(),
        href: "https://open.spotify.com/track/t1".to_string(),
        preview: preview.map(str::to_string),
    }
}

#[tokio::test]
async fn test_persist_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spotify_data.json");

    let results = vec![
        create_test_result("jazz", "a1", Some(create_test_track("So What", Some("https://p.scdn.co/1")))),
        create_test_result("r&b", "a2", None),
    ];

    let manager = OutputManager::new(&path, Some(results.clone()));
    manager.persist().await.unwrap();

    let loaded = OutputManager::load(&path).await.unwrap();
    assert_eq!(loaded.results(), results.as_slice());
    assert_eq!(loaded.count(), 2);
}

#[tokio::test]
async fn test_persist_pretty_prints_with_two_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spotify_data.json");

    let manager = OutputManager::new(&path, Some(vec![create_test_result("jazz", "a1", None)]));
    manager.persist().await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("[\n  {\n    \"id\": \"a1\""));
    assert!(content.contains("\"genre\": \"jazz\""));

    // A missing top track is written as null
    assert!(content.contains("\"top_track\": null"));
}

#[tokio::test]
async fn test_persist_overwrites_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spotify_data.json");

    let mut manager = OutputManager::new(&path, None);
    manager
        .add_result(create_test_result("jazz", "a1", None))
        .add_result(create_test_result("soul", "a2", None));
    manager.persist().await.unwrap();

    OutputManager::new(&path, Some(vec![create_test_result("folk", "a3", None)]))
        .persist()
        .await
        .unwrap();

    let loaded = OutputManager::load(&path).await.unwrap();
    assert_eq!(loaded.count(), 1);
    assert_eq!(loaded.results()[0].genre, "folk");
}

#[tokio::test]
async fn test_persist_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/spotify_data.json");

    OutputManager::new(&path, None).persist().await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[]");
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = OutputManager::load(dir.path().join("missing.json")).await;

    let err = result.err().unwrap();
    assert!(err.to_string().contains("missing.json"));
}
