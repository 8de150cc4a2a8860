use std::time::Duration;

use crate::{cli, error, spotify, spotify::SpotifyClient, success};

/// Obtains an access token and returns an authorized client.
///
/// Without a token nothing else can run, so any failure ends the program.
pub async fn authorize() -> SpotifyClient {
    let pb = cli::spinner("Requesting access token...");
    let client = spotify::auth::authorize().await;
    pb.finish_and_clear();

    match client {
        Ok(client) => client,
        Err(e) => error!("Failed to obtain access token: {}", e),
    }
}

pub async fn auth() {
    let client = authorize().await;
    let credential = client.credential();
    let remaining = Duration::from_secs(credential.seconds_remaining());

    success!(
        "Authentication successful! {} token valid for {} minutes.",
        credential.token_type,
        remaining.as_secs() / 60
    );
}
