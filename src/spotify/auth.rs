use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config,
    error::{SpotifyError, SpotifyResult},
    spotify::{SpotifyClient, decode},
    types::{Credential, TokenResponse},
    utils,
};

/// Exchanges the application's client id and secret for an access token.
///
/// Uses the OAuth 2.0 client credentials grant: the id and secret are sent
/// base64 encoded in a `Basic` authorization header and the url encoded form
/// body only carries `grant_type=client_credentials`. Tokens obtained this way cannot
/// access user data but are enough for catalog lookups.
///
/// # Arguments
///
/// * `http` - HTTP client used for the request
/// * `token_url` - Token endpoint, usually `https://accounts.spotify.com/api/token`
/// * `client_id` - Client id of the registered Spotify application
/// * `client_secret` - Client secret of the registered Spotify application
///
/// # Errors
///
/// - `SpotifyError::Http` when the endpoint cannot be reached
/// - `SpotifyError::Status` when the credentials are rejected
/// - `SpotifyError::Decode` when the response carries no access token
///
/// # Example
///
/// ```
/// let credential = request_token(&Client::new(), TOKEN_URL, "id", "secret").await?;
/// println!("Token expires in {} seconds", credential.expires_in);
/// ```
pub async fn request_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> SpotifyResult<Credential> {
    let response = http
        .post(token_url)
        .header(AUTHORIZATION, utils::basic_auth_header(client_id, client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let token: TokenResponse = decode(response).await?;
    Ok(token.validate()?)
}

/// Reads the credentials from the environment, requests a token and returns
/// a client bound to it.
///
/// # Errors
///
/// Returns `SpotifyError::MissingCredentials` when `SPOTIFY_CLIENT_ID` or
/// `SPOTIFY_CLIENT_SECRET` is not configured, otherwise the errors of
/// [`request_token`].
pub async fn authorize() -> SpotifyResult<SpotifyClient> {
    let client_id = config::spotify_client_id()?;
    let client_secret = config::spotify_client_secret()?;

    let http = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(SpotifyError::Http)?;

    let credential = request_token(
        &http,
        &config::spotify_apitoken_url(),
        &client_id,
        &client_secret,
    )
    .await?;

    Ok(SpotifyClient::new(http, config::spotify_apiurl(), credential))
}
