//! # Spotify Integration Module
//!
//! This module is the integration layer between genrescout and the Spotify
//! Web API. It handles the HTTP communication and turns responses into the
//! typed records of [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Discovery pipeline (genre selection, random pick, enrichment)
//!     ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials grant)
//!     ├── Artist Operations (search, lookup, top tracks)
//!     └── Track Operations (lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Authentication
//!
//! [`auth`] exchanges the application's client id and secret for an access
//! token. The token is requested once per run and not refreshed; it is valid
//! for an hour which is far longer than a run takes.
//!
//! ## Error Handling
//!
//! Every call returns a [`SpotifyResult`]. Whether a failure is fatal is
//! decided by the caller: a failed token exchange ends the run, a failed
//! search only skips the genre it was made for.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials exchange
//! - `GET /search?type=artist` - artists by genre
//! - `GET /artists/{id}` - single artist
//! - `GET /artists/{id}/top-tracks` - an artist's most popular tracks
//! - `GET /tracks/{id}` - single track

pub mod artists;
pub mod auth;
pub mod tracks;

use std::fmt;

use reqwest::{Client, Response, header::AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::{
    error::{DecodeError, SpotifyError, SpotifyResult},
    types::{ArtistCandidate, Credential, TrackSummary},
};

/// Page size used for genre searches.
pub const SEARCH_LIMIT: u32 = 50;

/// The catalog operations the discovery pipeline depends on.
///
/// [`SpotifyClient`] implements it against the Web API; tests use in-memory
/// catalogs.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// One page of artists tagged with `genre`.
    async fn search_artists(&self, genre: &str, limit: u32) -> SpotifyResult<Vec<ArtistCandidate>>;

    /// An artist's top tracks in `market`, most popular first.
    async fn top_tracks(&self, artist_id: &str, market: &str) -> SpotifyResult<Vec<TrackSummary>>;
}

/// Authorized client for the Spotify Web API.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    credential: Credential,
}

impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("api_url", &self.api_url)
            .field("token_type", &self.credential.token_type)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, credential: Credential) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            credential,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> SpotifyResult<T> {
        let url = format!("{uri}{path}", uri = self.api_url, path = path);
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.credential.authorization())
            .query(query)
            .send()
            .await?;

        decode(response).await
    }
}

impl Catalog for SpotifyClient {
    async fn search_artists(&self, genre: &str, limit: u32) -> SpotifyResult<Vec<ArtistCandidate>> {
        artists::search_by_genre(self, genre, limit).await
    }

    async fn top_tracks(&self, artist_id: &str, market: &str) -> SpotifyResult<Vec<TrackSummary>> {
        artists::get_top_tracks(self, artist_id, market).await
    }
}

/// Checks the status and decodes the body of a response.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> SpotifyResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(SpotifyError::Status { status, body });
    }

    serde_json::from_str::<T>(&body).map_err(|e| SpotifyError::Decode(DecodeError::Json(e)))
}
