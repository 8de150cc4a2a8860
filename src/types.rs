use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::DecodeError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credential {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Credential {
    /// Value for the `Authorization` header, e.g. `Bearer BQC...`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    pub fn expires_at(&self) -> u64 {
        self.obtained_at + self.expires_in
    }

    pub fn seconds_remaining(&self) -> u64 {
        let now = Utc::now().timestamp() as u64;
        self.expires_at().saturating_sub(now)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

impl TokenResponse {
    pub fn validate(self) -> Result<Credential, DecodeError> {
        let access_token = self
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(DecodeError::MissingField("access_token"))?;

        Ok(Credential {
            access_token,
            token_type: self
                .token_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Bearer".to_string()),
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub followers: Option<Followers>,
    pub images: Option<Vec<Image>>,
    pub external_urls: Option<ExternalUrls>,
}

impl ArtistObject {
    pub fn validate(self) -> Result<ArtistCandidate, DecodeError> {
        let id = self.id.ok_or(DecodeError::MissingField("id"))?;
        let name = self.name.ok_or(DecodeError::MissingField("name"))?;

        Ok(ArtistCandidate {
            id,
            name,
            genres: self.genres.unwrap_or_default(),
            followers: self.followers.and_then(|f| f.total).unwrap_or(0),
            // keeps the provider's order, an image without url stays as ""
            images: self
                .images
                .unwrap_or_default()
                .into_iter()
                .map(|i| i.url.unwrap_or_default())
                .collect(),
            href: self
                .external_urls
                .and_then(|u| u.spotify)
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistPage {
    // search pages may contain `null` entries
    pub items: Option<Vec<Option<ArtistObject>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub artists: Option<ArtistPage>,
}

impl SearchResponse {
    /// Validates the page and returns every well-formed candidate.
    ///
    /// A missing `artists` container or `items` list is an error, an empty
    /// list is not. Items without an id or name are dropped.
    pub fn into_candidates(self) -> Result<Vec<ArtistCandidate>, DecodeError> {
        let page = self.artists.ok_or(DecodeError::MissingField("artists"))?;
        let items = page
            .items
            .ok_or(DecodeError::MissingField("artists.items"))?;

        Ok(items
            .into_iter()
            .flatten()
            .filter_map(|a| a.validate().ok())
            .collect())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimpleArtist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimpleAlbum {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub popularity: Option<u32>,
    pub preview_url: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub artists: Option<Vec<SimpleArtist>>,
    pub album: Option<SimpleAlbum>,
}

impl TrackObject {
    pub fn summarize(self) -> Result<TrackSummary, DecodeError> {
        let name = self.name.ok_or(DecodeError::MissingField("name"))?;
        Ok(TrackSummary {
            name,
            href: self
                .external_urls
                .and_then(|u| u.spotify)
                .unwrap_or_default(),
            preview: self.preview_url,
        })
    }

    pub fn validate(self) -> Result<TrackDetails, DecodeError> {
        let TrackObject {
            id,
            name,
            popularity,
            preview_url,
            external_urls,
            artists,
            album,
        } = self;

        Ok(TrackDetails {
            id: id.ok_or(DecodeError::MissingField("id"))?,
            name: name.ok_or(DecodeError::MissingField("name"))?,
            artists: artists
                .unwrap_or_default()
                .into_iter()
                .filter_map(|a| a.name)
                .collect(),
            album: album.and_then(|a| a.name),
            popularity,
            href: external_urls.and_then(|u| u.spotify).unwrap_or_default(),
            preview: preview_url,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Option<Vec<Option<TrackObject>>>,
}

impl TopTracksResponse {
    /// Tracks in the provider's ranking order, most popular first.
    ///
    /// The list ends at the first entry that is `null` or cannot be
    /// summarized, so index `i` is always the provider's rank `i`. An
    /// unreadable top entry yields an empty list.
    pub fn into_summaries(self) -> Result<Vec<TrackSummary>, DecodeError> {
        let tracks = self.tracks.ok_or(DecodeError::MissingField("tracks"))?;
        Ok(tracks
            .into_iter()
            .map_while(|t| t?.summarize().ok())
            .collect())
    }
}

/// A search result for one genre query. Only lives until one is picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistCandidate {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub images: Vec<String>,
    pub href: String,
}

impl ArtistCandidate {
    /// Url of the first image (Spotify orders them largest first), or an
    /// empty string when there is no image or the first one has no url.
    pub fn primary_image(&self) -> String {
        self.images.first().cloned().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackSummary {
    pub name: String,
    pub href: String,
    pub preview: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistResult {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub image: String,
    pub href: String,
    pub genre: String,
    pub top_track: Option<TrackSummary>,
}

impl ArtistResult {
    pub fn new(candidate: ArtistCandidate, genre: &str, top_track: Option<TrackSummary>) -> Self {
        let image = candidate.primary_image();
        Self {
            id: candidate.id,
            name: candidate.name,
            genres: candidate.genres,
            followers: candidate.followers,
            image,
            href: candidate.href,
            genre: genre.to_string(),
            top_track,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackDetails {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub album: Option<String>,
    pub popularity: Option<u32>,
    pub href: String,
    pub preview: Option<String>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub genre: String,
    pub name: String,
    pub followers: u64,
    pub top_track: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub popularity: String,
    pub link: String,
}
