//! Configuration management for the genre discovery CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It covers the Spotify client
//! credentials, the API endpoints and a few runtime defaults.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::SpotifyError;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_OUTPUT_FILE: &str = "spotify_data.json";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// under `genrescout/.env` first and then for a `.env` file in the current
/// working directory. Variables that are already set are never overridden,
/// so values exported in the shell win over both files.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/genrescout/.env`
/// - macOS: `~/Library/Application Support/genrescout/.env`
/// - Windows: `%LOCALAPPDATA%/genrescout/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if one of the
/// files exists but cannot be parsed. Missing files are fine because the
/// credentials may come straight from the environment.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Location of the `.env` file in the local data directory.
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("genrescout/.env");
    path
}

/// Returns the Spotify API client ID.
///
/// # Errors
///
/// Returns `SpotifyError::MissingCredentials` if `SPOTIFY_CLIENT_ID` is unset
/// or empty.
pub fn spotify_client_id() -> Result<String, SpotifyError> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify API client secret.
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Errors
///
/// Returns `SpotifyError::MissingCredentials` if `SPOTIFY_CLIENT_SECRET` is
/// unset or empty.
pub fn spotify_client_secret() -> Result<String, SpotifyError> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Returns the token endpoint used for the client credentials exchange.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the market used to rank top tracks.
pub fn spotify_market() -> String {
    optional("SPOTIFY_MARKET", DEFAULT_MARKET)
}

/// Returns the path of the output document.
pub fn output_file() -> PathBuf {
    PathBuf::from(optional("GENRESCOUT_OUTPUT", DEFAULT_OUTPUT_FILE))
}

fn required(key: &str) -> Result<String, SpotifyError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SpotifyError::MissingCredentials(format!(
            "{key} must be set"
        ))),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
