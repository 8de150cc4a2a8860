//! # CLI Module
//!
//! This module provides the command-line interface layer for genrescout. It
//! implements the user-facing commands and coordinates between the Spotify
//! client, the discovery pipeline and the output document.
//!
//! ## Commands
//!
//! - [`discover`] - Picks random genres, finds one random artist per genre,
//!   adds the artist's top track and writes everything to a JSON file
//! - [`artist`] - Looks up a single artist by id or share link
//! - [`track`] - Looks up a single track by id or share link
//! - [`genres`] - Lists the built-in genre catalog
//! - [`auth`] - Checks that the configured credentials yield a token
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Discovery Layer (genre selection, random pick, enrichment)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal**: no access token, or the output file cannot be written. The
//!   program prints the reason and exits with status 1.
//! - **Recoverable**: a genre without artists or an artist without a top
//!   track. A warning is printed and the run continues.
//!
//! ## Usage Patterns
//!
//! ```bash
//! genrescout auth                               # Check credentials
//! genrescout discover                           # Three random genres
//! genrescout discover --count 5 --seed 42       # Reproducible picks
//! genrescout discover --genre jazz --genre soul # Explicit genres
//! genrescout track 2plbrEY59IikOBgBGLjaoe       # Single track
//! ```

mod artist;
mod auth;
mod discover;
mod genres;
mod track;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use artist::artist;
pub use auth::auth;
pub use auth::authorize;
pub use discover::discover;
pub use genres::genres;
pub use track::track;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Spinner for a single long-running request.
pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars(TICK_CHARS));
    }
    pb
}

/// Progress indicator for `len` units of work.
pub(crate) fn progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}") {
        pb.set_style(style.tick_chars(TICK_CHARS));
    }
    pb
}
