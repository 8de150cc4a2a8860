//! Spotify Genre Discovery CLI Library
//!
//! This library picks a handful of music genres at random, finds one random
//! Spotify artist for each of them, enriches every artist with its most
//! popular track and writes the result to a JSON file.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `discovery` - Genre selection, artist discovery and track enrichment
//! - `error` - Error types for Spotify API communication
//! - `management` - Output document persistence
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use genrescout::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> genrescout::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI facing helpers where the concrete error kind does not
/// matter anymore and only its message is shown to the user.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Selected genres: {}", genres.join(", "));
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {} artists to {}", count, path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal conditions in the CLI layer, e.g. when no access
/// token can be obtained or the output file cannot be written. Library code
/// returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to obtain access token: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a genre that yielded no artist.
///
/// # Example
///
/// ```
/// warning!("No artists found for genre: {}", genre);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
