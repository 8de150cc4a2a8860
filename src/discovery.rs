//! Genre based artist discovery.
//!
//! The pipeline picks a few genres from [`GENRES`], searches one page of
//! artists for each of them, picks one artist at random and adds that
//! artist's most popular track. Genres are handled one after another and the
//! results keep the order in which the genres were processed.
//!
//! Failures of a single genre or artist are logged and skipped; only the
//! caller decides about fatal errors.

use indicatif::ProgressBar;
use rand::{Rng, seq::SliceRandom};

use crate::{
    spotify::{Catalog, SEARCH_LIMIT},
    types::{ArtistCandidate, ArtistResult, TrackSummary},
    warning,
};

/// Built-in genre catalog.
pub const GENRES: [&str; 23] = [
    "pop",
    "hip hop",
    "rap",
    "r&b",
    "rock",
    "alternative",
    "indie",
    "country",
    "jazz",
    "classical",
    "metal",
    "edm",
    "dance",
    "house",
    "techno",
    "folk",
    "soul",
    "punk",
    "blues",
    "reggae",
    "latin",
    "k-pop",
    "j-pop",
];

/// Default number of genres per run.
pub const DEFAULT_GENRE_COUNT: usize = 3;

/// Picks `count` distinct genres from `catalog` in random order.
///
/// The catalog is shuffled and the first `count` entries are taken, a count
/// larger than the catalog returns all of it. Duplicate catalog entries are
/// only returned once.
pub fn select_genres<R: Rng>(catalog: &[&str], count: usize, rng: &mut R) -> Vec<String> {
    let mut genres = dedup_genres(catalog.iter().copied());
    genres.shuffle(rng);
    genres.truncate(count);
    genres
}

/// Genres for one run: the explicit ones when given, otherwise `count`
/// random picks from [`GENRES`].
///
/// The result may be empty, e.g. for a count of zero.
pub fn resolve_genres<R: Rng>(count: usize, explicit: &[String], rng: &mut R) -> Vec<String> {
    if explicit.is_empty() {
        select_genres(&GENRES, count, rng)
    } else {
        dedup_genres(explicit.iter().map(String::as_str))
    }
}

/// Trims genre names and drops empty and repeated ones, keeping the order.
pub fn dedup_genres<'a, I>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for genre in genres {
        let genre = genre.trim().to_lowercase();
        if !genre.is_empty() && !seen.contains(&genre) {
            seen.push(genre);
        }
    }
    seen
}

/// Takes one element uniformly at random, `None` for an empty list.
pub fn pick_candidate<T, R: Rng>(mut items: Vec<T>, rng: &mut R) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.random_range(0..items.len());
    Some(items.swap_remove(index))
}

/// Finds one random artist for a genre.
///
/// Returns `None` if the search page is empty, malformed or the request
/// failed. The reason is logged as a warning.
pub async fn discover_artist<C, R>(
    catalog: &C,
    genre: &str,
    rng: &mut R,
    progress: &ProgressBar,
) -> Option<ArtistCandidate>
where
    C: Catalog,
    R: Rng,
{
    match catalog.search_artists(genre, SEARCH_LIMIT).await {
        Ok(candidates) if candidates.is_empty() => {
            progress.suspend(|| warning!("No artists found for genre: {}", genre));
            None
        }
        Ok(candidates) => pick_candidate(candidates, rng),
        Err(e) if e.is_decode() => {
            progress.suspend(|| warning!("No artists found for genre: {} ({})", genre, e));
            None
        }
        Err(e) => {
            progress.suspend(|| warning!("Artist search for genre {} failed: {}", genre, e));
            None
        }
    }
}

/// Fetches the most popular track of an artist.
///
/// Returns `None` if the artist has no tracks in `market` or the lookup
/// failed. A missing track never invalidates the artist.
pub async fn top_track<C: Catalog>(
    catalog: &C,
    artist: &ArtistCandidate,
    market: &str,
    progress: &ProgressBar,
) -> Option<TrackSummary> {
    match catalog.top_tracks(&artist.id, market).await {
        Ok(tracks) => tracks.into_iter().next(),
        Err(e) => {
            progress.suspend(|| {
                warning!("Failed to fetch top track for {}: {}", artist.name, e)
            });
            None
        }
    }
}

/// Runs discovery and enrichment for every genre, in order.
///
/// The result holds at most one artist per genre; genres without a result
/// are skipped, not retried.
pub async fn run<C, R>(
    catalog: &C,
    genres: &[String],
    market: &str,
    rng: &mut R,
    progress: &ProgressBar,
) -> Vec<ArtistResult>
where
    C: Catalog,
    R: Rng,
{
    let mut results = Vec::with_capacity(genres.len());

    for genre in genres {
        progress.set_message(format!("Searching artists for genre {genre}..."));
        let Some(artist) = discover_artist(catalog, genre, rng, progress).await else {
            progress.inc(1);
            continue;
        };

        progress.set_message(format!("Fetching top track of {}...", artist.name));
        let track = top_track(catalog, &artist, market, progress).await;
        results.push(ArtistResult::new(artist, genre, track));
        progress.inc(1);
    }

    results
}
