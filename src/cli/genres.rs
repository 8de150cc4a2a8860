use crate::{discovery::GENRES, info};

pub fn genres() {
    info!("{} built-in genres:", GENRES.len());
    for genre in GENRES {
        println!("  {genre}");
    }
}
