use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use genrescout::{cli, config, discovery, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check the configured client credentials
    Auth,

    /// Discover one random artist per genre
    Discover(DiscoverOptions),

    /// Look up an artist by id or share link
    Artist(ArtistOptions),

    /// Look up a track by id or share link
    Track(TrackOptions),

    /// List the built-in genres
    Genres,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct DiscoverOptions {
    /// Number of random genres to pick
    #[clap(long, short, default_value_t = discovery::DEFAULT_GENRE_COUNT)]
    pub count: usize,

    /// Search these genres instead of random ones; can be repeated
    #[clap(long = "genre", short = 'g')]
    pub genres: Vec<String>,

    /// Market used to rank top tracks (e.g. US, DE)
    #[clap(long)]
    pub market: Option<String>,

    /// Output file
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible picks
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist id, spotify:artist uri or open.spotify.com link
    pub id: String,

    /// Market used to rank top tracks
    #[clap(long)]
    pub market: Option<String>,

    /// Output file
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Track id, spotify:track uri or open.spotify.com link
    pub id: String,

    /// Market the track is looked up in
    #[clap(long)]
    pub market: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Discover(opt) => {
            cli::discover(opt.count, opt.genres, opt.market, opt.output, opt.seed).await
        }
        Command::Artist(opt) => cli::artist(opt.id, opt.market, opt.output).await,
        Command::Track(opt) => cli::track(opt.id, opt.market).await,
        Command::Genres => cli::genres(),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
