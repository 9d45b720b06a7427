use clap::{ArgAction, Parser, Subcommand};
use commands::{add, config, delete, edit, list, search, stats};
use journal_models::SortOrder;
use std::path::PathBuf;

mod commands;
mod context;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "reellog")]
#[command(about = "reellog - Keep a journal of the movies you've watched")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Also write logs to this file (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a new review
    #[command(long_about = "Write a new review. With --query, searches the movie catalog and fills in title, director, year, poster and genres from the chosen result. Without it, enter the movie details by hand with --title and --director.")]
    Add {
        #[command(flatten)]
        fields: edit::ReviewFields,

        /// Search the catalog for this title
        #[arg(long, short = 's', value_name = "TITLE")]
        query: Option<String>,

        /// Pick the Nth search result (1-based) instead of choosing interactively
        #[arg(long, value_name = "N", requires = "query")]
        pick: Option<usize>,
    },
    /// Change an existing review
    #[command(long_about = "Change an existing review. Only the given fields are replaced; use --query to re-select the movie from the catalog. IDs may be abbreviated to any unique prefix.")]
    Edit {
        /// Review ID (or unique prefix)
        id: String,

        #[command(flatten)]
        fields: edit::ReviewFields,

        /// Re-select the movie from the catalog
        #[arg(long, short = 's', value_name = "TITLE")]
        query: Option<String>,

        /// Pick the Nth search result (1-based)
        #[arg(long, value_name = "N", requires = "query")]
        pick: Option<usize>,
    },
    /// Delete a review
    Delete {
        /// Review ID (or unique prefix)
        id: String,

        /// Don't ask for confirmation
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// List reviews
    List {
        /// Sort order: latest, oldest, rating-high, rating-low
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Only reviews tagged with this genre
        #[arg(long)]
        genre: Option<String>,

        /// Only reviews whose title contains this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one review in full
    Show {
        /// Review ID (or unique prefix)
        id: String,
    },
    /// Review count, average rating and rating distribution
    Stats,
    /// List every genre used by your reviews
    Genres,
    /// Search the movie catalog without writing a review
    Search {
        /// Title to look for
        query: String,
    },
    /// View or change configuration
    #[command(long_about = "Manage configuration and the catalog API key. Running without a subcommand shows the current configuration.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Configure the TMDB catalog
    #[command(long_about = "Configure access to The Movie Database. Get an API key at https://www.themoviedb.org/settings/api. The key is stored in credentials.toml; the TMDB_API_KEY environment variable takes precedence.")]
    Tmdb {
        /// TMDB API key (if not provided and no other option given, will prompt)
        #[arg(long)]
        api_key: Option<String>,

        /// Response language, e.g. en-US or ko-KR
        #[arg(long)]
        language: Option<String>,

        /// Remove the stored API key
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "api_key")]
        clear_api_key: bool,
    },
    /// Configure search behaviour
    Search {
        /// Quiet period before a search is sent, in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Minimum query length
        #[arg(long)]
        min_query_length: Option<usize>,

        /// Maximum number of results (1-20)
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Print the locations of config, credentials, reviews and logs
    Paths,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let ctx = context::AppContext::load()?;

    match cli.command {
        Commands::Add { fields, query, pick } => add::run_add(&ctx, fields, query, pick, &output).await,
        Commands::Edit { id, fields, query, pick } => edit::run_edit(&ctx, &id, fields, query, pick, &output).await,
        Commands::Delete { id, yes } => delete::run_delete(&ctx, &id, yes, &output),
        Commands::List { sort, genre, search } => list::run_list(&ctx, sort, genre, search, &output),
        Commands::Show { id } => list::run_show(&ctx, &id, &output),
        Commands::Stats => stats::run_stats(&ctx, &output),
        Commands::Genres => stats::run_genres(&ctx, &output),
        Commands::Search { query } => search::run_search(&ctx, &query, &output).await,
        Commands::Config { cmd } => config::run_config(&ctx, cmd.unwrap_or(ConfigCommands::Show { full: false }), &output),
    }
}
