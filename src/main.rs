use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use popcorn::{
    AppConfig, ConfigOverrides, FetchError, FileStorage, InteractiveSearch, MovieApi, OmdbClient,
    PersistedState, WatchedMovie,
    interactive::domain::watched::WatchedList,
    logging,
    output::{self, OutputFormat},
    storage::WATCHED_KEY,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "popcorn",
    version,
    about = "Search movies on OMDb, rate them and keep a watched list",
    long_about = None
)]
struct Cli {
    /// Initial search query
    query: Option<String>,

    /// OMDb API key
    #[arg(short = 'k', long, env = "OMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OMDb endpoint
    #[arg(long, env = "OMDB_BASE_URL")]
    base_url: Option<String>,

    /// Config file (default: <config dir>/popcorn/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Storage file holding the watched list
    #[arg(long, env = "POPCORN_STORAGE")]
    storage: Option<PathBuf>,

    /// Log file for the interactive session
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run one search and print the results instead of starting the UI
    #[arg(short, long, requires = "query")]
    print: bool,

    /// Print the watched list and its summary
    #[arg(long, conflicts_with = "print")]
    watched: bool,

    /// Output format for --print and --watched
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "popcorn", &mut io::stdout());
        return Ok(());
    }

    let interactive = !cli.print && !cli.watched;
    let overrides = ConfigOverrides {
        config_path: cli.config.clone(),
        api_key: cli.api_key.clone(),
        base_url: cli.base_url.clone(),
        storage_path: cli.storage.clone(),
        log_file: cli.log_file.clone(),
    };

    if !interactive {
        logging::init_tracing(None, cli.verbose)?;
    }

    let config = match AppConfig::resolve(overrides.clone()) {
        Ok(config) => config,
        // The watched list is local, so it can be shown without an API key.
        Err(e) if cli.watched => {
            tracing::debug!("{e:#}");
            let path = AppConfig::resolve_storage_path(&overrides)?;
            return print_watched(&path, cli.format, !cli.no_color);
        }
        Err(e) => return Err(e),
    };

    if cli.verbose && !interactive {
        eprintln!("Endpoint: {}", config.api.base_url);
        eprintln!("Storage: {}", config.storage_path.display());
    }

    if cli.watched {
        return print_watched(&config.storage_path, cli.format, !cli.no_color);
    }

    if cli.print {
        let query = cli.query.as_deref().unwrap_or_default();
        return print_search(&config, query, cli.format, !cli.no_color);
    }

    if let Some(log_file) = config.interactive_log_file() {
        logging::init_tracing(Some(&log_file), cli.verbose)?;
    }

    let mut session = InteractiveSearch::new(&config)?;
    session.run(cli.query.as_deref())
}

fn print_search(config: &AppConfig, query: &str, format: OutputFormat, use_color: bool) -> Result<()> {
    let client = OmdbClient::new(&config.api)?;
    tracing::debug!(endpoint = client.base_url(), query, "Running one-off search");
    let results = match client.search(query.trim()) {
        Ok(results) => results,
        Err(FetchError::NotFound) => Vec::new(),
        Err(e) => return Err(e).with_context(|| format!("Search for \"{query}\" failed")),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_search_results(&mut handle, query, &results, format, use_color)?;
    handle.flush()?;
    Ok(())
}

fn print_watched(path: &std::path::Path, format: OutputFormat, use_color: bool) -> Result<()> {
    let storage = Arc::new(FileStorage::new(path));
    let store: PersistedState<Vec<WatchedMovie>> =
        PersistedState::load(storage, WATCHED_KEY, Vec::new());
    let list = WatchedList::new(store.get().clone());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output::write_watched(&mut handle, &list, format, use_color)?;
    handle.flush()?;
    Ok(())
}
