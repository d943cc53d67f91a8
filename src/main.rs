mod config;
mod github;
mod report;
mod search;
mod state;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, info_span, warn, Instrument};
use tracing_subscriber::EnvFilter;

use github::{HttpSearchClient, SearchClient, StaticSearchClient};
use search::{QueryUseCase, ResponseCache, SearchGateway};
use state::{InputState, SearchResultState};

/// repo-search — search GitHub repositories from the terminal.
/// Results show name, owner, description, stars and language.
#[derive(Parser, Debug)]
#[command(name = "repo-search", version, about)]
struct Cli {
    /// Search query, sent verbatim as the `q` parameter (e.g., "tetris language:rust")
    ///
    /// Not required when --interactive is used.
    query: Option<String>,

    /// Optional output file path for a markdown listing
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read queries from stdin; `:open N`, `:retry` and `:quit` are also accepted
    #[arg(short, long)]
    interactive: bool,

    /// Serve every query from a built-in sample response (no network access)
    #[arg(long)]
    r#mock: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.query.is_none() && !cli.interactive {
        return Err(
            "a query is required unless --interactive is used. Usage: repo-search <QUERY> or repo-search -i"
                .into(),
        );
    }

    info!("loading configuration");
    let config = config::Config::load()?;
    debug!(base_url = %config.api.base_url, capacity = config.cache.capacity, "loaded configuration");

    let results = if cli.r#mock {
        info!("using built-in sample response");
        build_pipeline(StaticSearchClient::new(SAMPLE_RESPONSE), &config)?
    } else {
        build_pipeline(HttpSearchClient::new(&config.api)?, &config)?
    };

    if let Some(query) = cli.query.as_deref() {
        run_once(&results, query, cli.output.as_deref()).await?;
    }

    if cli.interactive {
        run_interactive(&results).await?;
    }

    Ok(())
}

const SAMPLE_RESPONSE: &str = include_str!("../tests/fixtures/search_response.json");

/// Composition root: wire client, cache, gateway, use case and state once.
fn build_pipeline<C>(
    client: C,
    config: &config::Config,
) -> Result<Arc<SearchResultState>, config::ConfigError>
where
    C: SearchClient + 'static,
{
    let cache = ResponseCache::new(config.cache.capacity()?);
    let gateway = SearchGateway::new(client, cache);
    let use_case = QueryUseCase::new(Arc::new(gateway));
    Ok(Arc::new(SearchResultState::new(use_case)))
}

/// Search once and render the outcome.
async fn run_once(
    results: &SearchResultState,
    query: &str,
    output: Option<&Path>,
) -> Result<(), report::ReportError> {
    results
        .search(query)
        .instrument(info_span!("search", query = %query))
        .await;
    report::output(&results.snapshot(), output)
}

/// Line-oriented search loop. Each non-command line is typed into the
/// search box and submitted.
async fn run_interactive(results: &Arc<SearchResultState>) -> Result<(), Box<dyn std::error::Error>> {
    let input = InputState::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("Type a query and press enter. :open N shows details, :retry repeats, :quit exits.");
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Retry => {
                results.retry().await;
                report::output(&results.snapshot(), None)?;
            }
            Command::Open(index) => {
                let snapshot = results.snapshot();
                match index.checked_sub(1).and_then(|i| snapshot.repositories.get(i)) {
                    Some(repo) => report::print_detail(repo),
                    None => warn!(index, shown = snapshot.repositories.len(), "no such result"),
                }
            }
            Command::Search(text) => {
                input.update(text);
                let Some(query) = input.submit() else {
                    continue;
                };
                let handle = results.spawn_search(&query);
                report::output(&results.snapshot(), None)?;
                handle.await?;
                report::output(&results.snapshot(), None)?;
            }
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search(&'a str),
    Open(usize),
    Retry,
    Quit,
}

impl<'a> Command<'a> {
    /// Anything that isn't a well-formed command is a query.
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":q" | ":quit" => return Command::Quit,
            ":retry" => return Command::Retry,
            _ => {}
        }
        if let Some(n) = line.trim().strip_prefix(":open ") {
            if let Ok(index) = n.trim().parse() {
                return Command::Open(index);
            }
        }
        Command::Search(line)
    }
}
