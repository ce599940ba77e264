use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use ukr_bible::config::{Config, OutputFormat};
use ukr_bible::{render, Corpus};

#[derive(Parser)]
#[command(name = "ukr-bible", about = "Look up and search the Ukrainian Bible", version)]
struct Cli {
    /// Data file to load instead of the configured one.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    /// Write debug logs to <tmp>/ukr-bible-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the verses a citation names, e.g. `get Буття 1:1-3`
    Get {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },
    /// Print every verse containing the query (case-insensitive)
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Show at most this many matches.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one random verse
    Random,
    /// List books in canonical order
    Books,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let log_path = std::env::temp_dir().join("ukr-bible-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("opening {}", log_path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ukr-bible debug log started, tail -f {}", log_path.display());
    }

    let mut config = Config::load()?;
    if let Some(path) = cli.data {
        config.corpus.data_path = Some(path);
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    let corpus = Corpus::from_config(&config).context("loading Bible data")?;
    run(&corpus, cli.command, config.output.format)
}

fn run(corpus: &Corpus, command: Command, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Get { reference } => {
            let reference = reference.join(" ");
            let verses = corpus.get(&reference);
            if verses.is_empty() {
                eprintln!("no verses found for {reference:?}");
                return Ok(ExitCode::FAILURE);
            }
            render::verses(&mut out, &verses, format)?;
        }
        Command::Search { query, limit } => {
            let query = query.join(" ");
            let mut verses = corpus.search(&query);
            if verses.is_empty() {
                eprintln!("no verses contain {query:?}");
                return Ok(ExitCode::FAILURE);
            }
            if let Some(limit) = limit {
                verses.truncate(limit);
            }
            render::verses(&mut out, &verses, format)?;
        }
        Command::Random => render::verse(&mut out, &corpus.random_verse(), format)?,
        Command::Books => render::books(&mut out, &corpus.list_books(), format)?,
    }

    Ok(ExitCode::SUCCESS)
}
