use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordbst::query::{self, Query};
use wordbst::{ingest, session, Letter};

#[derive(Parser)]
#[command(name = "wordbst")]
#[command(version)]
#[command(about = "Index a text file's words by first letter and ask about their frequencies")]
struct Cli {
    /// Text file to index
    path: PathBuf,

    /// Log what's happening to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer one query and exit instead of starting the interactive menu
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List every word starting with LETTER along with its frequency
    Sorted { letter: Letter },
    /// Show the most frequent word starting with LETTER
    Most { letter: Letter },
    /// Show the least frequent word starting with LETTER
    Least { letter: Letter },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let index = ingest::from_path(&cli.path)
        .with_context(|| format!("failed to index {}", cli.path.display()))?;

    match cli.command {
        Some(command) => {
            let (query, letter) = match command {
                Command::Sorted { letter } => (Query::SortedWords, letter),
                Command::Most { letter } => (Query::MostFrequent, letter),
                Command::Least { letter } => (Query::LeastFrequent, letter),
            };
            println!("{}", query::run(&index, query, letter));
        }
        None => {
            let stdin = io::stdin();
            session::run(&index, stdin.lock(), io::stdout().lock())
                .context("interactive session failed")?;
            info!("session finished");
        }
    }

    Ok(())
}
