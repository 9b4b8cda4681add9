use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use bookpairs::config::Config;
use bookpairs::output::{markdown, ranking_json, terminal};
use bookpairs::profile::frequency::build_profile;
use bookpairs::scoring::ranking::{base_name, rank_pairs, RankOptions};

/// bookpairs: find the most similar pairs in a corpus of text files.
///
/// Each file is reduced to the relative frequencies of its most common words;
/// two files score by the frequency mass of the words they share.
#[derive(Parser)]
#[command(name = "bookpairs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every pair of files in the corpus and print the most similar
    Rank {
        /// Corpus directory (default: ./BOOKS or BOOKPAIRS_CORPUS_DIR)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Exact number of .txt files the corpus must contain (default: 64)
        #[arg(long)]
        expected: Option<usize>,

        /// Words kept per file profile (default: 100)
        #[arg(long)]
        max_words: Option<usize>,

        /// Number of pairs to report (default: 10)
        #[arg(long)]
        top: Option<usize>,

        /// Print the ranking with scores as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show the word-frequency profile of a single file
    Profile {
        /// The text file to profile
        file: PathBuf,

        /// Number of words to show (default: 25)
        #[arg(long, default_value = "25")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging on stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bookpairs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Running without a subcommand ranks the default corpus
    let command = cli.command.unwrap_or(Commands::Rank {
        dir: None,
        expected: None,
        max_words: None,
        top: None,
        json: false,
        report: None,
    });

    match command {
        Commands::Rank {
            dir,
            expected,
            max_words,
            top,
            json,
            report,
        } => {
            let config = Config::load()?.with_overrides(dir, expected, max_words, top)?;
            info!(
                dir = %config.corpus_dir.display(),
                expected = config.expected_files,
                "Ranking corpus"
            );

            let files = bookpairs::corpus::load_corpus(&config.corpus_dir)?;
            let ranking = rank_pairs(&files, &RankOptions::from(&config))?;

            terminal::display_unreadable(&ranking.unreadable);

            if json {
                println!("{}", ranking_json(&ranking)?);
            } else {
                terminal::display_ranking(&ranking, config.top_pairs);
            }

            if let Some(path) = report {
                markdown::generate_report(&ranking, &config.corpus_dir, &path)?;
                eprintln!("{}", format!("Report written to {}", path.display()).dimmed());
            }
        }

        Commands::Profile { file, limit } => {
            let config = Config::load()?;
            let profile = build_profile(&file, config.max_words)?;
            profile.display(&base_name(&file), limit);
        }
    }

    Ok(())
}
