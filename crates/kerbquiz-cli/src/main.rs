//! kerbquiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "kerbquiz",
    version,
    about = "Fill-in-the-blank quiz over glossary terms in quotes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive quiz session on stdin
    Play {
        /// Corpus JSON file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Random seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,

        /// Decoy candidates per question
        #[arg(long)]
        decoys: Option<usize>,

        /// Keep corpus order instead of shuffling quotes
        #[arg(long)]
        no_shuffle: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print one question without playing it
    Show {
        /// Corpus JSON file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Quote index in corpus order
        #[arg(long, default_value = "0")]
        index: usize,

        /// Random seed for the candidate pool
        #[arg(long)]
        seed: Option<u64>,

        /// Decoy candidates per question
        #[arg(long)]
        decoys: Option<usize>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Build the corpus JSON from glossary and quoteboard text files
    Import {
        /// Glossary file with one "(term)" per line
        #[arg(long)]
        kerbs: PathBuf,

        /// Quoteboard file with "=== Section YEAR ===" headers and "*" quotes
        #[arg(long)]
        quoteboard: PathBuf,

        /// Output corpus path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip sections older than this year
        #[arg(long)]
        min_year: Option<u32>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a corpus JSON file
    Validate {
        /// Corpus JSON file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kerbquiz=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            data,
            seed,
            decoys,
            no_shuffle,
            config,
        } => commands::play::execute(data, seed, decoys, no_shuffle, config),
        Commands::Show {
            data,
            index,
            seed,
            decoys,
            format,
            config,
        } => commands::show::execute(data, index, seed, decoys, format, config),
        Commands::Import {
            kerbs,
            quoteboard,
            output,
            min_year,
            config,
        } => commands::import::execute(kerbs, quoteboard, output, min_year, config),
        Commands::Validate { data, config } => commands::validate::execute(data, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
