mod config;
mod names;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use passmu_generate::{GenerateOptions, GenerationEngine, GenerationError};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigFileError),
    #[error("name list error: {0}")]
    Names(#[from] names::NameListError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "passmu", version, about = "Password mutation wordlist generator")]
struct Cli {
    /// Base word or "First Last" name pair. Prompts interactively when
    /// omitted and no name list is given.
    word: Option<String>,
    /// File with one base word or "First Last" pair per line.
    #[arg(long, value_name = "PATH", conflicts_with = "word")]
    names_file: Option<PathBuf>,
    /// YAML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output directory for part files.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
    /// Seed for the random-capitalization draws.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Worker threads (defaults to available CPUs).
    #[arg(long)]
    workers: Option<usize>,
    /// Compress each output part with gzip.
    #[arg(long)]
    compress: bool,
    /// Maximum lines per output part (0 = unlimited).
    #[arg(long)]
    max_lines: Option<u64>,
    /// Minimum candidate length.
    #[arg(long)]
    min_length: Option<usize>,
    /// Maximum candidate length.
    #[arg(long)]
    max_length: Option<usize>,
    /// Maximum symbols inserted per mutant.
    #[arg(long)]
    max_symbols: Option<usize>,
    /// Random-capitalization draws per mutant.
    #[arg(long)]
    random_caps: Option<usize>,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut mutation_config = config::load_config(cli.config.as_deref())?;
    config::apply_overrides(&mut mutation_config, &cli);
    mutation_config.normalize();
    mutation_config
        .validate()
        .map_err(config::ConfigFileError::from)?;
    tracing::debug!(
        config_file = ?cli.config,
        out_dir = %cli.out_dir.display(),
        "configuration loaded"
    );

    let inputs: Vec<String> = if let Some(path) = &cli.names_file {
        names::load_names(path)?
    } else if let Some(word) = &cli.word {
        vec![word.clone()]
    } else {
        vec![prompt_for_word()?]
    };

    if inputs.iter().all(|input| input.trim().is_empty()) {
        eprintln!("No base word given; nothing to do.");
        return Ok(());
    }

    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: cli.out_dir.clone(),
        seed: cli.seed,
        workers: cli.workers,
    });

    for input in &inputs {
        if input.trim().is_empty() {
            continue;
        }
        let result = engine.run(input, &mutation_config)?;
        let report = result.report;
        println!(
            "{}: {} variants across {} part(s) in {:.2}s",
            input.trim(),
            report.variants_written,
            report.parts_written,
            report.duration_ms as f64 / 1000.0
        );
        if let Some(path) = &report.last_path {
            println!("Last file written: {}", path.display());
        }
    }

    Ok(())
}

fn prompt_for_word() -> Result<String, CliError> {
    print!("Enter a base word (e.g. 'password'): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
