//! Command-line front end for transcript-compare.

pub mod batch;
pub mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use transcript_compare_common::transcript::STDIN_PATH;
use transcript_compare_common::{Config, Manifest, read_transcript};
use transcript_compare_core::{Comparison, RenderOptions, normalize_text};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV_VAR: &str = "TCMP_LOG";

#[derive(Parser, Debug)]
#[command(name = "tcmp")]
#[command(about = "Transcript comparison - word error rates and aligned diffs")]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a hypothesis transcript against a reference
    Compare {
        /// Reference transcript file (`-` for stdin)
        reference: String,
        /// Hypothesis transcript file (`-` for stdin)
        hypothesis: String,
        /// Maximum width of each diff line
        #[arg(long)]
        width: Option<usize>,
        /// Show every diff block, not just those with differences
        #[arg(long)]
        all: bool,
        #[arg(long, value_enum, default_value_t = CompareFormat::Text)]
        format: CompareFormat,
        /// Only print the metrics
        #[arg(long)]
        no_diff: bool,
        /// Treat the arguments as transcript text rather than paths
        #[arg(long)]
        inline: bool,
    },
    /// Print the normalized form of a transcript
    Normalize {
        /// Transcript file (`-` for stdin)
        input: String,
        /// Treat the argument as transcript text rather than a path
        #[arg(long)]
        inline: bool,
    },
    /// Compare every pair listed in a manifest
    Batch {
        manifest: PathBuf,
        /// Concurrent comparisons (0 = one per CPU)
        #[arg(long)]
        jobs: Option<usize>,
        #[arg(long, value_enum, default_value_t = BatchFormat::Tsv)]
        format: BatchFormat,
    },
    /// Show the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CompareFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum BatchFormat {
    Tsv,
    Json,
}

/// Parse arguments, set up logging and run the selected command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    init_logging(&config)?;
    debug!(?config, "Loaded configuration");

    execute(cli, &config, &mut std::io::stdout().lock()).await
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.logging.level.as_directive())
            .context("Invalid log filter")?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

/// Apply command-line overrides on top of the configured diff options.
fn render_options(config: &Config, width: Option<usize>, all: bool) -> RenderOptions {
    let mut options = config.diff;
    if let Some(width) = width {
        options.width = width;
    }
    if all {
        options.differences_only = false;
    }
    options
}

fn load_input(arg: &str, inline: bool) -> Result<String> {
    if inline {
        Ok(arg.to_string())
    } else {
        read_transcript(arg)
    }
}

async fn execute(cli: Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Compare {
            reference,
            hypothesis,
            width,
            all,
            format,
            no_diff,
            inline,
        } => {
            if !inline && reference == STDIN_PATH && hypothesis == STDIN_PATH {
                bail!("Only one of the reference and hypothesis can be read from stdin");
            }
            let reference = load_input(&reference, inline)?;
            let hypothesis = load_input(&hypothesis, inline)?;
            let options = render_options(config, width, all);

            let result = Comparison::new(&reference, &hypothesis).result(&options);
            match format {
                CompareFormat::Text => output::write_comparison(out, &result, !no_diff)?,
                CompareFormat::Json => output::write_comparison_json(out, &result)?,
            }
        }
        Commands::Normalize { input, inline } => {
            let text = load_input(&input, inline)?;
            writeln!(out, "{}", normalize_text(&text))?;
        }
        Commands::Batch {
            manifest,
            jobs,
            format,
        } => {
            let manifest = Manifest::load(&manifest)?;
            let mut batch_config = config.batch.clone();
            if let Some(jobs) = jobs {
                batch_config.jobs = jobs;
            }

            let report = batch::run_batch(&manifest, batch_config.effective_jobs()).await?;
            match format {
                BatchFormat::Tsv => output::write_batch_tsv(out, &report)?,
                BatchFormat::Json => output::write_batch_json(out, &report)?,
            }
        }
        Commands::Config { path } => {
            if path {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => Config::config_path()?,
                };
                writeln!(out, "{}", path.display())?;
            } else {
                write!(out, "{}", config.to_toml()?)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
