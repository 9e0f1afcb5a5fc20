mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{completions, filter, name, normalize, stats, Context};
use crate::error::{exit_code_for, report_error};
use tidycard_config as config;

#[derive(Debug, Parser)]
#[command(name = "tidycard", version, about = "Clean up exported contact lists")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize every name in a contact export
    Normalize(normalize::NormalizeArgs),
    /// Normalize individual names
    Name(name::NameArgs),
    /// Split contacts by a list of reachable numbers
    Filter(filter::FilterArgs),
    /// Count contacts per country
    Stats(stats::StatsArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path.clone()) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let normalizer = app_config
                .build_normalizer()
                .with_context(|| "build name normalizer")?;
            debug!(
                overrides = normalizer.overrides().len(),
                letter = %normalizer.spurious_letter(),
                "normalizer ready"
            );

            let ctx = Context {
                json,
                config: &app_config,
                normalizer: &normalizer,
            };

            match command {
                Command::Normalize(args) => normalize::normalize_file(&ctx, args),
                Command::Name(args) => name::normalize_names(&ctx, args),
                Command::Filter(args) => filter::filter_contacts(&ctx, args),
                Command::Stats(args) => stats::country_stats(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
