//! CLI for the urlcheck URL reputation toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlcheck_core::config;

use commands::{run_check, run_generate, run_serve};

/// Top-level CLI for the urlcheck toolkit.
#[derive(Debug, Parser)]
#[command(name = "urlcheck")]
#[command(about = "urlcheck: URL reputation dataset toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate the database seed script from the URL dataset.
    Generate {
        /// Directory holding the categorized dataset files.
        #[arg(long, value_name = "DIR")]
        dataset_dir: Option<PathBuf>,
        /// Seed script to append to.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Look up the risk and category of a single URL.
    Check {
        /// Full URL to look up, scheme included.
        url: String,
        /// Directory holding the categorized dataset files.
        #[arg(long, value_name = "DIR")]
        dataset_dir: Option<PathBuf>,
    },

    /// Serve the urlinfo lookup API over HTTP.
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8080.
        #[arg(long, value_name = "ADDR")]
        addr: Option<String>,
        /// Directory holding the categorized dataset files.
        #[arg(long, value_name = "DIR")]
        dataset_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate {
                dataset_dir,
                output,
            } => {
                let dataset_dir = dataset_dir.unwrap_or_else(|| cfg.dataset_dir.clone());
                let output = output.unwrap_or_else(|| cfg.output_file.clone());
                run_generate(&dataset_dir, &output)?;
            }
            CliCommand::Check { url, dataset_dir } => {
                let dataset_dir = dataset_dir.unwrap_or_else(|| cfg.dataset_dir.clone());
                run_check(&dataset_dir, &url)?;
            }
            CliCommand::Serve { addr, dataset_dir } => {
                let dataset_dir = dataset_dir.unwrap_or_else(|| cfg.dataset_dir.clone());
                let addr = addr.unwrap_or_else(|| cfg.listen_addr.clone());
                run_serve(&dataset_dir, &addr).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
