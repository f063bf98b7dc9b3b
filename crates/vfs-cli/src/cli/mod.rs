//! CLI for the vfs library: one subcommand per facade operation.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vfs_core::{config, Vfs};

use commands::{run_cat, run_dirname, run_exists, run_join, run_resolve};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "vfs")]
#[command(about = "Read and inspect local paths and remote URLs through one interface", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the contents of a local file or remote URL.
    Cat {
        /// Local path or <scheme>://... URL.
        path: String,
    },

    /// Print whether a path exists (exit code 0 if it does, 1 if not).
    Exists {
        /// Local path or <scheme>://... URL.
        path: String,
    },

    /// Print the absolute form of a path (URLs are printed unchanged).
    Resolve { path: String },

    /// Append a segment to a path or URL.
    Join { path: String, segment: String },

    /// Print the parent of a path or URL.
    Dirname { path: String },
}

impl CliCommand {
    /// Parses arguments, runs the command and returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        // Only the commands that may touch the network need the retry settings.
        match cli.command {
            CliCommand::Cat { path } => {
                let vfs = load_vfs()?;
                run_cat(&vfs, &path).await?;
            }
            CliCommand::Exists { path } => {
                let vfs = load_vfs()?;
                if !run_exists(&vfs, &path).await? {
                    return Ok(1);
                }
            }
            CliCommand::Resolve { path } => run_resolve(&path),
            CliCommand::Join { path, segment } => run_join(&path, &segment),
            CliCommand::Dirname { path } => run_dirname(&path),
        }

        Ok(0)
    }
}

fn load_vfs() -> Result<Vfs> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(Vfs::from_config(&cfg))
}

#[cfg(test)]
mod tests;
