//! CLI for the lmirror launcher distribution mirror.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lmirror_core::config::{self, MirrorConfig};
use std::path::{Path, PathBuf};

use commands::{run_completions, run_mirror, run_plan, run_resolve};

/// Top-level CLI for lmirror.
#[derive(Debug, Parser)]
#[command(name = "lmirror")]
#[command(about = "lmirror: mirror a launcher client distribution to local disk", long_about = None)]
pub struct Cli {
    /// Read configuration from FILE instead of ~/.config/lmirror/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log to stderr instead of the state log file.
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the metadata manifest, every build manifest and every listed file.
    Run {
        /// Mirror root directory (default: config `destination`, else current directory).
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
        /// Root metadata manifest URL.
        #[arg(long, value_name = "URL")]
        metadata_url: Option<String>,
    },

    /// List builds and their manifest URLs without writing anything.
    Plan {
        /// Root metadata manifest URL.
        #[arg(long, value_name = "URL")]
        metadata_url: Option<String>,
    },

    /// Print the local path a remote URL is mirrored to.
    Resolve {
        /// Remote URL.
        url: String,
        /// Mirror root directory.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config_path = self.config.as_deref();
        match self.command {
            CliCommand::Run { dest, metadata_url } => {
                let mut cfg = load_config(config_path)?;
                apply_overrides(&mut cfg, dest, metadata_url);
                run_mirror(&cfg)?;
            }
            CliCommand::Plan { metadata_url } => {
                let mut cfg = load_config(config_path)?;
                apply_overrides(&mut cfg, None, metadata_url);
                run_plan(&cfg)?;
            }
            CliCommand::Resolve { url, dest } => {
                let mut cfg = load_config(config_path)?;
                apply_overrides(&mut cfg, dest, None);
                run_resolve(&cfg, &url);
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<MirrorConfig> {
    let cfg = match path {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// Command-line values win over the config file.
fn apply_overrides(cfg: &mut MirrorConfig, dest: Option<PathBuf>, metadata_url: Option<String>) {
    if let Some(dest) = dest {
        cfg.destination = Some(dest);
    }
    if let Some(url) = metadata_url {
        cfg.metadata_url = url;
    }
}

#[cfg(test)]
mod tests;
