//! CLI for docgap.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use docgap_core::config::{self, DocgapConfig};
use std::path::{Path, PathBuf};

use commands::{run_check, run_completions, run_normalize, CheckOptions, EXIT_OK};

/// Top-level CLI for docgap.
#[derive(Debug, Parser)]
#[command(name = "docgap")]
#[command(about = "docgap: list documentation URLs that have no Markdown file yet", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/docgap/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Report format for `docgap check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compare the URL list against the docs directory and report missing pages.
    Check {
        /// URL list file (default: Platform.txt inside the docs directory).
        #[arg(long, value_name = "PATH")]
        url_list: Option<PathBuf>,
        /// Directory holding converted .md files (default: current directory).
        #[arg(long, value_name = "DIR")]
        docs_dir: Option<PathBuf>,
        /// Base URL stripped before deriving filenames.
        #[arg(long, value_name = "URL")]
        base_prefix: Option<String>,
        /// Report format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Exit with status 2 when any URL is missing its file.
        #[arg(long)]
        fail_on_missing: bool,
    },

    /// Print the candidate filename for each URL.
    Normalize {
        /// One or more URLs.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Base URL stripped before deriving filenames.
        #[arg(long, value_name = "URL")]
        base_prefix: Option<String>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    /// Parses arguments, runs the command and returns the process exit status.
    pub fn run_from_args() -> Result<u8> {
        let cli = Cli::parse();
        let mut stdout = std::io::stdout().lock();

        match cli.command {
            CliCommand::Check {
                url_list,
                docs_dir,
                base_prefix,
                format,
                fail_on_missing,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                let cwd = std::env::current_dir()?;
                let (url_list, docs_dir) =
                    cfg.resolve_paths(url_list.as_deref(), docs_dir.as_deref(), &cwd);
                let opts = CheckOptions {
                    url_list,
                    docs_dir,
                    format,
                    fail_on_missing,
                };
                run_check(&with_base_prefix(cfg, base_prefix), &opts, &mut stdout)
            }
            CliCommand::Normalize { urls, base_prefix } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_normalize(&with_base_prefix(cfg, base_prefix), &urls, &mut stdout)?;
                Ok(EXIT_OK)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell, &mut stdout)?;
                Ok(EXIT_OK)
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DocgapConfig> {
    // An explicit --config must be readable; the XDG default is best effort.
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default(),
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

fn with_base_prefix(cfg: DocgapConfig, base_prefix: Option<String>) -> DocgapConfig {
    match base_prefix {
        Some(base_prefix) => DocgapConfig { base_prefix, ..cfg },
        None => cfg,
    }
}

#[cfg(test)]
mod tests;
