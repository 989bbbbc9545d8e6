//! CLI for the ytembed embed-snippet generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use ytembed_core::config;

use commands::{run_completions, run_embed, run_expand};

/// Top-level CLI for the ytembed embed-snippet generator.
#[derive(Debug, Parser)]
#[command(name = "ytembed")]
#[command(about = "ytembed: YouTube embed-snippet generator for static sites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the iframe embed fragment for a watch URL.
    Embed {
        /// YouTube watch URL containing a `v=` parameter.
        url: String,

        /// Player width in pixels (overrides config).
        #[arg(long, value_name = "PX")]
        width: Option<u32>,

        /// Player height in pixels (overrides config).
        #[arg(long, value_name = "PX")]
        height: Option<u32>,

        /// Iframe title attribute (overrides config).
        #[arg(long)]
        title: Option<String>,
    },

    /// Expand `{% youtube <url> %}` shortcodes in a page source.
    Expand {
        /// Path to the page source; reads stdin when omitted.
        path: Option<PathBuf>,

        /// Rewrite the file in place instead of printing to stdout.
        #[arg(long)]
        in_place: bool,
    },

    /// Generate shell completions for the ytembed binary.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Embed {
                url,
                width,
                height,
                title,
            } => {
                let mut options = cfg.embed_options();
                if let Some(width) = width {
                    options.width = width;
                }
                if let Some(height) = height {
                    options.height = height;
                }
                if let Some(title) = title {
                    options.title = title;
                }
                run_embed(&url, &options)?;
            }
            CliCommand::Expand { path, in_place } => {
                run_expand(path.as_deref(), in_place, &cfg.embed_options())?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
