//! CLI for wp-remover.

mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wpr_core::config::{self, RemoverConfig};
use wpr_core::remover;

use output::EventPrinter;

/// Utility for removing posts from WordPress blogs over XML-RPC.
#[derive(Debug, Parser)]
#[command(name = "wp-remover")]
#[command(about = "utility for removing posts from WordPress blogs", long_about = None)]
pub struct Cli {
    /// Path to the account list (CSV: "email","email_password","blog_url","username","password").
    #[arg(value_name = "ACC-LIST-PATH")]
    pub accs_path: PathBuf,

    /// Path to the list of post URLs to delete (file, directory of .txt files, or stem).
    #[arg(value_name = "POST-LIST-PATH")]
    pub posts_path: PathBuf,

    /// Read settings from this file instead of ~/.config/wp-remover/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds (overrides config).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Process posts in file order instead of shuffling them.
    #[arg(long)]
    pub ordered: bool,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    /// Effective config: file (explicit or XDG default) plus flag overrides.
    pub fn resolve_config(&self) -> Result<RemoverConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        if let Some(secs) = self.timeout_secs {
            cfg.request_timeout_secs = secs;
        }
        if self.ordered {
            cfg.shuffle_posts = false;
        }
        Ok(cfg)
    }

    pub async fn run(self) -> Result<()> {
        let cfg = self.resolve_config()?;
        tracing::debug!("effective config: {:?}", cfg);

        let mut printer = EventPrinter::stdout();
        let summary =
            remover::remove_from_paths(&self.accs_path, &self.posts_path, &cfg, &mut printer)
                .await?;
        tracing::debug!(?summary, "run summary");

        printer.line(format_args!("done!"));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
