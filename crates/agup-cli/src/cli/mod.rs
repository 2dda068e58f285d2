//! CLI for the Antigravity PKGBUILD updater.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use agup_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_resolve, run_update};

/// Top-level CLI for the Antigravity PKGBUILD updater.
#[derive(Debug, Parser)]
#[command(name = "agup")]
#[command(about = "Update the Antigravity PKGBUILD to the latest upstream release", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the latest release, rewrite the PKGBUILD, regenerate .SRCINFO.
    Update {
        /// Directory containing the PKGBUILD (defaults to the current directory).
        #[arg(long, value_name = "DIR")]
        package_dir: Option<PathBuf>,

        /// Do not regenerate .SRCINFO after rewriting the PKGBUILD.
        #[arg(long)]
        skip_srcinfo: bool,
    },

    /// Resolve and print the latest version, build id and URL; touch nothing.
    Resolve,

    /// Download a URL and print its SHA-256 digest.
    Checksum {
        /// Direct HTTP/HTTPS URL to hash.
        url: String,
    },
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    match cli.command {
        CliCommand::Update {
            package_dir,
            skip_srcinfo,
        } => run_update(&cfg, package_dir, skip_srcinfo)?,
        CliCommand::Resolve => run_resolve(&cfg)?,
        CliCommand::Checksum { url } => run_checksum(&cfg, &url)?,
    }

    Ok(())
}
