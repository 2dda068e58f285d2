//! `agup update` – run the full pipeline against a package directory.

use agup_core::config::AgupConfig;
use agup_core::update::{self, SrcinfoStatus, UpdateOptions, UpdateOutcome};
use anyhow::Result;
use std::path::PathBuf;

pub fn run_update(
    cfg: &AgupConfig,
    package_dir: Option<PathBuf>,
    skip_srcinfo: bool,
) -> Result<()> {
    let package_dir = match package_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let opts = UpdateOptions {
        page_url: cfg.page_url.clone(),
        url_template: cfg.url_template.clone(),
        package_dir,
        skip_srcinfo,
        http: cfg.http(),
    };

    match update::run_update(&opts)? {
        UpdateOutcome::UpToDate { version } => {
            println!("Already up to date (version {})", version);
        }
        UpdateOutcome::Updated {
            version,
            build_id,
            sha256,
            srcinfo,
        } => {
            println!("Updated PKGBUILD: version={} buildid={}", version, build_id);
            println!("SHA256: {}", sha256);
            match srcinfo {
                SrcinfoStatus::Written => println!("Generated .SRCINFO"),
                SrcinfoStatus::ToolMissing => {
                    println!("makepkg not found; .SRCINFO was not regenerated")
                }
                SrcinfoStatus::Failed => println!(".SRCINFO generation failed; see log"),
                SrcinfoStatus::Skipped => {}
            }
        }
    }

    Ok(())
}
