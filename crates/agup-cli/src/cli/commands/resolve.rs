//! `agup resolve` – print the resolved release without touching any file.

use agup_core::config::AgupConfig;
use agup_core::resolve::{self, BUILD_ID_ENV, VERSION_ENV};
use anyhow::{Context, Result};

pub fn run_resolve(cfg: &AgupConfig) -> Result<()> {
    let release = resolve::resolve(&cfg.page_url, &cfg.url_template, &cfg.http()).with_context(
        || {
            format!(
                "could not determine the latest release; set {} and {} to resolve manually",
                VERSION_ENV, BUILD_ID_ENV
            )
        },
    )?;

    println!("version:  {}", release.version);
    println!("build id: {}", release.build_id);
    println!("url:      {}", release.url);
    Ok(())
}
