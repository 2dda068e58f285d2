//! `agup checksum` – stream a URL and print its SHA-256.

use agup_core::checksum;
use agup_core::config::AgupConfig;
use anyhow::Result;

pub fn run_checksum(cfg: &AgupConfig, url: &str) -> Result<()> {
    let digest = checksum::sha256_url(url, &cfg.http())?;
    println!("{}  {}", digest, url);
    Ok(())
}
