//! Streaming SHA-256 of a remote artifact.
//!
//! The response body is fed chunk-by-chunk into the hash accumulator as
//! libcurl delivers it, so memory use stays bounded regardless of artifact
//! size and nothing is written to disk.

use crate::config::HttpConfig;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::time::Duration;

/// Download `url` and return the SHA-256 of the body as lowercase hex.
/// Any transport error or non-2xx status is fatal.
pub fn sha256_url(url: &str, http: &HttpConfig) -> Result<String> {
    let mut hasher = Sha256::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(http.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(http.download_timeout_secs))?;
    // Abort stalled transfers instead of hanging until the overall timeout.
    easy.low_speed_limit(1024)
        .map_err(|e| anyhow::anyhow!("curl: {}", e))?;
    easy.low_speed_time(Duration::from_secs(60))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            hasher.update(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(hex::encode(hasher.finalize()))
}
