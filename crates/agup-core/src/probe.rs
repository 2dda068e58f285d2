//! HTTP HEAD existence probe for the synthesized download URL.
//!
//! A 2xx response confirms the candidate URL before anything is downloaded.
//! `Content-Length` is captured for logging when the server sends it.

use crate::config::HttpConfig;
use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

/// Metadata from a successful HEAD probe.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// Artifact size in bytes, if `Content-Length` was present.
    pub content_length: Option<u64>,
}

/// Performs a HEAD request and fails unless the server answers 2xx.
/// Follows redirects; bounded by the configured timeouts.
pub fn exists(url: &str, http: &HttpConfig) -> Result<ProbeResult> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(http.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(http.request_timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("HEAD {} returned HTTP {}", url, code);
    }

    Ok(ProbeResult {
        content_length: parse_content_length(&headers),
    })
}

/// First parseable `Content-Length` among the collected header lines.
fn parse_content_length(lines: &[String]) -> Option<u64> {
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.trim().parse::<u64>() {
                    return Some(n);
                }
            }
        }
    }
    None
}
