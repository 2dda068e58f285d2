//! Vendor download page retrieval.
//!
//! Plain GET of the page HTML; the upstream page is a single-page app, so the
//! raw markup (including embedded JSON blobs) is what gets scanned for
//! version strings.

use crate::config::HttpConfig;
use anyhow::{Context, Result};
use std::time::Duration;

/// Fetch a URL and return its body as text. Follows redirects; bounded by the
/// configured connect and request timeouts. Non-UTF-8 bytes are replaced
/// rather than rejected.
pub fn fetch_text(url: &str, http: &HttpConfig) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(http.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(http.request_timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
