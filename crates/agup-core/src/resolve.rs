//! Release resolution: vendor page scan, URL synthesis, existence probe.
//!
//! The environment variables `ANTIGRAVITY_VERSION` and `ANTIGRAVITY_BUILDID`,
//! when both are set, bypass the network resolution entirely and are used
//! verbatim (no probe), matching the manual-override escape hatch.

pub mod extract;

use crate::config::HttpConfig;
use crate::page;
use crate::probe;
use thiserror::Error;
use url::Url;

/// Env var carrying a manual version override (e.g. `1.11.3`).
pub const VERSION_ENV: &str = "ANTIGRAVITY_VERSION";
/// Env var carrying a manual build-id override (16 digits).
pub const BUILD_ID_ENV: &str = "ANTIGRAVITY_BUILDID";

/// A resolved upstream release: version, vendor build id, download URL.
#[derive(Debug, Clone)]
pub struct Release {
    pub version: String,
    pub build_id: String,
    pub url: String,
}

/// Why resolution failed. A single failure aborts the run; the caller is
/// expected to surface the manual-override guidance.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not fetch vendor page: {0:#}")]
    Fetch(anyhow::Error),
    #[error("no version and build id found in page content")]
    NoMatch,
    #[error("synthesized URL {url} is not valid: {cause}")]
    BadUrl { url: String, cause: url::ParseError },
    #[error("candidate URL {url} failed verification: {cause:#}")]
    Probe { url: String, cause: anyhow::Error },
}

/// Substitute `{version}` and `{buildid}` into the download URL template.
pub fn render_url(template: &str, version: &str, build_id: &str) -> String {
    template
        .replace("{version}", version)
        .replace("{buildid}", build_id)
}

/// Manual override from the environment; `Some` only when both vars are set
/// and non-empty.
pub fn manual_override() -> Option<(String, String)> {
    let version = std::env::var(VERSION_ENV).ok().filter(|v| !v.is_empty())?;
    let build_id = std::env::var(BUILD_ID_ENV).ok().filter(|b| !b.is_empty())?;
    Some((version, build_id))
}

/// Resolve the current release.
///
/// With a manual override, the URL is rendered from the template and returned
/// without any network traffic. Otherwise the vendor page is fetched, the
/// first matching version/build-id pair is extracted, and the synthesized URL
/// is confirmed with a HEAD probe.
pub fn resolve(
    page_url: &str,
    url_template: &str,
    http: &HttpConfig,
) -> Result<Release, ResolveError> {
    if let Some((version, build_id)) = manual_override() {
        let url = render_url(url_template, &version, &build_id);
        tracing::info!(
            "using manual override: version={} buildid={}",
            version,
            build_id
        );
        return Ok(Release {
            version,
            build_id,
            url,
        });
    }

    let content = page::fetch_text(page_url, http).map_err(ResolveError::Fetch)?;
    let found = extract::extract_release(&content).ok_or(ResolveError::NoMatch)?;
    tracing::debug!(
        "page scan found version={} buildid={}",
        found.version,
        found.build_id
    );

    let candidate = render_url(url_template, &found.version, &found.build_id);
    if let Err(cause) = Url::parse(&candidate) {
        return Err(ResolveError::BadUrl {
            url: candidate,
            cause,
        });
    }

    match probe::exists(&candidate, http) {
        Ok(meta) => {
            if let Some(len) = meta.content_length {
                tracing::debug!("artifact reported as {} bytes", len);
            }
            Ok(Release {
                version: found.version,
                build_id: found.build_id,
                url: candidate,
            })
        }
        Err(cause) => Err(ResolveError::Probe {
            url: candidate,
            cause,
        }),
    }
}
