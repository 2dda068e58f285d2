//! Version and build-id extraction from raw page content.
//!
//! First-match heuristic: the first dotted triplet starting with `1.` and the
//! first run of 16 digits anywhere in the markup. This is fragile by nature
//! (an unrelated substring can win) and is kept as-is; tightening it against
//! the live page has never been verified.

use regex::Regex;

const VERSION_PATTERN: &str = r"\d+\.\d+\.\d+";
const BUILD_ID_PATTERN: &str = r"\d{16}";

/// Version and build id as found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRelease {
    pub version: String,
    pub build_id: String,
}

/// Scan `content` for the first plausible version/build-id pair.
/// Returns `None` when either is absent.
pub fn extract_release(content: &str) -> Option<PageRelease> {
    let version_re = Regex::new(VERSION_PATTERN).ok()?;
    let build_re = Regex::new(BUILD_ID_PATTERN).ok()?;

    let version = version_re
        .find_iter(content)
        .map(|m| m.as_str())
        .find(|v| v.starts_with("1."))?;
    let build_id = build_re.find(content)?.as_str();

    Some(PageRelease {
        version: version.to_string(),
        build_id: build_id.to_string(),
    })
}
