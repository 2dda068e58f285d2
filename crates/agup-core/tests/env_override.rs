//! Manual override: with both env vars set, resolution never touches the
//! network and the values are used verbatim.
//!
//! Kept in its own test binary, as a single test, so the env mutation cannot
//! race anything else.

use agup_core::config::HttpConfig;
use agup_core::resolve::{self, BUILD_ID_ENV, VERSION_ENV};

#[test]
fn env_override_bypasses_network_resolution() {
    std::env::set_var(VERSION_ENV, "1.15.8");
    std::env::set_var(BUILD_ID_ENV, "5724687216017408");

    // Unresolvable page URL: any network attempt would fail loudly.
    let release = resolve::resolve(
        "http://127.0.0.1:9/download/linux",
        "https://cdn.example.com/stable/{version}-{buildid}/Antigravity.tar.gz",
        &HttpConfig::default(),
    )
    .unwrap();

    assert_eq!(release.version, "1.15.8");
    assert_eq!(release.build_id, "5724687216017408");
    assert_eq!(
        release.url,
        "https://cdn.example.com/stable/1.15.8-5724687216017408/Antigravity.tar.gz"
    );

    // One variable alone is not an override.
    std::env::remove_var(BUILD_ID_ENV);
    assert!(resolve::manual_override().is_none());

    std::env::remove_var(VERSION_ENV);
    assert!(resolve::manual_override().is_none());
}
