use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Upstream download page for the Linux build.
const DEFAULT_PAGE_URL: &str = "https://antigravity.google/download/linux";

/// Artifact URL template; `{version}` and `{buildid}` are substituted at
/// resolution time.
const DEFAULT_URL_TEMPLATE: &str = "https://edgedl.me.gvt1.com/edgedl/release2/j0qc3/antigravity/stable/{version}-{buildid}/linux-x64/Antigravity.tar.gz";

/// HTTP timeout knobs (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Overall timeout for the page GET and the HEAD probe, in seconds.
    pub request_timeout_secs: u64,
    /// Overall timeout for the artifact download, in seconds.
    pub download_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 60,
            download_timeout_secs: 3600,
        }
    }
}

/// Global configuration loaded from `~/.config/agup/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgupConfig {
    /// Vendor page scanned for the current version and build id.
    pub page_url: String,
    /// Template the download URL is synthesized from.
    pub url_template: String,
    /// Optional HTTP timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for AgupConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            http: None,
        }
    }
}

impl AgupConfig {
    /// Effective HTTP settings (config section or defaults).
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("agup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AgupConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AgupConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AgupConfig = toml::from_str(&data)?;
    Ok(cfg)
}
