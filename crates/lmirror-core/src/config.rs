use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root metadata document published by the launcher distribution.
pub const DEFAULT_METADATA_URL: &str = "https://www.tibia.com/launcher/tibiametadata.json";
/// User agent sent with every request; the CDN rejects requests without a browser-like one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
/// URL segment from which the local mirror layout starts.
pub const DEFAULT_PATH_MARKER: &str = "launcher";

/// Global configuration loaded from `~/.config/lmirror/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// URL of the root metadata manifest.
    pub metadata_url: String,
    /// Value of the `User-Agent` request header.
    pub user_agent: String,
    /// Marker segment used to derive local paths from remote URLs.
    pub path_marker: String,
    /// Mirror root directory (None = current working directory).
    #[serde(default)]
    pub destination: Option<PathBuf>,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no limit).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Follow HTTP redirects.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            metadata_url: DEFAULT_METADATA_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            path_marker: DEFAULT_PATH_MARKER.to_string(),
            destination: None,
            connect_timeout_secs: None,
            timeout_secs: None,
            follow_redirects: true,
        }
    }
}

impl MirrorConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lmirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<MirrorConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: MirrorConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}
