use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Magnitude floor in dB used when a complex pair has zero magnitude.
/// Matches the portal's historical output; change only deliberately.
pub const DEFAULT_DB_FLOOR: f64 = -100.0;

/// Relative prefix under which catalog assets are served.
pub const DEFAULT_FILES_PREFIX: &str = "files";

/// Global configuration loaded from `~/.config/sdp/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdpConfig {
    /// Relative prefix joined with a record's filename to form its download href.
    pub files_prefix: String,
    /// dB value substituted when an S-parameter magnitude is zero.
    pub db_floor: f64,
    /// Optional default catalog JSON path; the CLI `--catalog` flag overrides it.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for SdpConfig {
    fn default() -> Self {
        Self {
            files_prefix: DEFAULT_FILES_PREFIX.to_string(),
            db_floor: DEFAULT_DB_FLOOR,
            catalog_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sdp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SdpConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SdpConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SdpConfig = toml::from_str(&data)?;
    Ok(cfg)
}
