use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_dataset_dir() -> PathBuf {
    PathBuf::from("url_dataset")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("init-db.js")
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Global configuration loaded from `~/.config/urlcheck/config.toml`.
///
/// Every field has a default (dataset in `url_dataset/`, seed script
/// `init-db.js` in the working directory, API on port 8080), so a partial
/// config file is fine. CLI flags override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlCheckConfig {
    /// Directory holding the five categorized dataset files.
    #[serde(default = "default_dataset_dir")]
    pub dataset_dir: PathBuf,
    /// Seed script that `generate` appends to.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    /// Listen address for the urlinfo API.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for UrlCheckConfig {
    fn default() -> Self {
        Self {
            dataset_dir: default_dataset_dir(),
            output_file: default_output_file(),
            listen_addr: default_listen_addr(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlCheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlCheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlCheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}
