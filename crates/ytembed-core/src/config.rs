use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::embed::EmbedOptions;

/// Global configuration loaded from `~/.config/ytembed/config.toml`.
///
/// Holds the player attributes that have site-wide defaults; the defaults
/// reproduce the stock embed template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Iframe width in pixels.
    pub width: u32,
    /// Iframe height in pixels.
    pub height: u32,
    /// Iframe `title` attribute.
    pub title: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            width: 560,
            height: 315,
            title: "YouTube video player".to_string(),
        }
    }
}

impl EmbedConfig {
    /// Player attributes for the renderer, taken from this config.
    pub fn embed_options(&self) -> EmbedOptions {
        EmbedOptions {
            width: self.width,
            height: self.height,
            title: self.title.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytembed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EmbedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EmbedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: EmbedConfig = toml::from_str(&data)?;
    Ok(cfg)
}
