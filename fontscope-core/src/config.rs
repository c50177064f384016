//! On-disk configuration: `config.toml` under the fontscope config directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Overrides the XDG config directory (handy for tests and portable setups).
pub const CONFIG_DIR_ENV: &str = "FONTSCOPE_CONFIG_DIR";

pub const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Global configuration loaded from `~/.config/fontscope/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontscopeConfig {
    /// Text rendered in every preview unless overridden on the command line.
    pub sample_text: String,
    /// How long to wait for a stylesheet before proceeding anyway.
    pub load_timeout_ms: u64,
    /// Address `fontscope serve` binds to.
    pub bind: String,
    /// Fetch the stylesheet before rendering a preview.
    pub fetch_stylesheets: bool,
}

impl Default for FontscopeConfig {
    fn default() -> Self {
        Self {
            sample_text: DEFAULT_SAMPLE_TEXT.to_string(),
            load_timeout_ms: 2000,
            bind: "127.0.0.1:8765".to_string(),
            fetch_stylesheets: false,
        }
    }
}

/// Directory holding `config.toml` and `settings.toml`.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_DIR_ENV) {
        if !raw.is_empty() {
            return Ok(PathBuf::from(raw));
        }
    }
    let xdg_dirs = xdg::BaseDirectories::new().context("resolving XDG directories")?;
    Ok(xdg_dirs.get_config_home().join("fontscope"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FontscopeConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<FontscopeConfig> {
    if !path.exists() {
        let default_cfg = FontscopeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg: FontscopeConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}
