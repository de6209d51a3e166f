//! Configuration file handling.
//!
//! Settings live in `<config_dir>/webbs/config.toml`. The `WEBBS_CONFIG`
//! environment variable points at an alternative file. A missing file or
//! missing field means the default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ansi::DEFAULT_WRAP_WIDTH;
use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::html::HtmlOptions;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "WEBBS_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub grid: GridConfig,
    pub menu: MenuConfig,
    pub session: SessionConfig,
}

/// Art rendering (`html` and `view`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Column at which decoded art wraps
    pub wrap_width: usize,
    pub font_family: String,
    pub font_size: String,
    pub line_height: String,
    /// CSS background of the HTML container
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let html = HtmlOptions::default();
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            font_family: html.font_family,
            font_size: html.font_size,
            line_height: html.line_height,
            background: html.background,
        }
    }
}

impl RenderConfig {
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            width: self.wrap_width,
            font_family: self.font_family.clone(),
            font_size: self.font_size.clone(),
            line_height: self.line_height.clone(),
            background: self.background.clone(),
        }
    }
}

/// Size of new menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Text written on the bottom row of every menu screen
    pub prompt: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prompt: "Select option: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seconds without input before a connection is dropped
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 1800,
        }
    }
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Path of the config file: `$WEBBS_CONFIG` or
    /// `<config_dir>/webbs/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("webbs").join("config.toml"))
    }

    /// Reject settings no renderer can honour.
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            warn!(width = self.grid.width, height = self.grid.height, "invalid grid size");
            bail!(
                "grid size must be non-zero, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }
        if self.render.wrap_width == 0 {
            warn!("invalid wrap width");
            bail!("render.wrap_width must be non-zero");
        }
        if self.session.idle_timeout_secs == 0 {
            warn!("invalid idle timeout");
            bail!("session.idle_timeout_secs must be non-zero");
        }
        Ok(())
    }
}
