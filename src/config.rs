use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 15, 20];
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub page_size: usize,
    /// Directory holding `customers.json` and `locations.json`; the
    /// built-in sample data is used when unset.
    pub fixture_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            page_size: DEFAULT_PAGE_SIZE,
            fixture_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", config_path.display()))?;
        Ok(config.sanitized())
    }

    fn get_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("customer-explorer").join("config.json"))
    }

    fn sanitized(mut self) -> Self {
        if !PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            tracing::warn!(
                page_size = self.page_size,
                "Configured page size is not one of {:?}, using {}",
                PAGE_SIZE_OPTIONS,
                DEFAULT_PAGE_SIZE
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}
