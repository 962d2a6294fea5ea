use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogOptions,
    #[serde(default)]
    pub latency: LatencyOptions,
    #[serde(default)]
    pub search: SearchOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogOptions {
    /// Page size for browse and search results
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

/// Cosmetic delay applied to every store call, standing in for a network
/// round trip. Disable for tests and scripting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatencyOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_latency_ms")]
    pub ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchOptions {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_per_page() -> usize {
    24
}

fn default_true() -> bool {
    true
}

fn default_latency_ms() -> u64 {
    100
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}

impl Default for LatencyOptions {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            ms: default_latency_ms(),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl AppConfig {
    /// Load from the given path; a missing file means defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, raw)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        if self.latency.enabled {
            Duration::from_millis(self.latency.ms)
        } else {
            Duration::ZERO
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog.per_page, 24);
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.catalog.per_page = 12;
        config.latency.enabled = false;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.latency(), Duration::ZERO);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\nper_page = 10\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.catalog.per_page, 10);
        assert!(config.latency.enabled);
        assert_eq!(config.search.debounce_ms, 300);
    }
}
