use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The active profile, persisted between invocations so the CLI behaves like
/// a signed-in session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub active_profile_id: Option<String>,
}

impl SessionState {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read session at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse session at {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self).context("failed to serialize session")?;
        std::fs::write(path, raw)
            .with_context(|| format!("failed to write session to {}", path.display()))?;
        Ok(())
    }
}
