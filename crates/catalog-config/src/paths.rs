use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    /// Platform config dir (e.g. ~/.config/binge on Linux), overridable with
    /// BINGE_CONFIG_DIR for containers and tests
    pub fn new() -> Result<Self> {
        if let Ok(base) = std::env::var("BINGE_CONFIG_DIR") {
            return Ok(Self::with_base(PathBuf::from(base)));
        }
        let base = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?
            .join("binge");
        Ok(Self { config_dir: base })
    }

    pub fn with_base(base: PathBuf) -> Self {
        Self { config_dir: base }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn session_file(&self) -> PathBuf {
        self.config_dir.join("session.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_base_dir() {
        let manager = PathManager::with_base(PathBuf::from("/tmp/binge-test"));
        assert_eq!(manager.config_file(), PathBuf::from("/tmp/binge-test/config.toml"));
        assert_eq!(manager.session_file(), PathBuf::from("/tmp/binge-test/session.toml"));
    }

    #[test]
    fn ensure_directories_creates_the_base() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("nested").join("binge");
        let manager = PathManager::with_base(base.clone());
        manager.ensure_directories().unwrap();
        assert!(base.is_dir());
    }
}
