use catalog_config::{AppConfig, PathManager, SessionState};
use catalog_core::{SearchDebouncer, Session};
use catalog_store::{MemoryCatalog, UserRepository};
use color_eyre::eyre::{eyre, Result};
use tracing::{debug, warn};

/// Everything a command needs: the seeded catalog, the loaded config, and
/// the paths the session is persisted under.
pub struct App {
    pub catalog: MemoryCatalog,
    pub config: AppConfig,
    pub debouncer: SearchDebouncer,
    paths: PathManager,
}

impl App {
    pub async fn init() -> Result<Self> {
        let paths = PathManager::new().map_err(|e| eyre!("{:#}", e))?;
        paths.ensure_directories().map_err(|e| eyre!("{:#}", e))?;

        let config_file = paths.config_file();
        let config = AppConfig::load(&config_file).map_err(|e| eyre!("{:#}", e))?;
        debug!(config = %config_file.display(), "configuration loaded");

        let catalog = MemoryCatalog::seeded().with_latency(config.latency());
        let debouncer = SearchDebouncer::new(config.debounce());

        Ok(Self {
            catalog,
            debouncer,
            config,
            paths,
        })
    }

    /// Resolve the active profile. A missing or stale session file falls back
    /// to the first profile, the same default a fresh sign-in lands on.
    pub async fn session(&self) -> Result<Session> {
        let state = SessionState::load(&self.paths.session_file()).map_err(|e| eyre!("{:#}", e))?;

        if let Some(profile_id) = state.active_profile_id {
            match self.catalog.profile_by_id(&profile_id).await {
                Ok(profile) => return Ok(Session::new(profile.id)),
                Err(e) if e.is_not_found() => {
                    warn!(profile_id, "saved session points at a missing profile");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let profiles = self.catalog.profiles().await?;
        let first = profiles
            .first()
            .ok_or_else(|| eyre!("the account has no profiles"))?;
        Ok(Session::new(first.id.clone()))
    }

    pub fn save_session(&self, session: &Session) -> Result<()> {
        let state = SessionState {
            active_profile_id: Some(session.profile_id.clone()),
        };
        state
            .save(&self.paths.session_file())
            .map_err(|e| eyre!("{:#}", e))
    }
}
