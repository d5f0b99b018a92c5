use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, UserPreferences};
use crate::error::{AppError, Result};
use crate::session::SessionController;
use crate::storage::SnapshotStore;

/// Everything a windowed shell needs from the core, wired together. Built
/// once at startup; the shell keeps it for the lifetime of the process and
/// feeds events to `controller`.
pub struct AppServices {
    pub config: AppConfig,
    pub controller: SessionController,
}

impl AppServices {
    pub fn initialize() -> Result<Self> {
        let config = AppConfig::load();
        if let Err(errors) = config.validate() {
            return Err(AppError::Config(format!(
                "Validation errors: {}",
                errors.join("; ")
            )));
        }

        let store = SnapshotStore::new(&config.snapshot_file_name)?;
        let mut controller = SessionController::new(&config, store);

        match UserPreferences::load() {
            Ok(preferences) => {
                controller.apply_preferences(&preferences);
                tracing::info!("user preferences loaded");
            }
            Err(e) => {
                tracing::warn!("Failed to load preferences, using defaults: {}", e);
            }
        }

        Ok(Self { config, controller })
    }

    /// Persists the controller's current theme and language selections.
    /// Shells call this after theme or language events.
    pub fn save_preferences(&self) -> Result<()> {
        self.controller.preferences().save()
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default
/// `info` filter. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}
