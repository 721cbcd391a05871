//! JSON file backed settings store
//!
//! The file is read once when the store opens. A missing file means
//! defaults; an unreadable or invalid file also means defaults, with a
//! warning, so a broken file never blocks resolution. Every successful save
//! rewrites the file and is published to subscribers; a reset removes the
//! file and publishes the defaults.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{info, warn};

use shared::{Settings, SharedError};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::SettingsStore;

pub struct RealSettingsStore {
    path: PathBuf,
    current: watch::Sender<Settings>,
}

impl RealSettingsStore {
    /// Open the store at `path`, falling back to defaults when the file is unusable
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match read_settings(&path).await {
            Ok(Some(settings)) => {
                info!(path = %path.display(), "⚙️ Loaded settings");
                settings
            }
            Ok(None) => {
                info!(path = %path.display(), "⚙️ No settings file, using defaults");
                Settings::default()
            }
            Err(error) => {
                warn!(error = %error, "⚠️ Ignoring settings file, using defaults");
                Settings::default()
            }
        };

        let (current, _) = watch::channel(settings);
        Self { path, current }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `Ok(None)` when the file does not exist
pub(crate) async fn read_settings(path: &Path) -> WebServerResult<Option<Settings>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(WebServerError::settings_file(path, e)),
    };

    let settings: Settings = serde_json::from_str(&contents)
        .map_err(|e| WebServerError::settings_file(path, SharedError::deserialization(e)))?;
    settings
        .validate()
        .map_err(|e| WebServerError::settings_file(path, e))?;

    Ok(Some(settings))
}

#[async_trait]
impl SettingsStore for RealSettingsStore {
    async fn load(&self) -> Settings {
        self.current.borrow().clone()
    }

    async fn save(&self, settings: Settings) -> WebServerResult<()> {
        settings.validate()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| WebServerError::settings_file(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&settings)
            .map_err(|e| WebServerError::settings_file(&self.path, SharedError::serialization(e)))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| WebServerError::settings_file(&self.path, e))?;

        self.current.send_replace(settings);
        Ok(())
    }

    async fn reset(&self) -> WebServerResult<Settings> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => info!(path = %self.path.display(), "🗑️ Removed settings file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(WebServerError::settings_file(&self.path, e)),
        }

        let defaults = Settings::default();
        self.current.send_replace(defaults.clone());
        Ok(defaults)
    }

    fn subscribe(&self) -> watch::Receiver<Settings> {
        self.current.subscribe()
    }
}
