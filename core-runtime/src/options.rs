//! Persisted plugin options.
//!
//! The whole configuration surface an administrator edits is one object,
//! stored as JSON under a single settings key.

use crate::error::Result;
use bridge_traits::SettingsStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Settings key the options object is stored under
pub const OPTIONS_KEY: &str = "drive_list_option";

/// The single persisted configuration object.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveListOptions {
    /// Google API key used for every listing call
    #[serde(default)]
    pub api_key: String,
}

impl std::fmt::Debug for DriveListOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveListOptions")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "[REDACTED]" })
            .finish()
    }
}

impl DriveListOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Whether a usable (non-blank) API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Load the stored options, `None` if nothing was ever saved
    #[instrument(skip(store))]
    pub async fn load(store: &dyn SettingsStore) -> Result<Option<Self>> {
        let Some(raw) = store.get_string(OPTIONS_KEY).await? else {
            debug!("No drive list options stored");
            return Ok(None);
        };

        let options: Self = serde_json::from_str(&raw)?;
        Ok(Some(options))
    }

    /// Persist these options, replacing any previous object
    #[instrument(skip(self, store))]
    pub async fn save(&self, store: &dyn SettingsStore) -> Result<()> {
        let raw = serde_json::to_string(self)?;
        store.set_string(OPTIONS_KEY, &raw).await?;
        debug!("Saved drive list options");
        Ok(())
    }

    /// Remove the stored options (uninstall cleanup)
    #[instrument(skip(store))]
    pub async fn clear(store: &dyn SettingsStore) -> Result<()> {
        store.delete(OPTIONS_KEY).await?;
        Ok(())
    }
}
