//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (HTTP, settings)
//! into the drive tree builder and exposes the operations an embedding web
//! surface needs: the JSON tree endpoint, the server-side block render, and
//! the API key settings. Desktop hosts typically enable the `desktop-shims`
//! feature (which depends on `bridge-desktop`) and call
//! [`bootstrap_desktop`].

pub mod error;
pub mod render;

pub use error::{CoreError, Result};
pub use render::render_tree;

pub use core_runtime::{DriveListConfig, DriveListOptions};
pub use provider_google_drive::{ErrorKind, Node, Tree};

use provider_google_drive::{normalize_depth, DriveTreeBuilder};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Parameters of a tree request, as received by the REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeRequest {
    /// Shared folder URL
    pub url: String,
    /// Raw depth; values below 1 are treated as 1
    pub depth: i64,
    /// `false` produces links that open in the browser
    pub download: bool,
}

impl TreeRequest {
    pub fn new(url: impl Into<String>, depth: i64, download: bool) -> Self {
        Self {
            url: url.into(),
            depth,
            download,
        }
    }
}

/// Attributes saved with a drive list block. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlockAttributes {
    pub url: Option<String>,
    pub depth: Option<i64>,
    pub download: Option<bool>,
}

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct DriveListService {
    config: Arc<DriveListConfig>,
    builder: DriveTreeBuilder,
}

impl DriveListService {
    /// Create a new service from a validated configuration.
    pub fn new(config: DriveListConfig) -> Self {
        let builder = DriveTreeBuilder::from_config(&config);
        Self {
            config: Arc::new(config),
            builder,
        }
    }

    /// Access the configuration being used by the service.
    pub fn config(&self) -> &DriveListConfig {
        &self.config
    }

    /// Whether a usable API key is stored.
    ///
    /// Hosts register the block and the tree endpoint only when this holds.
    pub async fn is_enabled(&self) -> Result<bool> {
        Ok(self.load_options().await?.has_api_key())
    }

    /// Store the API key, trimmed. A blank key disables the service.
    #[instrument(skip(self, api_key))]
    pub async fn set_api_key(&self, api_key: &str) -> Result<()> {
        DriveListOptions::new(api_key.trim())
            .save(self.config.settings_store.as_ref())
            .await?;
        info!("API key updated");
        Ok(())
    }

    /// Remove all stored options.
    pub async fn clear_settings(&self) -> Result<()> {
        DriveListOptions::clear(self.config.settings_store.as_ref()).await?;
        Ok(())
    }

    async fn load_options(&self) -> Result<DriveListOptions> {
        Ok(
            DriveListOptions::load(self.config.settings_store.as_ref())
                .await?
                .unwrap_or_default(),
        )
    }

    async fn api_key(&self) -> Result<String> {
        let options = self.load_options().await?;
        if !options.has_api_key() {
            return Err(CoreError::Config(
                "Google API key is not configured".to_string(),
            ));
        }
        Ok(options.api_key)
    }

    /// Build the tree for a request.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Config`] if no API key is stored; nothing is fetched
    /// - any tree builder error, unchanged
    #[instrument(skip(self), fields(url = %request.url, depth = request.depth))]
    pub async fn drive_tree(&self, request: &TreeRequest) -> Result<Tree> {
        let api_key = self.api_key().await?;
        let depth = normalize_depth(request.depth);

        let tree = self
            .builder
            .build_tree(&request.url, depth, request.download, &api_key)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to build drive tree");
                e
            })?;

        info!(entries = tree.len(), "Built drive tree");
        Ok(tree)
    }

    /// The JSON body returned by the tree endpoint.
    pub async fn drive_tree_json(&self, request: &TreeRequest) -> Result<String> {
        let tree = self.drive_tree(request).await?;
        Ok(serde_json::to_string(&tree)?)
    }

    /// Render a saved block.
    ///
    /// Depth defaults to 1 and downloads to `true`. A block without a URL
    /// renders the empty-tree message without touching the network.
    #[instrument(skip(self))]
    pub async fn render_block(&self, attributes: &BlockAttributes) -> Result<String> {
        let tree = match attributes.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                let request = TreeRequest::new(
                    url,
                    attributes.depth.unwrap_or(1),
                    attributes.download.unwrap_or(true),
                );
                self.drive_tree(&request).await?
            }
            _ => Tree::new(),
        };

        Ok(render_tree(&tree))
    }
}

impl std::fmt::Debug for DriveListService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveListService")
            .field("config", &self.config)
            .finish()
    }
}

/// Convenience bootstrapper for desktop hosts.
///
/// Settings live in a SQLite database at `settings_db_path`; requests go
/// through the default reqwest client.
///
/// ```no_run
/// # async fn example() -> core_service::Result<()> {
/// use core_service::{bootstrap_desktop, TreeRequest};
///
/// let service = bootstrap_desktop("drive-list.db").await?;
/// service.set_api_key("AIza...").await?;
/// let request = TreeRequest::new("https://drive.google.com/drive/folders/1AbC", 2, true);
/// println!("{}", service.drive_tree_json(&request).await?);
/// # Ok(())
/// # }
/// ```
#[cfg(all(feature = "desktop-shims", not(target_arch = "wasm32")))]
pub async fn bootstrap_desktop(
    settings_db_path: impl Into<std::path::PathBuf>,
) -> Result<DriveListService> {
    let store = bridge_desktop::SqliteSettingsStore::new(settings_db_path.into()).await?;
    let config = DriveListConfig::builder()
        .settings_store(Arc::new(store))
        .build()?;
    Ok(DriveListService::new(config))
}
