//! # Core Configuration Module
//!
//! Provides configuration management for the drive-list core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`DriveListConfig`] holding the injected bridges (HTTP client, settings
//! store) and the tunables of the tree builder (remote endpoints, request
//! timeout, retry policy). Validation is fail-fast: a missing bridge or an
//! out-of-range value is reported by `build()`, never at request time.
//!
//! ## Required Dependencies
//!
//! - `SettingsStore` - Source of the persisted API key
//!
//! ## Optional Dependencies (with platform defaults)
//!
//! - `HttpClient` - HTTP operations (desktop default: reqwest, enabled by the
//!   `desktop-shims` feature)
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::DriveListConfig;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let config = DriveListConfig::builder()
//!     .http_client(Arc::new(MyHttpClient))
//!     .settings_store(Arc::new(MySettingsStore))
//!     .request_timeout(Duration::from_secs(15))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{HttpClient, RetryPolicy, SettingsStore};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Google APIs host serving `drive/v3/files`
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com";

/// Drive host serving the `uc` file-content endpoint
pub const DEFAULT_DRIVE_BASE: &str = "https://drive.google.com";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound accepted for the per-request timeout
const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Base URLs of the two remote services the tree builder talks to.
///
/// Overridable so tests and proxies can point the builder elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveEndpoints {
    /// Base of the file-listing API (`{api_base}/drive/v3/files`)
    pub api_base: String,
    /// Base of the file-content endpoint (`{drive_base}/uc`)
    pub drive_base: String,
}

impl Default for DriveEndpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            drive_base: DEFAULT_DRIVE_BASE.to_string(),
        }
    }
}

impl DriveEndpoints {
    pub fn new(api_base: impl Into<String>, drive_base: impl Into<String>) -> Self {
        Self {
            api_base: trim_trailing_slash(api_base.into()),
            drive_base: trim_trailing_slash(drive_base.into()),
        }
    }

    /// Use the same base for both services (handy for a single mock server)
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Self::new(base.clone(), base)
    }

    /// URL of the file-listing endpoint
    pub fn files_url(&self) -> String {
        format!("{}/drive/v3/files", self.api_base)
    }

    /// URL of the file-content endpoint
    pub fn content_url(&self) -> String {
        format!("{}/uc", self.drive_base)
    }

    /// Both bases must be absolute http(s) URLs
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("api_base", &self.api_base), ("drive_base", &self.drive_base)] {
            let parsed = Url::parse(value)
                .map_err(|e| Error::Config(format!("Invalid {} '{}': {}", name, value, e)))?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::Config(format!(
                    "{} must use http or https, got '{}'",
                    name,
                    parsed.scheme()
                )));
            }
        }

        Ok(())
    }
}

fn trim_trailing_slash(mut value: String) -> String {
    while value.ends_with('/') {
        value.pop();
    }
    value
}

/// Core configuration for the drive-list service.
///
/// Use [`DriveListConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct DriveListConfig {
    /// HTTP client used for every remote call
    pub http_client: Arc<dyn HttpClient>,

    /// Storage holding the persisted plugin options
    pub settings_store: Arc<dyn SettingsStore>,

    /// Remote service base URLs
    pub endpoints: DriveEndpoints,

    /// Per-request timeout applied to listing calls
    pub request_timeout: Duration,

    /// Retry policy for transient remote failures
    pub retry_policy: RetryPolicy,
}

impl std::fmt::Debug for DriveListConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveListConfig")
            .field("http_client", &"HttpClient { ... }")
            .field("settings_store", &"SettingsStore { ... }")
            .field("endpoints", &self.endpoints)
            .field("request_timeout", &self.request_timeout)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}

impl DriveListConfig {
    /// Creates a new builder for constructing a `DriveListConfig`.
    pub fn builder() -> DriveListConfigBuilder {
        DriveListConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Endpoints are absolute http(s) URLs
    /// - Request timeout is within 1..=300 seconds
    /// - Retry policy makes at least one attempt
    pub fn validate(&self) -> Result<()> {
        self.endpoints.validate()?;

        if self.request_timeout < Duration::from_secs(1) {
            return Err(Error::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        if self.request_timeout > MAX_REQUEST_TIMEOUT {
            return Err(Error::Config(format!(
                "Request timeout exceeds maximum of {} seconds",
                MAX_REQUEST_TIMEOUT.as_secs()
            )));
        }

        if self.retry_policy.max_attempts == 0 {
            return Err(Error::Config(
                "Retry policy must allow at least one attempt".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn http_client_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "HttpClient".to_string(),
        message: "No HTTP client implementation provided. \
                 Desktop: enable the 'desktop-shims' feature to use the default ReqwestHttpClient. \
                 Other hosts: inject an HttpClient implementation."
            .to_string(),
    }
}

fn settings_store_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "SettingsStore".to_string(),
        message: "SettingsStore implementation is required to read the API key. \
                 Desktop: use core_service::bootstrap_desktop or inject SqliteSettingsStore. \
                 Other hosts: inject the host's option storage."
            .to_string(),
    }
}

/// Builder for [`DriveListConfig`].
#[derive(Default)]
pub struct DriveListConfigBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    settings_store: Option<Arc<dyn SettingsStore>>,
    endpoints: Option<DriveEndpoints>,
    request_timeout: Option<Duration>,
    retry_policy: Option<RetryPolicy>,
}

impl DriveListConfigBuilder {
    /// Sets the HTTP client implementation.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the settings store implementation (required).
    pub fn settings_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.settings_store = Some(store);
        self
    }

    /// Overrides the remote service base URLs.
    pub fn endpoints(mut self, endpoints: DriveEndpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Sets the per-request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the retry policy for transient remote failures.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Builds the configuration, validating all required fields.
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] if no settings store was provided, or no
    ///   HTTP client was provided and the `desktop-shims` feature is off
    /// - [`Error::Config`] if a value fails validation
    pub fn build(self) -> Result<DriveListConfig> {
        let request_timeout = self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let settings_store = self
            .settings_store
            .ok_or_else(settings_store_missing_error)?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => default_http_client(request_timeout)?,
        };

        let config = DriveListConfig {
            http_client,
            settings_store,
            endpoints: self.endpoints.unwrap_or_default(),
            request_timeout,
            retry_policy: self.retry_policy.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "desktop-shims")]
fn default_http_client(timeout: Duration) -> Result<Arc<dyn HttpClient>> {
    let client = bridge_desktop::ReqwestHttpClient::with_timeout(timeout).map_err(|e| {
        Error::CapabilityMissing {
            capability: "HttpClient".to_string(),
            message: e.to_string(),
        }
    })?;
    Ok(Arc::new(client))
}

#[cfg(not(feature = "desktop-shims"))]
fn default_http_client(_timeout: Duration) -> Result<Arc<dyn HttpClient>> {
    Err(http_client_missing_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::http::{HttpRequest, HttpResponse};
    use mockall::mock;

    mock! {
        HttpClient {}

        #[async_trait]
        impl HttpClient for HttpClient {
            async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse>;
        }
    }

    mock! {
        SettingsStore {}

        #[async_trait]
        impl SettingsStore for SettingsStore {
            async fn set_string(&self, key: &str, value: &str) -> BridgeResult<()>;
            async fn get_string(&self, key: &str) -> BridgeResult<Option<String>>;
            async fn delete(&self, key: &str) -> BridgeResult<()>;
            async fn list_keys(&self) -> BridgeResult<Vec<String>>;
            async fn clear_all(&self) -> BridgeResult<()>;
        }
    }

    fn base_builder() -> DriveListConfigBuilder {
        DriveListConfig::builder()
            .http_client(Arc::new(MockHttpClient::new()))
            .settings_store(Arc::new(MockSettingsStore::new()))
    }

    #[test]
    fn test_builder_defaults() {
        let config = base_builder().build().unwrap();

        assert_eq!(config.endpoints, DriveEndpoints::default());
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.retry_policy, RetryPolicy::default());
    }

    #[test]
    fn test_missing_settings_store() {
        let result = DriveListConfig::builder()
            .http_client(Arc::new(MockHttpClient::new()))
            .build();

        match result {
            Err(Error::CapabilityMissing { capability, .. }) => {
                assert_eq!(capability, "SettingsStore")
            }
            other => panic!("expected CapabilityMissing, got {:?}", other),
        }
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_missing_http_client_without_desktop_shims() {
        let result = DriveListConfig::builder()
            .settings_store(Arc::new(MockSettingsStore::new()))
            .build();

        assert!(matches!(result, Err(Error::CapabilityMissing { .. })));
    }

    #[test]
    fn test_timeout_bounds() {
        let too_short = base_builder()
            .request_timeout(Duration::from_millis(10))
            .build();
        assert!(matches!(too_short, Err(Error::Config(_))));

        let too_long = base_builder()
            .request_timeout(Duration::from_secs(301))
            .build();
        assert!(matches!(too_long, Err(Error::Config(_))));

        let ok = base_builder()
            .request_timeout(Duration::from_secs(300))
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_zero_attempt_retry_policy_rejected() {
        let policy = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };
        let result = base_builder().retry_policy(policy).build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_endpoints_urls() {
        let endpoints = DriveEndpoints::new("http://127.0.0.1:8080/", "http://127.0.0.1:9090");

        assert_eq!(endpoints.files_url(), "http://127.0.0.1:8080/drive/v3/files");
        assert_eq!(endpoints.content_url(), "http://127.0.0.1:9090/uc");

        let defaults = DriveEndpoints::default();
        assert_eq!(
            defaults.files_url(),
            "https://www.googleapis.com/drive/v3/files"
        );
        assert_eq!(defaults.content_url(), "https://drive.google.com/uc");
    }

    #[test]
    fn test_endpoints_validation() {
        assert!(DriveEndpoints::single("http://localhost:1234").validate().is_ok());
        assert!(DriveEndpoints::single("not a url").validate().is_err());
        assert!(DriveEndpoints::single("ftp://example.com").validate().is_err());

        let result = base_builder()
            .endpoints(DriveEndpoints::single("file:///tmp"))
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_debug_hides_bridges() {
        let config = base_builder().build().unwrap();
        let debug = format!("{:?}", config);

        assert!(debug.contains("HttpClient { ... }"));
        assert!(debug.contains("googleapis.com"));
    }
}
