//! Google Drive API connector implementation
//!
//! Read-only access to `files.list` authenticated with a static API key, and
//! construction of public download links.

use bridge_traits::error::BridgeError;
use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse, RetryPolicy};
use core_runtime::config::{DriveEndpoints, DriveListConfig, DEFAULT_REQUEST_TIMEOUT};
use core_runtime::logging::redact_query_key;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::error::{GoogleDriveError, Result};
use crate::types::{ApiErrorResponse, FilesListResponse};

/// Fields to request for a listing page
const LIST_FIELDS: &str = "nextPageToken,incompleteSearch,files(id,name,mimeType)";

/// Google Drive API connector
///
/// # Example
///
/// ```ignore
/// use provider_google_drive::GoogleDriveConnector;
///
/// let connector = GoogleDriveConnector::new(http_client, api_key)?;
/// let page = connector.list_children("1AbC").await?;
/// ```
#[derive(Clone)]
pub struct GoogleDriveConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// Google API key appended to every listing request
    api_key: String,

    endpoints: DriveEndpoints,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl std::fmt::Debug for GoogleDriveConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDriveConnector")
            .field("api_key", &"[REDACTED]")
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}

impl GoogleDriveConnector {
    /// Create a new Google Drive connector
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `api_key` - Google API key with the Drive API enabled
    ///
    /// # Errors
    ///
    /// [`GoogleDriveError::MissingApiKey`] if the key is empty or blank.
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GoogleDriveError::MissingApiKey);
        }

        Ok(Self {
            http_client,
            api_key,
            endpoints: DriveEndpoints::default(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        })
    }

    /// Create a connector using the bridges and tunables of `config`
    pub fn from_config(config: &DriveListConfig, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Arc::clone(&config.http_client), api_key)?
            .with_endpoints(config.endpoints.clone())
            .with_timeout(config.request_timeout)
            .with_retry_policy(config.retry_policy.clone()))
    }

    pub fn with_endpoints(mut self, endpoints: DriveEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Build the `files.list` URL selecting the children of `folder_id`
    fn list_url(&self, folder_id: &str) -> String {
        // Drive query string literals escape `\` and `'` with a backslash
        let escaped_id = folder_id.replace('\\', "\\\\").replace('\'', "\\'");
        let query = format!("'{}' in parents", escaped_id);

        format!(
            "{}?q={}&key={}&fields={}",
            self.endpoints.files_url(),
            urlencoding::encode(&query),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(LIST_FIELDS)
        )
    }

    /// List the direct children of a folder.
    ///
    /// Only the first result page is read. A truncated page is logged and
    /// returned as is; its continuation token is not followed.
    ///
    /// # Errors
    ///
    /// - [`GoogleDriveError::ApiError`] for any non-2xx status
    /// - [`GoogleDriveError::ParseError`] if the body is not a file list
    /// - [`GoogleDriveError::NetworkError`] on timeouts and connection failures
    #[instrument(skip(self), fields(folder_id = %folder_id))]
    pub async fn list_children(&self, folder_id: &str) -> Result<FilesListResponse> {
        let url = self.list_url(folder_id);
        debug!(url = %redact_query_key(&url), "Listing folder");

        let request = HttpRequest::get(url).accept_json().timeout(self.timeout);

        let response = self
            .http_client
            .execute_with_retry(request, self.retry_policy.clone())
            .await
            .map_err(map_bridge_error)?;

        if !response.is_success() {
            let error = api_error(&response);
            warn!(status = response.status, error = %error, "Listing request failed");
            return Err(error);
        }

        let page: FilesListResponse = serde_json::from_slice(&response.body).map_err(|e| {
            GoogleDriveError::ParseError(format!("Failed to parse files list response: {}", e))
        })?;

        if page.is_truncated() {
            warn!(
                returned = page.files.len(),
                "Folder listing truncated; only the first page is used"
            );
        }

        debug!(count = page.files.len(), "Listed folder");
        Ok(page)
    }

    /// Public link to a file's content.
    ///
    /// With `download == false` the link carries `download=false`, so the
    /// file opens in the browser instead of being saved.
    pub fn download_url(&self, file_id: &str, download: bool) -> String {
        let mut url = format!(
            "{}?id={}&export=download",
            self.endpoints.content_url(),
            urlencoding::encode(file_id)
        );

        if !download {
            url.push_str("&download=false");
        }

        url
    }
}

fn map_bridge_error(error: BridgeError) -> GoogleDriveError {
    match error {
        BridgeError::Timeout(msg) | BridgeError::ConnectionFailed(msg) => {
            GoogleDriveError::NetworkError(msg)
        }
        other => GoogleDriveError::BridgeError(other),
    }
}

/// Turn a non-success response into an `ApiError`, preferring Google's message
fn api_error(response: &HttpResponse) -> GoogleDriveError {
    let message = match response.json::<ApiErrorResponse>() {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => String::from_utf8_lossy(&response.body).trim().to_string(),
    };

    GoogleDriveError::ApiError {
        status_code: response.status,
        message,
    }
}
