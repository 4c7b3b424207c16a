//! Google Drive API response types
//!
//! Data structures for deserializing Google Drive API v3 responses, plus the
//! MIME rules that decide what becomes a tree node.

use serde::{Deserialize, Serialize};

/// MIME type of a Drive folder
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Prefix shared by all Google-native types (Docs, Sheets, folders, ...)
///
/// Native documents have no downloadable blob behind them.
pub const NATIVE_MIME_PREFIX: &str = "application/vnd.google-apps.";

/// Whether an item can be descended into
pub fn is_folder(mime_type: &str) -> bool {
    mime_type == FOLDER_MIME_TYPE
}

/// Whether an item is a real file with content behind the download URL
pub fn is_downloadable(mime_type: &str) -> bool {
    !mime_type.starts_with(NATIVE_MIME_PREFIX)
}

/// Google Drive API file resource
///
/// Only the fields the tree builder requests.
/// See: https://developers.google.com/drive/api/v3/reference/files#resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// File ID
    pub id: String,

    /// File name
    pub name: String,

    /// MIME type
    pub mime_type: String,
}

/// Google Drive API files.list response
///
/// See: https://developers.google.com/drive/api/v3/reference/files/list
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesListResponse {
    /// Files on this page, in API order
    pub files: Vec<DriveFile>,

    /// Token for next page
    #[serde(default)]
    pub next_page_token: Option<String>,

    /// Whether the search did not cover every corpus
    #[serde(default)]
    pub incomplete_search: bool,
}

impl FilesListResponse {
    /// Whether more results exist beyond this page
    pub fn is_truncated(&self) -> bool {
        self.next_page_token.is_some()
    }
}

/// Standard Google API error envelope: `{"error": {"code", "message"}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,

    #[serde(default)]
    pub message: String,
}
