//! Folder id extraction from shared folder URLs.

use url::Url;

use crate::error::{GoogleDriveError, Result};

/// Returns the Drive folder id embedded in a browser-shareable folder URL.
///
/// The id is the last non-empty path segment, so both
/// `https://drive.google.com/drive/folders/1AbC` and the same URL with a
/// trailing slash or a `?usp=sharing` query yield `1AbC`.
///
/// # Errors
///
/// [`GoogleDriveError::InvalidUrl`] if `url` does not parse as an absolute
/// URL or its path has no non-empty segment.
pub fn folder_id(url: &str) -> Result<String> {
    let parsed = Url::parse(url.trim())
        .map_err(|e| GoogleDriveError::InvalidUrl(format!("'{}': {}", url, e)))?;

    parsed
        .path_segments()
        .and_then(|segments| segments.rev().find(|s| !s.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| {
            GoogleDriveError::InvalidUrl(format!("'{}' has no folder id in its path", url))
        })
}
