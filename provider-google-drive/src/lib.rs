//! # Google Drive Provider
//!
//! Turns a shared Google Drive folder URL into a tree of folders and files.
//!
//! ## Overview
//!
//! This crate provides:
//! - Folder id extraction from browser-shareable folder URLs
//! - A read-only `files.list` connector authenticated with a static API key
//! - MIME classification (traversable folders vs. downloadable blobs vs.
//!   Google-native documents)
//! - The depth-bounded, level-synchronous tree builder that fetches each
//!   tree level in one concurrent batch
//!
//! ## Usage
//!
//! ```ignore
//! use provider_google_drive::DriveTreeBuilder;
//!
//! let builder = DriveTreeBuilder::new(http_client);
//! let tree = builder
//!     .build_tree("https://drive.google.com/drive/folders/1AbC", 2, true, &api_key)
//!     .await?;
//! println!("{}", serde_json::to_string(&tree)?);
//! ```

pub mod connector;
pub mod error;
pub mod folder;
pub mod node;
pub mod tree;
pub mod types;

pub use connector::GoogleDriveConnector;
pub use error::{ErrorKind, GoogleDriveError, Result};
pub use folder::folder_id;
pub use node::{count_files, Node, Tree};
pub use tree::{normalize_depth, DriveTreeBuilder};
pub use types::{is_downloadable, is_folder, FOLDER_MIME_TYPE, NATIVE_MIME_PREFIX};
