//! Depth-bounded, level-synchronous tree builder.
//!
//! Each tree level is fetched as one concurrent batch: every folder
//! discovered at level `n` is listed at the same time during level `n + 1`,
//! and the next level starts only once the whole batch has completed. A
//! tree of depth `d` therefore costs `d` round trips regardless of how wide
//! it is.
//!
//! Nodes are first collected into an arena of sibling lists indexed by
//! slot. A folder discovered during traversal owns a fresh slot, and the
//! worklist entry for that folder records where its children go. The
//! nested [`Tree`] is assembled from the arena once traversal is done.

use bridge_traits::http::{HttpClient, RetryPolicy};
use core_runtime::config::{DriveEndpoints, DriveListConfig, DEFAULT_REQUEST_TIMEOUT};
use futures::future::try_join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::connector::GoogleDriveConnector;
use crate::error::Result;
use crate::folder::folder_id;
use crate::node::{Node, Tree};
use crate::types::{is_downloadable, is_folder};

/// Clamp a caller-supplied depth to the builder's domain (at least 1)
pub fn normalize_depth(depth: i64) -> u32 {
    depth.clamp(1, i64::from(u32::MAX)) as u32
}

/// A folder whose children are fetched in the next level
#[derive(Debug)]
struct FolderRef {
    remote_id: String,
    /// Arena slot receiving the folder's children
    slot: usize,
}

#[derive(Debug)]
enum ArenaNode {
    File { name: String, url: String },
    Folder { name: String, children: usize },
}

/// Builds file/folder trees from shared Drive folder URLs.
///
/// The builder holds no per-call state; the API key is passed to each
/// [`build_tree`](Self::build_tree) call, and concurrent calls share
/// nothing but the HTTP client.
#[derive(Clone)]
pub struct DriveTreeBuilder {
    http_client: Arc<dyn HttpClient>,
    endpoints: DriveEndpoints,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl DriveTreeBuilder {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            endpoints: DriveEndpoints::default(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Builder sharing the HTTP client, endpoints and tunables of `config`
    pub fn from_config(config: &DriveListConfig) -> Self {
        Self::new(Arc::clone(&config.http_client))
            .with_endpoints(config.endpoints.clone())
            .with_timeout(config.request_timeout)
            .with_retry_policy(config.retry_policy.clone())
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

    fn connector(&self, api_key: &str) -> Result<GoogleDriveConnector> {
        Ok(
            GoogleDriveConnector::new(Arc::clone(&self.http_client), api_key)?
                .with_endpoints(self.endpoints.clone())
                .with_timeout(self.timeout)
                .with_retry_policy(self.retry_policy.clone()),
        )
    }

    /// Build the tree below the shared folder at `root_url`.
    ///
    /// `max_depth` counts listing levels: depth 1 lists only the root folder
    /// and yields its files. A folder met on the last allowed level is
    /// omitted entirely rather than emitted without children. Depth 0 is
    /// treated as 1.
    ///
    /// With `download == false`, file URLs open in the browser instead of
    /// downloading.
    ///
    /// # Errors
    ///
    /// - [`MissingApiKey`](crate::GoogleDriveError::MissingApiKey) for a
    ///   blank key, checked before anything else
    /// - [`InvalidUrl`](crate::GoogleDriveError::InvalidUrl) if no folder id
    ///   can be extracted from `root_url`
    /// - any remote error from any listing request; the call is atomic and
    ///   no partial tree is returned
    #[instrument(skip(self, api_key), fields(root_url = %root_url))]
    pub async fn build_tree(
        &self,
        root_url: &str,
        max_depth: u32,
        download: bool,
        api_key: &str,
    ) -> Result<Tree> {
        let connector = self.connector(api_key)?;
        let root_id = folder_id(root_url)?;
        let max_depth = max_depth.max(1);

        // Slot 0 holds the root sequence
        let mut arena: Vec<Vec<ArenaNode>> = vec![Vec::new()];
        let mut worklist = vec![FolderRef {
            remote_id: root_id,
            slot: 0,
        }];

        for level in 1..=max_depth {
            if worklist.is_empty() {
                break;
            }

            let expand = level < max_depth;
            info!(level, folders = worklist.len(), "Fetching tree level");

            let pages = try_join_all(
                worklist
                    .iter()
                    .map(|folder| connector.list_children(&folder.remote_id)),
            )
            .await?;

            let mut next_level = Vec::new();

            for (parent, page) in worklist.iter().zip(pages) {
                for item in page.files {
                    if is_folder(&item.mime_type) {
                        if !expand {
                            continue;
                        }

                        let slot = arena.len();
                        arena.push(Vec::new());
                        arena[parent.slot].push(ArenaNode::Folder {
                            name: item.name,
                            children: slot,
                        });
                        next_level.push(FolderRef {
                            remote_id: item.id,
                            slot,
                        });
                    } else if is_downloadable(&item.mime_type) {
                        let url = connector.download_url(&item.id, download);
                        arena[parent.slot].push(ArenaNode::File {
                            name: item.name,
                            url,
                        });
                    } else {
                        debug!(name = %item.name, mime_type = %item.mime_type, "Skipping native document");
                    }
                }
            }

            worklist = next_level;
        }

        Ok(assemble(&mut arena, 0))
    }
}

impl std::fmt::Debug for DriveTreeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveTreeBuilder")
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}

/// Move the sibling list at `slot` out of the arena, nesting folder children
fn assemble(arena: &mut [Vec<ArenaNode>], slot: usize) -> Tree {
    std::mem::take(&mut arena[slot])
        .into_iter()
        .map(|node| match node {
            ArenaNode::File { name, url } => Node::File { name, url },
            ArenaNode::Folder { name, children } => Node::Folder {
                name,
                children: assemble(arena, children),
            },
        })
        .collect()
}
