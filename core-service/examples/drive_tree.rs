//! Print the tree of a shared Google Drive folder as JSON
//!
//! Run with:
//! ```bash
//! DRIVE_LIST_API_KEY=AIza... cargo run -p core-service --example drive_tree -- \
//!     https://drive.google.com/drive/folders/<id> 2
//!
//! # Browser links instead of downloads, with request logging
//! DRIVE_LIST_API_KEY=AIza... cargo run -p core-service --example drive_tree -- \
//!     https://drive.google.com/drive/folders/<id> 3 view "provider_google_drive=debug"
//! ```

use bridge_desktop::SqliteSettingsStore;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_service::{DriveListConfig, DriveListService, TreeRequest};
use std::env;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let Some(url) = args.get(1).cloned() else {
        eprintln!("usage: drive_tree <folder-url> [depth] [download|view] [filter]");
        std::process::exit(2);
    };
    let depth = args.get(2).map(|d| d.parse::<i64>()).transpose()?.unwrap_or(1);
    let download = args.get(3).map(|mode| mode != "view").unwrap_or(true);

    let mut logging = LoggingConfig::default().with_format(LogFormat::Compact);
    if let Some(filter) = args.get(4) {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging)?;

    let api_key = env::var("DRIVE_LIST_API_KEY").unwrap_or_default();

    let config = DriveListConfig::builder()
        .settings_store(Arc::new(SqliteSettingsStore::in_memory().await?))
        .build()?;
    let service = DriveListService::new(config);
    service.set_api_key(&api_key).await?;

    info!(url = %url, depth, download, "Fetching drive tree");

    let request = TreeRequest::new(url, depth, download);
    println!("{}", service.drive_tree_json(&request).await?);

    Ok(())
}
