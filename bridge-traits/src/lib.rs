//! # Host Bridge Traits
//!
//! Capability traits the drive-list core needs from its host.
//!
//! ## Overview
//!
//! The tree builder never talks to the network or to persistent storage
//! directly. Everything it needs from the outside world is expressed here as
//! a trait, implemented once per platform (`bridge-desktop` for native hosts)
//! and injected through `core_runtime::config::DriveListConfig`.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Async HTTP with timeouts and retry
//! - [`SettingsStore`](storage::SettingsStore) - Key-value persistence for plugin options
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Implementations
//! should convert platform errors into it and keep messages actionable
//! (which URL, which settings key).
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so one client can serve every request
//! of a concurrent fan-out.
//!
//! ## Examples
//!
//! ### Implementing HttpClient
//!
//! ```ignore
//! use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! pub struct MyHttpClient {
//!     client: reqwest::Client,
//! }
//!
//! #[async_trait]
//! impl HttpClient for MyHttpClient {
//!     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
//!         // Implementation
//!         todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod http;
pub mod logging;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use storage::SettingsStore;
