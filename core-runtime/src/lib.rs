//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the drive-list core:
//! - Logging and tracing infrastructure
//! - Configuration management (bridges, endpoints, timeouts, retry)
//! - Persisted plugin options (the API key)
//!
//! ## Overview
//!
//! Other crates depend on this one for their configuration types and the
//! logging conventions used across the workspace. Nothing here touches the
//! network.

pub mod config;
pub mod error;
pub mod logging;
pub mod options;

pub use config::{DriveEndpoints, DriveListConfig, DriveListConfigBuilder};
pub use error::{Error, Result};
pub use options::DriveListOptions;
