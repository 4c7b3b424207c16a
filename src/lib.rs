//! Workspace placeholder crate.
//!
//! Exposes the `desktop-shims` feature that maps onto `core-service`, so a
//! host can depend on `drive-list-workspace` and get the desktop wiring
//! (reqwest HTTP client, SQLite settings) without listing each crate.

#[cfg(feature = "desktop-shims")]
pub use core_service::*;
