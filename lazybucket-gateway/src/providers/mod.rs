//! Storage gateway implementations

/// Shared utilities used by gateway implementations.
pub mod common;

mod gcs;

pub use gcs::{GcloudLogin, GcsGateway, TokenSource};
