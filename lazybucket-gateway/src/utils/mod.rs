//! Utility modules.

/// Date/time deserialization helpers for the GCS JSON API.
pub mod datetime;

/// Log sanitization utilities to keep object bodies out of logs.
pub mod log_sanitizer;

/// Address and prefix decomposition.
pub mod path;
