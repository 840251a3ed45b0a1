//! # lazybucket-gateway
//!
//! Storage gateway used by the `lazybucket` terminal browser: lists buckets,
//! lists one level of "folders" and objects under a prefix, and reads whole
//! objects from Google Cloud Storage.
//!
//! The gateway is stateless request/response. Navigation state (current
//! path, history, selection) is owned by the caller.
//!
//! ## Addresses
//!
//! Every [`Entry`] carries a `full_path` of the form `bucket` or
//! `bucket/path`. The empty string denotes the account root (the bucket
//! list). Folder addresses keep their trailing `/`, so a folder `a/` and an
//! object `a` in the same bucket never collide.
//!
//! ## Credentials
//!
//! | Configuration | Auth |
//! |---------------|------|
//! | `access_token` set | Bearer token as given |
//! | `endpoint` set (emulator) | none |
//! | otherwise | `gcloud auth application-default print-access-token`, then `gcloud auth print-access-token`, cached |
//!
//! ## TLS Backend
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lazybucket_gateway::{GatewayConfig, StorageGateway, create_gateway, parse_address};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = create_gateway(&GatewayConfig {
//!         project_id: "my-project".to_string(),
//!         ..GatewayConfig::default()
//!     })?;
//!
//!     for bucket in gateway.list_containers().await? {
//!         println!("{}", bucket.name);
//!     }
//!
//!     let (bucket, prefix) = parse_address("my-bucket/logs/");
//!     for entry in gateway.list_children(bucket, prefix).await? {
//!         println!("{} {}", entry.display_path(), entry.size_bytes);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, GatewayError>`](GatewayError). Nothing is
//! retried; [`GatewayError::is_expected`] separates user-facing conditions
//! (permission denied, not found) from genuine failures for log levels.

mod error;
mod factory;
mod http_client;
mod listing;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{GatewayError, Result};

// Re-export factory
pub use factory::{GatewayConfig, create_gateway};

// Re-export core trait only (internal traits are not exported)
pub use traits::StorageGateway;

// Re-export types
pub use listing::{ListedObject, build_listing};
pub use types::{Entry, EntryKind, PARENT_ENTRY_NAME};

// Re-export path helpers
pub use utils::path::{
    SEPARATOR, URI_SCHEME, canonical_uri, ensure_trailing_separator, join_address, leaf_name,
    parent_prefix, parse_address,
};

// Re-export concrete gateway
pub use providers::{GcloudLogin, GcsGateway, TokenSource};
