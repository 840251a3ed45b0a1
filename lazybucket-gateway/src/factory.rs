//! Gateway factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::providers::{GcsGateway, TokenSource};
use crate::traits::StorageGateway;

/// Connection settings for [`create_gateway`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Project whose buckets are listed at the account root.
    pub project_id: String,
    /// Emulator or alternative API endpoint. When set, requests are sent
    /// without credentials unless `access_token` is also given.
    pub endpoint: Option<String>,
    /// Pre-issued OAuth2 access token.
    pub access_token: Option<String>,
}

impl GatewayConfig {
    /// Picks the credential source for this configuration.
    ///
    /// Explicit token first, then anonymous access for emulators,
    /// otherwise `gcloud` (Application Default Credentials, then the user login).
    fn token_source(&self) -> TokenSource {
        match (&self.access_token, &self.endpoint) {
            (Some(token), _) if !token.trim().is_empty() => {
                TokenSource::Static(token.trim().to_string())
            }
            (_, Some(_)) => TokenSource::Anonymous,
            _ => TokenSource::gcloud(),
        }
    }
}

/// Creates a [`StorageGateway`] for the given configuration.
///
/// The returned gateway is wrapped in `Arc<dyn StorageGateway>` so it can be
/// shared with background tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use lazybucket_gateway::{GatewayConfig, create_gateway};
///
/// let gateway = create_gateway(&GatewayConfig {
///     project_id: "my-project".to_string(),
///     endpoint: Some("localhost:4443".to_string()),
///     access_token: None,
/// }).unwrap();
/// ```
pub fn create_gateway(config: &GatewayConfig) -> Result<Arc<dyn StorageGateway>> {
    let client = create_http_client()?;
    let gateway = GcsGateway::new(
        client,
        config.project_id.clone(),
        config.endpoint.clone(),
        config.token_source(),
    );
    log::info!(
        "Created {} gateway for project '{}' at {}",
        gateway.id(),
        config.project_id,
        gateway.endpoint()
    );
    Ok(Arc::new(gateway))
}
