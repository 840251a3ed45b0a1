//! 网关公共工具函数

use reqwest::Client;

use crate::error::{GatewayError, Result};

/// 默认 User-Agent
const USER_AGENT: &str = concat!("lazybucket/", env!("CARGO_PKG_VERSION"));

/// 创建 HTTP Client
///
/// 不设置额外超时，沿用传输层默认值。
pub fn create_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| GatewayError::Network {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}
