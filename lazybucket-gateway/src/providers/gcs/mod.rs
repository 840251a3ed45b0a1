//! Google Cloud Storage gateway (JSON API)

mod error;
mod http;
mod provider;
mod token;
mod types;

use reqwest::Client;

pub use token::{GcloudLogin, TokenSource};

pub(crate) use types::{GcsBucketList, GcsErrorResponse, GcsObjectList};

/// 公共 GCS JSON API 地址
pub(crate) const GCS_API_BASE: &str = "https://storage.googleapis.com";
/// 单页最大条目数
pub(crate) const MAX_PAGE_SIZE: u32 = 1000;

/// Google Cloud Storage gateway
pub struct GcsGateway {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) project_id: String,
    pub(crate) token: TokenSource,
}

impl GcsGateway {
    /// 创建 gateway
    ///
    /// `endpoint` 为 None 时使用公共 API 地址；模拟器地址可不带协议前缀。
    pub fn new(
        client: Client,
        project_id: String,
        endpoint: Option<String>,
        token: TokenSource,
    ) -> Self {
        Self {
            client,
            endpoint: normalize_endpoint(endpoint.as_deref()),
            project_id,
            token,
        }
    }

    /// API 地址
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// 补全协议前缀并去掉末尾的 `/`
fn normalize_endpoint(endpoint: Option<&str>) -> String {
    let Some(raw) = endpoint.map(str::trim).filter(|e| !e.is_empty()) else {
        return GCS_API_BASE.to_string();
    };
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    with_scheme.trim_end_matches('/').to_string()
}
