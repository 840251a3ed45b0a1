use async_trait::async_trait;

use crate::error::{GatewayError, Result};
use crate::types::Entry;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// bucket 名称（用于 `BucketNotFound`）
    pub bucket: Option<String>,
    /// 对象路径（用于 `ObjectNotFound`）
    pub object: Option<String>,
    /// `Retry-After` 秒数（用于 `RateLimited`）
    pub retry_after: Option<u64>,
}

impl ErrorContext {
    pub fn bucket(bucket: &str) -> Self {
        Self {
            bucket: Some(bucket.to_string()),
            ..Self::default()
        }
    }

    pub fn object(bucket: &str, object: &str) -> Self {
        Self {
            bucket: Some(bucket.to_string()),
            object: Some(object.to_string()),
            ..Self::default()
        }
    }
}

/// 错误映射 Trait（内部使用）
/// 后端实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait GatewayErrorMapper {
    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> GatewayError;
}

/// 存储网关 Trait
///
/// 纯请求/响应，不持有任何导航状态。
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// 网关标识符
    fn id(&self) -> &'static str;

    /// 列出当前身份可见的全部 bucket（账号根视图，不含 “..”）
    async fn list_containers(&self) -> Result<Vec<Entry>>;

    /// 列出 `(bucket, prefix)` 下一层的目录与对象，“..” 位于首位
    async fn list_children(&self, bucket: &str, prefix: &str) -> Result<Vec<Entry>>;

    /// 完整读取对象内容（不做流式读取）
    async fn fetch_content(&self, bucket: &str, object: &str) -> Result<Vec<u8>>;
}
