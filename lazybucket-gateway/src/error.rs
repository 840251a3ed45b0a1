use thiserror::Error;

/// Unified error type for all storage gateway operations.
///
/// Each variant carries enough context to be shown on a single status line.
/// None of them is fatal to the caller: the gateway performs no retries, the
/// user is expected to refresh or navigate again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The request carried no usable credentials (HTTP 401).
    #[error("Unauthenticated: {}", raw_message.as_deref().unwrap_or("missing or expired credentials"))]
    Unauthenticated {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated identity lacks permission for the request (HTTP 403).
    #[error("Permission denied: {}", raw_message.as_deref().unwrap_or("access forbidden"))]
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The bucket does not exist.
    #[error("Bucket '{bucket}' not found")]
    BucketNotFound {
        /// Bucket name.
        bucket: String,
    },

    /// The object does not exist.
    #[error("Object '{object}' not found in bucket '{bucket}'")]
    ObjectNotFound {
        /// Bucket name.
        bucket: String,
        /// Object path inside the bucket.
        object: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    #[error("Rate limited{}", retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default())]
    RateLimited {
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
    },

    /// An access token could not be obtained.
    #[error("Credential error: {detail}")]
    Credentials {
        /// Error details.
        detail: String,
    },

    /// Failed to parse the API response.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    #[error("HTTP {status}: {raw_message}")]
    Unknown {
        /// HTTP status code.
        status: u16,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl GatewayError {
    /// 是否为预期行为（权限不足、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated { .. }
                | Self::PermissionDenied { .. }
                | Self::BucketNotFound { .. }
                | Self::ObjectNotFound { .. }
                | Self::RateLimited { .. }
        )
    }
}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;
