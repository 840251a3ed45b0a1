//! GCS error mapping

use crate::error::GatewayError;
use crate::traits::{ErrorContext, GatewayErrorMapper, RawApiError};

use super::{GcsErrorResponse, GcsGateway};

impl GcsGateway {
    /// 从错误响应体中取出可读的错误消息
    pub(crate) fn error_message(body: &[u8]) -> String {
        match serde_json::from_slice::<GcsErrorResponse>(body) {
            Ok(resp) if !resp.error.message.is_empty() => resp.error.message,
            Ok(resp) if resp.error.code != 0 => format!("error code {}", resp.error.code),
            _ => String::from_utf8_lossy(body).trim().to_string(),
        }
    }
}

/// GCS 状态码映射
/// Reference: <https://cloud.google.com/storage/docs/json_api/v1/status-codes>
impl GatewayErrorMapper for GcsGateway {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> GatewayError {
        let raw_message = (!raw.message.is_empty()).then(|| raw.message.clone());

        match raw.status {
            // 401: Authentication required / invalid credentials
            401 => GatewayError::Unauthenticated { raw_message },

            // 403: Forbidden (missing IAM permission, billing disabled, ...)
            403 => GatewayError::PermissionDenied { raw_message },

            // 404: bucket or object does not exist
            404 => match (context.bucket, context.object) {
                (Some(bucket), Some(object)) => GatewayError::ObjectNotFound { bucket, object },
                (Some(bucket), None) => GatewayError::BucketNotFound { bucket },
                _ => GatewayError::Unknown {
                    status: raw.status,
                    raw_message: raw.message,
                },
            },

            // 429: Too many requests
            429 => GatewayError::RateLimited {
                retry_after: context.retry_after,
            },

            // Other error fallback
            status => GatewayError::Unknown {
                status,
                raw_message: raw.message,
            },
        }
    }
}
