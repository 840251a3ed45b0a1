//! GCS HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ErrorContext, GatewayErrorMapper, RawApiError};
use crate::StorageGateway;

use super::GcsGateway;

impl GcsGateway {
    /// 执行 GET 请求，附带认证头，非 2xx 状态映射为统一错误
    async fn send_get(
        &self,
        url: &str,
        query: &[(&str, &str)],
        context: ErrorContext,
    ) -> Result<HttpResponse> {
        let mut request = self.client.get(url).query(query);
        if let Some(token) = self.token.token().await? {
            request = request.bearer_auth(token);
        }

        let response = HttpUtils::execute_request(request, self.id(), "GET", url).await?;
        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 {
            self.token.invalidate().await;
        }

        let message = Self::error_message(&response.body);
        let context = ErrorContext {
            retry_after: response.retry_after,
            ..context
        };
        let err = self.map_error(RawApiError::new(response.status, message), context);
        if err.is_expected() {
            log::warn!("[{}] GET {url} failed: {err}", self.id());
        } else {
            log::error!("[{}] GET {url} failed: {err}", self.id());
        }
        Err(err)
    }

    /// 执行 GET 请求并解析 JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        context: ErrorContext,
    ) -> Result<T> {
        let response = self.send_get(url, query, context).await?;
        HttpUtils::parse_json(&response.body, self.id())
    }

    /// 执行 GET 请求并返回原始字节（`alt=media`）
    pub(crate) async fn get_media(&self, url: &str, context: ErrorContext) -> Result<Vec<u8>> {
        let response = self.send_get(url, &[("alt", "media")], context).await?;
        Ok(response.body)
    }

    /// `/storage/v1/b`
    pub(crate) fn buckets_url(&self) -> String {
        format!("{}/storage/v1/b", self.endpoint)
    }

    /// `/storage/v1/b/{bucket}/o`
    pub(crate) fn objects_url(&self, bucket: &str) -> String {
        format!(
            "{}/storage/v1/b/{}/o",
            self.endpoint,
            urlencoding::encode(bucket)
        )
    }

    /// `/storage/v1/b/{bucket}/o/{object}`，对象名整体编码（含 `/`）
    pub(crate) fn object_url(&self, bucket: &str, object: &str) -> String {
        format!(
            "{}/{}",
            self.objects_url(bucket),
            urlencoding::encode(object)
        )
    }
}
