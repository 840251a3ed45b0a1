//! Generic HTTP client tools
//!
//! Shared request handling for gateway backends: sending requests, logging,
//! reading the body and turning transport failures into [`GatewayError`]s.
//! Each backend still builds its own `RequestBuilder` (URL, auth headers).
//!
//! No retries are performed; a failed request surfaces to the caller as is.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::utils::log_sanitizer::body_preview;

/// A fully buffered HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Retry-After` header in seconds, if present.
    pub retry_after: Option<u64>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the buffered response
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, query)
    /// * `gateway_name` - gateway name (for logging)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - any status except 429 and 502..=504
    /// * `Err(GatewayError::RateLimited)` - HTTP 429
    /// * `Err(GatewayError::Network)` - transport error or HTTP 502..=504
    pub async fn execute_request(
        request_builder: RequestBuilder,
        gateway_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<HttpResponse, GatewayError> {
        log::debug!("[{gateway_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| GatewayError::Network {
                detail: e.to_string(),
            })?;

        let status = response.status().as_u16();
        log::debug!("[{gateway_name}] Response Status: {status}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status == 429 {
            log::warn!("[{gateway_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(GatewayError::RateLimited { retry_after });
        }

        if matches!(status, 502..=504) {
            let body = response.bytes().await.unwrap_or_default();
            log::warn!("[{gateway_name}] Server error (HTTP {status})");
            return Err(GatewayError::Network {
                detail: format!("HTTP {status}: {}", body_preview(&body)),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Network {
                detail: format!("Failed to read response body: {e}"),
            })?
            .to_vec();

        log::debug!(
            "[{gateway_name}] Response Body ({} bytes): {}",
            body.len(),
            body_preview(&body)
        );

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(GatewayError::Parse)` - parsing failed
    pub fn parse_json<T>(body: &[u8], gateway_name: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(body).map_err(|e| {
            log::error!("[{gateway_name}] JSON parse failed: {e}");
            log::error!(
                "[{gateway_name}] Raw response: {}",
                body_preview(body)
            );
            GatewayError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn parse_json_ok() {
        let parsed: Sample =
            HttpUtils::parse_json(br#"{"name":"alpha"}"#, "test").expect("valid json");
        assert_eq!(parsed.name, "alpha");
    }

    #[test]
    fn parse_json_error_is_parse_variant() {
        let err = HttpUtils::parse_json::<Sample>(b"not json", "test").unwrap_err();
        assert!(matches!(err, GatewayError::Parse { .. }));
    }

    #[test]
    fn success_range() {
        let ok = HttpResponse {
            status: 204,
            retry_after: None,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        let not_found = HttpResponse {
            status: 404,
            retry_after: None,
            body: b"missing".to_vec(),
        };
        assert!(!not_found.is_success());
    }
}
