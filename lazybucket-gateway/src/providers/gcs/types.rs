//! GCS JSON API 原生类型

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /storage/v1/b` 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsBucketList {
    #[serde(default)]
    pub items: Vec<GcsBucket>,
    pub next_page_token: Option<String>,
}

/// Bucket 资源（仅使用到的字段）
#[derive(Debug, Deserialize)]
pub struct GcsBucket {
    pub name: String,
    #[serde(default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub updated: Option<DateTime<Utc>>,
}

/// `GET /storage/v1/b/{bucket}/o` 响应
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcsObjectList {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub items: Vec<GcsObject>,
    pub next_page_token: Option<String>,
}

/// Object 资源（仅使用到的字段）
#[derive(Debug, Deserialize)]
pub struct GcsObject {
    pub name: String,
    /// API 以十进制字符串返回 uint64
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub updated: Option<DateTime<Utc>>,
}

impl GcsObject {
    /// 字节数，无法解析时为 0
    pub fn size_bytes(&self) -> u64 {
        self.size
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }
}

/// 错误响应
#[derive(Debug, Deserialize)]
pub struct GcsErrorResponse {
    pub error: GcsErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct GcsErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_list_with_prefixes_and_items() {
        let body = r#"{
            "kind": "storage#objects",
            "prefixes": ["logs/"],
            "items": [
                {"name": "readme.txt", "size": "120", "updated": "2024-01-02T03:04:05.000Z"},
                {"name": "empty"}
            ],
            "nextPageToken": "abc"
        }"#;
        let list: GcsObjectList = serde_json::from_str(body).expect("valid listing");
        assert_eq!(list.prefixes, vec!["logs/".to_string()]);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].size_bytes(), 120);
        assert!(list.items[0].updated.is_some());
        assert_eq!(list.items[1].size_bytes(), 0);
        assert_eq!(list.next_page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_object_list() {
        let list: GcsObjectList =
            serde_json::from_str(r#"{"kind":"storage#objects"}"#).expect("valid listing");
        assert!(list.prefixes.is_empty());
        assert!(list.items.is_empty());
        assert!(list.next_page_token.is_none());
    }

    #[test]
    fn bucket_list() {
        let body = r#"{"items":[{"name":"alpha","updated":"2023-05-06T07:08:09Z"},{"name":"beta"}]}"#;
        let list: GcsBucketList = serde_json::from_str(body).expect("valid listing");
        let names: Vec<&str> = list.items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn error_response() {
        let body = r#"{"error":{"code":403,"message":"caller does not have storage.objects.list access"}}"#;
        let err: GcsErrorResponse = serde_json::from_str(body).expect("valid error");
        assert_eq!(err.error.code, 403);
        assert!(err.error.message.contains("storage.objects.list"));
    }
}
