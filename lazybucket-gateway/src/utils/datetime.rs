//! 日期时间反序列化工具
//!
//! GCS JSON API 的 `updated` / `timeCreated` 字段为 RFC3339 字符串，
//! 缺失或为 null 时得到 None。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// 反序列化 Option<RFC3339 字符串> 为 Option<`DateTime`<Utc>>
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, with = "super")]
        updated: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[test]
    fn parses_rfc3339_with_millis() {
        let w: Wrapper = serde_json::from_str(r#"{"updated":"2024-03-05T10:20:30.123Z"}"#)
            .expect("valid timestamp");
        let dt = w.updated.expect("present");
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 5));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (10, 20, 30));
    }

    #[test]
    fn missing_field_is_none() {
        let w: Wrapper = serde_json::from_str("{}").expect("empty object");
        assert!(w.updated.is_none());
    }

    #[test]
    fn invalid_timestamp_is_error() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"updated":"yesterday"}"#).is_err());
    }
}
