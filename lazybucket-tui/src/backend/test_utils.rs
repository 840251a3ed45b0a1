//! 测试辅助模块
//!
//! 内存中的网关与剪贴板 mock。

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use lazybucket_gateway::{
    build_listing, ensure_trailing_separator, Entry, GatewayError, ListedObject, Result,
    StorageGateway,
};
use tokio::sync::Mutex;

use super::{Clipboard, TaskError};

// ===== MockGateway =====

/// 以 `bucket -> (object -> bytes)` 保存全部数据
#[derive(Default)]
pub struct MockGateway {
    buckets: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object(mut self, bucket: &str, object: &str, bytes: &[u8]) -> Self {
        self.buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(object.to_string(), bytes.to_vec());
        self
    }
}

#[async_trait]
impl StorageGateway for MockGateway {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_containers(&self) -> Result<Vec<Entry>> {
        Ok(self
            .buckets
            .keys()
            .map(|name| Entry::bucket(name.clone(), None))
            .collect())
    }

    async fn list_children(&self, bucket: &str, prefix: &str) -> Result<Vec<Entry>> {
        let objects = self
            .buckets
            .get(bucket)
            .ok_or_else(|| GatewayError::BucketNotFound {
                bucket: bucket.to_string(),
            })?;
        let prefix = ensure_trailing_separator(prefix);

        // 模拟带分隔符的列举：下一层的公共前缀 + 当前层的对象
        let mut prefixes = Vec::new();
        let mut listed = Vec::new();
        for (name, bytes) in objects {
            let Some(rest) = name.strip_prefix(&prefix) else {
                continue;
            };
            match rest.find('/') {
                Some(idx) => prefixes.push(format!("{prefix}{}", &rest[..=idx])),
                None => listed.push(ListedObject {
                    name: name.clone(),
                    size: bytes.len() as u64,
                    updated: None,
                }),
            }
        }

        Ok(build_listing(bucket, &prefix, &prefixes, &listed))
    }

    async fn fetch_content(&self, bucket: &str, object: &str) -> Result<Vec<u8>> {
        self.buckets
            .get(bucket)
            .and_then(|objects| objects.get(object))
            .cloned()
            .ok_or_else(|| GatewayError::ObjectNotFound {
                bucket: bucket.to_string(),
                object: object.to_string(),
            })
    }
}

// ===== MockClipboard =====

pub struct MockClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            copied: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            copied: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn copied(&self) -> Vec<String> {
        self.copied.lock().await.clone()
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn copy(&self, text: &str) -> std::result::Result<(), TaskError> {
        if self.fail {
            return Err(TaskError::Clipboard {
                detail: "no clipboard command found".to_string(),
            });
        }
        self.copied.lock().await.push(text.to_string());
        Ok(())
    }
}

// ===== 临时目录 =====

/// 每次调用返回一个不同的临时目录路径（不创建）
pub fn scratch_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "lazybucket-{label}-{}-{n}",
        std::process::id()
    ))
}
