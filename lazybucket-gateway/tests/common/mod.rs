//! 集成测试共享上下文
//!
//! 需要的环境变量缺失时测试直接跳过（打印原因后返回），
//! 便于在没有 GCS 账号的机器上执行 `--ignored`。

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use lazybucket_gateway::{Entry, EntryKind, GatewayConfig, StorageGateway, create_gateway};

/// 必需的环境变量
pub const REQUIRED_VARS: [&str; 2] = ["GOOGLE_CLOUD_PROJECT", "TEST_BUCKET"];

/// 取得测试上下文；缺少环境变量或创建网关失败时在当前测试中直接返回
#[macro_export]
macro_rules! context_or_skip {
    () => {
        match common::TestContext::from_env() {
            Some(ctx) => ctx,
            None => return,
        }
    };
}

/// 测试上下文
pub struct TestContext {
    pub gateway: Arc<dyn StorageGateway>,
    /// 测试用 bucket，根目录下至少有一个对象
    pub bucket: String,
}

impl TestContext {
    /// 从环境变量构建：`GOOGLE_CLOUD_PROJECT`、`TEST_BUCKET`，
    /// 可选 `STORAGE_EMULATOR_HOST` 与 `GOOGLE_OAUTH_ACCESS_TOKEN`
    pub fn from_env() -> Option<Self> {
        if let Some(missing) = REQUIRED_VARS.iter().find(|var| env::var(var).is_err()) {
            eprintln!("跳过测试: 缺少环境变量 {missing}");
            return None;
        }

        let config = GatewayConfig {
            project_id: env::var("GOOGLE_CLOUD_PROJECT").ok()?,
            endpoint: env::var("STORAGE_EMULATOR_HOST").ok(),
            access_token: env::var("GOOGLE_OAUTH_ACCESS_TOKEN").ok(),
        };
        let gateway = match create_gateway(&config) {
            Ok(gateway) => gateway,
            Err(e) => {
                eprintln!("跳过测试: 无法创建网关: {e}");
                return None;
            }
        };

        Some(Self {
            gateway,
            bucket: env::var("TEST_BUCKET").ok()?,
        })
    }

    /// 列出测试 bucket 的根目录（失败时让测试失败）
    pub async fn bucket_root(&self) -> Vec<Entry> {
        match self.gateway.list_children(&self.bucket, "").await {
            Ok(entries) => entries,
            Err(e) => panic!("list_children({}) 调用失败: {e}", self.bucket),
        }
    }
}

/// 条目中的第一个对象
pub fn first_object(entries: &[Entry]) -> Option<&Entry> {
    entries.iter().find(|e| e.kind == EntryKind::Object)
}
