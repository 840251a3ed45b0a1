//! 访问令牌来源
//!
//! 不实现任何交互式认证流程：令牌要么直接给出，要么向外部
//! `gcloud` 命令索取并在进程内缓存一段时间。
//!
//! gcloud 依次尝试：
//!     1. Application Default Credentials
//!        （`gcloud auth application-default login` 或 `GOOGLE_APPLICATION_CREDENTIALS`）
//!     2. 用户登录（`gcloud auth login`）

use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::sync::Mutex;

use crate::error::{GatewayError, Result};

/// gcloud 令牌缓存时长（令牌本身有效期为一小时）
const GCLOUD_TOKEN_TTL: Duration = Duration::from_secs(45 * 60);

/// gcloud 可执行文件
const GCLOUD_PROGRAM: &str = "gcloud";

/// gcloud 的凭证类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcloudLogin {
    /// `gcloud auth application-default print-access-token`
    ApplicationDefault,
    /// `gcloud auth print-access-token`
    User,
}

impl GcloudLogin {
    /// 默认尝试顺序
    pub const ORDER: [Self; 2] = [Self::ApplicationDefault, Self::User];

    fn args(self) -> &'static [&'static str] {
        match self {
            Self::ApplicationDefault => &["auth", "application-default", "print-access-token"],
            Self::User => &["auth", "print-access-token"],
        }
    }
}

/// 缓存的令牌
#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    fetched_at: Instant,
}

/// gcloud 令牌及其缓存
#[derive(Debug)]
pub struct GcloudToken {
    program: String,
    logins: Vec<GcloudLogin>,
    cache: Mutex<Option<CachedToken>>,
}

impl Default for GcloudToken {
    fn default() -> Self {
        Self {
            program: GCLOUD_PROGRAM.to_string(),
            logins: GcloudLogin::ORDER.to_vec(),
            cache: Mutex::new(None),
        }
    }
}

impl GcloudToken {
    /// 尝试顺序
    pub fn logins(&self) -> &[GcloudLogin] {
        &self.logins
    }

    /// 按顺序尝试各凭证，返回第一个成功的令牌
    async fn fetch(&self) -> Result<String> {
        let mut failures = Vec::with_capacity(self.logins.len());
        for login in &self.logins {
            match run_token_command(&self.program, login.args()).await {
                Ok(token) => {
                    log::debug!("Using {login:?} credentials from gcloud");
                    return Ok(token);
                }
                Err(detail) => {
                    log::debug!("gcloud {login:?} credentials unavailable: {detail}");
                    failures.push(format!("{login:?}: {detail}"));
                }
            }
        }
        Err(GatewayError::Credentials {
            detail: format!(
                "{} (run `gcloud auth application-default login`)",
                failures.join("; ")
            ),
        })
    }
}

/// 访问令牌来源
#[derive(Debug)]
pub enum TokenSource {
    /// 不带认证头（本地模拟器）
    Anonymous,
    /// 固定令牌
    Static(String),
    /// 通过 gcloud 获取（先 ADC，后用户登录）
    Gcloud(GcloudToken),
}

impl TokenSource {
    /// 使用 gcloud 命令行的令牌来源
    pub fn gcloud() -> Self {
        Self::Gcloud(GcloudToken::default())
    }

    /// 获取当前可用的令牌；`Anonymous` 返回 None
    pub async fn token(&self) -> Result<Option<String>> {
        match self {
            Self::Anonymous => Ok(None),
            Self::Static(token) => Ok(Some(token.clone())),
            Self::Gcloud(gcloud) => {
                let mut slot = gcloud.cache.lock().await;
                if let Some(cached) = slot.as_ref()
                    && cached.fetched_at.elapsed() < GCLOUD_TOKEN_TTL
                {
                    return Ok(Some(cached.value.clone()));
                }

                let value = gcloud.fetch().await?;
                *slot = Some(CachedToken {
                    value: value.clone(),
                    fetched_at: Instant::now(),
                });
                Ok(Some(value))
            }
        }
    }

    /// 丢弃缓存的令牌（收到 401 后调用，下次请求重新获取）
    pub async fn invalidate(&self) {
        if let Self::Gcloud(gcloud) = self {
            gcloud.cache.lock().await.take();
        }
    }
}

/// 运行一次令牌命令，失败时返回原因
async fn run_token_command(program: &str, args: &[&str]) -> std::result::Result<String, String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| format!("failed to run {program}: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{program} exited with {}: {}", output.status, stderr.trim()));
    }

    parse_token_output(&output.stdout)
        .ok_or_else(|| format!("{program} returned an empty access token"))
}

/// 取输出中的第一行非空内容作为令牌
fn parse_token_output(stdout: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(ToString::to_string)
}
