//! 后台任务错误

use std::io;
use std::path::PathBuf;

use lazybucket_gateway::GatewayError;
use thiserror::Error;

/// 后台任务失败的原因，只会显示在状态栏
#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// 写本地文件失败
    #[error("failed to write {}: {source}", path.display())]
    LocalIo { path: PathBuf, source: io::Error },

    /// 没有可用的剪贴板命令，或命令执行失败
    #[error("clipboard unavailable: {detail}")]
    Clipboard { detail: String },
}
