//! 异步命令
//!
//! Update 层不直接执行 I/O，而是返回 Command，
//! 由主循环交给 backend::TaskRunner 在 tokio 运行时上执行。

use std::path::PathBuf;

use crate::model::RequestId;

/// 需要在后台执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 列出路径下的条目（空路径为 bucket 列表）
    LoadEntries { id: RequestId, path: String },

    /// 读取对象完整内容用于预览
    LoadFile {
        id: RequestId,
        bucket: String,
        object: String,
    },

    /// 读取对象并写入本地目录 `dir/name`
    Download {
        bucket: String,
        object: String,
        dir: PathBuf,
        name: String,
    },

    /// 写入系统剪贴板
    CopyToClipboard { text: String },
}
