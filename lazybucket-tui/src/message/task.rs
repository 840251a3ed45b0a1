//! 后台任务结果消息
//!
//! 每个后台任务恰好回送一条 TaskMessage

use std::path::PathBuf;

use lazybucket_gateway::{Entry, GatewayError};

use crate::backend::TaskError;
use crate::model::RequestId;

/// 后台任务结果
#[derive(Debug)]
pub enum TaskMessage {
    /// 列表加载完成
    EntriesLoaded {
        id: RequestId,
        result: Result<Vec<Entry>, GatewayError>,
    },

    /// 文件内容读取完成
    FileLoaded {
        id: RequestId,
        result: Result<Vec<u8>, GatewayError>,
    },

    /// 下载完成（不做围栏，按目标文件区分）
    DownloadFinished {
        target: PathBuf,
        result: Result<(), TaskError>,
    },

    /// 剪贴板写入完成
    ClipboardFinished { result: Result<(), TaskError> },
}
