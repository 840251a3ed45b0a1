//! 条目操作消息
//!
//! 只对对象生效，选中容器时不做任何事

/// 条目操作消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMessage {
    /// 预览文件内容
    View,
    /// 下载到本地目录
    Download,
    /// 复制 `gs://` URI 到剪贴板
    CopyUri,
}
