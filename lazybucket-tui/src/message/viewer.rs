//! 文件预览消息

/// 预览消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMessage {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// 关闭预览，回到列表
    Close,
}
