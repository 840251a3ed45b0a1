//! 应用主消息枚举

use super::{EntryMessage, NavigationMessage, TaskMessage, ViewerMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换完整帮助
    ToggleHelp,

    /// 终端尺寸变化 (宽, 高)
    Resize(u16, u16),

    /// 定时 Tick（驱动提示倒计时）
    Tick,

    /// 列表导航相关消息
    Navigation(NavigationMessage),

    /// 针对选中条目的操作
    Entry(EntryMessage),

    /// 文件预览相关消息
    Viewer(ViewerMessage),

    /// 后台任务完成
    Task(TaskMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
