//! 导航相关消息

/// 导航消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 向上翻页
    PageUp,
    /// 向下翻页
    PageDown,
    /// 打开选中的容器
    Open,
    /// 返回上一级
    Back,
    /// 重新加载当前路径
    Refresh,
}
