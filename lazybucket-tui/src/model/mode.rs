//! 界面模式

/// 当前模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 浏览列表
    #[default]
    Browsing,
    /// 列表加载中（旧列表仍然可见）
    Loading,
    /// 预览文件内容
    ViewingFile,
}

impl Mode {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    pub fn is_viewing(self) -> bool {
        self == Self::ViewingFile
    }
}
