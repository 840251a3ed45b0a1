//! 应用主状态结构

use std::path::PathBuf;

use lazybucket_gateway::Entry;

use super::{Mode, NavigationState, Notice, RequestTracker, ViewerState, VIEWER_CHROME_ROWS};

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前模式
    pub mode: Mode,

    /// 文件预览状态
    pub viewer: ViewerState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 临时提示（覆盖状态栏消息）
    pub notice: Option<Notice>,

    /// 是否显示完整帮助
    pub show_help: bool,

    /// 终端尺寸 (宽, 高)
    pub size: (u16, u16),

    /// 异步请求追踪
    pub requests: RequestTracker,

    /// 下载目录
    pub download_dir: PathBuf,
}

impl App {
    /// 创建新的应用实例
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            should_quit: false,
            navigation: NavigationState::new(),
            mode: Mode::Browsing,
            viewer: ViewerState::new(),
            status_message: None,
            notice: None,
            show_help: false,
            size: (0, 0),
            requests: RequestTracker::new(),
            download_dir,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 记录终端尺寸，同时更新预览区高度
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.viewer.set_terminal_height(height);
    }

    /// 列表翻页的步长
    pub fn list_page_size(&self) -> usize {
        usize::from(self.size.1.saturating_sub(VIEWER_CHROME_ROWS).max(1))
    }

    /// 当前选中的条目
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.navigation.selected_entry()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}
