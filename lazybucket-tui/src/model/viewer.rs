//! 文件预览状态

/// 预览区之外占用的行数：标题栏、状态栏、帮助行与预览边框
pub const VIEWER_CHROME_ROWS: u16 = 5;

/// 制表符展开宽度
const TAB_WIDTH: usize = 4;

/// 文件预览状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    /// 标题（对象地址）
    pub title: String,
    /// 文件内容，未打开时为 None
    pub content: Option<String>,
    /// 首行偏移
    pub scroll: usize,
    /// 可见行数
    pub height: usize,
    line_count: usize,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开新内容并回到顶部
    pub fn open(&mut self, title: impl Into<String>, content: &str) {
        let text = content.replace('\t', &" ".repeat(TAB_WIDTH));
        self.line_count = text.lines().count();
        self.title = title.into();
        self.content = Some(text);
        self.scroll = 0;
    }

    /// 关闭预览并释放内容
    pub fn close(&mut self) {
        self.content = None;
        self.title.clear();
        self.scroll = 0;
        self.line_count = 0;
    }

    /// 内容总行数
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// 根据终端高度更新可见行数
    pub fn set_terminal_height(&mut self, rows: u16) {
        self.height = usize::from(rows.saturating_sub(VIEWER_CHROME_ROWS).max(1));
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.line_count.saturating_sub(self.height.max(1))
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height.max(1));
    }

    pub fn top(&mut self) {
        self.scroll = 0;
    }

    pub fn bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}
