//! 导航状态定义

use lazybucket_gateway::Entry;

/// 导航状态
///
/// `current_path` 为空表示 bucket 列表（账号根），
/// 否则为 `bucket` 或 `bucket/prefix/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// 当前路径
    pub current_path: String,
    /// 历史路径栈（每次进入容器时压入）
    pub path_history: Vec<String>,
    /// 当前可见条目
    pub entries: Vec<Entry>,
    /// 当前选中项的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项（到顶不循环）
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项（到底不循环）
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    /// 向上翻页
    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page.max(1));
    }

    /// 向下翻页
    pub fn page_down(&mut self, page: usize) {
        let last = self.entries.len().saturating_sub(1);
        self.selected = (self.selected + page.max(1)).min(last);
    }

    /// 当前选中的条目
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// 是否位于账号根
    pub fn is_at_root(&self) -> bool {
        self.current_path.is_empty()
    }

    /// 列表加载成功后一次性写入路径、历史和条目，选中项回到首位
    pub fn commit(&mut self, path: String, history: Vec<String>, entries: Vec<Entry>) {
        self.current_path = path;
        self.path_history = history;
        self.entries = entries;
        self.selected = 0;
    }
}
