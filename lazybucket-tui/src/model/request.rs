//! 异步请求的编号与围栏
//!
//! 列表与文件预览各自只认最近一次发出的请求，
//! 编号不匹配的结果一律丢弃。

use std::fmt;

/// 单调递增的请求编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 等待中的列表请求
///
/// 目标路径和历史栈在结果成功返回时才写入导航状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingListing {
    pub id: RequestId,
    pub target_path: String,
    pub target_history: Vec<String>,
}

/// 等待中的文件预览请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingView {
    pub id: RequestId,
    /// 发出请求时所在的路径
    pub origin_path: String,
    /// 预览窗口标题
    pub title: String,
}

/// 请求追踪器
#[derive(Debug, Default)]
pub struct RequestTracker {
    next: u64,
    listing: Option<PendingListing>,
    view: Option<PendingView>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> RequestId {
        self.next += 1;
        RequestId(self.next)
    }

    /// 登记新的列表请求，替换之前未完成的
    pub fn begin_listing(&mut self, target_path: String, target_history: Vec<String>) -> RequestId {
        let id = self.next_id();
        self.listing = Some(PendingListing {
            id,
            target_path,
            target_history,
        });
        id
    }

    /// 编号匹配时取出等待中的列表请求
    pub fn finish_listing(&mut self, id: RequestId) -> Option<PendingListing> {
        match &self.listing {
            Some(pending) if pending.id == id => self.listing.take(),
            _ => None,
        }
    }

    /// 登记新的预览请求
    pub fn begin_view(&mut self, origin_path: String, title: String) -> RequestId {
        let id = self.next_id();
        self.view = Some(PendingView {
            id,
            origin_path,
            title,
        });
        id
    }

    /// 编号匹配时取出等待中的预览请求
    pub fn finish_view(&mut self, id: RequestId) -> Option<PendingView> {
        match &self.view {
            Some(pending) if pending.id == id => self.view.take(),
            _ => None,
        }
    }

    /// 放弃在途的列表请求，之后到达的结果按过期处理
    pub fn cancel_listing(&mut self) -> Option<PendingListing> {
        self.listing.take()
    }

    /// 在途列表请求的目标路径
    pub fn listing_target(&self) -> Option<&str> {
        self.listing.as_ref().map(|p| p.target_path.as_str())
    }
}
