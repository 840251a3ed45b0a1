//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”，只包含数据结构和简单的状态方法。
//! 所有状态变更都由 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod mode;           // 浏览 / 加载 / 预览
//!         mod navigation;     // 当前路径、历史栈、条目与选中项
//!         mod notice;         // 带倒计时的临时提示
//!         mod request;        // 请求编号与围栏
//!         mod viewer;         // 文件预览
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、导航状态（NavigationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     NavigationState {
//!         current_path: String,       // "" = bucket 列表；否则 "bucket" 或 "bucket/prefix/"
//!         path_history: Vec<String>,  // 每进入一层压入一次
//!         entries: Vec<Entry>,        // 当前列表
//!         selected: usize,            // 选中项
//!     }
//!
//!     路径与历史只在列表加载成功时由 commit() 一次性写入，
//!     加载失败时三者都保持原样。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、请求围栏（RequestTracker）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每次发起列表或预览请求都会得到一个新的 RequestId：
//!
//!         begin_listing(target, history) → id     // 目标暂存在追踪器中
//!         finish_listing(id) → Some(pending)      // 只有最近一次请求能取回
//!
//!     迟到的旧结果取不回 pending，直接丢弃。
//!

mod app;
mod mode;
mod navigation;
mod notice;
mod request;
mod viewer;

pub use app::App;
pub use mode::Mode;
pub use navigation::NavigationState;
pub use notice::Notice;
pub use request::{RequestId, RequestTracker};
pub use viewer::{ViewerState, VIEWER_CHROME_ROWS};
