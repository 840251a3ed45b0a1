//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 列表导航：选择、打开、返回、刷新
//!         mod entry;              // 条目操作：预览、下载、复制 URI
//!         mod viewer;             // 文件预览滚动与关闭
//!         mod task;               // 后台任务结果
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {...}
//!         pub fn start(app: &mut App) -> Vec<Command> {...}
//!
//!
//!     与纯同步的 update 不同，这里的 update 返回 Vec<Command>：
//!         Update 层从不执行 I/O，需要访问网络、磁盘或剪贴板时，
//!         只返回 Command，由主循环交给 backend::TaskRunner。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 请求围栏
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     打开目录时并不立刻修改 current_path 和 path_history：
//!
//!         Open ──▶ requests.begin_listing(target, history) ──▶ Command::LoadEntries { id }
//!                                                                      │
//!         EntriesLoaded { id, Ok(entries) } ◀──────────────────────────┘
//!             └─▶ requests.finish_listing(id)
//!                     Some(pending) ──▶ navigation.commit(target, history, entries)
//!                     None          ──▶ 过期结果，丢弃
//!
//!     失败时路径、历史与条目保持原样，只更新状态栏。
//!     文件预览同理；下载与剪贴板结果只影响状态栏，不做围栏。
//!

mod entry;
mod navigation;
mod task;
mod viewer;

use crate::message::{AppMessage, Command};
use crate::model::{App, Mode};

/// 复制 URI 提示的显示时长（Tick 数）
pub const COPY_NOTICE_TICKS: u8 = 10;

/// 启动时加载 bucket 列表
pub fn start(app: &mut App) -> Vec<Command> {
    request_listing(app, String::new(), Vec::new(), "Loading...")
}

/// 处理应用消息，更新状态，返回需要在后台执行的命令
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }
        AppMessage::ToggleHelp => {
            app.show_help = !app.show_help;
            Vec::new()
        }
        AppMessage::Resize(width, height) => {
            app.resize(width, height);
            Vec::new()
        }
        AppMessage::Tick => {
            if app.notice.as_mut().is_some_and(|notice| notice.tick()) {
                app.notice = None;
            }
            Vec::new()
        }
        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Entry(entry_msg) => entry::update(app, entry_msg),
        AppMessage::Viewer(viewer_msg) => {
            viewer::update(app, viewer_msg);
            Vec::new()
        }
        AppMessage::Task(task_msg) => {
            task::update(app, task_msg);
            Vec::new()
        }
        AppMessage::Noop => Vec::new(),
    }
}

/// 登记列表请求并进入 Loading；路径与历史在结果成功后才写入
fn request_listing(
    app: &mut App,
    target: String,
    history: Vec<String>,
    status: impl Into<String>,
) -> Vec<Command> {
    let id = app.requests.begin_listing(target.clone(), history);
    log::debug!("Listing '{target}' as request {id}");

    if !app.mode.is_viewing() {
        app.mode = Mode::Loading;
    }
    app.set_status(status);

    vec![Command::LoadEntries { id, path: target }]
}
