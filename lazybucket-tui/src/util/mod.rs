//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod signal;         // SIGINT / SIGTERM
//!         mod format;         // 大小、时间与宽度截断
//!
//!
//!     终端：
//!         init_terminal()             启用 raw mode，进入备用屏幕
//!         restore_terminal(&mut t)    离开备用屏幕，恢复光标
//!         force_restore_terminal()    信号处理路径上使用，不需要 Terminal
//!
//!         注意：无论程序是正常退出、出错还是收到终止信号，都必须恢复终端！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     信号：
//!         shutdown_signal() 在 tokio 运行时上等待，
//!         返回后由 main.rs 恢复终端并以状态码 0 退出。
//!

mod format;
mod signal;
mod terminal;

pub use format::{
    format_size, format_time, truncate_to_width, DETAILS_TIME_FORMAT, LIST_TIME_FORMAT,
};
pub use signal::shutdown_signal;
pub use terminal::{force_restore_terminal, init_terminal, restore_terminal, Term};
