//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 按键、终端尺寸变化、定时 Tick 以及后台任务的结果，
//! 都被翻译成 AppMessage 交给 Update 层。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod navigation;     // 列表导航子消息
//!         mod entry;          // 条目操作子消息（预览 / 下载 / 复制 URI）
//!         mod viewer;         // 文件预览子消息
//!         mod task;           // 后台任务结果
//!         mod command;        // Update 返回的异步命令
//!
//!
//!     消息的流向：
//!
//!         按键 ──▶ event::handle_event ──▶ AppMessage ──▶ update::update ──▶ Vec<Command>
//!                                              ▲                                  │
//!                                              │                                  ▼
//!                                       TaskMessage ◀──── mpsc ◀──── backend::TaskRunner
//!

mod app;
mod command;
mod entry;
mod navigation;
mod task;
mod viewer;

pub use app::AppMessage;
pub use command::Command;
pub use entry::EntryMessage;
pub use navigation::NavigationMessage;
pub use task::TaskMessage;
pub use viewer::ViewerMessage;
