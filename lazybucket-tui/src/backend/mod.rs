//!
//! src/backend/mod.rs
//! Backend 层：副作用执行
//!
//! Backend 层与 UI 完全解耦。Update 层返回的 Command 在这里执行，
//! 结果以 TaskMessage 的形式通过 mpsc 通道送回主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod runner;         // TaskRunner：在 tokio 运行时上派发 Command
//!         mod download;       // 读取对象并写入本地目录
//!         mod clipboard;      // 剪贴板（平台命令）
//!         mod error;          // TaskError
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、TaskRunner
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有 StorageGateway、Clipboard 与发送端 tx。
//!
//!         Command::LoadEntries    ──▶ TaskMessage::EntriesLoaded
//!         Command::LoadFile       ──▶ TaskMessage::FileLoaded
//!         Command::Download       ──▶ TaskMessage::DownloadFinished
//!         Command::CopyToClipboard──▶ TaskMessage::ClipboardFinished
//!
//!     任务之间没有顺序保证；过期结果由 Update 层按 RequestId 丢弃。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、错误
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     TaskError 只会出现在状态栏，不会让程序退出：
//!         - Gateway       网关错误（网络、权限、对象不存在……）
//!         - LocalIo       写本地文件失败
//!         - Clipboard     没有可用的剪贴板命令
//!

mod clipboard;
mod download;
mod error;
mod runner;

#[cfg(test)]
pub(crate) mod test_utils;

pub use clipboard::{Clipboard, SystemClipboard};
pub use error::TaskError;
pub use runner::TaskRunner;
