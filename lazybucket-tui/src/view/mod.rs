//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 主体 + 状态栏 + 帮助
//!         mod theme;          // 主题颜色与常用样式
//!         mod components;     // 各区域组件
//!
//!
//!     主布局：
//!
//!         ┌──────────────────────────────────────────────┐
//!         │ LazyBucket │ alpha/logs/                      │  标题栏
//!         ├───────────────────────┬──────────────────────┤
//!         │ 📁 ..                 │ File Details         │
//!         │ 📁 2024               │ Name: a.log          │  主体（宽度 ≥ 80 时分栏，
//!         │ 📄 a.log              │ ...                  │  预览模式下为文件内容）
//!         ├───────────────────────┴──────────────────────┤
//!         │ Loaded 3 items                               │  状态栏（提示优先）
//!         │ ↑/k up • ↓/j down • enter open • ...         │  帮助（? 展开完整帮助）
//!         └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod theme;

pub use layout::render;
pub use theme::{Theme, ThemeColors};
