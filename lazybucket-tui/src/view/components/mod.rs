//! 界面组件

pub mod details;
pub mod entry_list;
pub mod header;
pub mod help;
pub mod statusbar;
pub mod viewer;
