//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入和终端尺寸变化转换为 AppMessage。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射（可由 JSON 文件覆盖）
//!
//!         pub use handler::{handle_event, poll_event};
//!         pub use keymap::{Action, Keymap};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 先经 Keymap 翻译为 Action
//!             Event::Resize(width, height)        // 转为 AppMessage::Resize
//!             其他                                 // AppMessage::Noop
//!
//!         Action 到消息的翻译取决于当前模式：
//!             - ViewingFile：back 关闭预览，quit 退出，移动类按键滚动内容，其余忽略
//!             - 其他模式：导航、条目操作、帮助与退出
//!
//!
//!     快捷键默认值：
//!         ↑/k  ↓/j  home/g  end/G  pgup/ctrl+u  pgdn/ctrl+d
//!         enter 打开   backspace/b/esc 返回   v 预览   d 下载   c 复制 URI
//!         r 刷新   ?/h 帮助   q/ctrl+c 退出
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{Action, Keymap};
