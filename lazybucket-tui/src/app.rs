//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环只在主线程上运行，也只有主线程会修改 App：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(app, ...))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event(100ms) {        // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, app, keymap);     // 翻译为消息
//!         runner.spawn_all(update(app, msg))              // 更新状态，派发命令
//!     }
//!     while let Ok(msg) = rx.try_recv() {             // 取出全部后台任务结果
//!         runner.spawn_all(update(app, msg))
//!     }
//!     每 250ms 发送一次 Tick                           // 驱动提示倒计时
//! }
//!
//!
//! 退出时不等待在途任务，运行时由 main.rs 在后台关闭。

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::TaskRunner;
use crate::event::{self, Keymap};
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view::{self, ThemeColors};

/// 输入轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Tick 间隔
const TICK_RATE: Duration = Duration::from_millis(250);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    colors: &ThemeColors,
    keymap: &Keymap,
    runner: &TaskRunner,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    runner.spawn_all(update::start(app));
    let mut last_tick = Instant::now();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, colors, keymap, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app, keymap);
            runner.spawn_all(update::update(app, msg));
        }

        // 4. 后台任务结果
        while let Ok(msg) = rx.try_recv() {
            runner.spawn_all(update::update(app, msg));
        }

        // 5. 定时 Tick
        if last_tick.elapsed() >= TICK_RATE {
            runner.spawn_all(update::update(app, AppMessage::Tick));
            last_tick = Instant::now();
        }
    }

    Ok(())
}
