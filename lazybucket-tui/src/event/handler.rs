//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::{Action, Keymap};
use crate::message::{AppMessage, EntryMessage, NavigationMessage, ViewerMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回消息
pub fn handle_event(event: Event, app: &App, keymap: &Keymap) -> AppMessage {
    match event {
        Event::Key(key) => handle_key_event(key, app, keymap),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> AppMessage {
    // 只处理按下事件（Windows 上还会收到释放事件）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    let Some(action) = keymap.action_for(&key) else {
        return AppMessage::Noop;
    };

    if app.mode.is_viewing() {
        handle_viewer_action(action)
    } else {
        handle_browser_action(action)
    }
}

/// 预览模式：只保留退出、返回和滚动
fn handle_viewer_action(action: Action) -> AppMessage {
    let msg = match action {
        Action::Quit => return AppMessage::Quit,
        Action::Back => ViewerMessage::Close,
        Action::Up => ViewerMessage::ScrollUp,
        Action::Down => ViewerMessage::ScrollDown,
        Action::PageUp => ViewerMessage::PageUp,
        Action::PageDown => ViewerMessage::PageDown,
        Action::Top => ViewerMessage::Top,
        Action::Bottom => ViewerMessage::Bottom,
        _ => return AppMessage::Noop,
    };
    AppMessage::Viewer(msg)
}

/// 列表模式
fn handle_browser_action(action: Action) -> AppMessage {
    match action {
        Action::Quit => AppMessage::Quit,
        Action::Help => AppMessage::ToggleHelp,
        Action::Up => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        Action::Down => AppMessage::Navigation(NavigationMessage::SelectNext),
        Action::Top => AppMessage::Navigation(NavigationMessage::SelectFirst),
        Action::Bottom => AppMessage::Navigation(NavigationMessage::SelectLast),
        Action::PageUp => AppMessage::Navigation(NavigationMessage::PageUp),
        Action::PageDown => AppMessage::Navigation(NavigationMessage::PageDown),
        Action::Open => AppMessage::Navigation(NavigationMessage::Open),
        Action::Back => AppMessage::Navigation(NavigationMessage::Back),
        Action::Refresh => AppMessage::Navigation(NavigationMessage::Refresh),
        Action::View => AppMessage::Entry(EntryMessage::View),
        Action::Download => AppMessage::Entry(EntryMessage::Download),
        Action::CopyUri => AppMessage::Entry(EntryMessage::CopyUri),
    }
}
