//! 文件预览消息处理

use crate::message::ViewerMessage;
use crate::model::{App, Mode};

/// 处理预览消息
pub fn update(app: &mut App, msg: ViewerMessage) {
    match msg {
        ViewerMessage::ScrollUp => app.viewer.scroll_up(1),
        ViewerMessage::ScrollDown => app.viewer.scroll_down(1),
        ViewerMessage::PageUp => app.viewer.page_up(),
        ViewerMessage::PageDown => app.viewer.page_down(),
        ViewerMessage::Top => app.viewer.top(),
        ViewerMessage::Bottom => app.viewer.bottom(),
        ViewerMessage::Close => {
            // 打开预览时已放弃在途列表，导航状态与预览前一致
            app.viewer.close();
            app.mode = Mode::Browsing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewing(lines: usize) -> App {
        let mut app = App::default();
        app.resize(80, 15);
        let text: String = (0..lines).map(|i| format!("line {i}\n")).collect();
        app.viewer.open("alpha/big.txt", &text);
        app.mode = Mode::ViewingFile;
        app
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut app = viewing(30);
        assert_eq!(app.viewer.height, 10);

        update(&mut app, ViewerMessage::ScrollUp);
        assert_eq!(app.viewer.scroll, 0);

        update(&mut app, ViewerMessage::PageDown);
        assert_eq!(app.viewer.scroll, 10);
        update(&mut app, ViewerMessage::PageDown);
        update(&mut app, ViewerMessage::PageDown);
        assert_eq!(app.viewer.scroll, 20);

        update(&mut app, ViewerMessage::ScrollDown);
        assert_eq!(app.viewer.scroll, 20);

        update(&mut app, ViewerMessage::Top);
        assert_eq!(app.viewer.scroll, 0);
        update(&mut app, ViewerMessage::Bottom);
        assert_eq!(app.viewer.scroll, 20);
        update(&mut app, ViewerMessage::PageUp);
        assert_eq!(app.viewer.scroll, 10);
    }

    #[test]
    fn close_returns_to_browsing() {
        let mut app = viewing(3);
        update(&mut app, ViewerMessage::Close);
        assert_eq!(app.mode, Mode::Browsing);
        assert!(app.viewer.content.is_none());
    }

}
