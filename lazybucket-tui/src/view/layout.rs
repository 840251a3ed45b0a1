//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::components::{details, entry_list, header, help, statusbar, viewer};
use super::theme::ThemeColors;
use crate::event::Keymap;
use crate::model::App;

/// 宽度达到此值时列表与详情左右分栏
pub const SPLIT_VIEW_MIN_WIDTH: u16 = 80;

/// 渲染主布局
pub fn render(app: &App, colors: &ThemeColors, keymap: &Keymap, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 主体 + 状态栏 + 帮助
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // 标题栏
            Constraint::Min(1),                   // 主体
            Constraint::Length(1),                // 状态栏
            Constraint::Length(help::height(app)), // 帮助
        ])
        .split(size);

    header::render(app, colors, frame, main_layout[0]);
    render_body(app, colors, keymap, frame, main_layout[1]);
    statusbar::render(app, colors, frame, main_layout[2]);
    help::render(app, colors, keymap, frame, main_layout[3]);
}

/// 预览模式显示文件内容，否则显示列表（宽屏时带详情）
fn render_body(app: &App, colors: &ThemeColors, keymap: &Keymap, frame: &mut Frame, area: Rect) {
    if app.mode.is_viewing() {
        viewer::render(app, colors, frame, area);
        return;
    }

    if area.width >= SPLIT_VIEW_MIN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        entry_list::render(app, colors, frame, columns[0]);
        details::render(app, colors, keymap, frame, columns[1]);
    } else {
        entry_list::render(app, colors, frame, area);
    }
}

#[cfg(test)]
mod tests {
    use lazybucket_gateway::{build_listing, Entry, ListedObject};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::{Mode, Notice};
    use crate::view::Theme;

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        let colors = Theme::Dark.colors();
        let keymap = Keymap::default();
        terminal
            .draw(|frame| render(app, &colors, &keymap, frame))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_in_alpha() -> App {
        let mut app = App::default();
        app.resize(100, 30);
        let entries = build_listing(
            "alpha",
            "",
            &["logs/".to_string()],
            &[ListedObject {
                name: "readme.txt".to_string(),
                size: 1536,
                updated: None,
            }],
        );
        app.navigation
            .commit("alpha".to_string(), vec![String::new()], entries);
        app
    }

    #[test]
    fn empty_root_shows_placeholder_in_narrow_terminal() {
        let app = App::default();
        let screen = draw(&app, 40, 12);

        assert!(screen.contains("LazyBucket"));
        assert!(screen.contains("No buckets found"));
        assert!(!screen.contains("File Details"));
    }

    #[test]
    fn empty_folder_shows_placeholder() {
        let mut app = App::default();
        app.navigation.commit(
            "alpha/logs/".to_string(),
            vec![String::new(), "alpha".to_string()],
            Vec::new(),
        );
        let screen = draw(&app, 40, 12);
        assert!(screen.contains("This folder is empty"));
    }

    #[test]
    fn wide_terminal_shows_details_for_selected_object() {
        let mut app = app_in_alpha();
        app.navigation.selected = 2;
        let screen = draw(&app, 100, 30);

        assert!(screen.contains("alpha"));
        assert!(screen.contains("logs"));
        assert!(screen.contains("readme.txt"));
        assert!(screen.contains("File Details"));
        assert!(screen.contains("1.5 KiB"));
        assert!(screen.contains("gs://alpha/readme.txt"));
    }

    #[test]
    fn narrow_terminal_has_no_details() {
        let mut app = app_in_alpha();
        app.navigation.selected = 2;
        let screen = draw(&app, 60, 20);
        assert!(screen.contains("readme.txt"));
        assert!(!screen.contains("File Details"));
    }

    #[test]
    fn root_path_is_shown_as_slash() {
        let mut app = App::default();
        app.navigation
            .commit(String::new(), Vec::new(), vec![Entry::bucket("alpha", None)]);
        let screen = draw(&app, 60, 10);
        let title = screen.lines().next().unwrap_or_default();
        assert!(title.contains("LazyBucket"));
        assert!(title.contains('/'));
    }

    #[test]
    fn viewer_shows_visible_lines() {
        let mut app = app_in_alpha();
        app.resize(60, 12);
        let text: String = (0..50).map(|i| format!("row {i}\n")).collect();
        app.viewer.open("alpha/readme.txt", &text);
        app.viewer.scroll_down(10);
        app.mode = Mode::ViewingFile;

        let screen = draw(&app, 60, 12);
        assert!(screen.contains("alpha/readme.txt"));
        assert!(screen.contains("row 10"));
        assert!(!screen.contains("row 9\n") && !screen.contains("row 9 "));
        assert!(!screen.contains("items"));
    }

    #[test]
    fn notice_overrides_status() {
        let mut app = app_in_alpha();
        app.set_status("Copied gsutil URL for readme.txt");
        app.notice = Some(Notice::new("URL copied to clipboard!", 3));
        let screen = draw(&app, 60, 12);

        assert!(screen.contains("URL copied to clipboard!"));
        assert!(!screen.contains("Copied gsutil URL"));
    }

    #[test]
    fn short_and_full_help() {
        let mut app = app_in_alpha();
        let screen = draw(&app, 200, 30);
        assert!(screen.contains("copy gsutil URL"));
        assert!(!screen.contains("page down"));

        app.show_help = true;
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Navigation"));
        assert!(screen.contains("page down"));
        assert!(screen.contains("refresh"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app_in_alpha();
        app.show_help = true;
        draw(&app, 10, 3);
        app.mode = Mode::ViewingFile;
        draw(&app, 1, 1);
    }
}
