//! 顶部标题栏

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::ThemeColors;

const APP_TITLE: &str = " LazyBucket ";

/// 渲染标题栏：应用名 + 当前路径（账号根显示为 `/`）
pub fn render(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let mut path = format!(" {}", display_path(&app.navigation.current_path));

    // 加载中时附上目标路径
    if app.mode.is_loading() {
        if let Some(target) = app.requests.listing_target() {
            if target != app.navigation.current_path {
                path.push_str(&format!(" → {}", display_path(target)));
            }
        }
    }

    let available = usize::from(area.width).saturating_sub(APP_TITLE.len());
    let line = Line::from(vec![
        Span::styled(APP_TITLE, colors.title()),
        Span::styled(truncate_to_width(&path, available), colors.path()),
    ]);

    frame.render_widget(Paragraph::new(line).style(colors.path()), area);
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
