//! 文件内容预览

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::ThemeColors;

/// 渲染预览区，只取可见的行
pub fn render(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let viewer = &app.viewer;
    let visible = usize::from(area.height.saturating_sub(2));

    let position = if viewer.line_count() == 0 {
        " empty ".to_string()
    } else {
        format!(
            " {}-{}/{} ",
            viewer.scroll + 1,
            (viewer.scroll + visible).min(viewer.line_count()),
            viewer.line_count()
        )
    };

    let block = Block::default()
        .title(format!(" {} ", viewer.title))
        .title_style(colors.label())
        .title_bottom(Line::from(position).right_aligned())
        .borders(Borders::ALL)
        .border_style(colors.border(true));

    let lines: Vec<Line> = viewer
        .content
        .as_deref()
        .unwrap_or_default()
        .lines()
        .skip(viewer.scroll)
        .take(visible)
        .map(Line::raw)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.fg))
        .block(block);
    frame.render_widget(paragraph, area);
}
