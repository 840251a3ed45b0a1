//! 底部状态栏组件

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::model::App;
use crate::view::theme::ThemeColors;

/// 渲染状态栏；有提示时提示优先
pub fn render(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let (text, style) = match (&app.notice, &app.status_message) {
        (Some(notice), _) => (notice.text.as_str(), Style::default().fg(colors.success)),
        (None, Some(msg)) if msg.starts_with("Error") => {
            (msg.as_str(), Style::default().fg(colors.error))
        }
        (None, Some(msg)) => (msg.as_str(), Style::default().fg(colors.fg)),
        (None, None) => ("", Style::default()),
    };

    frame.render_widget(Paragraph::new(format!(" {text}")).style(style), area);
}
