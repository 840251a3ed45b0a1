//! 文件详情面板（宽度足够时显示在列表右侧）

use lazybucket_gateway::{canonical_uri, Entry};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::event::{Action, Keymap};
use crate::model::App;
use crate::util::{format_size, format_time, DETAILS_TIME_FORMAT};
use crate::view::theme::ThemeColors;

/// 渲染详情面板；选中的不是对象时只画边框和提示
pub fn render(app: &App, colors: &ThemeColors, keymap: &Keymap, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" File Details ")
        .title_style(colors.label())
        .borders(Borders::ALL)
        .border_style(colors.border(false));

    let lines = match app.selected_entry() {
        Some(entry) if !entry.is_container() => detail_lines(entry, colors, keymap),
        _ => vec![Line::from(Span::styled(
            "Select a file to see its details",
            Style::default().fg(colors.muted),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn detail_lines(entry: &Entry, colors: &ThemeColors, keymap: &Keymap) -> Vec<Line<'static>> {
    let value = Style::default().fg(colors.fg);
    let field = |label: &'static str, text: String| {
        Line::from(vec![
            Span::styled(label, colors.label()),
            Span::styled(text, value),
        ])
    };

    vec![
        field("Name: ", entry.name.clone()),
        Line::default(),
        field("Size: ", format_size(entry.size_bytes)),
        Line::default(),
        field(
            "Last Modified: ",
            format_time(entry.last_modified.as_ref(), DETAILS_TIME_FORMAT),
        ),
        Line::default(),
        field("Full Path: ", entry.full_path.clone()),
        Line::default(),
        field("GsUtil URI: ", canonical_uri(&entry.full_path)),
        Line::default(),
        Line::from(Span::styled("Actions:", colors.label())),
        Line::from(Span::styled(
            format!("Press '{}' to view", keymap.label(Action::View)),
            value,
        )),
        Line::from(Span::styled(
            format!("Press '{}' to download", keymap.label(Action::Download)),
            value,
        )),
        Line::from(Span::styled(
            format!("Press '{}' to copy gsutil URL", keymap.label(Action::CopyUri)),
            value,
        )),
    ]
}
