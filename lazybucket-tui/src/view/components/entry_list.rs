//! 条目列表组件

use lazybucket_gateway::{Entry, EntryKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::util::{format_time, truncate_to_width, LIST_TIME_FORMAT};
use crate::view::theme::ThemeColors;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// 条目图标
pub fn icon(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Bucket => "🪣",
        EntryKind::Folder | EntryKind::Parent => "📁",
        EntryKind::Object => "📄",
    }
}

/// 对象的第二行说明；容器没有
pub fn description(entry: &Entry) -> Option<String> {
    (entry.kind == EntryKind::Object).then(|| {
        format!(
            "Size: {} bytes, Updated: {}",
            entry.size_bytes,
            format_time(entry.last_modified.as_ref(), LIST_TIME_FORMAT)
        )
    })
}

/// 渲染条目列表
pub fn render(app: &App, colors: &ThemeColors, frame: &mut Frame, area: Rect) {
    let entries = &app.navigation.entries;
    let title = if app.mode.is_loading() {
        " Loading... ".to_string()
    } else {
        format!(" {} items ", entries.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.fg))
        .borders(Borders::ALL)
        .border_style(colors.border(true));

    if entries.is_empty() {
        let text = if app.mode.is_loading() {
            "Loading..."
        } else if app.navigation.is_at_root() {
            "No buckets found"
        } else {
            "This folder is empty"
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // 边框与选中标记之外的可用宽度
    let width = usize::from(area.width.saturating_sub(2)).saturating_sub(HIGHLIGHT_SYMBOL.len());

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let title = format!("{} {}", icon(entry.kind), entry.name);
            let mut lines = vec![Line::from(Span::styled(
                truncate_to_width(&title, width),
                Style::default().fg(colors.fg),
            ))];
            if let Some(desc) = description(entry) {
                lines.push(Line::from(Span::styled(
                    truncate_to_width(&format!("   {desc}"), width),
                    Style::default().fg(colors.muted),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(colors.selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected.min(entries.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}
