//! 快捷键帮助（单行简要 / 完整分组）

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::event::{Action, Keymap};
use crate::model::App;
use crate::view::theme::ThemeColors;

/// 简要帮助中的操作
const SHORT_HELP: [Action; 9] = [
    Action::Up,
    Action::Down,
    Action::Open,
    Action::Back,
    Action::View,
    Action::Download,
    Action::CopyUri,
    Action::Help,
    Action::Quit,
];

/// 预览模式下的简要帮助
const VIEWER_HELP: [Action; 5] = [
    Action::Up,
    Action::Down,
    Action::PageDown,
    Action::Back,
    Action::Quit,
];

/// 完整帮助的分组
const FULL_HELP: [(&str, &[Action]); 3] = [
    (
        "Navigation",
        &[
            Action::Up,
            Action::Down,
            Action::Top,
            Action::Bottom,
            Action::PageUp,
            Action::PageDown,
            Action::Open,
            Action::Back,
        ],
    ),
    (
        "Actions",
        &[Action::View, Action::Download, Action::CopyUri, Action::Refresh],
    ),
    ("General", &[Action::Help, Action::Quit]),
];

/// 帮助区域需要的高度
pub fn height(app: &App) -> u16 {
    if app.show_help && !app.mode.is_viewing() {
        let rows = FULL_HELP.iter().map(|(_, actions)| actions.len()).max().unwrap_or(0);
        // 分组标题 + 上下边框
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(3)
    } else {
        1
    }
}

/// 渲染帮助
pub fn render(app: &App, colors: &ThemeColors, keymap: &Keymap, frame: &mut Frame, area: Rect) {
    if app.show_help && !app.mode.is_viewing() {
        render_full(colors, keymap, frame, area);
    } else {
        let actions: &[Action] = if app.mode.is_viewing() {
            &VIEWER_HELP
        } else {
            &SHORT_HELP
        };
        render_short(actions, colors, keymap, frame, area);
    }
}

fn render_short(
    actions: &[Action],
    colors: &ThemeColors,
    keymap: &Keymap,
    frame: &mut Frame,
    area: Rect,
) {
    let mut spans = vec![Span::raw(" ")];
    for (i, action) in actions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(colors.border)));
        }
        spans.push(Span::styled(keymap.label(*action), colors.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(action.description(), colors.hint_desc()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_full(colors: &ThemeColors, keymap: &Keymap, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(colors.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    for ((group, actions), column) in FULL_HELP.iter().zip(columns.iter()) {
        let mut lines = vec![Line::from(Span::styled(*group, colors.label()))];
        lines.extend(actions.iter().map(|action| {
            Line::from(vec![
                Span::styled(keymap.label(*action), colors.hint_key()),
                Span::raw(" "),
                Span::styled(action.description(), colors.hint_desc()),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), *column);
    }
}
