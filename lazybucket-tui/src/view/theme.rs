//! 主题和样式定义
//!
//! 主题在启动时由配置决定，渲染时以 `&ThemeColors` 传入各组件。

use ratatui::style::{Color, Modifier, Style};

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取主题的颜色方案
    pub fn colors(self) -> ThemeColors {
        match self {
            Self::Dark => ThemeColors::dark(),
            Self::Light => ThemeColors::light(),
        }
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub path_bg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(220, 223, 228),
            border: Color::Rgb(70, 74, 82),
            border_focused: Color::Rgb(66, 133, 244),
            highlight: Color::Rgb(66, 133, 244),
            path_bg: Color::Rgb(96, 100, 108),
            selected_bg: Color::Rgb(44, 62, 96),
            selected_fg: Color::White,
            success: Color::Rgb(52, 168, 83),
            warning: Color::Rgb(251, 188, 4),
            error: Color::Rgb(234, 67, 53),
            muted: Color::Rgb(136, 140, 148),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(32, 33, 36),
            border: Color::Rgb(218, 220, 224),
            border_focused: Color::Rgb(26, 115, 232),
            highlight: Color::Rgb(26, 115, 232),
            path_bg: Color::Rgb(232, 234, 237),
            selected_bg: Color::Rgb(210, 227, 252),
            selected_fg: Color::Black,
            success: Color::Rgb(24, 128, 56),
            warning: Color::Rgb(176, 96, 0),
            error: Color::Rgb(197, 34, 31),
            muted: Color::Rgb(95, 99, 104),
        }
    }

    /// 标题栏左侧的应用名
    pub fn title(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题栏中的路径
    pub fn path(&self) -> Style {
        Style::default().bg(self.path_bg).fg(self.selected_fg)
    }

    /// 边框样式
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 详情面板的字段名
    pub fn label(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键提示样式
    pub fn hint_key(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
