//! 快捷键配置
//!
//! 按键绑定到符号化的 Action，默认值见 [`DefaultKeymap`]。
//! 用户可以通过 JSON 文件按 Action 名称覆盖：
//!
//! ```json
//! { "quit": ["q", "ctrl+q"], "copy_uri": "y" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::config::ConfigError;

/// 快捷键绑定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：大写字母本身已经区分
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                key.modifiers.difference(KeyModifiers::SHIFT)
                    == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => key.modifiers == self.modifiers,
        }
    }

    /// 解析 `"ctrl+c"`、`"enter"`、`"k"` 这样的按键字符串
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if spec == "+" {
            return Some(Self::key(KeyCode::Char('+')));
        }

        let mut parts: Vec<&str> = spec.split('+').collect();
        let key = parts.pop()?;
        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            modifiers |= match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return None,
            };
        }

        Some(Self::new(modifiers, parse_key_code(key)?))
    }

    /// 用于帮助文本的简短名称
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => "backtab".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pgup".to_string(),
            KeyCode::PageDown => "pgdn".to_string(),
            KeyCode::Delete => "del".to_string(),
            KeyCode::Insert => "ins".to_string(),
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("f{n}"),
            _ => "?".to_string(),
        };

        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            label.push_str("shift+");
        }
        label.push_str(&key);
        label
    }
}

/// 解析按键名（不含修饰键）
fn parse_key_code(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let code = match name.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        other => {
            let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
    };
    Some(code)
}

/// 可绑定的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,
    Open,
    Back,
    Quit,
    View,
    Help,
    Refresh,
    Download,
    CopyUri,
}

impl Action {
    /// 全部操作（同时也是按键冲突时的匹配顺序）
    pub const ALL: [Self; 14] = [
        Self::Up,
        Self::Down,
        Self::Top,
        Self::Bottom,
        Self::PageUp,
        Self::PageDown,
        Self::Open,
        Self::Back,
        Self::Quit,
        Self::View,
        Self::Help,
        Self::Refresh,
        Self::Download,
        Self::CopyUri,
    ];

    /// 配置文件中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::Open => "open",
            Self::Back => "back",
            Self::Quit => "quit",
            Self::View => "view",
            Self::Help => "help",
            Self::Refresh => "refresh",
            Self::Download => "download",
            Self::CopyUri => "copy_uri",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// 帮助文本中的说明
    pub fn description(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::PageUp => "page up",
            Self::PageDown => "page down",
            Self::Open => "open",
            Self::Back => "go back",
            Self::Quit => "quit",
            Self::View => "view file",
            Self::Help => "help",
            Self::Refresh => "refresh",
            Self::Download => "download file",
            Self::CopyUri => "copy gsutil URL",
        }
    }

    fn default_bindings(self) -> Vec<KeyBinding> {
        match self {
            Self::Up => vec![DefaultKeymap::NAV_UP, DefaultKeymap::NAV_UP_VI],
            Self::Down => vec![DefaultKeymap::NAV_DOWN, DefaultKeymap::NAV_DOWN_VI],
            Self::Top => vec![DefaultKeymap::NAV_TOP, DefaultKeymap::NAV_TOP_VI],
            Self::Bottom => vec![DefaultKeymap::NAV_BOTTOM, DefaultKeymap::NAV_BOTTOM_VI],
            Self::PageUp => vec![DefaultKeymap::PAGE_UP, DefaultKeymap::PAGE_UP_CTRL],
            Self::PageDown => vec![DefaultKeymap::PAGE_DOWN, DefaultKeymap::PAGE_DOWN_CTRL],
            Self::Open => vec![DefaultKeymap::NAV_CONFIRM],
            Self::Back => vec![
                DefaultKeymap::BACK,
                DefaultKeymap::BACK_ALT,
                DefaultKeymap::BACK_ESC,
            ],
            Self::Quit => vec![DefaultKeymap::QUIT, DefaultKeymap::FORCE_QUIT],
            Self::View => vec![DefaultKeymap::ACTION_VIEW],
            Self::Help => vec![DefaultKeymap::HELP, DefaultKeymap::HELP_ALT],
            Self::Refresh => vec![DefaultKeymap::REFRESH],
            Self::Download => vec![DefaultKeymap::ACTION_DOWNLOAD],
            Self::CopyUri => vec![DefaultKeymap::ACTION_COPY_URI],
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const HELP_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Backspace);
    pub const BACK_ALT: KeyBinding = KeyBinding::key(KeyCode::Char('b'));
    pub const BACK_ESC: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_UP_VI: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_DOWN_VI: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const NAV_TOP: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const NAV_TOP_VI: KeyBinding = KeyBinding::key(KeyCode::Char('g'));
    pub const NAV_BOTTOM: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const NAV_BOTTOM_VI: KeyBinding = KeyBinding::key(KeyCode::Char('G'));
    pub const PAGE_UP: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_UP_CTRL: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
    pub const PAGE_DOWN: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const PAGE_DOWN_CTRL: KeyBinding = KeyBinding::ctrl(KeyCode::Char('d'));
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 操作
    pub const ACTION_VIEW: KeyBinding = KeyBinding::key(KeyCode::Char('v'));
    pub const ACTION_DOWNLOAD: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const ACTION_COPY_URI: KeyBinding = KeyBinding::key(KeyCode::Char('c'));
}

/// 配置文件中单个 Action 的取值：一个按键或一组按键
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KeySpec {
    One(String),
    Many(Vec<String>),
}

impl KeySpec {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(key) => vec![key],
            Self::Many(keys) => keys,
        }
    }
}

/// 生效中的快捷键表
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(Action, Vec<KeyBinding>)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: Action::ALL
                .into_iter()
                .map(|action| (action, action.default_bindings()))
                .collect(),
        }
    }
}

impl Keymap {
    /// 从 JSON 文件加载，未列出的 Action 保持默认
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::KeymapRead {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides: BTreeMap<String, KeySpec> =
            serde_json::from_str(&text).map_err(|source| ConfigError::KeymapParse {
                path: path.to_path_buf(),
                source,
            })?;

        let overrides = overrides
            .into_iter()
            .map(|(name, spec)| (name, spec.into_vec()))
            .collect();
        let keymap = Self::default().with_overrides(overrides)?;
        log::info!("Loaded keymap overrides from {}", path.display());
        Ok(keymap)
    }

    /// 按 Action 名称替换绑定
    ///
    /// 被覆盖的按键会从其他 Action 中移除，避免同一按键触发两个操作
    pub fn with_overrides(
        mut self,
        overrides: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, ConfigError> {
        for (name, keys) in overrides {
            let action = Action::from_name(&name).ok_or_else(|| ConfigError::UnknownAction {
                name: name.clone(),
                expected: Action::ALL.map(Action::name).join(", "),
            })?;

            let parsed = keys
                .iter()
                .map(|key| {
                    KeyBinding::parse(key).ok_or_else(|| ConfigError::InvalidKey {
                        action: name.clone(),
                        key: key.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            for (other, bindings) in &mut self.bindings {
                if *other == action {
                    bindings.clone_from(&parsed);
                } else {
                    bindings.retain(|b| !parsed.contains(b));
                }
            }
        }
        Ok(self)
    }

    /// 查找按键对应的 Action
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, bindings)| bindings.iter().any(|b| b.matches(key)))
            .map(|(action, _)| *action)
    }

    /// Action 当前的绑定
    pub fn bindings(&self, action: Action) -> &[KeyBinding] {
        self.bindings
            .iter()
            .find(|(a, _)| *a == action)
            .map_or(&[], |(_, bindings)| bindings.as_slice())
    }

    /// 形如 `↑/k` 的按键说明
    pub fn label(&self, action: Action) -> String {
        let labels: Vec<String> = self.bindings(action).iter().map(KeyBinding::label).collect();
        if labels.is_empty() {
            "unbound".to_string()
        } else {
            labels.join("/")
        }
    }
}
