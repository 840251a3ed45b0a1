//! 显示格式化

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 列表中对象的时间格式
pub const LIST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 详情面板的时间格式
pub const DETAILS_TIME_FORMAT: &str = "%b %d, %Y %H:%M:%S";

/// 以 1024 为进制的可读大小，如 `1.5 KiB`
#[allow(clippy::cast_precision_loss)]
pub fn format_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if size < UNIT {
        return format!("{size} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}iB", size as f64 / div as f64, PREFIXES[exp])
}

/// 格式化时间，缺失时返回 `-`
pub fn format_time(time: Option<&DateTime<Utc>>, format: &str) -> String {
    time.map_or_else(|| "-".to_string(), |t| t.format(format).to_string())
}

/// 按显示宽度截断，超出时以 `…` 结尾
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
