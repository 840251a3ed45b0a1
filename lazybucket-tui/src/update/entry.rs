//! 条目操作消息处理（预览、下载、复制 URI）
//!
//! 只对对象生效；选中容器或没有选中项时为空操作。

use lazybucket_gateway::{canonical_uri, parse_address, Entry};

use super::COPY_NOTICE_TICKS;
use crate::message::{Command, EntryMessage};
use crate::model::{App, Notice};

/// 处理条目操作消息
pub fn update(app: &mut App, msg: EntryMessage) -> Vec<Command> {
    if app.mode.is_viewing() {
        return Vec::new();
    }
    let Some(entry) = app.selected_entry().filter(|e| !e.is_container()).cloned() else {
        return Vec::new();
    };

    match msg {
        EntryMessage::View => view(app, &entry),
        EntryMessage::Download => download(app, &entry),
        EntryMessage::CopyUri => copy_uri(app, &entry),
    }
}

fn view(app: &mut App, entry: &Entry) -> Vec<Command> {
    let (bucket, object) = parse_address(&entry.full_path);
    let id = app
        .requests
        .begin_view(app.navigation.current_path.clone(), entry.full_path.clone());
    app.set_status(format!("Viewing {}", entry.name));

    vec![Command::LoadFile {
        id,
        bucket: bucket.to_string(),
        object: object.to_string(),
    }]
}

fn download(app: &mut App, entry: &Entry) -> Vec<Command> {
    let (bucket, object) = parse_address(&entry.full_path);
    app.set_status(format!(
        "Downloading {} to {}...",
        entry.name,
        app.download_dir.display()
    ));

    vec![Command::Download {
        bucket: bucket.to_string(),
        object: object.to_string(),
        dir: app.download_dir.clone(),
        name: entry.name.clone(),
    }]
}

/// 乐观提示：复制失败时只改状态栏，不撤回提示
fn copy_uri(app: &mut App, entry: &Entry) -> Vec<Command> {
    let uri = canonical_uri(&entry.full_path);
    app.set_status(format!("Copied gsutil URL for {}", entry.name));
    app.notice = Some(Notice::new("URL copied to clipboard!", COPY_NOTICE_TICKS));

    vec![Command::CopyToClipboard { text: uri }]
}
