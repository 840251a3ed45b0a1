//! 后台任务结果处理
//!
//! 列表与预览结果先经过请求围栏，编号过期的直接丢弃。

use lazybucket_gateway::{Entry, GatewayError};

use crate::message::TaskMessage;
use crate::model::{App, Mode, RequestId};

/// 处理后台任务结果
pub fn update(app: &mut App, msg: TaskMessage) {
    match msg {
        TaskMessage::EntriesLoaded { id, result } => entries_loaded(app, id, result),
        TaskMessage::FileLoaded { id, result } => file_loaded(app, id, result),
        TaskMessage::DownloadFinished { target, result } => match result {
            Ok(()) => app.set_status(format!("Downloaded file to {}", target.display())),
            Err(e) => app.set_status(format!("Error: {e}")),
        },
        TaskMessage::ClipboardFinished { result } => {
            if let Err(e) = result {
                app.set_status(format!("Error: {e}"));
            }
        }
    }
}

fn entries_loaded(app: &mut App, id: RequestId, result: Result<Vec<Entry>, GatewayError>) {
    let Some(pending) = app.requests.finish_listing(id) else {
        log::debug!("Dropping stale listing result {id}");
        return;
    };

    match result {
        Ok(entries) => {
            let count = entries.len();
            log::debug!("Listing {id} committed '{}' ({count} items)", pending.target_path);
            app.navigation.commit(pending.target_path, pending.target_history, entries);
            app.set_status(format!("Loaded {count} items"));
        }
        Err(e) => app.set_status(format!("Error: {e}")),
    }

    if app.mode.is_loading() {
        app.mode = Mode::Browsing;
    }
}

fn file_loaded(app: &mut App, id: RequestId, result: Result<Vec<u8>, GatewayError>) {
    let Some(pending) = app.requests.finish_view(id) else {
        log::debug!("Dropping stale preview result {id}");
        return;
    };
    if pending.origin_path != app.navigation.current_path {
        log::debug!(
            "Dropping preview of {} requested from '{}'",
            pending.title,
            pending.origin_path
        );
        return;
    }

    match result {
        Ok(bytes) => {
            // 预览期间列表保持不变：在途的列表请求作废
            if let Some(cancelled) = app.requests.cancel_listing() {
                log::debug!(
                    "Preview supersedes listing {} of '{}'",
                    cancelled.id,
                    cancelled.target_path
                );
            }
            let text = String::from_utf8_lossy(&bytes);
            app.viewer.open(pending.title, &text);
            app.mode = Mode::ViewingFile;
        }
        Err(e) => app.set_status(format!("Error: {e}")),
    }
}
