//! 后台任务执行器
//!
//! 在 tokio 运行时上执行 Command，每个任务完成后恰好回送一条
//! `AppMessage::Task`。主循环关闭后，结果会被静默丢弃。

use std::sync::Arc;

use lazybucket_gateway::{parse_address, Entry, StorageGateway};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::download::download_object;
use super::Clipboard;
use crate::message::{AppMessage, Command, TaskMessage};

/// 后台任务执行器
pub struct TaskRunner {
    handle: Handle,
    gateway: Arc<dyn StorageGateway>,
    clipboard: Arc<dyn Clipboard>,
    tx: UnboundedSender<AppMessage>,
}

impl TaskRunner {
    pub fn new(
        handle: Handle,
        gateway: Arc<dyn StorageGateway>,
        clipboard: Arc<dyn Clipboard>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            handle,
            gateway,
            clipboard,
            tx,
        }
    }

    /// 依次派发全部命令
    pub fn spawn_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.spawn(command);
        }
    }

    /// 派发单个命令，不等待完成
    pub fn spawn(&self, command: Command) {
        log::debug!("Spawning {command:?}");
        let tx = self.tx.clone();

        match command {
            Command::LoadEntries { id, path } => {
                let gateway = Arc::clone(&self.gateway);
                self.handle.spawn(async move {
                    let result = load_entries(gateway.as_ref(), &path).await;
                    if let Err(e) = &result {
                        log_failure(&format!("Listing '{path}'"), e.is_expected(), e);
                    }
                    send(&tx, TaskMessage::EntriesLoaded { id, result });
                });
            }
            Command::LoadFile { id, bucket, object } => {
                let gateway = Arc::clone(&self.gateway);
                self.handle.spawn(async move {
                    let result = gateway.fetch_content(&bucket, &object).await;
                    if let Err(e) = &result {
                        log_failure(&format!("Reading {bucket}/{object}"), e.is_expected(), e);
                    }
                    send(&tx, TaskMessage::FileLoaded { id, result });
                });
            }
            Command::Download {
                bucket,
                object,
                dir,
                name,
            } => {
                let gateway = Arc::clone(&self.gateway);
                let target = dir.join(&name);
                self.handle.spawn(async move {
                    let result = download_object(gateway.as_ref(), &bucket, &object, &dir, &name)
                        .await
                        .map(|_| ());
                    if let Err(e) = &result {
                        log_failure(&format!("Downloading {bucket}/{object}"), false, e);
                    }
                    send(&tx, TaskMessage::DownloadFinished { target, result });
                });
            }
            Command::CopyToClipboard { text } => {
                let clipboard = Arc::clone(&self.clipboard);
                self.handle.spawn(async move {
                    let result = clipboard.copy(&text).await;
                    if let Err(e) = &result {
                        log_failure("Clipboard copy", true, e);
                    }
                    send(&tx, TaskMessage::ClipboardFinished { result });
                });
            }
        }
    }
}

/// 列出路径下的条目：空路径为 bucket 列表，否则按 `bucket/prefix` 拆分
pub async fn load_entries(
    gateway: &dyn StorageGateway,
    path: &str,
) -> lazybucket_gateway::Result<Vec<Entry>> {
    if path.is_empty() {
        gateway.list_containers().await
    } else {
        let (bucket, prefix) = parse_address(path);
        gateway.list_children(bucket, prefix).await
    }
}

fn log_failure(what: &str, expected: bool, error: &dyn std::fmt::Display) {
    if expected {
        log::warn!("{what} failed: {error}");
    } else {
        log::error!("{what} failed: {error}");
    }
}

fn send(tx: &UnboundedSender<AppMessage>, msg: TaskMessage) {
    if tx.send(AppMessage::Task(msg)).is_err() {
        log::debug!("Main loop has exited, dropping task result");
    }
}
