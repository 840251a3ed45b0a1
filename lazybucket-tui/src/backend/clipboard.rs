//! 系统剪贴板
//!
//! 不链接任何平台库，而是把文本写入平台自带命令的标准输入。

use std::io;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::TaskError;

/// 剪贴板 Trait
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn copy(&self, text: &str) -> Result<(), TaskError>;
}

/// 按顺序尝试的剪贴板命令
const DEFAULT_COMMANDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// 通过外部命令写入剪贴板
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<(&'static str, &'static [&'static str])>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            commands: DEFAULT_COMMANDS.to_vec(),
        }
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_commands(commands: Vec<(&'static str, &'static [&'static str])>) -> Self {
        Self { commands }
    }

    async fn pipe(program: &str, args: &[&str], text: &str) -> io::Result<ExitStatus> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            // 关闭 stdin，命令才会结束
            drop(stdin);
        }
        child.wait().await
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn copy(&self, text: &str) -> Result<(), TaskError> {
        let mut last_failure = None;

        for (program, args) in &self.commands {
            match Self::pipe(program, args, text).await {
                Ok(status) if status.success() => {
                    log::debug!("Copied {} bytes with {program}", text.len());
                    return Ok(());
                }
                Ok(status) => {
                    log::debug!("{program} exited with {status}");
                    last_failure = Some(format!("{program} exited with {status}"));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    log::debug!("{program} failed: {e}");
                    last_failure = Some(format!("{program}: {e}"));
                }
            }
        }

        let names: Vec<&str> = self.commands.iter().map(|(program, _)| *program).collect();
        Err(TaskError::Clipboard {
            detail: last_failure.unwrap_or_else(|| {
                format!("no clipboard command found (tried {})", names.join(", "))
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: &[&str] = &[];

    #[tokio::test]
    async fn missing_commands_report_clipboard_error() {
        let clipboard = SystemClipboard::with_commands(vec![
            ("lazybucket-no-such-clipboard", NO_ARGS),
            ("lazybucket-no-such-clipboard-either", NO_ARGS),
        ]);

        let err = clipboard.copy("gs://alpha/a").await.unwrap_err();
        match err {
            TaskError::Clipboard { detail } => {
                assert!(detail.contains("no clipboard command found"));
                assert!(detail.contains("lazybucket-no-such-clipboard-either"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn first_working_command_wins() {
        let clipboard = SystemClipboard::with_commands(vec![
            ("lazybucket-no-such-clipboard", NO_ARGS),
            ("cat", NO_ARGS),
        ]);
        clipboard.copy("gs://alpha/a").await.expect("cat accepts stdin");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_is_reported() {
        let clipboard = SystemClipboard::with_commands(vec![("false", NO_ARGS)]);
        let err = clipboard.copy("x").await.unwrap_err();
        // 取决于时序，可能是退出码，也可能是写入时的 broken pipe
        assert!(err.to_string().contains("false"));
    }
}
