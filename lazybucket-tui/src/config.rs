//! 命令行参数与启动配置
//!
//! 所有参数都可以通过环境变量提供；快捷键覆盖来自 JSON 文件。

use std::path::PathBuf;

use clap::Parser;
use lazybucket_gateway::GatewayConfig;
use thiserror::Error;

use crate::event::Keymap;
use crate::view::Theme;

const APP_DIR: &str = "lazybucket";
const KEYMAP_FILE: &str = "keymap.json";
const LOG_FILE: &str = "lazybucket.log";

/// 启动阶段的配置错误（UI 启动前打印并以状态码 1 退出）
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Google Cloud project ID is required.\n\
         Please provide it using one of the following methods:\n  \
         1. Command line flag: lazybucket --project=your-project-id\n  \
         2. Environment variable: export GOOGLE_CLOUD_PROJECT=your-project-id"
    )]
    MissingProject,

    #[error("failed to read keymap file {}: {source}", path.display())]
    KeymapRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid keymap file {}: {source}", path.display())]
    KeymapParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unknown action '{name}' in keymap (expected one of: {expected})")]
    UnknownAction { name: String, expected: String },

    #[error("invalid key '{key}' for action '{action}'")]
    InvalidKey { action: String, key: String },
}

/// Terminal browser for Google Cloud Storage
#[derive(Debug, Clone, Parser)]
#[command(name = "lazybucket", version, about)]
pub struct Cli {
    /// Google Cloud project whose buckets are listed
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project: Option<String>,

    /// Storage API endpoint override, e.g. a local emulator
    #[arg(long, env = "STORAGE_EMULATOR_HOST")]
    pub endpoint: Option<String>,

    /// OAuth2 access token (defaults to Application Default Credentials via `gcloud`)
    #[arg(long, env = "GOOGLE_OAUTH_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Directory downloaded files are written to
    #[arg(long, env = "LAZYBUCKET_DOWNLOAD_DIR", default_value = ".")]
    pub download_dir: PathBuf,

    /// Color theme
    #[arg(long, env = "LAZYBUCKET_THEME", value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,

    /// JSON file with key binding overrides
    #[arg(long, env = "LAZYBUCKET_KEYMAP")]
    pub keymap: Option<PathBuf>,

    /// Log file (the terminal itself is owned by the UI)
    #[arg(long, env = "LAZYBUCKET_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// 校验后的启动配置
#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub download_dir: PathBuf,
    pub theme: Theme,
    pub keymap: Keymap,
    pub log_file: PathBuf,
}

impl Config {
    /// 校验命令行参数并加载快捷键配置
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let project_id = cli
            .project
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingProject)?;

        let keymap = match cli.keymap {
            Some(path) => Keymap::load(&path)?,
            None => match default_keymap_path() {
                Some(path) if path.is_file() => Keymap::load(&path)?,
                _ => Keymap::default(),
            },
        };

        Ok(Self {
            gateway: GatewayConfig {
                project_id,
                endpoint: cli.endpoint.filter(|e| !e.trim().is_empty()),
                access_token: cli.access_token,
            },
            download_dir: cli.download_dir,
            theme: cli.theme,
            keymap,
            log_file: cli.log_file.unwrap_or_else(default_log_file),
        })
    }
}

/// `<config dir>/lazybucket/keymap.json`
fn default_keymap_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(KEYMAP_FILE))
}

/// `<cache dir>/lazybucket/lazybucket.log`，没有缓存目录时退回临时目录
fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn cli(project: Option<&str>) -> Cli {
        Cli {
            project: project.map(str::to_string),
            endpoint: None,
            access_token: None,
            download_dir: PathBuf::from("."),
            theme: Theme::Dark,
            keymap: None,
            log_file: Some(PathBuf::from("/tmp/lazybucket-test.log")),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_project_is_rejected() {
        assert!(matches!(
            Config::from_cli(cli(None)),
            Err(ConfigError::MissingProject)
        ));
        assert!(matches!(
            Config::from_cli(cli(Some("   "))),
            Err(ConfigError::MissingProject)
        ));
    }

    #[test]
    fn missing_project_message_has_hints() {
        let message = ConfigError::MissingProject.to_string();
        assert!(message.contains("--project"));
        assert!(message.contains("GOOGLE_CLOUD_PROJECT"));
    }

    #[test]
    fn project_is_trimmed() {
        let config = Config::from_cli(cli(Some(" my-project "))).expect("valid config");
        assert_eq!(config.gateway.project_id, "my-project");
        assert_eq!(config.gateway.endpoint, None);
    }

    #[test]
    fn explicit_missing_keymap_is_an_error() {
        let mut args = cli(Some("p"));
        args.keymap = Some(PathBuf::from("/nonexistent/lazybucket/keymap.json"));
        assert!(matches!(
            Config::from_cli(args),
            Err(ConfigError::KeymapRead { .. })
        ));
    }

    #[test]
    fn flags_parse() {
        let parsed = Cli::try_parse_from([
            "lazybucket",
            "--project",
            "p",
            "--endpoint",
            "http://localhost:4443",
            "--theme",
            "light",
            "--download-dir",
            "/tmp/downloads",
        ])
        .expect("valid flags");
        assert_eq!(parsed.project.as_deref(), Some("p"));
        assert_eq!(parsed.endpoint.as_deref(), Some("http://localhost:4443"));
        assert_eq!(parsed.theme, Theme::Light);
        assert_eq!(parsed.download_dir, PathBuf::from("/tmp/downloads"));
    }
}
