//! LazyBucket：Google Cloud Storage 终端浏览器
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息与异步命令 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 后台任务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Config::from_cli()      // 解析参数，缺少项目 ID 时打印提示并以 1 退出
//!     init_logging()          // 日志写入文件（失败不致命）
//!     create_gateway()        // 创建 GCS 网关
//!     shutdown_signal()       // 收到 SIGINT / SIGTERM 时恢复终端并以 0 退出
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod config;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use lazybucket_gateway::create_gateway;
use tokio::sync::mpsc;

use backend::{SystemClipboard, TaskRunner};
use config::{Cli, Config};
use util::{force_restore_terminal, init_terminal, restore_terminal, shutdown_signal};

fn main() -> ExitCode {
    let config = match Config::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_logging(&config.log_file) {
        eprintln!("Warning: {e:#}");
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("lazybucket-worker")
        .build()
        .context("failed to start async runtime")?;

    let gateway = create_gateway(&config.gateway).context(
        "failed to create storage client; run `gcloud auth application-default login` \
         or set GOOGLE_OAUTH_ACCESS_TOKEN",
    )?;

    // 1. 终止信号：恢复终端后直接退出
    runtime.spawn(async {
        shutdown_signal().await;
        force_restore_terminal();
        log::info!("Exiting on signal");
        std::process::exit(0);
    });

    // 2. panic 时同样先恢复终端
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        force_restore_terminal();
        default_hook(info);
    }));

    // 3. 初始化终端
    let mut terminal = init_terminal()
        .inspect_err(|_| force_restore_terminal())
        .context("failed to initialize terminal")?;

    // 4. 创建应用实例
    let mut app = model::App::new(config.download_dir);
    let size = terminal
        .size()
        .inspect_err(|_| force_restore_terminal())
        .context("failed to query terminal size")?;
    app.resize(size.width, size.height);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let runner = TaskRunner::new(
        runtime.handle().clone(),
        gateway,
        Arc::new(SystemClipboard::new()),
        tx,
    );
    let colors = config.theme.colors();
    log::info!("Starting lazybucket for project '{}'", config.gateway.project_id);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &colors, &config.keymap, &runner, &mut rx);

    // 6. 恢复终端（无论成功失败都执行），不等待在途任务
    restore_terminal(&mut terminal)?;
    runtime.shutdown_background();

    result
}
