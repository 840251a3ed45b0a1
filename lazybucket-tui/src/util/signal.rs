//! 终止信号
//!
//! raw mode 下 Ctrl+C 作为按键送达，这里主要处理 SIGTERM
//! 以及非交互场景下的 SIGINT。

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;

/// 等待 SIGINT 或 SIGTERM
///
/// 某个信号处理器安装失败时，只等待另一个
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        } else {
            tracing::info!("Received Ctrl+C signal");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("Received SIGTERM signal");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
