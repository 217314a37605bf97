use tokio::signal;
use tracing::warn;

/// 等待退出信号（Ctrl+C，Unix 下还监听 SIGTERM）
pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = signal::ctrl_c() => {
                warn!("Ctrl+C received, initiating graceful shutdown...");
            }
            _ = sigterm.recv() => {
                warn!("SIGTERM received, initiating graceful shutdown...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        warn!("Shutdown signal received, initiating graceful shutdown...");
    }
}
