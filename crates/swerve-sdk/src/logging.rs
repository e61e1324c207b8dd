//! 日志初始化
//!
//! 库代码只使用 `tracing` 宏；由应用（CLI、测试、上层控制程序）决定是否安装订阅者。

use tracing_subscriber::EnvFilter;

/// 安装全局 `fmt` 订阅者（输出到 stderr）
///
/// `RUST_LOG` 优先；未设置时使用 `default_directive`（如 `"swerve_sim=info"`）。
/// 已安装过订阅者时返回 `false`，不会 panic，可重复调用。
pub fn init_logging(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(default_directive, "Logging initialized");
    }
    installed
}
