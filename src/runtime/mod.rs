//! 运行时初始化
//!
//! 供嵌入方在进程启动时调用：日志订阅器与存储后端。

use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;

/// 初始化 tracing 日志
///
/// 开发环境输出彩色文本并带文件行号，生产环境输出 JSON。
/// 返回的 guard 需要在进程存续期间持有。
pub fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let config = AppConfig::get();

    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}

/// 准备存储后端（含数据库迁移）
pub async fn prepare_storage() -> Result<Arc<dyn Storage>> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");
    Ok(storage)
}
