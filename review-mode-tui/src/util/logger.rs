//! 日志初始化

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// 日志文件名
const LOG_FILE: &str = "review-mode.log";

/// 日志目录：`<数据目录>/review-mode`
fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("review-mode"))
}

/// 初始化 `env_logger`，输出追加到日志文件
///
/// 级别由 `RUST_LOG` 控制，默认 `info`。找不到数据目录时不安装日志，返回 `None`。
pub fn init_logger() -> Result<Option<PathBuf>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
