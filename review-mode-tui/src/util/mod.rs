//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与朗读逻辑无关的基础设施：
//!     terminal.rs     终端初始化和恢复（Raw Mode + 备用屏幕）
//!     logger.rs       日志初始化
//!
//! 注意：TUI 占用了 stdout 的备用屏幕，日志不能直接打印到终端，
//! 因此 logger.rs 把 `env_logger` 的输出重定向到数据目录下的日志文件。
//!

mod logger;
mod terminal;

pub use logger::init_logger;
pub use terminal::{init_terminal, restore_terminal, Term};
