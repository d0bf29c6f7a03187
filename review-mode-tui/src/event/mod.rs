//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成消息
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 轮询与分发
//!         mod keymap;         // 快捷键定义
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//! 按键分三层处理：
//!     1. 全局快捷键（Ctrl 组合键）：退出、开关 Review Mode、选项菜单、推进回合
//!     2. 文本输入状态：可打印字符变成 Command::Type，Backspace 变成 Command::Erase
//!     3. 其余按键映射为导航命令 AppMessage::Review(Command)
//!
//! 字母键（无修饰或仅 Shift）统一映射为 `Command::JumpToLetter`，
//! 因此退出只能用 Ctrl+Q / Ctrl+C。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
