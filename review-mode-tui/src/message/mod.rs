//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! Event 层把按键翻译成 `AppMessage`，Update 层根据 `AppMessage` 更新 Model。
//!
//!     AppMessage::Review(Command)     交给 ReviewMode::handle 的导航命令
//!     AppMessage::ToggleReview        开关 Review Mode
//!     AppMessage::ToggleOptions       打开 / 关闭选项菜单
//!     AppMessage::AdvanceTurn         推进模拟回合（在两次输入之间修改数据）
//!
//! Command 本身定义在 review-mode-core 中，这里不再重复包装。
//!

mod app;

pub use app::AppMessage;
