//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! App 持有：
//!     review      Review Mode 上下文（导航器、菜单、选择流程、文本输入）
//!     world       演示模拟的共享句柄，屏幕与选项菜单读取同一份数据
//!     speech      朗读记录，与 ReviewMode 内部的 SpeechOutput 共享缓冲区
//!
//! 只有 Update 层修改 App；View 层只读。
//!

mod app;

pub use app::App;
