//!
//! src/backend/mod.rs
//! Backend 层：为 Review Mode 提供数据的宿主一侧
//!
//! 有模块结构：
//!     config_service.rs   配置加载与保存（JSON 文件，平台配置目录）
//!     world.rs            演示用的策略模拟，所有屏幕共享同一个 World
//!     screens/            议会、舰队、科技三个屏幕（实现 Screen trait）
//!     options_menu.rs     选项菜单（实现 MenuScreen trait，含删除确认对话框）
//!     speech.rs           朗读记录（实现 SpeechOutput trait）
//!
//! Review Mode 核心库只通过 trait 读取这里的数据，
//! 从不持有 World 的引用；每次查询都重新读取，
//! 所以推进回合之后导航器看到的总是最新状态。
//!

mod config_service;
mod options_menu;
mod screens;
mod speech;
mod world;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use options_menu::OptionsMenu;
pub use screens::demo_screens;
pub use speech::SpeechLog;
pub use world::{SharedWorld, World};
