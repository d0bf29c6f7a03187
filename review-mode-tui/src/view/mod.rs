//!
//! src/view/mod.rs
//! View 层：只读 Model，把状态画到终端上
//!
//!     layout.rs                   三层布局：标题栏 + 主内容区 + 状态栏
//!     theme.rs                    主题与常用样式
//!     components/position.rs      左侧：当前层级的条目列表（视觉上的光标）
//!     components/transcript.rs    右侧：朗读记录，代替真正的读屏器
//!     components/statusbar.rs     底部：快捷键提示与状态消息
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
