//! 界面组件

pub mod position;
pub mod statusbar;
pub mod transcript;
