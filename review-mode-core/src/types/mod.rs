//! 类型定义模块

mod command;
mod cursor;
mod outcome;

pub use command::Command;
pub use cursor::{Cursor, NavigationLevel};
pub use outcome::{ActionOutcome, DrillOutcome};
