//! 外部协作方抽象 trait 定义
//!
//! 导航器只通过这些 trait 读取游戏数据、执行动作、输出语音，
//! 从不持有具体的领域类型。

mod menu;
mod screen;
mod section;
mod selection;
mod speech;

pub use menu::{LiveControl, MenuScreen};
pub use screen::Screen;
pub use section::Section;
pub use selection::{SelectionFlow, SelectionStep};
pub use speech::{LogSpeech, SpeechOutput, Transcript, Utterance};
