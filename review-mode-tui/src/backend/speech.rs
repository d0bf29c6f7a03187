//! 朗读记录
//!
//! 终端里没有真正的读屏器，所有朗读都写进一个带时间戳的记录，
//! 由转写面板显示，同时写入日志。

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::{DateTime, Local};
use review_mode_core::{LogSpeech, SpeechOutput};

/// 保留的最大条数
const MAX_LINES: usize = 500;

/// 一条朗读
#[derive(Debug, Clone)]
pub struct SpokenLine {
    pub at: DateTime<Local>,
    pub text: String,
    /// 是否打断了上一条
    pub interrupt: bool,
}

impl SpokenLine {
    /// "HH:MM:SS" 时间戳
    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

/// 共享的朗读记录，克隆后指向同一缓冲区
#[derive(Debug, Clone, Default)]
pub struct SpeechLog {
    lines: Rc<RefCell<VecDeque<SpokenLine>>>,
    /// 同时写入日志文件
    echo: LogSpeech,
}

impl SpeechLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近的 `count` 条，旧的在前
    pub fn recent(&self, count: usize) -> Vec<SpokenLine> {
        let lines = self.lines.borrow();
        let skip = lines.len().saturating_sub(count);
        lines.iter().skip(skip).cloned().collect()
    }

    fn push(&self, line: SpokenLine) {
        let mut lines = self.lines.borrow_mut();
        if lines.len() == MAX_LINES {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl SpeechOutput for SpeechLog {
    fn speak(&mut self, text: &str, interrupt: bool) {
        self.echo.speak(text, interrupt);
        self.push(SpokenLine {
            at: Local::now(),
            text: text.to_string(),
            interrupt,
        });
    }
}
