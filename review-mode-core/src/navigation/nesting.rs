//! 二级钻取的嵌套帧

use crate::traits::Section;

/// 从分节条目钻入其自身分节时保存的父级上下文
///
/// 帧总是整体压入、整体弹出，不存在只填了一半的状态。
pub(crate) struct NestingFrame {
    /// 父级分节列表
    pub sections: Vec<Box<dyn Section>>,
    /// 父级分节索引
    pub section_index: usize,
    /// 被钻入的条目索引
    pub section_item_index: usize,
    /// 被钻入条目的标识（交给 `Screen::sections_for_target` 解析）
    pub target: String,
}

/// 嵌套栈
#[derive(Default)]
pub(crate) struct NestingStack {
    frames: Vec<NestingFrame>,
}

impl NestingStack {
    pub fn push(&mut self, frame: NestingFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<NestingFrame> {
        self.frames.pop()
    }

    /// 当前最内层帧
    pub fn top(&self) -> Option<&NestingFrame> {
        self.frames.last()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// 从外到内的所有钻取标识
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|f| f.target.as_str())
    }
}
