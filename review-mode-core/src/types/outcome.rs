//! 操作结果类型

use std::fmt;

use crate::error::NavError;
use crate::traits::SelectionFlow;

/// 条目/控件动作执行成功后的结果
pub enum ActionOutcome {
    /// 动作已完成，无需额外朗读
    Done,
    /// 动作已完成，并带有一条需要朗读的消息
    Message(String),
    /// 动作需要用户从列表中选择目标，进入选择子模式
    BeginSelection(Box<dyn SelectionFlow>),
}

impl ActionOutcome {
    /// 便捷构造：带消息的结果
    pub fn message(text: impl Into<String>) -> Self {
        ActionOutcome::Message(text.into())
    }

    /// 便捷构造：进入选择子模式
    pub fn select(flow: impl SelectionFlow + 'static) -> Self {
        ActionOutcome::BeginSelection(Box::new(flow))
    }
}

impl fmt::Debug for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Done => f.write_str("Done"),
            ActionOutcome::Message(text) => f.debug_tuple("Message").field(text).finish(),
            ActionOutcome::BeginSelection(flow) => f
                .debug_struct("BeginSelection")
                .field("title", &flow.title())
                .field("options", &flow.option_count())
                .finish(),
        }
    }
}

/// `Navigator::drill_down_outcome` 的结果
#[derive(Debug)]
pub enum DrillOutcome {
    /// 进入了更深一层
    Moved,
    /// 从条目钻取进了它自己的分节（二级嵌套）
    Nested,
    /// 条目动作已执行
    Activated(ActionOutcome),
    /// 条目动作执行失败
    ActivationFailed(NavError),
    /// 当前位置无法进入也无法激活
    Nothing,
}

impl DrillOutcome {
    /// 是否发生了状态变化或成功执行了动作
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            DrillOutcome::Moved | DrillOutcome::Nested | DrillOutcome::Activated(_)
        )
    }
}
