//! 输入命令

use serde::{Deserialize, Serialize};

/// 输入命令
///
/// 由宿主的输入分发层（已去抖）产生，每次只处理一条，
/// `ReviewMode::handle` 将其路由到当前活动的状态机。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Command {
    /// 下一项（循环）
    Next,
    /// 上一项（循环）
    Previous,
    /// 进入下一层
    DrillDown,
    /// 返回上一层 / 取消
    BackOut,
    /// 朗读当前层的全部条目
    ListAll,
    /// 朗读当前位置的详细信息
    ReadDetail,
    /// 激活当前条目
    Activate,
    /// 确认选择（两步选择流程的第二步）
    Confirm,
    /// 增大控件值
    AdjustUp,
    /// 减小控件值
    AdjustDown,
    /// 跳到下一个以该字母开头的条目
    JumpToLetter(char),
    /// 朗读所有屏幕
    ListAllScreens,
    /// 直接切换到指定屏幕（从 0 开始）
    SwitchScreen(usize),
    /// 打开当前条目的提示信息
    Tooltip,
    /// 从数据源重新读取当前视图
    Refresh,
    /// 文本输入：追加字符
    Type(char),
    /// 文本输入：删除最后一个字符
    Erase,
}

impl Command {
    /// 是否是"朗读全部"类命令（使用单独的打断策略）
    pub fn is_listing(self) -> bool {
        matches!(self, Command::ListAll | Command::ListAllScreens)
    }

    /// 是否作用于游标所在位置（游标过期时不应执行）
    pub fn is_positional(self) -> bool {
        matches!(
            self,
            Command::Next
                | Command::Previous
                | Command::DrillDown
                | Command::Activate
                | Command::BackOut
                | Command::JumpToLetter(_)
                | Command::Tooltip
        )
    }
}
