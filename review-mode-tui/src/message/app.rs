//! 应用主消息枚举

use review_mode_core::Command;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 开关 Review Mode
    ToggleReview,

    /// 导航命令
    Review(Command),

    /// 打开 / 关闭选项菜单
    ToggleOptions,

    /// 推进一个回合
    AdvanceTurn,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
