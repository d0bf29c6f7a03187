//! 快捷键定义

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_REVIEW: KeyBinding = KeyBinding::ctrl(KeyCode::Char('r'));
    pub const TOGGLE_OPTIONS: KeyBinding = KeyBinding::ctrl(KeyCode::Char('p'));
    pub const ADVANCE_TURN: KeyBinding = KeyBinding::ctrl(KeyCode::Char('n'));
    pub const CLEAR_STATUS: KeyBinding = KeyBinding::ctrl(KeyCode::Char('l'));

    // 导航
    pub const NEXT: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const PREVIOUS: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const DRILL_DOWN: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const BACK_OUT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const CANCEL: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const READ_DETAIL: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const LIST_ALL: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const LIST_SCREENS: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::F(5));

    // 操作
    pub const CONFIRM: KeyBinding = KeyBinding::ctrl(KeyCode::Char('o'));
    pub const TOOLTIP: KeyBinding = KeyBinding::ctrl(KeyCode::Char('t'));

    // 文本输入
    pub const ERASE: KeyBinding = KeyBinding::key(KeyCode::Backspace);
}
