//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use review_mode_core::{ActiveLayer, Command};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: &Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(*key_event, app.review.active_layer()),
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, layer: ActiveLayer) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_REVIEW.matches(&key) {
        return AppMessage::ToggleReview;
    }
    if DefaultKeymap::TOGGLE_OPTIONS.matches(&key) {
        return AppMessage::ToggleOptions;
    }
    if DefaultKeymap::ADVANCE_TURN.matches(&key) {
        return AppMessage::AdvanceTurn;
    }
    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }

    let command = if layer == ActiveLayer::TextEntry {
        text_entry_command(&key)
    } else {
        navigation_command(&key)
    };
    command.map_or(AppMessage::Noop, AppMessage::Review)
}

/// 可打印字符（无修饰或仅 Shift）
fn printable(key: &KeyEvent) -> Option<char> {
    let plain = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;
    match key.code {
        KeyCode::Char(c) if plain && !c.is_control() => Some(c),
        _ => None,
    }
}

/// 文本输入状态的按键
fn text_entry_command(key: &KeyEvent) -> Option<Command> {
    if DefaultKeymap::ERASE.matches(key) {
        return Some(Command::Erase);
    }
    if DefaultKeymap::ACTIVATE.matches(key) {
        return Some(Command::Activate);
    }
    if DefaultKeymap::CANCEL.matches(key) {
        return Some(Command::BackOut);
    }
    printable(key).map(Command::Type)
}

/// 导航状态的按键
fn navigation_command(key: &KeyEvent) -> Option<Command> {
    let bindings = [
        (&DefaultKeymap::NEXT, Command::Next),
        (&DefaultKeymap::PREVIOUS, Command::Previous),
        (&DefaultKeymap::DRILL_DOWN, Command::DrillDown),
        (&DefaultKeymap::BACK_OUT, Command::BackOut),
        (&DefaultKeymap::CANCEL, Command::BackOut),
        (&DefaultKeymap::ACTIVATE, Command::Activate),
        (&DefaultKeymap::READ_DETAIL, Command::ReadDetail),
        (&DefaultKeymap::LIST_ALL, Command::ListAll),
        (&DefaultKeymap::LIST_SCREENS, Command::ListAllScreens),
        (&DefaultKeymap::REFRESH, Command::Refresh),
        (&DefaultKeymap::CONFIRM, Command::Confirm),
        (&DefaultKeymap::TOOLTIP, Command::Tooltip),
    ];
    if let Some((_, command)) = bindings.iter().find(|(binding, _)| binding.matches(key)) {
        return Some(*command);
    }

    // 部分终端上 BackTab 不带 Shift 修饰
    if key.code == KeyCode::BackTab {
        return Some(Command::ListAllScreens);
    }

    match printable(key)? {
        '+' | '=' => Some(Command::AdjustUp),
        '-' | '_' => Some(Command::AdjustDown),
        // 1-9 直接切换屏幕
        digit @ '1'..='9' => digit
            .to_digit(10)
            .map(|d| Command::SwitchScreen(d as usize - 1)),
        c if c.is_alphabetic() => Some(Command::JumpToLetter(c)),
        _ => None,
    }
}
