//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!     pub fn update(app: &mut App, msg: AppMessage) {
//!         match msg {
//!             AppMessage::Review(command) => review(app, command),
//!             ...
//!         }
//!     }
//!
//! 导航命令全部交给 `ReviewMode::handle`，由它决定路由到哪个状态机并朗读结果。
//! 宿主只额外处理一件事：菜单中的返回键。`ReviewMode` 在菜单顶层收到 `BackOut`
//! 时不会自行关闭菜单，这里先取消确认对话框，再关闭菜单。
//!

use review_mode_core::{ActiveLayer, Command};

use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleReview => {
            app.review.toggle();
            if app.review.is_active() {
                app.clear_status();
            } else {
                app.set_status("Review Mode off. Ctrl+R to resume");
            }
        }

        AppMessage::Review(command) => review(app, command),

        AppMessage::ToggleOptions => {
            if app.menu_open() {
                app.close_options();
            } else {
                app.open_options();
            }
        }

        AppMessage::AdvanceTurn => {
            let summary = app.world.borrow_mut().advance();
            app.set_status(summary);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 把导航命令交给 Review Mode
fn review(app: &mut App, command: Command) {
    if !app.review.is_active() {
        app.set_status("Review Mode is off. Ctrl+R to start");
        return;
    }

    if command == Command::BackOut && app.review.active_layer() == ActiveLayer::Menu {
        let confirming = app.world.borrow().confirm_delete;
        if confirming {
            // 取消对话框，让菜单重新读取控件
            app.world.borrow_mut().confirm_delete = false;
            app.review.handle(Command::Refresh);
        } else {
            app.close_options();
        }
        return;
    }

    if !app.review.handle(command) {
        log::debug!("{command:?} changed nothing");
    }
}
