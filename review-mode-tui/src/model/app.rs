//! 应用主状态

use std::rc::Rc;

use review_mode_core::ReviewMode;

use crate::backend::{demo_screens, AppConfig, OptionsMenu, SpeechLog, SharedWorld, World};

pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// Review Mode 上下文
    pub review: ReviewMode,

    /// 演示模拟
    pub world: SharedWorld,

    /// 朗读记录（转写面板）
    pub speech: SpeechLog,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        let world = World::demo().shared();
        let speech = SpeechLog::new();

        let mut review = ReviewMode::new(config.navigator.clone(), Box::new(speech.clone()));
        review.register_screens(demo_screens(&world));

        let mut app = Self {
            should_quit: false,
            review,
            world,
            speech,
            status_message: None,
        };

        if config.start_in_review {
            app.review.enter();
        } else {
            app.set_status("Press Ctrl+R to start Review Mode");
        }
        app
    }

    /// 选项菜单是否打开
    pub fn menu_open(&self) -> bool {
        self.review.menu().is_some()
    }

    pub fn open_options(&mut self) {
        let menu = OptionsMenu::new(Rc::clone(&self.world));
        self.review.open_menu(Box::new(menu));
    }

    /// 关闭选项菜单，同时放弃未确认的对话框
    pub fn close_options(&mut self) {
        self.world.borrow_mut().confirm_delete = false;
        self.review.close_menu();
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
