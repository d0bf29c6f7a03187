//!
//! src/main.rs
//! Review Mode 终端宿主
//!
//! 一个小型策略模拟（议会、舰队、科技树和选项菜单），
//! 通过 review-mode-core 以读屏器的方式逐层浏览。
//! 终端里没有语音输出，每条朗读都显示在右侧的转写面板中。
//!
//! 分层结构（TEA）：
//!     event    按键 → AppMessage
//!     message  消息定义
//!     update   AppMessage → 修改 App
//!     model    App 状态
//!     view     渲染
//!     backend  模拟世界、屏幕、菜单、朗读记录、配置
//!     util     终端与日志
//!

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{AppConfig, ConfigService, LocalConfigService};
use util::{init_logger, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（写入文件，stdout 属于备用屏幕）
    init_logger()?;

    // 2. 加载配置，首次运行时写入默认配置
    let config_service = LocalConfigService::new();
    let config = config_service.load().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        AppConfig::default()
    });
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Could not write default config: {e}");
        }
    }
    view::theme::set_theme(config.theme);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(&config);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
