//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use review_mode_core::ActiveLayer;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app.review.active_layer());

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(layer: ActiveLayer) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("^R", "Review"), ("^Q", "Quit")];
    match layer {
        ActiveLayer::Off => {}
        ActiveLayer::Navigator => {
            hints.push(("↑↓", "Move"));
            hints.push(("←→", "Level"));
            hints.push(("Tab", "List"));
            hints.push(("^T", "Tooltip"));
            hints.push(("^P", "Options"));
            hints.push(("^N", "Next turn"));
        }
        ActiveLayer::Selection => {
            hints.push(("Enter", "Select"));
            hints.push(("^O", "Confirm"));
            hints.push(("Esc", "Cancel"));
        }
        ActiveLayer::Menu => {
            hints.push(("Enter", "Activate"));
            hints.push(("+/-", "Adjust"));
            hints.push(("Esc", "Close"));
        }
        ActiveLayer::TextEntry => {
            hints.push(("Enter", "Save"));
            hints.push(("Esc", "Cancel"));
        }
    }
    hints
}
