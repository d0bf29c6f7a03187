//! 朗读记录面板

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::App;
use crate::view::theme::Styles;

/// "HH:MM:SS " 前缀宽度
const TIMESTAMP_WIDTH: usize = 9;

/// 按显示宽度截断，超出时以 "…" 结尾
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// 渲染朗读记录，最新的在底部
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(" Speech ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_width = usize::from(inner.width).saturating_sub(TIMESTAMP_WIDTH);
    let lines: Vec<Line> = app
        .speech
        .recent(usize::from(inner.height))
        .into_iter()
        .map(|line| {
            let style = if line.interrupt {
                Styles::text()
            } else {
                Styles::muted()
            };
            Line::from(vec![
                Span::styled(format!("{} ", line.timestamp()), Styles::muted()),
                Span::styled(fit_width(&line.text, text_width), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
