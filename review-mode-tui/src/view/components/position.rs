//! 左侧位置面板：当前层级的全部条目，高亮当前项

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use review_mode_core::{ActiveLayer, NavigationLevel, ReviewMode};

use crate::model::App;
use crate::view::theme::Styles;

/// 当前项标记（导航器与选择流程的条目都带有它）
const CURRENT_MARK: &str = " (current)";

/// 面板内容
struct Panel {
    title: String,
    entries: Vec<String>,
    selected: Option<usize>,
    footer: Option<String>,
}

/// 渲染位置面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let review = &app.review;
    let focused = review.is_active();
    let border_style = if focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let Some(panel) = panel(review) else {
        let hint = Paragraph::new("Review Mode is off").style(Styles::muted()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Position "),
        );
        frame.render_widget(hint, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", panel.title));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(u16::from(panel.footer.is_some())),
        ])
        .split(inner);

    let items: Vec<ListItem> = panel
        .entries
        .iter()
        .map(|entry| {
            let text = entry.strip_suffix(CURRENT_MARK).unwrap_or(entry);
            ListItem::new(Line::from(Span::styled(text.to_string(), Styles::text())))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Styles::selected())
        .highlight_symbol("▸ ");
    let mut state = ListState::default().with_selected(panel.selected);
    frame.render_stateful_widget(list, rows[0], &mut state);

    if let Some(footer) = panel.footer {
        frame.render_widget(Paragraph::new(footer).style(Styles::hint_key()), rows[1]);
    }
}

fn panel(review: &ReviewMode) -> Option<Panel> {
    match review.active_layer() {
        ActiveLayer::Off => None,
        ActiveLayer::Navigator => {
            let navigator = review.navigator();
            let cursor = navigator.cursor();
            let index = match cursor.level {
                NavigationLevel::Screens => cursor.screen,
                NavigationLevel::Items => cursor.item,
                NavigationLevel::Sections => cursor.section,
                NavigationLevel::SectionItems => cursor.section_item,
            };
            let mut path = navigator.breadcrumb();
            if cursor.level == NavigationLevel::Screens {
                path = vec!["Screens".to_string()];
            }
            let entries = navigator.level_entries();
            Some(Panel {
                title: path.join(" › "),
                selected: (!entries.is_empty()).then_some(index),
                entries,
                footer: None,
            })
        }
        ActiveLayer::Selection => {
            let flow = review.selection()?;
            Some(Panel {
                title: flow.title().to_string(),
                entries: flow.entries(),
                selected: Some(flow.current_index()),
                footer: Some("Enter select │ Ctrl+O confirm │ Esc cancel".to_string()),
            })
        }
        ActiveLayer::Menu | ActiveLayer::TextEntry => {
            let menu = review.menu()?;
            let footer = review.text_entry().map(|text| format!("Editing: {text}▏"));
            Some(Panel {
                title: menu.dialog().unwrap_or(menu.name()).to_string(),
                entries: menu
                    .controls()
                    .iter()
                    .map(review_mode_core::MenuControl::announcement_text)
                    .collect(),
                selected: Some(menu.index()),
                footer,
            })
        }
    }
}
