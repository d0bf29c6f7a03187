//! 菜单控件快照

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::traits::LiveControl;

/// 控件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    Button,
    Dropdown,
    Toggle,
    Slider,
    ScrollListItem,
    InputField,
}

impl ControlKind {
    /// 朗读用名称
    pub fn spoken_name(self) -> &'static str {
        match self {
            ControlKind::Button => "button",
            ControlKind::Dropdown => "dropdown",
            ControlKind::Toggle => "toggle",
            ControlKind::Slider => "slider",
            ControlKind::ScrollListItem => "list item",
            ControlKind::InputField => "text field",
        }
    }
}

/// 控件当前状态（按类型区分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ControlState {
    Button,
    Toggle {
        on: bool,
    },
    Slider {
        value: f32,
        min: f32,
        max: f32,
        /// 未设置时使用范围 × 步进比例
        step: Option<f32>,
    },
    Dropdown {
        options: Vec<String>,
        selected: usize,
    },
    ScrollListItem,
    InputField {
        text: String,
    },
}

impl ControlState {
    pub fn kind(&self) -> ControlKind {
        match self {
            ControlState::Button => ControlKind::Button,
            ControlState::Toggle { .. } => ControlKind::Toggle,
            ControlState::Slider { .. } => ControlKind::Slider,
            ControlState::Dropdown { .. } => ControlKind::Dropdown,
            ControlState::ScrollListItem => ControlKind::ScrollListItem,
            ControlState::InputField { .. } => ControlKind::InputField,
        }
    }

    /// 当前值的朗读文本；按钮与列表项没有值
    pub fn value_text(&self) -> Option<String> {
        match self {
            ControlState::Button | ControlState::ScrollListItem => None,
            ControlState::Toggle { on } => Some(if *on { "on" } else { "off" }.to_string()),
            ControlState::Slider { value, min, max, .. } => {
                Some(format_slider_value(*value, *min, *max))
            }
            ControlState::Dropdown { options, selected } => Some(
                options
                    .get(*selected)
                    .cloned()
                    .unwrap_or_else(|| "none".to_string()),
            ),
            ControlState::InputField { text } if text.is_empty() => Some("empty".to_string()),
            ControlState::InputField { text } => Some(text.clone()),
        }
    }
}

/// 对真实控件施加的修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum ControlChange {
    Click,
    Toggle(bool),
    Slider(f32),
    Select(usize),
    Text(String),
}

/// 按范围选择滑块数值的显示方式
///
/// `[0,100]` 显示为百分比；`[0,1]` 换算为百分比；范围不小于 10 显示整数；
/// 其余保留一位小数。
pub fn format_slider_value(value: f32, min: f32, max: f32) -> String {
    let near = |a: f32, b: f32| (a - b).abs() < f32::EPSILON;
    if near(min, 0.0) && near(max, 100.0) {
        format!("{value:.0}%")
    } else if near(min, 0.0) && near(max, 1.0) {
        format!("{:.0}%", value * 100.0)
    } else if max - min >= 10.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// 菜单控件
///
/// 构建时对 [`LiveControl`] 做一次快照，朗读前通过 [`Self::refresh_value`]
/// 重新读取。`action_tag` 是与显示文本无关的语义标识。
#[derive(Clone)]
pub struct MenuControl {
    label: String,
    action_tag: String,
    state: ControlState,
    interactable: bool,
    live: Rc<dyn LiveControl>,
}

impl MenuControl {
    pub fn new(action_tag: impl Into<String>, live: Rc<dyn LiveControl>) -> Self {
        Self {
            label: live.label(),
            action_tag: action_tag.into(),
            state: live.state(),
            interactable: live.is_interactable(),
            live,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action_tag(&self) -> &str {
        &self.action_tag
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn kind(&self) -> ControlKind {
        self.state.kind()
    }

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    pub(crate) fn live(&self) -> &dyn LiveControl {
        self.live.as_ref()
    }

    /// 重新读取标签、状态与可用性
    pub fn refresh_value(&mut self) {
        self.label = self.live.label();
        self.state = self.live.state();
        self.interactable = self.live.is_interactable();
    }

    /// "标签, 类型, 值"，不可用时追加 ", unavailable"
    pub fn announcement_text(&self) -> String {
        let mut text = format!("{}, {}", self.label, self.kind().spoken_name());
        if let Some(value) = self.state.value_text() {
            text.push_str(", ");
            text.push_str(&value);
        }
        if !self.interactable {
            text.push_str(", unavailable");
        }
        text
    }
}

impl fmt::Debug for MenuControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuControl")
            .field("label", &self.label)
            .field("action_tag", &self.action_tag)
            .field("state", &self.state)
            .field("interactable", &self.interactable)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::NavResult;

    struct Volume(RefCell<f32>);

    impl LiveControl for Volume {
        fn label(&self) -> String {
            "Volume".to_string()
        }

        fn state(&self) -> ControlState {
            ControlState::Slider {
                value: *self.0.borrow(),
                min: 0.0,
                max: 1.0,
                step: None,
            }
        }

        fn apply(&self, change: ControlChange) -> NavResult<()> {
            if let ControlChange::Slider(value) = change {
                *self.0.borrow_mut() = value;
            }
            Ok(())
        }
    }

    #[test]
    fn slider_formatting_depends_on_range() {
        assert_eq!(format_slider_value(40.0, 0.0, 100.0), "40%");
        assert_eq!(format_slider_value(0.25, 0.0, 1.0), "25%");
        assert_eq!(format_slider_value(12.0, 1.0, 30.0), "12");
        assert_eq!(format_slider_value(1.5, 0.5, 3.0), "1.5");
    }

    #[test]
    fn value_text_per_kind() {
        assert_eq!(ControlState::Button.value_text(), None);
        assert_eq!(ControlState::Toggle { on: true }.value_text().as_deref(), Some("on"));
        assert_eq!(
            ControlState::Dropdown {
                options: vec!["Easy".into(), "Hard".into()],
                selected: 1
            }
            .value_text()
            .as_deref(),
            Some("Hard")
        );
        assert_eq!(
            ControlState::InputField { text: String::new() }.value_text().as_deref(),
            Some("empty")
        );
    }

    #[test]
    fn refresh_rereads_live_control() {
        let live = Rc::new(Volume(RefCell::new(0.5)));
        let shared: Rc<dyn LiveControl> = live.clone();
        let mut control = MenuControl::new("volume", shared);
        assert_eq!(control.announcement_text(), "Volume, slider, 50%");

        *live.0.borrow_mut() = 0.8;
        assert_eq!(control.announcement_text(), "Volume, slider, 50%");
        control.refresh_value();
        assert_eq!(control.announcement_text(), "Volume, slider, 80%");
        assert_eq!(control.action_tag(), "volume");
    }
}
