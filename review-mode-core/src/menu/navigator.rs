//! 菜单导航状态机（单层）

use crate::error::{NavError, NavResult};
use crate::letter::find_next_by_letter;
use crate::traits::MenuScreen;

use super::control::{ControlChange, ControlKind, ControlState, MenuControl};

/// `MenuNavigator::refresh` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRefresh {
    /// 仍是同一个子状态，光标已按新列表校正
    Unchanged,
    /// 临时对话框出现或消失，控件列表与光标已从头重建
    SubStateChanged,
}

/// `MenuNavigator::activate_control` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuActivation {
    /// 已对真实控件施加修改
    Activated,
    /// 输入框：由调用方进入文本输入状态
    BeginTextEntry {
        index: usize,
        label: String,
        text: String,
    },
    /// 该控件没有可执行的激活动作（如滑块）
    Nothing,
}

/// 菜单导航器
pub struct MenuNavigator {
    screen: Box<dyn MenuScreen>,
    controls: Vec<MenuControl>,
    index: usize,
    dialog: Option<String>,
    step_fraction: f32,
}

impl MenuNavigator {
    /// 打开菜单；`step_fraction` 为滑块未声明步长时的默认步进比例
    pub fn new(screen: Box<dyn MenuScreen>, step_fraction: f32) -> Self {
        let dialog = screen.active_dialog();
        let controls = screen.build_controls();
        log::debug!("Menu {} opened with {} controls", screen.name(), controls.len());
        Self {
            screen,
            controls,
            index: 0,
            dialog,
            step_fraction,
        }
    }

    pub fn name(&self) -> &str {
        self.screen.name()
    }

    /// 当前的临时对话框标题
    pub fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }

    pub fn controls(&self) -> &[MenuControl] {
        &self.controls
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_control(&self) -> Option<&MenuControl> {
        self.controls.get(self.index)
    }

    /// 按当前可见内容重建控件列表
    pub fn refresh(&mut self) -> MenuRefresh {
        let dialog = self.screen.active_dialog();
        self.controls = self.screen.build_controls();
        if dialog != self.dialog {
            log::debug!(
                "Menu {} sub-state changed: {:?} -> {:?}",
                self.screen.name(),
                self.dialog,
                dialog
            );
            self.dialog = dialog;
            self.index = 0;
            return MenuRefresh::SubStateChanged;
        }
        if self.index >= self.controls.len() {
            self.index = 0;
        }
        MenuRefresh::Unchanged
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let count = self.controls.len();
        if count == 0 {
            return false;
        }
        self.index = (self.index + 1) % count;
        true
    }

    pub fn previous(&mut self) -> bool {
        let count = self.controls.len();
        if count == 0 {
            return false;
        }
        self.index = if self.index == 0 || self.index >= count {
            count - 1
        } else {
            self.index - 1
        };
        true
    }

    /// 从 `current` 之后查找下一个以 `letter` 开头的控件（循环）
    pub fn find_next_control_by_letter(&self, letter: char, current: usize) -> Option<usize> {
        let labels: Vec<&str> = self.controls.iter().map(MenuControl::label).collect();
        find_next_by_letter(&labels, current, letter)
    }

    pub fn jump_to_letter(&mut self, letter: char) -> bool {
        match self.find_next_control_by_letter(letter, self.index) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// 激活控件：按钮与列表项点击，开关翻转，下拉框切到下一项
    pub fn activate_control(&mut self, index: usize) -> NavResult<MenuActivation> {
        let Some(control) = self.controls.get_mut(index) else {
            return Ok(MenuActivation::Nothing);
        };
        control.refresh_value();
        if !control.is_interactable() {
            return Err(NavError::ControlNotInteractable(control.label().to_string()));
        }

        let change = match control.state() {
            ControlState::Button | ControlState::ScrollListItem => ControlChange::Click,
            ControlState::Toggle { on } => ControlChange::Toggle(!on),
            ControlState::Dropdown { options, selected } => {
                if options.is_empty() {
                    return Ok(MenuActivation::Nothing);
                }
                ControlChange::Select((selected + 1) % options.len())
            }
            ControlState::Slider { .. } => return Ok(MenuActivation::Nothing),
            ControlState::InputField { text } => {
                return Ok(MenuActivation::BeginTextEntry {
                    index,
                    label: control.label().to_string(),
                    text: text.clone(),
                });
            }
        };

        log::debug!("Activating {} ({:?})", control.action_tag(), change);
        control.live().apply(change)?;
        control.refresh_value();
        Ok(MenuActivation::Activated)
    }

    /// 调整控件：滑块按步长移动，下拉框前后循环，开关无论方向都翻转
    ///
    /// 返回 false 表示该控件不可调整或已到边界。
    pub fn adjust_control(&mut self, index: usize, increment: bool) -> NavResult<bool> {
        let step_fraction = self.step_fraction;
        let Some(control) = self.controls.get_mut(index) else {
            return Ok(false);
        };
        control.refresh_value();
        if !control.is_interactable() {
            return Err(NavError::ControlNotInteractable(control.label().to_string()));
        }

        let change = match control.state() {
            ControlState::Slider {
                value,
                min,
                max,
                step,
            } => {
                let step = step.unwrap_or((max - min) * step_fraction);
                let raw = if increment { value + step } else { value - step };
                let target = raw.max(*min).min(*max);
                if (target - value).abs() < f32::EPSILON {
                    return Ok(false);
                }
                ControlChange::Slider(target)
            }
            ControlState::Dropdown { options, selected } => {
                let count = options.len();
                if count == 0 {
                    return Ok(false);
                }
                let next = if increment {
                    (selected + 1) % count
                } else if *selected == 0 || *selected >= count {
                    count - 1
                } else {
                    selected - 1
                };
                ControlChange::Select(next)
            }
            ControlState::Toggle { on } => ControlChange::Toggle(!on),
            ControlState::Button | ControlState::ScrollListItem | ControlState::InputField { .. } => {
                return Ok(false);
            }
        };

        control.live().apply(change)?;
        control.refresh_value();
        Ok(true)
    }

    /// 提交输入框文本
    pub fn commit_text(&mut self, index: usize, text: String) -> NavResult<()> {
        let Some(control) = self.controls.get_mut(index) else {
            return Err(NavError::ActionFailed("text field no longer present".to_string()));
        };
        if control.kind() != ControlKind::InputField {
            return Err(NavError::UnsupportedChange(control.label().to_string()));
        }
        control.live().apply(ControlChange::Text(text))?;
        control.refresh_value();
        Ok(())
    }

    /// 当前控件朗读（先重新读取真实控件）
    pub fn announcement(&mut self) -> String {
        let count = self.controls.len();
        match self.controls.get_mut(self.index) {
            Some(control) => {
                control.refresh_value();
                format!("{} of {count}: {}", self.index + 1, control.announcement_text())
            }
            None => "No controls".to_string(),
        }
    }

    /// 打开菜单或子状态切换时的朗读
    pub fn opening_announcement(&mut self) -> String {
        let title = self
            .dialog
            .clone()
            .unwrap_or_else(|| self.screen.name().to_string());
        format!("{title}. {}", self.announcement())
    }

    pub fn detail(&mut self) -> String {
        let Some(control) = self.controls.get_mut(self.index) else {
            return "No controls".to_string();
        };
        control.refresh_value();
        let usage = match control.kind() {
            ControlKind::Button => "Enter to press",
            ControlKind::ScrollListItem => "Enter to select",
            ControlKind::Toggle => "Enter or plus and minus to switch",
            ControlKind::Slider => "Plus and minus to adjust",
            ControlKind::Dropdown => "Enter to cycle, plus and minus to choose",
            ControlKind::InputField => "Enter to edit",
        };
        format!("{}. {usage}", control.announcement_text())
    }

    /// 所有控件，当前项带 "(current)" 标记
    pub fn entries(&mut self) -> Vec<String> {
        let current = self.index;
        self.controls
            .iter_mut()
            .enumerate()
            .map(|(i, control)| {
                control.refresh_value();
                let text = control.announcement_text();
                if i == current {
                    format!("{text} (current)")
                } else {
                    text
                }
            })
            .collect()
    }
}
