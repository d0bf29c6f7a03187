//! 选择子模式
//!
//! 条目动作需要用户挑选目标（任务目标、母港、合并对象）时，返回
//! `ActionOutcome::BeginSelection`，审阅上下文随即把导航交给这里。

use std::fmt;

use crate::error::{NavError, NavResult};
use crate::letter::find_next_by_letter;
use crate::traits::{SelectionFlow, SelectionStep};
use crate::types::ActionOutcome;

/// 完成选择的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmPolicy {
    /// 选中即完成
    #[default]
    Immediate,
    /// 先选中，再单独确认
    TwoStep,
}

/// 一个可选项
#[derive(Debug, Clone)]
pub struct SelectionOption<T> {
    pub label: String,
    pub detail: Option<String>,
    pub payload: T,
}

impl<T> SelectionOption<T> {
    pub fn new(label: impl Into<String>, payload: T) -> Self {
        Self {
            label: label.into(),
            detail: None,
            payload,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

type Completion<T> = Box<dyn FnOnce(usize, &T) -> NavResult<ActionOutcome>>;

/// 选择流程
///
/// 完成回调最多执行一次；取消或完成后流程即关闭。
pub struct SelectionMode<T> {
    title: String,
    options: Vec<SelectionOption<T>>,
    index: usize,
    chosen: Option<usize>,
    policy: ConfirmPolicy,
    on_complete: Option<Completion<T>>,
    finished: bool,
}

impl<T> SelectionMode<T> {
    pub fn new(
        title: impl Into<String>,
        options: Vec<SelectionOption<T>>,
        on_complete: impl FnOnce(usize, &T) -> NavResult<ActionOutcome> + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            options,
            index: 0,
            chosen: None,
            policy: ConfirmPolicy::Immediate,
            on_complete: Some(Box::new(on_complete)),
            finished: false,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ConfirmPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn complete(&mut self, index: usize) -> NavResult<ActionOutcome> {
        let option = self.options.get(index).ok_or(NavError::NothingSelected)?;
        let callback = self.on_complete.take().ok_or(NavError::SelectionClosed)?;
        self.finished = true;
        log::debug!("Selection '{}' completed with '{}'", self.title, option.label);
        callback(index, &option.payload)
    }

    fn ensure_open(&self) -> NavResult<()> {
        if self.finished {
            Err(NavError::SelectionClosed)
        } else {
            Ok(())
        }
    }
}

impl<T> fmt::Debug for SelectionMode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionMode")
            .field("title", &self.title)
            .field("options", &self.options.len())
            .field("index", &self.index)
            .field("chosen", &self.chosen)
            .field("policy", &self.policy)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> SelectionFlow for SelectionMode<T> {
    fn title(&self) -> &str {
        &self.title
    }

    fn option_count(&self) -> usize {
        self.options.len()
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn next(&mut self) -> bool {
        let count = self.options.len();
        if count == 0 {
            return false;
        }
        self.index = (self.index + 1) % count;
        true
    }

    fn previous(&mut self) -> bool {
        let count = self.options.len();
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

    fn select_current(&mut self) -> NavResult<SelectionStep> {
        self.ensure_open()?;
        if self.options.is_empty() {
            return Err(NavError::EmptySelection);
        }
        match self.policy {
            ConfirmPolicy::Immediate => self.complete(self.index).map(SelectionStep::Completed),
            ConfirmPolicy::TwoStep => {
                self.chosen = Some(self.index);
                Ok(SelectionStep::Highlighted(self.options[self.index].label.clone()))
            }
        }
    }

    fn confirm(&mut self) -> NavResult<ActionOutcome> {
        self.ensure_open()?;
        match self.chosen.filter(|&i| i < self.options.len()) {
            Some(index) => self.complete(index),
            None => Err(NavError::NothingSelected),
        }
    }

    fn cancel(&mut self) {
        if !self.finished {
            log::debug!("Selection '{}' cancelled", self.title);
        }
        self.on_complete = None;
        self.chosen = None;
        self.finished = true;
    }

    fn jump_to_letter(&mut self, letter: char) -> bool {
        let labels: Vec<&str> = self.options.iter().map(|o| o.label.as_str()).collect();
        match find_next_by_letter(&labels, self.index, letter) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    fn entries(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mut text = option.label.clone();
                if self.chosen == Some(i) {
                    text.push_str(" (selected)");
                }
                if i == self.index {
                    text.push_str(" (current)");
                }
                text
            })
            .collect()
    }

    fn announcement(&self) -> String {
        let Some(option) = self.options.get(self.index) else {
            return "No options".to_string();
        };
        let mut text = format!("{} of {}: {}", self.index + 1, self.options.len(), option.label);
        if self.chosen == Some(self.index) {
            text.push_str(", selected");
        }
        text
    }

    fn detail(&self) -> String {
        match self.options.get(self.index) {
            Some(SelectionOption {
                label,
                detail: Some(detail),
                ..
            }) => format!("{label}. {detail}"),
            Some(option) => option.label.clone(),
            None => "No options".to_string(),
        }
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
