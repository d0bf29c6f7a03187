//! 测试辅助模块
//!
//! 提供以 `Rc<RefCell<..>>` 共享数据为后端的模拟屏幕，测试可以在两次
//! 导航操作之间直接修改数据，模拟游戏模拟器在输入之间的变化。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::NavError;
use crate::section::{DataSection, SectionEntry};
use crate::selection::{ConfirmPolicy, SelectionMode, SelectionOption};
use crate::traits::{Screen, Section};
use crate::types::ActionOutcome;

/// 条目行为
#[derive(Debug, Clone)]
pub enum EntryKind {
    Plain,
    Action,
    Failing,
    /// 激活后打开两步确认的选择流程
    Selecting(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub text: String,
    pub kind: EntryKind,
    pub target: Option<String>,
}

impl MockEntry {
    pub fn actionable(mut self) -> Self {
        self.kind = EntryKind::Action;
        self
    }

    pub fn failing(mut self) -> Self {
        self.kind = EntryKind::Failing;
        self
    }

    pub fn selecting(mut self, options: &[&str]) -> Self {
        self.kind = EntryKind::Selecting(options.iter().map(|s| (*s).to_string()).collect());
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct MockSection {
    pub name: String,
    pub entries: Vec<MockEntry>,
}

impl MockSection {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: MockEntry) -> Self {
        self.entries.push(entry);
        self
    }
}

#[derive(Debug, Clone)]
pub struct MockItem {
    pub name: String,
    pub sections: Vec<MockSection>,
}

/// 模拟数据源
#[derive(Debug, Default)]
pub struct MockData {
    pub items: Vec<MockItem>,
    /// 钻取标识 -> 该目标自己的分节
    pub targets: HashMap<String, Vec<MockSection>>,
    /// 已执行的条目动作
    pub activations: Vec<String>,
    /// "activate" / "deactivate" 调用记录
    pub lifecycle: Vec<String>,
}

pub type SharedData = Rc<RefCell<MockData>>;

pub struct MockScreen {
    name: String,
    data: SharedData,
}

impl MockScreen {
    fn build(&self, sections: &[MockSection]) -> Vec<Box<dyn Section>> {
        sections
            .iter()
            .map(|mock| {
                let mut section = DataSection::new(mock.name.clone());
                for entry in &mock.entries {
                    section.push(self.build_entry(entry));
                }
                section.boxed()
            })
            .collect()
    }

    fn build_entry(&self, mock: &MockEntry) -> SectionEntry {
        let mut entry = SectionEntry::new(mock.text.clone());
        if let Some(target) = &mock.target {
            entry = entry.with_drill_target(target.clone());
        }
        let text = mock.text.clone();
        let data = Rc::clone(&self.data);
        match &mock.kind {
            EntryKind::Plain => entry,
            EntryKind::Action => entry.with_action(move || {
                data.borrow_mut().activations.push(text.clone());
                Ok(ActionOutcome::Done)
            }),
            EntryKind::Failing => {
                entry.with_action(move || Err(NavError::ActionFailed(text.clone())))
            }
            EntryKind::Selecting(labels) => {
                let labels = labels.clone();
                entry.with_action(move || {
                    let options = labels
                        .iter()
                        .map(|label| SelectionOption::new(label.clone(), label.clone()))
                        .collect();
                    let sink = Rc::clone(&data);
                    let title = text.clone();
                    let flow = SelectionMode::new(text.clone(), options, move |_, choice: &String| {
                        sink.borrow_mut().activations.push(format!("{title} -> {choice}"));
                        Ok(ActionOutcome::message(format!("{title} to {choice}")))
                    })
                    .with_policy(ConfirmPolicy::TwoStep);
                    Ok(ActionOutcome::select(flow))
                })
            }
        }
    }
}

impl Screen for MockScreen {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!("{} screen", self.name)
    }

    fn item_count(&self) -> usize {
        self.data.borrow().items.len()
    }

    fn item_summary(&self, index: usize) -> String {
        self.data
            .borrow()
            .items
            .get(index)
            .map_or_else(|| "Unknown item".to_string(), |item| item.name.clone())
    }

    fn item_detail(&self, index: usize) -> String {
        format!("{} in detail", self.item_summary(index))
    }

    fn sections_for_item(&self, index: usize) -> Vec<Box<dyn Section>> {
        let data = self.data.borrow();
        match data.items.get(index) {
            Some(item) => self.build(&item.sections),
            None => Vec::new(),
        }
    }

    fn sections_for_target(&self, target: &str) -> Vec<Box<dyn Section>> {
        let data = self.data.borrow();
        match data.targets.get(target) {
            Some(sections) => self.build(sections),
            None => Vec::new(),
        }
    }

    fn on_activate(&mut self) {
        self.data.borrow_mut().lifecycle.push("activate".to_string());
    }

    fn on_deactivate(&mut self) {
        self.data.borrow_mut().lifecycle.push("deactivate".to_string());
    }
}

pub fn entry(text: &str) -> MockEntry {
    MockEntry {
        text: text.to_string(),
        kind: EntryKind::Plain,
        target: None,
    }
}

pub fn section(name: &str, entries: &[&str]) -> MockSection {
    MockSection {
        name: name.to_string(),
        entries: entries.iter().map(|text| entry(text)).collect(),
    }
}

pub fn item(name: &str, sections: Vec<MockSection>) -> MockItem {
    MockItem {
        name: name.to_string(),
        sections,
    }
}

/// 创建模拟屏幕，同时返回可供测试修改的数据句柄
pub fn screen(name: &str, items: Vec<MockItem>) -> (MockScreen, SharedData) {
    let data = Rc::new(RefCell::new(MockData {
        items,
        ..MockData::default()
    }));
    let screen = MockScreen {
        name: name.to_string(),
        data: Rc::clone(&data),
    };
    (screen, data)
}
