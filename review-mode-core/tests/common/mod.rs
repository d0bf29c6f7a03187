//! 共享测试工具：可在两次输入之间修改的夹具屏幕与菜单

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use review_mode_core::{
    ControlChange, ControlState, DataSection, LiveControl, MenuControl, MenuScreen, NavResult,
    Screen, Section, SectionEntry,
};

/// 分节内的条目：(文本, 钻取标识)
pub type Entries = Vec<(String, Option<String>)>;

/// 一个条目：名称 + 若干 (分节名, 条目文本[, 钻取标识])
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub name: String,
    pub sections: Vec<(String, Entries)>,
}

impl Row {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, name: &str, entries: &[&str]) -> Self {
        self.sections.push((
            name.to_string(),
            entries.iter().map(|e| ((*e).to_string(), None)).collect(),
        ));
        self
    }

    /// 每个条目都能钻入同名目标
    pub fn linked_section(mut self, name: &str, entries: &[&str]) -> Self {
        self.sections.push((
            name.to_string(),
            entries
                .iter()
                .map(|e| ((*e).to_string(), Some((*e).to_string())))
                .collect(),
        ));
        self
    }
}

#[derive(Debug, Default)]
pub struct Table {
    pub rows: Vec<Row>,
    pub targets: HashMap<String, Row>,
}

pub type SharedTable = Rc<RefCell<Table>>;

pub struct TableScreen {
    name: String,
    table: SharedTable,
}

fn build(row: &Row) -> Vec<Box<dyn Section>> {
    row.sections
        .iter()
        .map(|(name, entries)| {
            let mut section = DataSection::new(name.clone());
            for (text, target) in entries {
                let mut entry = SectionEntry::new(text.clone());
                if let Some(target) = target {
                    entry = entry.with_drill_target(target.clone());
                }
                section.push(entry);
            }
            section.boxed()
        })
        .collect()
}

impl Screen for TableScreen {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_count(&self) -> usize {
        self.table.borrow().rows.len()
    }

    fn item_summary(&self, index: usize) -> String {
        self.table
            .borrow()
            .rows
            .get(index)
            .map_or_else(|| "Unknown".to_string(), |row| row.name.clone())
    }

    fn sections_for_item(&self, index: usize) -> Vec<Box<dyn Section>> {
        self.table.borrow().rows.get(index).map(build).unwrap_or_default()
    }

    fn sections_for_target(&self, target: &str) -> Vec<Box<dyn Section>> {
        self.table
            .borrow()
            .targets
            .get(target)
            .map(build)
            .unwrap_or_default()
    }
}

pub fn table_screen(name: &str, rows: Vec<Row>) -> (Box<dyn Screen>, SharedTable) {
    let table = Rc::new(RefCell::new(Table {
        rows,
        targets: HashMap::new(),
    }));
    let screen = TableScreen {
        name: name.to_string(),
        table: Rc::clone(&table),
    };
    (Box::new(screen), table)
}

// ===== Menu fixture =====

#[derive(Debug, Default)]
pub struct Prefs {
    pub labels: Vec<String>,
    pub music: bool,
    pub speed: f32,
    pub profile: String,
    pub pressed: Vec<String>,
}

pub type SharedPrefs = Rc<RefCell<Prefs>>;

struct PrefControl {
    index: usize,
    prefs: SharedPrefs,
}

impl LiveControl for PrefControl {
    fn label(&self) -> String {
        self.prefs
            .borrow()
            .labels
            .get(self.index)
            .cloned()
            .unwrap_or_default()
    }

    fn state(&self) -> ControlState {
        let prefs = self.prefs.borrow();
        match self.label().as_str() {
            "Music" => ControlState::Toggle { on: prefs.music },
            "Speed" => ControlState::Slider {
                value: prefs.speed,
                min: 1.0,
                max: 3.0,
                step: Some(0.5),
            },
            "Profile" => ControlState::InputField {
                text: prefs.profile.clone(),
            },
            _ => ControlState::Button,
        }
    }

    fn apply(&self, change: ControlChange) -> NavResult<()> {
        let label = self.label();
        let mut prefs = self.prefs.borrow_mut();
        match change {
            ControlChange::Toggle(on) => prefs.music = on,
            ControlChange::Slider(value) => prefs.speed = value,
            ControlChange::Text(text) => prefs.profile = text,
            ControlChange::Click | ControlChange::Select(_) => prefs.pressed.push(label),
        }
        Ok(())
    }
}

pub struct PrefsMenu(SharedPrefs);

impl MenuScreen for PrefsMenu {
    fn name(&self) -> &str {
        "Preferences"
    }

    fn build_controls(&self) -> Vec<MenuControl> {
        let count = self.0.borrow().labels.len();
        (0..count)
            .map(|index| {
                let live: Rc<dyn LiveControl> = Rc::new(PrefControl {
                    index,
                    prefs: Rc::clone(&self.0),
                });
                MenuControl::new(format!("pref-{index}"), live)
            })
            .collect()
    }
}

pub fn prefs_menu(labels: &[&str]) -> (Box<dyn MenuScreen>, SharedPrefs) {
    let prefs = Rc::new(RefCell::new(Prefs {
        labels: labels.iter().map(|l| (*l).to_string()).collect(),
        speed: 2.0,
        ..Prefs::default()
    }));
    (Box::new(PrefsMenu(Rc::clone(&prefs))), prefs)
}
