//! 选项菜单
//!
//! 普通状态：音量滑块、自动存档开关、难度下拉框、存档名输入框、保存按钮、
//! 存档列表与删除按钮。点击删除后进入 "Delete this save" 确认对话框，
//! 控件列表整体替换为确认/取消两个按钮。

use std::rc::Rc;

use review_mode_core::{
    ControlChange, ControlState, LiveControl, MenuControl, MenuScreen, NavError, NavResult,
};

use super::world::{SharedWorld, DIFFICULTIES};

/// 确认对话框标题
pub const DELETE_DIALOG: &str = "Delete this save";

/// 控件在菜单中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Volume,
    Autosave,
    Difficulty,
    SaveName,
    SaveGame,
    SaveRow(usize),
    DeleteSave,
    ConfirmDelete,
    CancelDelete,
}

impl Slot {
    fn tag(self) -> String {
        match self {
            Slot::Volume => "volume".to_string(),
            Slot::Autosave => "autosave".to_string(),
            Slot::Difficulty => "difficulty".to_string(),
            Slot::SaveName => "save-name".to_string(),
            Slot::SaveGame => "save-game".to_string(),
            Slot::SaveRow(index) => format!("save-{index}"),
            Slot::DeleteSave => "delete-save".to_string(),
            Slot::ConfirmDelete => "confirm-delete".to_string(),
            Slot::CancelDelete => "cancel-delete".to_string(),
        }
    }
}

/// 绑定到世界设置的单个控件
struct OptionControl {
    slot: Slot,
    world: SharedWorld,
}

impl LiveControl for OptionControl {
    fn label(&self) -> String {
        let world = self.world.borrow();
        match self.slot {
            Slot::Volume => "Volume".to_string(),
            Slot::Autosave => "Autosave".to_string(),
            Slot::Difficulty => "Difficulty".to_string(),
            Slot::SaveName => "Save name".to_string(),
            Slot::SaveGame => "Save game".to_string(),
            Slot::SaveRow(index) => {
                let name = world.saves.get(index).cloned().unwrap_or_default();
                if world.selected_save == Some(index) {
                    format!("{name}, selected")
                } else {
                    name
                }
            }
            Slot::DeleteSave => "Delete save".to_string(),
            Slot::ConfirmDelete => "Delete".to_string(),
            Slot::CancelDelete => "Cancel".to_string(),
        }
    }

    fn state(&self) -> ControlState {
        let world = self.world.borrow();
        let settings = &world.settings;
        match self.slot {
            Slot::Volume => ControlState::Slider {
                value: settings.volume,
                min: 0.0,
                max: 100.0,
                step: None,
            },
            Slot::Autosave => ControlState::Toggle {
                on: settings.autosave,
            },
            Slot::Difficulty => ControlState::Dropdown {
                options: DIFFICULTIES.iter().map(|d| (*d).to_string()).collect(),
                selected: settings.difficulty,
            },
            Slot::SaveName => ControlState::InputField {
                text: settings.save_name.clone(),
            },
            Slot::SaveRow(_) => ControlState::ScrollListItem,
            Slot::SaveGame | Slot::DeleteSave | Slot::ConfirmDelete | Slot::CancelDelete => {
                ControlState::Button
            }
        }
    }

    fn is_interactable(&self) -> bool {
        let world = self.world.borrow();
        match self.slot {
            Slot::DeleteSave => world.selected_save.is_some(),
            Slot::SaveRow(index) => index < world.saves.len(),
            _ => true,
        }
    }

    fn apply(&self, change: ControlChange) -> NavResult<()> {
        let mut world = self.world.borrow_mut();
        match (self.slot, change) {
            (Slot::Volume, ControlChange::Slider(value)) => world.settings.volume = value,
            (Slot::Autosave, ControlChange::Toggle(on)) => world.settings.autosave = on,
            (Slot::Difficulty, ControlChange::Select(index)) if index < DIFFICULTIES.len() => {
                world.settings.difficulty = index;
            }
            (Slot::SaveName, ControlChange::Text(text)) => world.settings.save_name = text,
            (Slot::SaveGame, ControlChange::Click) => {
                let name = world.save_game();
                log::info!("Saved game as {name}");
            }
            (Slot::SaveRow(index), ControlChange::Click) => world.selected_save = Some(index),
            (Slot::DeleteSave, ControlChange::Click) => world.confirm_delete = true,
            (Slot::ConfirmDelete, ControlChange::Click) => {
                if let Some(name) = world.delete_selected_save() {
                    log::info!("Deleted save {name}");
                }
                world.confirm_delete = false;
            }
            (Slot::CancelDelete, ControlChange::Click) => world.confirm_delete = false,
            (slot, change) => {
                return Err(NavError::UnsupportedChange(format!("{} ({change:?})", slot.tag())));
            }
        }
        Ok(())
    }
}

pub struct OptionsMenu {
    world: SharedWorld,
}

impl OptionsMenu {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    fn control(&self, slot: Slot) -> MenuControl {
        let live: Rc<dyn LiveControl> = Rc::new(OptionControl {
            slot,
            world: Rc::clone(&self.world),
        });
        MenuControl::new(slot.tag(), live)
    }
}

impl MenuScreen for OptionsMenu {
    fn name(&self) -> &str {
        "Options"
    }

    fn active_dialog(&self) -> Option<String> {
        self.world
            .borrow()
            .confirm_delete
            .then(|| DELETE_DIALOG.to_string())
    }

    fn build_controls(&self) -> Vec<MenuControl> {
        let (confirming, saves) = {
            let world = self.world.borrow();
            (world.confirm_delete, world.saves.len())
        };
        if confirming {
            return vec![self.control(Slot::ConfirmDelete), self.control(Slot::CancelDelete)];
        }

        let mut slots = vec![
            Slot::Volume,
            Slot::Autosave,
            Slot::Difficulty,
            Slot::SaveName,
            Slot::SaveGame,
        ];
        slots.extend((0..saves).map(Slot::SaveRow));
        slots.push(Slot::DeleteSave);
        slots.into_iter().map(|slot| self.control(slot)).collect()
    }
}
