//! 演示用的策略模拟
//!
//! 所有屏幕与菜单共享同一个 [`World`]（`Rc<RefCell<..>>`）。推进回合会在
//! 两次输入之间修改数据：任务结算后被清除、舰队合并后消失、科技研究完成，
//! 导航器需要在下一次操作时自行校正光标。

use std::cell::RefCell;
use std::rc::Rc;

/// 共享的模拟世界
pub type SharedWorld = Rc<RefCell<World>>;

/// 难度选项
pub const DIFFICULTIES: [&str; 3] = ["Easy", "Normal", "Hard"];

/// 每回合的研究点数
const RESEARCH_PER_TURN: u32 = 150;

/// 每回合的船体修复量
const REPAIR_PER_TURN: u8 = 10;

/// 议员任务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mission {
    GainInfluence,
    Investigate,
    Sabotage,
    Recruit,
}

impl Mission {
    pub const ALL: [Mission; 4] = [
        Mission::GainInfluence,
        Mission::Investigate,
        Mission::Sabotage,
        Mission::Recruit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mission::GainInfluence => "Gain Influence",
            Mission::Investigate => "Investigate",
            Mission::Sabotage => "Sabotage",
            Mission::Recruit => "Recruit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mission::GainInfluence => "Raise your influence in a nation",
            Mission::Investigate => "Uncover rival councilors",
            Mission::Sabotage => "Lower a nation's influence",
            Mission::Recruit => "Improve loyalty across the council",
        }
    }

    /// 是否需要再选择一个目标国家
    pub fn needs_target(self) -> bool {
        matches!(self, Mission::GainInfluence | Mission::Sabotage)
    }
}

/// 已指派的任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub mission: Mission,
    pub target: Option<String>,
}

impl Assignment {
    pub fn describe(&self) -> String {
        match &self.target {
            Some(target) => format!("{} in {target}", self.mission.name()),
            None => self.mission.name().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Councilor {
    pub name: String,
    pub profession: String,
    pub loyalty: u8,
    pub traits: Vec<String>,
    pub assignment: Option<Assignment>,
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub name: String,
    pub class: String,
    pub hull: u8,
}

#[derive(Debug, Clone)]
pub struct Fleet {
    pub name: String,
    pub homeport: String,
    pub ships: Vec<Ship>,
}

#[derive(Debug, Clone)]
pub struct Tech {
    pub name: String,
    pub category: String,
    pub cost: u32,
    pub progress: u32,
    pub prerequisites: Vec<String>,
}

impl Tech {
    pub fn is_researched(&self) -> bool {
        self.progress >= self.cost
    }
}

#[derive(Debug, Clone)]
pub struct Nation {
    pub name: String,
    pub influence: u8,
}

/// 选项菜单背后的设置
#[derive(Debug, Clone)]
pub struct Settings {
    /// 0 到 100
    pub volume: f32,
    pub autosave: bool,
    /// `DIFFICULTIES` 的下标
    pub difficulty: usize,
    pub save_name: String,
}

#[derive(Debug, Clone)]
pub struct World {
    pub turn: u32,
    pub councilors: Vec<Councilor>,
    pub fleets: Vec<Fleet>,
    pub techs: Vec<Tech>,
    pub nations: Vec<Nation>,
    pub settings: Settings,
    pub saves: Vec<String>,
    pub selected_save: Option<usize>,
    /// 删除存档的确认对话框是否打开
    pub confirm_delete: bool,
    pub research_focus: Option<String>,
}

fn ship(name: &str, class: &str, hull: u8) -> Ship {
    Ship {
        name: name.to_string(),
        class: class.to_string(),
        hull,
    }
}

fn tech(name: &str, category: &str, cost: u32, progress: u32, prerequisites: &[&str]) -> Tech {
    Tech {
        name: name.to_string(),
        category: category.to_string(),
        cost,
        progress,
        prerequisites: prerequisites.iter().map(|p| (*p).to_string()).collect(),
    }
}

fn councilor(name: &str, profession: &str, loyalty: u8, traits: &[&str]) -> Councilor {
    Councilor {
        name: name.to_string(),
        profession: profession.to_string(),
        loyalty,
        traits: traits.iter().map(|t| (*t).to_string()).collect(),
        assignment: None,
    }
}

impl World {
    /// 演示开局
    pub fn demo() -> Self {
        Self {
            turn: 1,
            councilors: vec![
                councilor("Ana Ruiz", "Diplomat", 72, &["Charismatic", "Cautious"]),
                councilor("Kenji Sato", "Spy", 55, &["Ruthless"]),
                councilor("Leila Haddad", "Scientist", 81, &[]),
            ],
            fleets: vec![
                Fleet {
                    name: "Home Guard".to_string(),
                    homeport: "Brazil".to_string(),
                    ships: vec![
                        ship("Warden", "frigate", 100),
                        ship("Lancer", "destroyer", 64),
                    ],
                },
                Fleet {
                    name: "Strike Group".to_string(),
                    homeport: "India".to_string(),
                    ships: vec![
                        ship("Corsair", "cruiser", 90),
                        ship("Halberd", "destroyer", 100),
                        ship("Pike", "frigate", 40),
                    ],
                },
                Fleet {
                    name: "Reserve".to_string(),
                    homeport: "Nigeria".to_string(),
                    ships: vec![ship("Bastion", "carrier", 100)],
                },
            ],
            techs: vec![
                tech("Materials Science", "Materials", 100, 100, &[]),
                tech("Plasma Physics", "Energy", 300, 300, &[]),
                tech("Superconductors", "Materials", 300, 120, &["Materials Science"]),
                tech(
                    "Fusion Drive",
                    "Propulsion",
                    900,
                    0,
                    &["Plasma Physics", "Superconductors"],
                ),
            ],
            nations: ["Brazil", "India", "Nigeria", "Norway"]
                .iter()
                .map(|name| Nation {
                    name: (*name).to_string(),
                    influence: 10,
                })
                .collect(),
            settings: Settings {
                volume: 80.0,
                autosave: true,
                difficulty: 1,
                save_name: String::new(),
            },
            saves: vec!["Campaign start".to_string(), "Before the vote".to_string()],
            selected_save: None,
            confirm_delete: false,
            research_focus: None,
        }
    }

    pub fn shared(self) -> SharedWorld {
        Rc::new(RefCell::new(self))
    }

    pub fn councilor_index(&self, name: &str) -> Option<usize> {
        self.councilors.iter().position(|c| c.name == name)
    }

    pub fn fleet_index(&self, name: &str) -> Option<usize> {
        self.fleets.iter().position(|f| f.name == name)
    }

    pub fn find_tech(&self, name: &str) -> Option<&Tech> {
        self.techs.iter().find(|t| t.name == name)
    }

    /// 所有前置科技都已完成
    pub fn is_available(&self, tech: &Tech) -> bool {
        tech.prerequisites
            .iter()
            .all(|name| self.find_tech(name).is_some_and(Tech::is_researched))
    }

    /// 以该科技为前置的科技
    pub fn unlocks(&self, name: &str) -> Vec<String> {
        self.techs
            .iter()
            .filter(|t| t.prerequisites.iter().any(|p| p == name))
            .map(|t| t.name.clone())
            .collect()
    }

    pub fn assign(&mut self, councilor: &str, mission: Mission, target: Option<String>) -> bool {
        let Some(index) = self.councilor_index(councilor) else {
            return false;
        };
        self.councilors[index].assignment = Some(Assignment { mission, target });
        log::debug!("{councilor} assigned to {}", mission.name());
        true
    }

    pub fn cancel_mission(&mut self, councilor: &str) -> bool {
        match self.councilor_index(councilor) {
            Some(index) => self.councilors[index].assignment.take().is_some(),
            None => false,
        }
    }

    pub fn transfer_fleet(&mut self, fleet: &str, homeport: &str) -> bool {
        let Some(index) = self.fleet_index(fleet) else {
            return false;
        };
        self.fleets[index].homeport = homeport.to_string();
        true
    }

    /// 把 `from` 的舰船并入 `into`，`from` 随之解散
    pub fn merge_fleets(&mut self, from: &str, into: &str) -> bool {
        if from == into {
            return false;
        }
        let (Some(source), Some(_)) = (self.fleet_index(from), self.fleet_index(into)) else {
            return false;
        };
        let removed = self.fleets.remove(source);
        if let Some(target) = self.fleet_index(into) {
            self.fleets[target].ships.extend(removed.ships);
        }
        log::debug!("Fleet {from} merged into {into}");
        true
    }

    pub fn set_research_focus(&mut self, name: &str) -> bool {
        let ready = self
            .find_tech(name)
            .is_some_and(|t| !t.is_researched() && self.is_available(t));
        if ready {
            self.research_focus = Some(name.to_string());
        }
        ready
    }

    /// 当前研究目标：优先使用指定目标，否则取第一个可研究的科技
    pub fn current_research(&self) -> Option<String> {
        if let Some(focus) = &self.research_focus {
            if self.find_tech(focus).is_some_and(|t| !t.is_researched()) {
                return Some(focus.clone());
            }
        }
        self.techs
            .iter()
            .find(|t| !t.is_researched() && self.is_available(t))
            .map(|t| t.name.clone())
    }

    /// 用设置里的存档名保存；名称为空时按回合命名
    pub fn save_game(&mut self) -> String {
        let name = if self.settings.save_name.trim().is_empty() {
            format!("Turn {}", self.turn)
        } else {
            self.settings.save_name.trim().to_string()
        };
        self.saves.push(name.clone());
        name
    }

    pub fn delete_selected_save(&mut self) -> Option<String> {
        let index = self.selected_save.take()?;
        self.confirm_delete = false;
        (index < self.saves.len()).then(|| self.saves.remove(index))
    }

    /// 推进一个回合，返回结算摘要
    pub fn advance(&mut self) -> String {
        self.turn += 1;
        let mut events = Vec::new();

        let assignments: Vec<(usize, Assignment)> = self
            .councilors
            .iter_mut()
            .enumerate()
            .filter_map(|(i, c)| c.assignment.take().map(|a| (i, a)))
            .collect();
        for (index, assignment) in &assignments {
            self.resolve_mission(*index, assignment);
        }
        if !assignments.is_empty() {
            events.push(format!("{} missions resolved", assignments.len()));
        }

        if let Some(name) = self.current_research() {
            if let Some(tech) = self.techs.iter_mut().find(|t| t.name == name) {
                tech.progress = (tech.progress + RESEARCH_PER_TURN).min(tech.cost);
                if tech.is_researched() {
                    events.push(format!("{name} researched"));
                }
            }
        }

        for ship in self.fleets.iter_mut().flat_map(|f| f.ships.iter_mut()) {
            ship.hull = ship.hull.saturating_add(REPAIR_PER_TURN).min(100);
        }

        if self.settings.autosave {
            self.saves.push(format!("Autosave turn {}", self.turn));
        }

        log::info!("Advanced to turn {}", self.turn);
        if events.is_empty() {
            format!("Turn {}", self.turn)
        } else {
            format!("Turn {}: {}", self.turn, events.join(", "))
        }
    }

    fn resolve_mission(&mut self, councilor: usize, assignment: &Assignment) {
        let nation = assignment
            .target
            .as_ref()
            .and_then(|name| self.nations.iter_mut().find(|n| &n.name == name));
        match (assignment.mission, nation) {
            (Mission::GainInfluence, Some(nation)) => {
                nation.influence = nation.influence.saturating_add(5).min(100);
            }
            (Mission::Sabotage, Some(nation)) => {
                nation.influence = nation.influence.saturating_sub(5);
            }
            (Mission::Recruit, _) => {
                for c in &mut self.councilors {
                    c.loyalty = c.loyalty.saturating_add(3).min(100);
                }
            }
            (Mission::Investigate, _) => {
                if let Some(c) = self.councilors.get_mut(councilor) {
                    c.traits.push("Informed".to_string());
                }
            }
            _ => {}
        }
    }
}
