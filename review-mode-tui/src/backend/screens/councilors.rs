//! 议会屏幕：议员信息与任务指派
//!
//! "Assign mission" 打开任务选择；需要目标的任务会接着打开国家选择（两步确认），
//! 两个选择流程串联完成。

use std::rc::Rc;

use review_mode_core::{
    ActionOutcome, ConfirmPolicy, DataSection, NavResult, Screen, Section, SectionEntry,
    SelectionMode, SelectionOption,
};

use crate::backend::world::{Assignment, Councilor, Mission, SharedWorld};

pub struct CouncilorsScreen {
    world: SharedWorld,
}

impl CouncilorsScreen {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

fn summary(councilor: &Councilor) -> String {
    match &councilor.assignment {
        Some(assignment) => format!(
            "{}, {}, {}",
            councilor.name,
            councilor.profession,
            assignment.describe()
        ),
        None => format!("{}, {}", councilor.name, councilor.profession),
    }
}

fn mission_flow(world: SharedWorld, councilor: String) -> SelectionMode<Mission> {
    let options = Mission::ALL
        .iter()
        .map(|m| SelectionOption::new(m.name(), *m).with_detail(m.description()))
        .collect();
    SelectionMode::new(
        format!("Mission for {councilor}"),
        options,
        move |_, mission: &Mission| -> NavResult<ActionOutcome> {
            let mission = *mission;
            if mission.needs_target() {
                return Ok(ActionOutcome::select(target_flow(world, councilor, mission)));
            }
            world.borrow_mut().assign(&councilor, mission, None);
            Ok(ActionOutcome::message(format!("{councilor} will {}", mission.name())))
        },
    )
}

fn target_flow(world: SharedWorld, councilor: String, mission: Mission) -> SelectionMode<String> {
    let options = world
        .borrow()
        .nations
        .iter()
        .map(|n| {
            SelectionOption::new(n.name.clone(), n.name.clone())
                .with_detail(format!("Influence {}", n.influence))
        })
        .collect();
    SelectionMode::new(
        format!("{} target", mission.name()),
        options,
        move |_, nation: &String| {
            world
                .borrow_mut()
                .assign(&councilor, mission, Some(nation.clone()));
            Ok(ActionOutcome::message(format!(
                "{councilor} assigned to {} in {nation}",
                mission.name()
            )))
        },
    )
    .with_policy(ConfirmPolicy::TwoStep)
}

impl Screen for CouncilorsScreen {
    fn name(&self) -> &str {
        "Council"
    }

    fn description(&self) -> String {
        "Your councilors and their missions".to_string()
    }

    fn item_count(&self) -> usize {
        self.world.borrow().councilors.len()
    }

    fn item_summary(&self, index: usize) -> String {
        self.world
            .borrow()
            .councilors
            .get(index)
            .map_or_else(|| "Unknown councilor".to_string(), summary)
    }

    fn item_detail(&self, index: usize) -> String {
        let world = self.world.borrow();
        let Some(c) = world.councilors.get(index) else {
            return "Unknown councilor".to_string();
        };
        let traits = if c.traits.is_empty() {
            "none".to_string()
        } else {
            c.traits.join(", ")
        };
        let mission = c
            .assignment
            .as_ref()
            .map_or_else(|| "no mission".to_string(), Assignment::describe);
        format!(
            "{}, {}. Loyalty {}. Traits: {traits}. Currently {mission}",
            c.name, c.profession, c.loyalty
        )
    }

    fn sections_for_item(&self, index: usize) -> Vec<Box<dyn Section>> {
        let world = self.world.borrow();
        let Some(c) = world.councilors.get(index) else {
            return Vec::new();
        };

        let info = DataSection::new("Info")
            .field("Profession", &c.profession)
            .field("Loyalty", c.loyalty);

        let mut traits = DataSection::new("Traits");
        for name in &c.traits {
            traits.push(SectionEntry::new(name.clone()));
        }

        let mut mission = DataSection::new("Mission");
        let current = c
            .assignment
            .as_ref()
            .map_or_else(|| "None".to_string(), Assignment::describe);
        mission.push(SectionEntry::labeled("Current", current));

        let name = c.name.clone();
        let shared = Rc::clone(&self.world);
        mission.push(
            SectionEntry::new("Assign mission").with_action(move || {
                Ok(ActionOutcome::select(mission_flow(
                    Rc::clone(&shared),
                    name.clone(),
                )))
            }),
        );

        if c.assignment.is_some() {
            let name = c.name.clone();
            let shared = Rc::clone(&self.world);
            mission.push(SectionEntry::new("Cancel mission").with_action(move || {
                shared.borrow_mut().cancel_mission(&name);
                Ok(ActionOutcome::message(format!("{name} recalled")))
            }));
        }

        vec![info.boxed(), traits.boxed(), mission.boxed()]
    }
}
