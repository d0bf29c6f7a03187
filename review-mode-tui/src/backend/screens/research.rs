//! 科技屏幕
//!
//! 前置科技与后续科技条目带有钻取标识，钻入后显示对应科技自己的分节，
//! 可以沿着科技树一路深入再逐层返回。

use std::rc::Rc;

use review_mode_core::{ActionOutcome, DataSection, Screen, Section, SectionEntry};

use crate::backend::world::{SharedWorld, Tech, World};

pub struct ResearchScreen {
    world: SharedWorld,
}

impl ResearchScreen {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }
}

fn status(world: &World, tech: &Tech) -> String {
    if tech.is_researched() {
        "researched".to_string()
    } else if world.is_available(tech) {
        format!("{} of {}", tech.progress, tech.cost)
    } else {
        "locked".to_string()
    }
}

/// 链接到另一项科技的条目
fn link(world: &World, name: &str) -> SectionEntry {
    let state = world
        .find_tech(name)
        .map_or_else(|| "unknown".to_string(), |t| status(world, t));
    SectionEntry::new(format!("{name}, {state}")).with_drill_target(name)
}

fn tech_sections(shared: &SharedWorld, name: &str) -> Vec<Box<dyn Section>> {
    let world = shared.borrow();
    let Some(tech) = world.find_tech(name) else {
        return Vec::new();
    };

    let cost = tech.cost;
    let remaining = tech.cost.saturating_sub(tech.progress);
    let summary = DataSection::new("Summary")
        .field("Category", &tech.category)
        .with(SectionEntry::labeled("Cost", cost.to_string()).with_tooltip(
            || true,
            move || {
                Ok(ActionOutcome::message(format!(
                    "Cost: {cost} research points, {remaining} remaining"
                )))
            },
        ))
        .field("Status", status(&world, tech));

    let mut sections = vec![summary.boxed()];

    if !tech.prerequisites.is_empty() {
        let mut prerequisites = DataSection::new("Prerequisites");
        for prerequisite in &tech.prerequisites {
            prerequisites.push(link(&world, prerequisite));
        }
        sections.push(prerequisites.boxed());
    }

    let unlocks = world.unlocks(name);
    if !unlocks.is_empty() {
        let mut section = DataSection::new("Unlocks");
        for unlocked in &unlocks {
            section.push(link(&world, unlocked));
        }
        sections.push(section.boxed());
    }

    if !tech.is_researched() && world.is_available(tech) {
        let focus = Rc::clone(shared);
        let target = name.to_string();
        let focused = world.research_focus.as_deref() == Some(name);
        let label = if focused { "Research focus, current" } else { "Set as research focus" };
        sections.push(
            DataSection::new("Research")
                .with(SectionEntry::new(label).with_action(move || {
                    if focus.borrow_mut().set_research_focus(&target) {
                        Ok(ActionOutcome::message(format!("Researching {target}")))
                    } else {
                        Ok(ActionOutcome::message(format!("{target} cannot be researched yet")))
                    }
                }))
                .boxed(),
        );
    }
    sections
}

impl Screen for ResearchScreen {
    fn name(&self) -> &str {
        "Research"
    }

    fn description(&self) -> String {
        let world = self.world.borrow();
        match world.current_research() {
            Some(name) => format!("Tech tree. Researching {name}"),
            None => "Tech tree. Nothing to research".to_string(),
        }
    }

    fn item_count(&self) -> usize {
        self.world.borrow().techs.len()
    }

    fn item_summary(&self, index: usize) -> String {
        let world = self.world.borrow();
        world.techs.get(index).map_or_else(
            || "Unknown tech".to_string(),
            |t| format!("{}, {}", t.name, status(&world, t)),
        )
    }

    fn item_detail(&self, index: usize) -> String {
        let world = self.world.borrow();
        let Some(tech) = world.techs.get(index) else {
            return "Unknown tech".to_string();
        };
        let needs = if tech.prerequisites.is_empty() {
            "no prerequisites".to_string()
        } else {
            format!("requires {}", tech.prerequisites.join(" and "))
        };
        format!(
            "{}, {} tech, costs {}, {needs}. Status: {}",
            tech.name,
            tech.category,
            tech.cost,
            status(&world, tech)
        )
    }

    fn sections_for_item(&self, index: usize) -> Vec<Box<dyn Section>> {
        let name = match self.world.borrow().techs.get(index) {
            Some(tech) => tech.name.clone(),
            None => return Vec::new(),
        };
        tech_sections(&self.world, &name)
    }

    fn sections_for_target(&self, target: &str) -> Vec<Box<dyn Section>> {
        tech_sections(&self.world, target)
    }
}
