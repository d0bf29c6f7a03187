//! 舰队屏幕：舰船列表、母港转移与舰队合并

use std::rc::Rc;

use review_mode_core::{
    ActionOutcome, ConfirmPolicy, DataSection, Screen, Section, SectionEntry, SelectionMode,
    SelectionOption,
};

use crate::backend::world::{Fleet, SharedWorld};

fn ship_count(count: usize) -> String {
    if count == 1 {
        "1 ship".to_string()
    } else {
        format!("{count} ships")
    }
}

pub struct FleetsScreen {
    world: SharedWorld,
}

impl FleetsScreen {
    pub fn new(world: SharedWorld) -> Self {
        Self { world }
    }

    fn orders(&self, fleet: &Fleet) -> DataSection {
        let mut orders = DataSection::new("Orders").field("Homeport", &fleet.homeport);

        let world = Rc::clone(&self.world);
        let name = fleet.name.clone();
        orders.push(
            SectionEntry::new("Transfer homeport")
                .with_detail("Pick a nation, then confirm")
                .with_action(move || {
                    let ports: Vec<SelectionOption<String>> = {
                        let w = world.borrow();
                        let current = w
                            .fleets
                            .iter()
                            .find(|f| f.name == name)
                            .map(|f| f.homeport.clone());
                        w.nations
                            .iter()
                            .filter(|n| Some(&n.name) != current.as_ref())
                            .map(|n| SelectionOption::new(n.name.clone(), n.name.clone()))
                            .collect()
                    };
                    let world = Rc::clone(&world);
                    let fleet = name.clone();
                    let flow = SelectionMode::new("Transfer to", ports, move |_, port: &String| {
                        world.borrow_mut().transfer_fleet(&fleet, port);
                        Ok(ActionOutcome::message(format!("{fleet} transferring to {port}")))
                    })
                    .with_policy(ConfirmPolicy::TwoStep);
                    Ok(ActionOutcome::select(flow))
                }),
        );

        if self.world.borrow().fleets.len() > 1 {
            let world = Rc::clone(&self.world);
            let name = fleet.name.clone();
            orders.push(SectionEntry::new("Merge into another fleet").with_action(move || {
                let others: Vec<SelectionOption<String>> = world
                    .borrow()
                    .fleets
                    .iter()
                    .filter(|f| f.name != name)
                    .map(|f| {
                        SelectionOption::new(f.name.clone(), f.name.clone())
                            .with_detail(format!("{} at {}", ship_count(f.ships.len()), f.homeport))
                    })
                    .collect();
                let world = Rc::clone(&world);
                let source = name.clone();
                let flow = SelectionMode::new("Merge into", others, move |_, target: &String| {
                    world.borrow_mut().merge_fleets(&source, target);
                    Ok(ActionOutcome::message(format!("{source} merged into {target}")))
                });
                Ok(ActionOutcome::select(flow))
            }));
        }
        orders
    }
}

impl Screen for FleetsScreen {
    fn name(&self) -> &str {
        "Fleets"
    }

    fn description(&self) -> String {
        let world = self.world.borrow();
        let ships: usize = world.fleets.iter().map(|f| f.ships.len()).sum();
        format!("{} fleets, {ships} ships in total", world.fleets.len())
    }

    fn item_count(&self) -> usize {
        self.world.borrow().fleets.len()
    }

    fn item_summary(&self, index: usize) -> String {
        self.world.borrow().fleets.get(index).map_or_else(
            || "Unknown fleet".to_string(),
            |f| format!("{}, {} at {}", f.name, ship_count(f.ships.len()), f.homeport),
        )
    }

    fn sections_for_item(&self, index: usize) -> Vec<Box<dyn Section>> {
        let Some(fleet) = self.world.borrow().fleets.get(index).cloned() else {
            return Vec::new();
        };

        let mut ships = DataSection::new("Ships");
        for ship in &fleet.ships {
            ships.push(
                SectionEntry::new(format!("{}, {}", ship.name, ship.class))
                    .with_detail(format!("Hull at {}%", ship.hull)),
            );
        }

        vec![ships.boxed(), self.orders(&fleet).boxed()]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::backend::world::World;
    use review_mode_core::{Command, NavigationLevel, NavigatorConfig, ReviewMode, Transcript};

    #[test]
    fn merge_destroys_the_item_under_the_cursor() {
        let world = World::demo().shared();
        let transcript = Transcript::new();
        let mut review = ReviewMode::new(NavigatorConfig::default(), Box::new(transcript.clone()));
        review.register_screens(vec![Box::new(FleetsScreen::new(Rc::clone(&world)))]);
        review.enter();

        // 最后一支舰队 -> Orders -> Merge
        review.handle(Command::DrillDown);
        review.handle(Command::Previous);
        review.handle(Command::DrillDown);
        review.handle(Command::Next);
        review.handle(Command::DrillDown);
        review.handle(Command::JumpToLetter('m'));
        assert!(review.handle(Command::Activate));
        assert_eq!(
            transcript.last_text().unwrap(),
            "Merge into. 1 of 2: Home Guard"
        );

        assert!(review.handle(Command::Activate));
        assert_eq!(transcript.last_text().unwrap(), "Reserve merged into Home Guard");
        assert_eq!(world.borrow().fleets.len(), 2);

        // 被合并的舰队消失，光标回到条目层的第一项
        assert_eq!(review.navigator().level(), NavigationLevel::Items);
        assert_eq!(
            review.navigator().current_announcement(),
            "1 of 2: Home Guard, 3 ships at Brazil"
        );
    }

    #[test]
    fn transfer_offers_other_ports() {
        let world = World::demo().shared();
        let screen = FleetsScreen::new(Rc::clone(&world));
        let sections = screen.sections_for_item(0);
        let orders = &sections[1];
        assert_eq!(orders.read_item(0), "Homeport: Brazil");

        let ActionOutcome::BeginSelection(flow) = orders.activate(1).unwrap() else {
            panic!("expected a selection flow");
        };
        assert_eq!(flow.option_count(), 3);
        assert_eq!(flow.announcement(), "1 of 3: India");
    }
}
