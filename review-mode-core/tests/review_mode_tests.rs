#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `ReviewMode` dispatch across navigator, menu, text entry and selection.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{prefs_menu, table_screen, Row};
use review_mode_core::{
    ActionOutcome, ActiveLayer, Command, ConfirmPolicy, DataSection, MenuNavigator,
    NavigationLevel, NavigatorConfig, ReviewMode, Screen, Section, SectionEntry, SelectionMode, SelectionOption,
    Transcript,
};

fn review_with(screens: Vec<Box<dyn Screen>>) -> (ReviewMode, Transcript) {
    let transcript = Transcript::new();
    let mut review = ReviewMode::new(NavigatorConfig::default(), Box::new(transcript.clone()));
    review.register_screens(screens);
    (review, transcript)
}

fn last(transcript: &Transcript) -> String {
    transcript.last_text().unwrap_or_default()
}

// ===== Live data =====

#[test]
fn data_changed_between_inputs_resyncs_before_moving() {
    let (screen, table) = table_screen(
        "Fleets",
        vec![
            Row::new("Home").section("Ships", &["Warden"]),
            Row::new("Strike").section("Ships", &["Lancer", "Corsair"]),
        ],
    );
    let (mut review, transcript) = review_with(vec![screen]);
    review.enter();
    review.handle(Command::DrillDown);
    review.handle(Command::Next);
    review.handle(Command::DrillDown);
    review.handle(Command::DrillDown);
    review.handle(Command::Next);
    assert_eq!(last(&transcript), "2 of 2: Corsair");

    // 两次输入之间，舰队被合并掉
    table.borrow_mut().rows.remove(1);
    let spoken = transcript.len();
    assert!(!review.handle(Command::Next));
    assert_eq!(transcript.len(), spoken + 1);
    assert_eq!(last(&transcript), "List changed. 1 of 1: Home");
    assert_eq!(review.navigator().level(), NavigationLevel::Items);

    assert!(review.handle(Command::DrillDown));
    assert_eq!(last(&transcript), "1 of 1: Ships, 1 entry");

    // 读取类命令只同步，不丢弃
    table.borrow_mut().rows.clear();
    assert!(review.handle(Command::ListAll));
    assert_eq!(review.navigator().level(), NavigationLevel::Screens);
    assert_eq!(last(&transcript), "1 screen: Fleets (current)");
}

// ===== Menu =====

#[test]
fn menu_letter_jump_wraps_past_current() {
    let (screen, _) = prefs_menu(&["Apple", "Cherry", "Banana", "Cat"]);
    let menu = MenuNavigator::new(screen, 0.05);
    assert_eq!(menu.find_next_control_by_letter('C', 0), Some(1));
    assert_eq!(menu.find_next_control_by_letter('C', 3), Some(1));
    assert_eq!(menu.find_next_control_by_letter('z', 0), None);
}

#[test]
fn menu_takes_priority_over_navigator() {
    let (screen, _) = table_screen("Fleets", vec![Row::new("Home")]);
    let (mut review, transcript) = review_with(vec![screen]);
    review.enter();

    let (menu, prefs) = prefs_menu(&["Music", "Speed", "Quit"]);
    review.open_menu(menu);
    assert_eq!(review.active_layer(), ActiveLayer::Menu);
    assert_eq!(last(&transcript), "Preferences. 1 of 3: Music, toggle, off");

    assert!(review.handle(Command::Activate));
    assert!(prefs.borrow().music);
    assert_eq!(last(&transcript), "1 of 3: Music, toggle, on");

    review.handle(Command::Next);
    assert!(review.handle(Command::AdjustUp));
    assert!((prefs.borrow().speed - 2.5).abs() < 1e-3);
    assert_eq!(last(&transcript), "2 of 3: Speed, slider, 2.5");

    review.handle(Command::JumpToLetter('q'));
    assert!(review.handle(Command::Activate));
    assert_eq!(prefs.borrow().pressed, vec!["Quit"]);

    assert!(!review.handle(Command::BackOut));
    assert_eq!(review.active_layer(), ActiveLayer::Menu);

    review.close_menu();
    assert_eq!(review.active_layer(), ActiveLayer::Navigator);
    assert_eq!(last(&transcript), "Preferences closed. 1 of 1: Fleets, 1 item");
}

#[test]
fn slider_does_not_activate_in_place() {
    let (mut review, transcript) = review_with(Vec::new());
    review.enter();
    let (menu, prefs) = prefs_menu(&["Speed"]);
    review.open_menu(menu);

    assert!(!review.handle(Command::Activate));
    assert!((prefs.borrow().speed - 2.0).abs() < 1e-3);
    assert!(last(&transcript).starts_with("Use plus and minus"));
}

#[test]
fn input_field_text_entry_commit_and_cancel() {
    let (mut review, transcript) = review_with(Vec::new());
    review.enter();
    let (menu, prefs) = prefs_menu(&["Profile"]);
    review.open_menu(menu);

    assert!(review.handle(Command::Activate));
    assert_eq!(review.active_layer(), ActiveLayer::TextEntry);
    assert_eq!(last(&transcript), "Editing Profile: empty");

    for c in "Ada".chars() {
        review.handle(Command::Type(c));
    }
    review.handle(Command::Type('x'));
    assert!(review.handle(Command::Erase));
    assert_eq!(last(&transcript), "x deleted");
    assert_eq!(review.text_entry(), Some("Ada"));

    // 文本输入期间导航命令不生效
    assert!(!review.handle(Command::Next));
    assert_eq!(review.active_layer(), ActiveLayer::TextEntry);

    assert!(review.handle(Command::Activate));
    assert_eq!(prefs.borrow().profile, "Ada");
    assert_eq!(last(&transcript), "Saved. 1 of 1: Profile, text field, Ada");
    assert_eq!(review.active_layer(), ActiveLayer::Menu);

    review.handle(Command::Activate);
    review.handle(Command::Type('Z'));
    assert!(review.handle(Command::BackOut));
    assert_eq!(prefs.borrow().profile, "Ada");
    assert_eq!(review.active_layer(), ActiveLayer::Menu);
}

// ===== Selection =====

/// 单个条目：激活后打开一个立即完成的选择流程
struct MissionScreen {
    log: Rc<RefCell<Vec<String>>>,
}

impl Screen for MissionScreen {
    fn name(&self) -> &str {
        "Councilors"
    }

    fn item_count(&self) -> usize {
        1
    }

    fn item_summary(&self, _index: usize) -> String {
        "Ana Ruiz".to_string()
    }

    fn sections_for_item(&self, _index: usize) -> Vec<Box<dyn Section>> {
        let log = Rc::clone(&self.log);
        let assigned = self.log.borrow().last().cloned();
        let mut orders = DataSection::new("Mission").with(SectionEntry::new("Assign mission").with_action(
            move || {
                let log = Rc::clone(&log);
                let options = vec![
                    SelectionOption::new("Gain Influence", "influence"),
                    SelectionOption::new("Investigate", "investigate"),
                ];
                let flow = SelectionMode::new("Choose a mission", options, move |_, tag| {
                    log.borrow_mut().push((*tag).to_string());
                    Ok(ActionOutcome::Done)
                })
                .with_policy(ConfirmPolicy::Immediate);
                Ok(ActionOutcome::select(flow))
            },
        ));
        if let Some(mission) = assigned {
            orders.push(SectionEntry::labeled("Current", mission));
        }
        vec![orders.boxed()]
    }
}

#[test]
fn immediate_selection_completes_and_refreshes_sections() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let screen = MissionScreen {
        log: Rc::clone(&log),
    };
    let (mut review, transcript) = review_with(vec![Box::new(screen)]);
    review.enter();
    review.handle(Command::DrillDown);
    review.handle(Command::DrillDown);
    review.handle(Command::DrillDown);

    assert!(review.handle(Command::Activate));
    assert_eq!(last(&transcript), "Choose a mission. 1 of 2: Gain Influence");

    review.handle(Command::JumpToLetter('i'));
    assert!(review.handle(Command::Activate));
    assert_eq!(*log.borrow(), vec!["investigate"]);
    assert_eq!(review.active_layer(), ActiveLayer::Navigator);
    assert_eq!(review.navigator().section_item_count(), 2);
    assert_eq!(last(&transcript), "Done. 1 of 2: Assign mission (Enter to activate)");
}

#[test]
fn tooltip_only_where_available() {
    struct Tech;

    impl Screen for Tech {
        fn name(&self) -> &str {
            "Research"
        }

        fn item_count(&self) -> usize {
            1
        }

        fn item_summary(&self, _index: usize) -> String {
            "Fusion".to_string()
        }

        fn sections_for_item(&self, _index: usize) -> Vec<Box<dyn Section>> {
            vec![DataSection::new("Summary")
                .with(
                    SectionEntry::labeled("Cost", "900")
                        .with_tooltip(|| true, || Ok(ActionOutcome::message("Cost: 600 base, 300 upkeep"))),
                )
                .field("Category", "Energy")
                .boxed()]
        }
    }

    let (mut review, transcript) = review_with(vec![Box::new(Tech)]);
    review.enter();
    assert!(!review.handle(Command::Tooltip));
    assert_eq!(last(&transcript), "No tooltip here");

    review.handle(Command::DrillDown);
    review.handle(Command::DrillDown);
    review.handle(Command::DrillDown);
    assert!(review.handle(Command::Tooltip));
    assert_eq!(last(&transcript), "Cost: 600 base, 300 upkeep");

    review.handle(Command::Next);
    assert!(!review.handle(Command::Tooltip));
}
