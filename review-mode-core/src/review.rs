//! Review mode context
//!
//! Owns the navigator, the optional menu, selection flow and text-entry
//! buffer, and routes every command to whichever of them is active.
//! Priority: text entry, then selection, then menu, then the navigator.
//! Each handled command produces exactly one spoken announcement.

use crate::config::NavigatorConfig;
use crate::error::NavError;
use crate::menu::{MenuActivation, MenuNavigator, MenuRefresh};
use crate::navigation::{plural, Navigator};
use crate::traits::{MenuScreen, Screen, SelectionFlow, SelectionStep, SpeechOutput};
use crate::types::{ActionOutcome, Command, DrillOutcome};

/// Text being typed into a menu input field
#[derive(Debug, Clone)]
struct TextEntry {
    control: usize,
    label: String,
    buffer: String,
}

/// What to say after a command, and whether it did anything
struct Reply {
    text: String,
    handled: bool,
}

impl Reply {
    fn handled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            handled: true,
        }
    }

    fn unhandled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            handled: false,
        }
    }

    fn failure(error: &NavError) -> Self {
        error.log("Review command");
        Self::unhandled(error.to_string())
    }
}

/// Which state machine currently receives commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLayer {
    Off,
    Navigator,
    Menu,
    Selection,
    TextEntry,
}

impl ActiveLayer {
    pub fn name(self) -> &'static str {
        match self {
            ActiveLayer::Off => "Off",
            ActiveLayer::Navigator => "Review",
            ActiveLayer::Menu => "Menu",
            ActiveLayer::Selection => "Selection",
            ActiveLayer::TextEntry => "Text entry",
        }
    }
}

/// Review mode
pub struct ReviewMode {
    config: NavigatorConfig,
    speech: Box<dyn SpeechOutput>,
    navigator: Navigator,
    menu: Option<MenuNavigator>,
    selection: Option<Box<dyn SelectionFlow>>,
    text_entry: Option<TextEntry>,
    active: bool,
}

impl ReviewMode {
    pub fn new(config: NavigatorConfig, speech: Box<dyn SpeechOutput>) -> Self {
        let mut navigator = Navigator::new();
        navigator.set_announce_hints(config.announce_hints);
        Self {
            config,
            speech,
            navigator,
            menu: None,
            selection: None,
            text_entry: None,
            active: false,
        }
    }

    pub fn register_screens(&mut self, screens: Vec<Box<dyn Screen>>) {
        self.navigator.register_screens(screens);
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn menu(&self) -> Option<&MenuNavigator> {
        self.menu.as_ref()
    }

    pub fn selection(&self) -> Option<&dyn SelectionFlow> {
        self.selection.as_deref()
    }

    /// Buffer of the input field being edited
    pub fn text_entry(&self) -> Option<&str> {
        self.text_entry.as_ref().map(|entry| entry.buffer.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn active_layer(&self) -> ActiveLayer {
        if !self.active {
            ActiveLayer::Off
        } else if self.text_entry.is_some() {
            ActiveLayer::TextEntry
        } else if self.selection.is_some() {
            ActiveLayer::Selection
        } else if self.menu.is_some() {
            ActiveLayer::Menu
        } else {
            ActiveLayer::Navigator
        }
    }

    // ========== Lifecycle ==========

    /// Start reviewing from the first screen
    pub fn enter(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        log::info!("Review mode on");
        let text = match self.menu.as_mut() {
            Some(menu) => menu.opening_announcement(),
            None => {
                self.navigator.reset();
                self.navigator.current_announcement()
            }
        };
        self.say(&format!("Review mode. {text}"), true);
    }

    /// Leave review mode, abandoning any selection or text entry
    pub fn exit(&mut self) {
        if !self.active {
            return;
        }
        if let Some(mut flow) = self.selection.take() {
            flow.cancel();
        }
        self.text_entry = None;
        self.navigator.deactivate_current();
        self.active = false;
        log::info!("Review mode off");
        self.say("Review mode off", true);
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.exit();
        } else {
            self.enter();
        }
    }

    /// Put a dialog in front of the navigator
    pub fn open_menu(&mut self, screen: Box<dyn MenuScreen>) {
        self.text_entry = None;
        let mut menu = MenuNavigator::new(screen, self.config.slider_step_fraction);
        let text = menu.opening_announcement();
        self.menu = Some(menu);
        if self.active {
            self.say(&text, true);
        }
    }

    pub fn close_menu(&mut self) {
        let Some(menu) = self.menu.take() else {
            return;
        };
        self.text_entry = None;
        if self.active {
            self.navigator.resync();
            let text = format!("{} closed. {}", menu.name(), self.navigator.current_announcement());
            self.say(&text, true);
        }
    }

    /// Open a selection flow started by the host rather than by an entry action
    pub fn begin_selection(&mut self, flow: Box<dyn SelectionFlow>) -> bool {
        let reply = self.open_selection(flow);
        self.speak_reply(reply, false)
    }

    // ========== Dispatch ==========

    /// Route a command to the active state machine and announce the result.
    ///
    /// Returns false when the command changed nothing (including while
    /// review mode is off, in which case nothing is spoken).
    pub fn handle(&mut self, command: Command) -> bool {
        if !self.active {
            return false;
        }
        let reply = match self.active_layer() {
            ActiveLayer::TextEntry => self.handle_text_entry(command),
            ActiveLayer::Selection => self.handle_selection(command),
            ActiveLayer::Menu => self.handle_menu(command),
            ActiveLayer::Navigator | ActiveLayer::Off => self.handle_navigation(command),
        };
        log::debug!("{command:?} -> {}", if reply.handled { "ok" } else { "no-op" });
        self.speak_reply(reply, command.is_listing())
    }

    fn speak_reply(&mut self, reply: Reply, listing: bool) -> bool {
        let interrupt = if listing {
            self.config.interrupt_on_list
        } else {
            self.config.interrupt_on_navigate
        };
        self.say(&reply.text, interrupt);
        reply.handled
    }

    fn say(&mut self, text: &str, interrupt: bool) {
        self.speech.speak(text, interrupt);
    }

    fn handle_navigation(&mut self, command: Command) -> Reply {
        // The data moved under a stale cursor: this input only re-syncs
        if self.navigator.resync() && command.is_positional() {
            return Reply::unhandled(format!(
                "List changed. {}",
                self.navigator.current_announcement()
            ));
        }
        match command {
            Command::Next => {
                let changed = self.navigator.next();
                self.moved(changed)
            }
            Command::Previous => {
                let changed = self.navigator.previous();
                self.moved(changed)
            }
            Command::DrillDown | Command::Activate => self.drill(),
            Command::BackOut => {
                if self.navigator.back_out() {
                    Reply::handled(self.navigator.current_announcement())
                } else {
                    Reply::unhandled(format!("Top level. {}", self.navigator.current_announcement()))
                }
            }
            Command::ListAll => Reply::handled(self.navigator.list_current_level(&self.config.list_separator)),
            Command::ListAllScreens => Reply::handled(self.navigator.list_screens(&self.config.list_separator)),
            Command::ReadDetail => Reply::handled(self.navigator.current_detail()),
            Command::JumpToLetter(letter) => {
                if self.navigator.jump_to_letter(letter) {
                    Reply::handled(self.navigator.current_announcement())
                } else {
                    Reply::unhandled(format!("Nothing starting with {}", letter.to_uppercase()))
                }
            }
            Command::SwitchScreen(index) => {
                if self.navigator.switch_to_screen(index) {
                    let text = match self.navigator.current_screen() {
                        Some(screen) => format!("{}. {}", screen.name(), self.navigator.current_announcement()),
                        None => self.navigator.current_announcement(),
                    };
                    Reply::handled(text)
                } else {
                    Reply::unhandled(format!("No screen {}", index + 1))
                }
            }
            Command::Tooltip => match self.navigator.show_tooltip() {
                Some(Ok(outcome)) => self.apply_outcome(outcome),
                Some(Err(error)) => Reply::failure(&error),
                None => Reply::unhandled("No tooltip here"),
            },
            Command::Refresh => {
                self.navigator.refresh_sections();
                Reply::handled(self.navigator.current_announcement())
            }
            Command::Confirm
            | Command::AdjustUp
            | Command::AdjustDown
            | Command::Type(_)
            | Command::Erase => Reply::unhandled("Not available here"),
        }
    }

    fn moved(&self, changed: bool) -> Reply {
        let text = self.navigator.current_announcement();
        if changed {
            Reply::handled(text)
        } else {
            Reply::unhandled(text)
        }
    }

    fn drill(&mut self) -> Reply {
        match self.navigator.drill_down_outcome() {
            DrillOutcome::Moved => Reply::handled(self.navigator.current_announcement()),
            DrillOutcome::Nested => {
                let announcement = self.navigator.current_announcement();
                match self.navigator.nesting_target() {
                    Some(target) => Reply::handled(format!("{target}. {announcement}")),
                    None => Reply::handled(announcement),
                }
            }
            DrillOutcome::Activated(outcome) => self.apply_outcome(outcome),
            DrillOutcome::ActivationFailed(error) => Reply::unhandled(error.to_string()),
            DrillOutcome::Nothing => Reply::unhandled(format!(
                "Nothing to open. {}",
                self.navigator.current_announcement()
            )),
        }
    }

    /// Turn an action result into speech, opening a selection flow if asked
    fn apply_outcome(&mut self, outcome: ActionOutcome) -> Reply {
        match outcome {
            ActionOutcome::Done => Reply::handled(format!("Done. {}", self.context_announcement())),
            ActionOutcome::Message(text) => Reply::handled(text),
            ActionOutcome::BeginSelection(flow) => self.open_selection(flow),
        }
    }

    fn open_selection(&mut self, flow: Box<dyn SelectionFlow>) -> Reply {
        if flow.option_count() == 0 {
            return Reply::unhandled(format!("{}: no options available", flow.title()));
        }
        let text = format!("{}. {}", flow.title(), flow.announcement());
        log::debug!("Selection '{}' opened with {} options", flow.title(), flow.option_count());
        self.selection = Some(flow);
        Reply::handled(text)
    }

    fn handle_selection(&mut self, command: Command) -> Reply {
        let separator = self.config.list_separator.clone();
        let Some(flow) = self.selection.as_mut() else {
            return self.handle_navigation(command);
        };
        match command {
            Command::Next => {
                flow.next();
                Reply::handled(flow.announcement())
            }
            Command::Previous => {
                flow.previous();
                Reply::handled(flow.announcement())
            }
            Command::JumpToLetter(letter) => {
                if flow.jump_to_letter(letter) {
                    Reply::handled(flow.announcement())
                } else {
                    Reply::unhandled(format!("No option starting with {}", letter.to_uppercase()))
                }
            }
            Command::ListAll => Reply::handled(format!(
                "{}: {}",
                plural(flow.option_count(), "option", "options"),
                flow.entries().join(&separator)
            )),
            Command::ReadDetail => Reply::handled(flow.detail()),
            Command::DrillDown | Command::Activate => match flow.select_current() {
                Ok(SelectionStep::Highlighted(label)) => {
                    Reply::handled(format!("{label} selected. Confirm to proceed"))
                }
                Ok(SelectionStep::Completed(outcome)) => self.finish_selection(outcome),
                Err(error) => self.selection_failure(&error),
            },
            Command::Confirm => match flow.confirm() {
                Ok(outcome) => self.finish_selection(outcome),
                Err(NavError::NothingSelected) => Reply::unhandled("Select an option first"),
                Err(error) => self.selection_failure(&error),
            },
            Command::BackOut => {
                flow.cancel();
                self.selection = None;
                self.navigator.resync();
                Reply::handled(format!("Cancelled. {}", self.navigator.current_announcement()))
            }
            Command::ListAllScreens
            | Command::SwitchScreen(_)
            | Command::Tooltip
            | Command::Refresh
            | Command::AdjustUp
            | Command::AdjustDown
            | Command::Type(_)
            | Command::Erase => Reply::unhandled(format!("Choosing: {}", flow.title())),
        }
    }

    /// Close the finished flow and re-sync with whatever its callback changed
    fn finish_selection(&mut self, outcome: ActionOutcome) -> Reply {
        self.selection = None;
        self.navigator.refresh_sections();
        self.apply_outcome(outcome)
    }

    fn selection_failure(&mut self, error: &NavError) -> Reply {
        if self.selection.as_ref().is_some_and(|flow| flow.is_finished()) {
            self.selection = None;
            self.navigator.refresh_sections();
        }
        Reply::failure(error)
    }

    fn handle_menu(&mut self, command: Command) -> Reply {
        let separator = self.config.list_separator.clone();
        let Some(menu) = self.menu.as_mut() else {
            return self.handle_navigation(command);
        };
        match command {
            Command::Next => {
                if menu.next() {
                    Reply::handled(menu.announcement())
                } else {
                    Reply::unhandled(menu.announcement())
                }
            }
            Command::Previous => {
                if menu.previous() {
                    Reply::handled(menu.announcement())
                } else {
                    Reply::unhandled(menu.announcement())
                }
            }
            Command::JumpToLetter(letter) => {
                if menu.jump_to_letter(letter) {
                    Reply::handled(menu.announcement())
                } else {
                    Reply::unhandled(format!("No control starting with {}", letter.to_uppercase()))
                }
            }
            Command::ListAll => {
                let entries = menu.entries();
                if entries.is_empty() {
                    Reply::unhandled("No controls")
                } else {
                    Reply::handled(format!(
                        "{}: {}",
                        plural(entries.len(), "control", "controls"),
                        entries.join(&separator)
                    ))
                }
            }
            Command::ReadDetail => Reply::handled(menu.detail()),
            Command::DrillDown | Command::Activate => {
                let index = menu.index();
                match menu.activate_control(index) {
                    Ok(MenuActivation::Activated) => self.after_menu_change(),
                    Ok(MenuActivation::BeginTextEntry { index, label, text }) => {
                        let shown = if text.is_empty() { "empty".to_string() } else { text.clone() };
                        let reply = Reply::handled(format!("Editing {label}: {shown}"));
                        self.text_entry = Some(TextEntry {
                            control: index,
                            label,
                            buffer: text,
                        });
                        reply
                    }
                    Ok(MenuActivation::Nothing) => {
                        Reply::unhandled(format!("Use plus and minus. {}", menu.announcement()))
                    }
                    Err(error) => Reply::failure(&error),
                }
            }
            Command::AdjustUp | Command::AdjustDown => {
                let index = menu.index();
                match menu.adjust_control(index, command == Command::AdjustUp) {
                    Ok(true) => self.after_menu_change(),
                    Ok(false) => Reply::unhandled(menu.announcement()),
                    Err(error) => Reply::failure(&error),
                }
            }
            Command::Refresh => self.after_menu_change(),
            Command::BackOut => Reply::unhandled(format!("Top of {}", menu.name())),
            Command::Confirm
            | Command::ListAllScreens
            | Command::SwitchScreen(_)
            | Command::Tooltip
            | Command::Type(_)
            | Command::Erase => Reply::unhandled("Not available in menus"),
        }
    }

    /// Re-poll the dialog after a change; a sub-state switch is announced from the top
    fn after_menu_change(&mut self) -> Reply {
        let Some(menu) = self.menu.as_mut() else {
            return Reply::handled(self.navigator.current_announcement());
        };
        match menu.refresh() {
            MenuRefresh::SubStateChanged => Reply::handled(menu.opening_announcement()),
            MenuRefresh::Unchanged => Reply::handled(menu.announcement()),
        }
    }

    fn handle_text_entry(&mut self, command: Command) -> Reply {
        let Some(entry) = self.text_entry.as_mut() else {
            return self.handle_menu(command);
        };
        match command {
            Command::Type(c) => {
                entry.buffer.push(c);
                Reply::handled(c.to_string())
            }
            Command::Erase => match entry.buffer.pop() {
                Some(c) => Reply::handled(format!("{c} deleted")),
                None => Reply::unhandled("Empty"),
            },
            Command::ReadDetail | Command::ListAll => {
                let shown = if entry.buffer.is_empty() { "empty" } else { entry.buffer.as_str() };
                Reply::handled(format!("{}: {shown}", entry.label))
            }
            Command::Activate | Command::Confirm | Command::DrillDown => self.commit_text(),
            Command::BackOut => {
                self.text_entry = None;
                Reply::handled(format!("Cancelled. {}", self.context_announcement()))
            }
            _ => Reply::unhandled(format!("Editing {}", entry.label)),
        }
    }

    fn commit_text(&mut self) -> Reply {
        let Some(entry) = self.text_entry.take() else {
            return Reply::unhandled("Not editing");
        };
        let result = match self.menu.as_mut() {
            Some(menu) => menu.commit_text(entry.control, entry.buffer),
            None => Err(NavError::ActionFailed("menu closed".to_string())),
        };
        match result {
            Ok(()) => {
                let after = self.after_menu_change();
                Reply::handled(format!("Saved. {}", after.text))
            }
            Err(error) => Reply::failure(&error),
        }
    }

    /// Announcement of whichever of menu or navigator is in front
    fn context_announcement(&mut self) -> String {
        match self.menu.as_mut() {
            Some(menu) => menu.announcement(),
            None => self.navigator.current_announcement(),
        }
    }
}
