//! Review Mode Core Library
//!
//! Keyboard-only, screen-reader-first navigation over live game data:
//! - Four-level review navigator (Screens → Items → Sections → Section items)
//! - Selection sub-mode for short "pick a target, then confirm" flows
//! - Menu navigator for dialog controls (buttons, toggles, sliders, dropdowns, inputs)
//!
//! The library never owns game data. Screens, sections and menu controls are
//! abstracted through traits and re-derived from the live source on demand, so
//! any host (a game mod, the bundled terminal demo, tests) can plug in its own
//! data extraction and speech output.

pub mod config;
pub mod error;
pub mod letter;
pub mod menu;
pub mod navigation;
pub mod review;
pub mod section;
pub mod selection;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::NavigatorConfig;
pub use error::{NavError, NavResult};
pub use menu::{
    ControlChange, ControlKind, ControlState, MenuActivation, MenuControl, MenuNavigator, MenuRefresh,
};
pub use navigation::Navigator;
pub use review::{ActiveLayer, ReviewMode};
pub use section::{DataSection, EntryAction, SectionEntry};
pub use selection::{ConfirmPolicy, SelectionMode, SelectionOption};
pub use traits::{
    LiveControl, LogSpeech, MenuScreen, Screen, Section, SelectionFlow, SelectionStep, SpeechOutput,
    Transcript, Utterance,
};
pub use types::{ActionOutcome, Command, Cursor, DrillOutcome, NavigationLevel};
