//! Menu screen and live control abstract Traits

use crate::error::NavResult;
use crate::menu::{ControlChange, ControlState, MenuControl};

/// Live dialog control Trait
///
/// Binding to one control of the host's real dialog. The menu navigator
/// snapshots its state into a [`MenuControl`] and re-reads it before every
/// announcement, since the control can change between inputs.
pub trait LiveControl {
    /// Display label as currently shown
    fn label(&self) -> String;

    /// Current kind-specific state
    fn state(&self) -> ControlState;

    /// Whether the control currently accepts input
    fn is_interactable(&self) -> bool {
        true
    }

    /// Apply a change to the real control
    fn apply(&self, change: ControlChange) -> NavResult<()>;
}

/// Menu screen Trait
///
/// A non-gameplay dialog (start menu, save/load, options) exposed as a flat
/// list of controls.
pub trait MenuScreen {
    /// Dialog name read when the menu opens
    fn name(&self) -> &str;

    /// Title of a transient dialog currently superseding the normal controls
    /// (e.g. a delete confirmation). Polled on every refresh.
    fn active_dialog(&self) -> Option<String> {
        None
    }

    /// Build the control list for whatever is visible right now
    fn build_controls(&self) -> Vec<MenuControl>;
}
