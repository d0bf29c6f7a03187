//! Section abstract Trait

use crate::error::{NavError, NavResult};
use crate::types::ActionOutcome;

/// Section Trait
///
/// A named, ordered, read-only list of entries for the focused item.
/// Sections are rebuilt on every retrieval; `item_count` reflects the entry
/// list at construction time and must not change behind a held reference.
///
/// Indices passed in are always `< item_count()` when called by the
/// navigator, but implementations should still degrade to a placeholder
/// string rather than panic.
pub trait Section {
    /// Section name, e.g. "Stats"
    fn name(&self) -> &str;

    /// Number of entries
    fn item_count(&self) -> usize;

    /// One-line rendering of an entry
    fn read_item(&self, index: usize) -> String;

    /// Longer rendering of an entry (defaults to the one-line rendering)
    fn read_item_detail(&self, index: usize) -> String {
        self.read_item(index)
    }

    /// Text used for letter navigation (defaults to the one-line rendering)
    fn item_label(&self, index: usize) -> String {
        self.read_item(index)
    }

    /// Whether the entry has an action bound to it
    fn can_activate(&self, _index: usize) -> bool {
        false
    }

    /// Run the entry's action
    fn activate(&self, index: usize) -> NavResult<ActionOutcome> {
        Err(NavError::NoAction(self.read_item(index)))
    }

    /// Whether the entry has a richer tooltip presentation available right now
    fn has_tooltip(&self, _index: usize) -> bool {
        false
    }

    /// Trigger the entry's tooltip presentation
    fn show_tooltip(&self, index: usize) -> NavResult<ActionOutcome> {
        Err(NavError::NoAction(self.read_item(index)))
    }

    /// Identifier the owning screen can resolve to further sections
    /// (secondary nesting, e.g. a prerequisite tech inside a tech)
    fn drill_target(&self, _index: usize) -> Option<String> {
        None
    }

    /// Whole-section readout
    fn full_summary(&self) -> String {
        let count = self.item_count();
        if count == 0 {
            return format!("{}: empty", self.name());
        }
        let entries: Vec<String> = (0..count).map(|i| self.read_item(i)).collect();
        format!("{}: {}", self.name(), entries.join(". "))
    }
}
