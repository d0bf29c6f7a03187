//! Screen abstract Trait

use super::Section;

/// Screen Trait
///
/// Top navigation level grouping one domain of items (all councilors, all
/// fleets, ...). Items are addressed by index only; the index is valid against
/// the collection as it is *now* and may refer to a different object after the
/// simulation changes, so implementations re-query their data source on every
/// call rather than caching object handles across inputs.
///
/// Domain-specific branching (an item being one of several concrete types)
/// belongs in the implementation; the navigator never inspects items.
pub trait Screen {
    /// Screen name, also its identity
    fn name(&self) -> &str;

    /// Text read when the screen gets focus or its detail is requested
    fn description(&self) -> String {
        self.name().to_string()
    }

    /// Current number of items
    fn item_count(&self) -> usize;

    /// One-line item summary
    fn item_summary(&self, index: usize) -> String;

    /// Longer item reading (defaults to the summary)
    fn item_detail(&self, index: usize) -> String {
        self.item_summary(index)
    }

    /// Build the item's sections from live data
    fn sections_for_item(&self, index: usize) -> Vec<Box<dyn Section>>;

    /// Whether the item can be drilled into at all
    fn can_drill_into_item(&self, index: usize) -> bool {
        index < self.item_count()
    }

    /// Resolve a section entry's drill target to that target's own sections
    fn sections_for_target(&self, _target: &str) -> Vec<Box<dyn Section>> {
        Vec::new()
    }

    /// Called when the screen becomes the current one
    fn on_activate(&mut self) {}

    /// Called when the navigator leaves the screen
    fn on_deactivate(&mut self) {}
}
