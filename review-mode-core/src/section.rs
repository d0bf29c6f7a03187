//! Data-driven section implementation
//!
//! Most screens build their sections as a [`DataSection`]: a name plus a list
//! of [`SectionEntry`] values assembled from live data at retrieval time.

use std::fmt;

use crate::error::{NavError, NavResult};
use crate::traits::Section;
use crate::types::ActionOutcome;

/// A zero-argument effect bound to an entry at construction time
pub struct EntryAction(Box<dyn Fn() -> NavResult<ActionOutcome>>);

impl EntryAction {
    pub fn new(action: impl Fn() -> NavResult<ActionOutcome> + 'static) -> Self {
        Self(Box::new(action))
    }

    pub fn run(&self) -> NavResult<ActionOutcome> {
        (self.0)()
    }
}

impl fmt::Debug for EntryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntryAction")
    }
}

/// Richer presentation linked to an entry
struct Tooltip {
    available: Box<dyn Fn() -> bool>,
    show: EntryAction,
}

/// One entry of a [`DataSection`]
pub struct SectionEntry {
    label: Option<String>,
    value: String,
    detail: Option<String>,
    action: Option<EntryAction>,
    tooltip: Option<Tooltip>,
    drill_target: Option<String>,
}

impl SectionEntry {
    /// Entry with only a value, e.g. a trait name
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
            detail: None,
            action: None,
            tooltip: None,
            drill_target: None,
        }
    }

    /// "label: value" entry, e.g. "Loyalty: 12"
    pub fn labeled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(value)
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Fn() -> NavResult<ActionOutcome> + 'static) -> Self {
        self.action = Some(EntryAction::new(action));
        self
    }

    #[must_use]
    pub fn with_tooltip(
        mut self,
        available: impl Fn() -> bool + 'static,
        show: impl Fn() -> NavResult<ActionOutcome> + 'static,
    ) -> Self {
        self.tooltip = Some(Tooltip {
            available: Box::new(available),
            show: EntryAction::new(show),
        });
        self
    }

    /// Let the owning screen resolve this entry to further sections
    #[must_use]
    pub fn with_drill_target(mut self, target: impl Into<String>) -> Self {
        self.drill_target = Some(target.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// One-line rendering
    pub fn text(&self) -> String {
        match &self.label {
            Some(label) if !label.is_empty() => format!("{label}: {}", self.value),
            _ => self.value.clone(),
        }
    }

    /// Longer rendering, falling back to the one-line text
    pub fn detail_text(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}. {detail}", self.text()),
            None => self.text(),
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }
}

impl fmt::Debug for SectionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionEntry")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("actionable", &self.action.is_some())
            .field("drill_target", &self.drill_target)
            .finish_non_exhaustive()
    }
}

/// Section built from a list of entries
#[derive(Debug)]
pub struct DataSection {
    name: String,
    entries: Vec<SectionEntry>,
}

impl DataSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn push(&mut self, entry: SectionEntry) {
        self.entries.push(entry);
    }

    /// Builder-style append
    #[must_use]
    pub fn with(mut self, entry: SectionEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Builder-style "label: value" append
    #[must_use]
    pub fn field(self, label: impl Into<String>, value: impl ToString) -> Self {
        self.with(SectionEntry::labeled(label, value.to_string()))
    }

    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Box for returning from `Screen::sections_for_item`
    pub fn boxed(self) -> Box<dyn Section> {
        Box::new(self)
    }

    fn entry(&self, index: usize) -> Option<&SectionEntry> {
        self.entries.get(index)
    }
}

impl Section for DataSection {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    fn read_item(&self, index: usize) -> String {
        self.entry(index)
            .map_or_else(|| "Unknown entry".to_string(), SectionEntry::text)
    }

    fn read_item_detail(&self, index: usize) -> String {
        self.entry(index)
            .map_or_else(|| "Unknown entry".to_string(), SectionEntry::detail_text)
    }

    fn item_label(&self, index: usize) -> String {
        self.entry(index)
            .map(|e| e.label.clone().unwrap_or_else(|| e.value.clone()))
            .unwrap_or_default()
    }

    fn can_activate(&self, index: usize) -> bool {
        self.entry(index).is_some_and(SectionEntry::is_actionable)
    }

    fn activate(&self, index: usize) -> NavResult<ActionOutcome> {
        let entry = self
            .entry(index)
            .ok_or_else(|| NavError::NoAction(format!("entry {}", index + 1)))?;
        match &entry.action {
            Some(action) => action.run(),
            None => Err(NavError::NoAction(entry.text())),
        }
    }

    fn has_tooltip(&self, index: usize) -> bool {
        self.entry(index)
            .and_then(|e| e.tooltip.as_ref())
            .is_some_and(|t| (t.available)())
    }

    fn show_tooltip(&self, index: usize) -> NavResult<ActionOutcome> {
        match self.entry(index).and_then(|e| e.tooltip.as_ref()) {
            Some(tooltip) if (tooltip.available)() => tooltip.show.run(),
            _ => Err(NavError::NoAction(self.read_item(index))),
        }
    }

    fn drill_target(&self, index: usize) -> Option<String> {
        self.entry(index).and_then(|e| e.drill_target.clone())
    }
}
