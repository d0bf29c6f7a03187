//! Selection flow abstract Trait

use crate::error::NavResult;
use crate::types::ActionOutcome;

/// Result of selecting the highlighted option
#[derive(Debug)]
pub enum SelectionStep {
    /// Option marked as chosen; a separate `confirm` is still required
    Highlighted(String),
    /// The flow completed and the owner's callback ran
    Completed(ActionOutcome),
}

/// Selection flow Trait
///
/// Object-safe face of [`crate::SelectionMode`] so the review context can hold
/// flows with any payload type.
pub trait SelectionFlow {
    /// Prompt read when the flow opens, e.g. "Choose a mission target"
    fn title(&self) -> &str;

    fn option_count(&self) -> usize;

    fn current_index(&self) -> usize;

    /// Move to the next option (wraps); false when there are no options
    fn next(&mut self) -> bool;

    /// Move to the previous option (wraps); false when there are no options
    fn previous(&mut self) -> bool;

    /// Choose the highlighted option
    fn select_current(&mut self) -> NavResult<SelectionStep>;

    /// Complete the flow with the chosen option; fails without side effects
    /// when nothing has been chosen
    fn confirm(&mut self) -> NavResult<ActionOutcome>;

    /// Abandon the flow without running the owner's callback
    fn cancel(&mut self);

    /// Jump to the next option whose label starts with `letter`
    fn jump_to_letter(&mut self, letter: char) -> bool;

    /// Every option label, the highlighted one marked
    fn entries(&self) -> Vec<String>;

    /// "position of total: label"
    fn announcement(&self) -> String;

    /// Detail text of the highlighted option
    fn detail(&self) -> String;

    /// Completed or cancelled
    fn is_finished(&self) -> bool;
}
