//! Review navigation state machine
//!
//! Four levels: Screens → Items → Sections → Section items, plus a stack of
//! nesting frames for drilling from a section item into that entry's own
//! sections (e.g. from a tech's prerequisite list into the prerequisite tech).

mod navigator;
mod nesting;

pub(crate) use navigator::plural;
pub use navigator::Navigator;
