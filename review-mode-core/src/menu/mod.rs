//! Menu navigation over dialog controls
//!
//! Single-level counterpart of the review navigator for non-gameplay dialogs.
//! Controls are snapshots of live host controls and are re-read before being
//! announced.

mod control;
mod navigator;

pub use control::{format_slider_value, ControlChange, ControlKind, ControlState, MenuControl};
pub use navigator::{MenuActivation, MenuNavigator, MenuRefresh};
