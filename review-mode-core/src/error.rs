//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Navigation layer error type
///
/// Nothing in the navigators is fatal: every variant is reported back to the
/// user as a spoken message and the state machine stays where it was.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum NavError {
    /// An entry or control action reported a failure
    #[error("Action failed: {0}")]
    ActionFailed(String),

    /// The entry has no action bound to it
    #[error("No action available for {0}")]
    NoAction(String),

    /// Confirm was requested before anything was selected
    #[error("Nothing selected")]
    NothingSelected,

    /// The selection list has no options
    #[error("No options available")]
    EmptySelection,

    /// The selection flow already completed or was cancelled
    #[error("Selection already closed")]
    SelectionClosed,

    /// The control exists but is currently disabled
    #[error("{0} is unavailable")]
    ControlNotInteractable(String),

    /// The control kind does not support the requested change
    #[error("{0} cannot be changed this way")]
    UnsupportedChange(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl NavError {
    /// Whether it is expected behavior (user pressed something that does not apply here),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NoAction(_)
            | Self::NothingSelected
            | Self::EmptySelection
            | Self::SelectionClosed
            | Self::ControlNotInteractable(_)
            | Self::UnsupportedChange(_) => true,
            Self::ActionFailed(_) | Self::InvalidConfig(_) | Self::Serialization(_) => false,
        }
    }

    /// Log this error at the level matching [`Self::is_expected`].
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Navigation layer Result type alias
pub type NavResult<T> = std::result::Result<T, NavError>;
