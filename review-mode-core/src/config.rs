//! Navigator configuration

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// Default slider step, as a fraction of the slider's range
pub const DEFAULT_SLIDER_STEP_FRACTION: f32 = 0.05;

/// Announcement and adjustment preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigatorConfig {
    /// Interrupt in-flight speech for navigation announcements
    pub interrupt_on_navigate: bool,
    /// Interrupt in-flight speech for "list everything" readouts
    pub interrupt_on_list: bool,
    /// Append "Enter to activate" / "Enter to open" hints to entries
    pub announce_hints: bool,
    /// Slider step as a fraction of the slider's range, in `(0, 1]`
    pub slider_step_fraction: f32,
    /// Separator used when reading a whole level aloud
    pub list_separator: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            interrupt_on_navigate: true,
            interrupt_on_list: true,
            announce_hints: true,
            slider_step_fraction: DEFAULT_SLIDER_STEP_FRACTION,
            list_separator: ", ".to_string(),
        }
    }
}

impl NavigatorConfig {
    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NavResult<()> {
        if !(self.slider_step_fraction > 0.0 && self.slider_step_fraction <= 1.0) {
            return Err(NavError::InvalidConfig(format!(
                "sliderStepFraction must be in (0, 1], got {}",
                self.slider_step_fraction
            )));
        }
        if self.list_separator.is_empty() {
            return Err(NavError::InvalidConfig(
                "listSeparator cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
