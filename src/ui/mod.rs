//! UI control state
//!
//! Plain data for each on-screen control. Handlers mutate it; the
//! console renderer in [`render`] prints whatever changed.

pub mod render;

use crate::catalog::{VoiceOption, VoiceOptions};

/// The play button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    pub label: String,
    pub enabled: bool,
}

/// The voice dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSelect {
    pub options: Vec<VoiceOption>,
    pub enabled: bool,
    /// Position of the selected option
    pub selected: usize,
}

impl VoiceSelect {
    /// Replace the options; selection goes back to the first entry
    pub fn render(&mut self, rendered: VoiceOptions) {
        self.options = rendered.options;
        self.enabled = rendered.enabled;
        self.selected = 0;
    }

    /// Value of the selected option, if it names a voice
    pub fn selected_value(&self) -> Option<usize> {
        self.options.get(self.selected).and_then(|option| option.value)
    }

    /// Select the option at `position`
    ///
    /// Returns false if the control is disabled or the position is out of range.
    pub fn select(&mut self, position: usize) -> bool {
        if !self.enabled || position >= self.options.len() {
            return false;
        }
        self.selected = position;
        true
    }
}

/// State of every control on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Raw text area contents
    pub text: String,
    /// Selected language code
    pub language: String,
    pub voice_select: VoiceSelect,
    pub trigger: TriggerControl,
    /// Error display; empty when there is nothing to show
    pub error: String,
}

impl UiState {
    pub fn new(language: &str, idle_label: &str) -> Self {
        Self {
            text: String::new(),
            language: language.to_string(),
            voice_select: VoiceSelect {
                options: Vec::new(),
                enabled: false,
                selected: 0,
            },
            trigger: TriggerControl {
                label: idle_label.to_string(),
                enabled: true,
            },
            error: String::new(),
        }
    }
}
