//! Utterance controller
//!
//! Validates a play request, hands it to the speech engine and mirrors
//! the engine's lifecycle events into the play button and error display.

pub mod trigger;

pub use trigger::TriggerState;

use crate::catalog::VoiceCatalog;
use crate::speech::{LifecycleEvent, SpeechEngine, Tuning, UtteranceRequest};
use crate::ui::UiState;
use log::{debug, error, info};

/// Play button labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub idle: String,
    pub speaking: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            idle: "Play Converted Sound".to_string(),
            speaking: "Sound is Playing...".to_string(),
        }
    }
}

/// User-facing error messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub empty_text: String,
    pub synthesis_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty_text: "Nothing to convert! Enter text in the text area.".to_string(),
            synthesis_failed: "Speech synthesis failed. Try again.".to_string(),
        }
    }
}

/// What a trigger attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Request handed to the engine
    Submitted,
    /// Text was blank; error message set
    EmptyText,
    /// An utterance is already playing; nothing changed
    Busy,
    /// Engine rejected the request; handled like a synthesis failure
    SubmitFailed,
}

pub struct UtteranceController {
    state: TriggerState,
    labels: Labels,
    messages: Messages,
    tuning: Tuning,
}

impl UtteranceController {
    pub fn new(labels: Labels, messages: Messages, tuning: Tuning) -> Self {
        Self {
            state: TriggerState::Idle,
            labels,
            messages,
            tuning,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Handle a press of the play button
    ///
    /// The selected voice is looked up again through the catalog's filter
    /// at this moment; a placeholder selection leaves the voice unset.
    pub fn trigger(
        &mut self,
        ui: &mut UiState,
        catalog: &VoiceCatalog,
        engine: &mut dyn SpeechEngine,
    ) -> TriggerOutcome {
        let text = ui.text.trim();
        if text.is_empty() {
            ui.error = self.messages.empty_text.clone();
            return TriggerOutcome::EmptyText;
        }

        if engine.is_speaking() || self.state.is_speaking() {
            debug!("Trigger ignored: already speaking");
            return TriggerOutcome::Busy;
        }

        ui.error.clear();

        let voice = ui
            .voice_select
            .selected_value()
            .and_then(|index| catalog.voice_at(&ui.language, index))
            .cloned();

        let request = UtteranceRequest::new(text, &ui.language)
            .with_voice(voice)
            .with_tuning(self.tuning);

        info!(
            "Submitting utterance ({} chars, language '{}', voice {:?})",
            request.text.chars().count(),
            request.language,
            request.voice.as_ref().map(|v| v.name.as_str())
        );

        match engine.speak(&request) {
            Ok(()) => TriggerOutcome::Submitted,
            Err(e) => {
                error!("Failed to submit utterance: {}", e);
                self.on_event(&LifecycleEvent::Failed(e.to_string()), ui);
                TriggerOutcome::SubmitFailed
            }
        }
    }

    /// Apply an engine lifecycle event to the play button and error display
    pub fn on_event(&mut self, event: &LifecycleEvent, ui: &mut UiState) {
        let Some(next) = self.state.on_event(event) else {
            debug!("Ignoring {:?} while {:?}", event, self.state);
            return;
        };
        self.state = next;

        match event {
            LifecycleEvent::Started => {
                ui.trigger.label = self.labels.speaking.clone();
                ui.trigger.enabled = false;
            }
            LifecycleEvent::Finished => {
                ui.trigger.label = self.labels.idle.clone();
                ui.trigger.enabled = true;
            }
            LifecycleEvent::Failed(reason) => {
                error!("Speech synthesis failed: {}", reason);
                ui.error = self.messages.synthesis_failed.clone();
                ui.trigger.label = self.labels.idle.clone();
                ui.trigger.enabled = true;
            }
        }
    }
}
