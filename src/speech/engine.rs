//! Speech engine abstraction
//!
//! Provides a unified interface to the platform speech synthesizer.
//! The catalog reads the voice registry through it and the utterance
//! controller submits requests to it. Playback progress comes back
//! asynchronously as [`LifecycleEvent`]s through a notifier.

use crate::Result;
use std::sync::Arc;

/// A voice offered by the platform
///
/// Read-only snapshot; the platform owns the real voice object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    /// Platform voice identifier, used to find the voice again at submit time
    pub id: String,
    /// Display name
    pub name: String,
    /// Language tag, e.g. "en-US"
    pub language: String,
}

impl VoiceDescriptor {
    pub fn new(id: &str, name: &str, language: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            language: language.to_string(),
        }
    }
}

/// Rate, pitch and volume multipliers
///
/// 1.0 is the platform's normal value for each parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Everything needed for one playback
#[derive(Debug, Clone, PartialEq)]
pub struct UtteranceRequest {
    pub text: String,
    pub language: String,
    /// `None` lets the engine pick its default voice for `language`
    pub voice: Option<VoiceDescriptor>,
    pub tuning: Tuning,
}

impl UtteranceRequest {
    pub fn new(text: &str, language: &str) -> Self {
        Self {
            text: text.to_string(),
            language: language.to_string(),
            voice: None,
            tuning: Tuning::default(),
        }
    }

    pub fn with_voice(mut self, voice: Option<VoiceDescriptor>) -> Self {
        self.voice = voice;
        self
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }
}

/// Playback progress reported by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Audio started
    Started,
    /// Utterance finished normally
    Finished,
    /// Synthesis failed or was cut short
    Failed(String),
}

/// Receives lifecycle events; may be called from a platform thread
pub type LifecycleNotifier = Arc<dyn Fn(LifecycleEvent) + Send + Sync>;

/// Speech engine trait
///
/// All backends implement this. Submitting is fire-and-forget: `speak`
/// returns once the request is queued, and progress arrives through the
/// notifier the backend was built with.
pub trait SpeechEngine {
    /// Current voice registry
    fn voices(&self) -> Result<Vec<VoiceDescriptor>>;

    /// Whether an utterance is playing right now
    fn is_speaking(&self) -> bool;

    /// Submit one utterance
    fn speak(&mut self, request: &UtteranceRequest) -> Result<()>;
}
