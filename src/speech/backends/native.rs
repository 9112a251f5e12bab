//! Native TTS backend using the tts crate
//!
//! This backend uses the `tts` crate which provides a unified interface to:
//! - Speech Dispatcher on Linux (via native bindings)
//! - AVFoundation on macOS/iOS (via native bindings)
//! - SAPI / WinRT on Windows
//! - The Web Speech API on wasm

use crate::speech::{
    LifecycleEvent, LifecycleNotifier, SpeechEngine, UtteranceRequest, VoiceDescriptor,
};
use crate::{Result, SpeakitError};
use log::{debug, error, warn};
use tts::{Tts as TtsCrate, UtteranceId, Voice};

/// Native TTS backend using the tts crate
pub struct NativeEngine {
    /// The tts crate's TTS instance
    tts: TtsCrate,

    /// Lifecycle sink, used directly when the platform has no utterance callbacks
    notify: LifecycleNotifier,

    /// Whether begin/end/stop callbacks are wired up
    callbacks: bool,

    /// Voice active at startup; restored when a request names no usable voice
    default_voice: Option<Voice>,
}

impl NativeEngine {
    /// Create a new native engine
    ///
    /// Initializes the platform TTS backend and routes its utterance
    /// callbacks into `notify`.
    pub fn new(notify: LifecycleNotifier) -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| SpeakitError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        let features = tts.supported_features();
        let callbacks = features.utterance_callbacks;
        if callbacks {
            let begin = notify.clone();
            tts.on_utterance_begin(Some(Box::new(move |_id: UtteranceId| {
                begin(LifecycleEvent::Started)
            })))?;

            let end = notify.clone();
            tts.on_utterance_end(Some(Box::new(move |_id: UtteranceId| {
                end(LifecycleEvent::Finished)
            })))?;

            let stop = notify.clone();
            tts.on_utterance_stop(Some(Box::new(move |_id: UtteranceId| {
                stop(LifecycleEvent::Failed("utterance stopped".to_string()))
            })))?;
        } else {
            warn!("Utterance callbacks not supported on this platform");
        }

        let default_voice = if features.get_voice {
            match tts.voice() {
                Ok(voice) => voice,
                Err(e) => {
                    warn!("Failed to read default voice: {}", e);
                    None
                }
            }
        } else {
            None
        };
        debug!(
            "Default voice: {:?}",
            default_voice.as_ref().map(|v| v.name())
        );

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            notify,
            callbacks,
            default_voice,
        })
    }

    /// Set the platform voice for a request
    ///
    /// Voice selection is sticky in the platform engine, so when nothing
    /// matches the startup voice is put back explicitly.
    fn select_voice(&mut self, request: &UtteranceRequest) -> Result<()> {
        let mut voices = self
            .tts
            .voices()
            .map_err(|e| SpeakitError::Speech(format!("Failed to get voices: {}", e)))?;
        let described: Vec<_> = voices.iter().map(describe).collect();

        let voice = match pick_voice(&described, request) {
            Some(index) => voices.swap_remove(index),
            None => match &self.default_voice {
                Some(voice) => {
                    debug!("No voice matches '{}', restoring default", request.language);
                    voice.clone()
                }
                None => {
                    debug!("No voice matches '{}' and no default known", request.language);
                    return Ok(());
                }
            },
        };

        debug!("Selecting voice: {} ({})", voice.name(), voice.language());
        self.tts
            .set_voice(&voice)
            .map_err(|e| SpeakitError::Speech(format!("Failed to set voice: {}", e)))?;

        Ok(())
    }

    /// Apply tuning multipliers relative to the platform's normal values
    fn apply_tuning(&mut self, request: &UtteranceRequest) -> Result<()> {
        let features = self.tts.supported_features();
        let tuning = request.tuning;

        if features.rate {
            let rate = scale(
                tuning.rate,
                self.tts.normal_rate(),
                self.tts.min_rate(),
                self.tts.max_rate(),
            );
            self.tts
                .set_rate(rate)
                .map_err(|e| SpeakitError::Speech(format!("Failed to set rate: {}", e)))?;
        } else {
            debug!("Rate control not supported on this platform");
        }

        if features.pitch {
            let pitch = scale(
                tuning.pitch,
                self.tts.normal_pitch(),
                self.tts.min_pitch(),
                self.tts.max_pitch(),
            );
            self.tts
                .set_pitch(pitch)
                .map_err(|e| SpeakitError::Speech(format!("Failed to set pitch: {}", e)))?;
        } else {
            debug!("Pitch control not supported on this platform");
        }

        if features.volume {
            let volume = scale(
                tuning.volume,
                self.tts.normal_volume(),
                self.tts.min_volume(),
                self.tts.max_volume(),
            );
            self.tts
                .set_volume(volume)
                .map_err(|e| SpeakitError::Speech(format!("Failed to set volume: {}", e)))?;
        } else {
            debug!("Volume control not supported on this platform");
        }

        Ok(())
    }
}

fn describe(voice: &Voice) -> VoiceDescriptor {
    VoiceDescriptor {
        id: voice.id(),
        name: voice.name(),
        language: voice.language().to_string(),
    }
}

/// Index of the registry voice to use for `request`
///
/// An explicit voice is found by id. Without one, the first voice whose
/// language starts with the requested code wins. `None` means the engine
/// default should be used.
fn pick_voice(voices: &[VoiceDescriptor], request: &UtteranceRequest) -> Option<usize> {
    match &request.voice {
        Some(wanted) => voices.iter().position(|v| v.id == wanted.id),
        None => voices
            .iter()
            .position(|v| v.language.starts_with(request.language.as_str())),
    }
}

/// Scale a multiplier onto a platform range
fn scale(factor: f32, normal: f32, min: f32, max: f32) -> f32 {
    (normal * factor).clamp(min, max)
}

impl SpeechEngine for NativeEngine {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| SpeakitError::Speech(format!("Failed to get voices: {}", e)))?;

        Ok(voices.iter().map(describe).collect())
    }

    fn is_speaking(&self) -> bool {
        if !self.tts.supported_features().is_speaking {
            return false;
        }

        match self.tts.is_speaking() {
            Ok(speaking) => speaking,
            Err(e) => {
                warn!("Failed to query speaking state: {}", e);
                false
            }
        }
    }

    fn speak(&mut self, request: &UtteranceRequest) -> Result<()> {
        if self.tts.supported_features().voice {
            self.select_voice(request)?;
        }

        self.apply_tuning(request)?;

        debug!("Speaking: {}", request.text);
        self.tts.speak(request.text.as_str(), false).map_err(|e| {
            error!("Failed to speak: {}", e);
            SpeakitError::Speech(format!("Speak failed: {}", e))
        })?;

        if !self.callbacks {
            (self.notify)(LifecycleEvent::Started);
            (self.notify)(LifecycleEvent::Finished);
        }

        Ok(())
    }
}
