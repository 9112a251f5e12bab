//! Voice catalog
//!
//! Caches the platform voice registry and turns it into the options shown
//! in the voice selection control for the current language.
//!
//! Option values are indices into [`filter_by_language`]'s output. The
//! utterance controller resolves a selected index by calling the same
//! function again, so the two sides cannot disagree on ordering.

pub mod fallback;

pub use fallback::{FallbackRule, FallbackTable};

use crate::speech::{SpeechEngine, VoiceDescriptor};
use log::{debug, info, warn};

/// Label of the placeholder shown when nothing matches
pub const NO_VOICE_LABEL: &str = "No voice available";

/// Voices whose language tag starts with `language`, in registry order
///
/// Plain case-sensitive prefix match; "en" matches "en-US" and "en-GB".
pub fn filter_by_language<'a>(
    voices: &'a [VoiceDescriptor],
    language: &str,
) -> Vec<&'a VoiceDescriptor> {
    voices
        .iter()
        .filter(|voice| voice.language.starts_with(language))
        .collect()
}

/// One entry in the voice selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOption {
    /// Index into the filtered voice list; `None` for placeholders
    pub value: Option<usize>,
    pub label: String,
}

impl VoiceOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: None,
            label: label.to_string(),
        }
    }
}

/// Rendered contents of the voice selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceOptions {
    pub options: Vec<VoiceOption>,
    pub enabled: bool,
}

/// Cached voice registry plus the rules for rendering it
pub struct VoiceCatalog {
    voices: Vec<VoiceDescriptor>,
    fallbacks: FallbackTable,
    no_voice_label: String,
}

impl VoiceCatalog {
    /// Create an empty catalog
    pub fn new(fallbacks: FallbackTable) -> Self {
        Self {
            voices: Vec::new(),
            fallbacks,
            no_voice_label: NO_VOICE_LABEL.to_string(),
        }
    }

    /// Override the "No voice available" label
    pub fn with_no_voice_label(mut self, label: &str) -> Self {
        self.no_voice_label = label.to_string();
        self
    }

    /// Replace the cached registry with the engine's current one
    ///
    /// A failed query leaves the catalog empty rather than stale.
    pub fn refresh(&mut self, engine: &dyn SpeechEngine) {
        self.voices = match engine.voices() {
            Ok(voices) => voices,
            Err(e) => {
                warn!("Failed to query voice registry: {}", e);
                Vec::new()
            }
        };
        info!("Voice registry refreshed: {} voices", self.voices.len());
    }

    /// Cached registry
    pub fn voices(&self) -> &[VoiceDescriptor] {
        &self.voices
    }

    pub fn fallbacks(&self) -> &FallbackTable {
        &self.fallbacks
    }

    /// Build the voice options for `language`
    pub fn populate(&self, language: &str) -> VoiceOptions {
        let filtered = filter_by_language(&self.voices, language);

        if filtered.is_empty() {
            if let Some(rule) = self.fallbacks.get(language) {
                let substitutes = filter_by_language(&self.voices, &rule.substitute);
                if !substitutes.is_empty() {
                    debug!(
                        "No '{}' voices, {} '{}' voices stand in",
                        language,
                        substitutes.len(),
                        rule.substitute
                    );
                    return VoiceOptions {
                        options: vec![VoiceOption::placeholder(&rule.label)],
                        enabled: true,
                    };
                }
            }

            debug!("No voices for '{}'", language);
            return VoiceOptions {
                options: vec![VoiceOption::placeholder(&self.no_voice_label)],
                enabled: false,
            };
        }

        let options = filtered
            .iter()
            .enumerate()
            .map(|(index, voice)| VoiceOption {
                value: Some(index),
                label: voice.name.clone(),
            })
            .collect();

        VoiceOptions {
            options,
            enabled: true,
        }
    }

    /// Voice at `index` of the filtered list for `language`
    pub fn voice_at(&self, language: &str, index: usize) -> Option<&VoiceDescriptor> {
        filter_by_language(&self.voices, language).get(index).copied()
    }
}
