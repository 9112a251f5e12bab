//! Speech synthesis system

pub mod backends;
pub mod engine;

pub use engine::{
    LifecycleEvent, LifecycleNotifier, SpeechEngine, Tuning, UtteranceRequest, VoiceDescriptor,
};

use crate::Result;
use backends::native::NativeEngine;
use backends::recording::{demo_voices, RecordingEngine};
use log::info;

/// Create a speech engine
///
/// With `dry_run` the recording backend is used and nothing is spoken;
/// it offers a small demo registry and remembers only the last request.
/// Otherwise the native backend for the current platform is initialized;
/// failure there is fatal since there is nothing else to fall back to.
pub fn create_engine(
    notify: LifecycleNotifier,
    dry_run: bool,
) -> Result<Box<dyn SpeechEngine>> {
    if dry_run {
        info!("Dry run: using recording backend");
        let engine = RecordingEngine::new(demo_voices(), notify).with_history_limit(1);
        return Ok(Box::new(engine));
    }

    let platform = std::env::consts::OS;
    info!("Creating native speech engine for platform: {}", platform);

    match NativeEngine::new(notify) {
        Ok(engine) => {
            info!("✓ Successfully initialized native TTS backend");
            Ok(Box::new(engine))
        }
        Err(e) => Err(crate::SpeakitError::Speech(format!(
            "Failed to initialize speech backend for platform '{}': {}\n\
             On Linux install speech-dispatcher (sudo apt install speech-dispatcher),\n\
             or run with --dry-run",
            platform, e
        ))),
    }
}
