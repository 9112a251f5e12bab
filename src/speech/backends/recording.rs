//! Recording backend
//!
//! Logs and records utterance requests instead of producing audio.
//! Used by `--dry-run` on machines without a speech service, and by tests.

use crate::speech::{
    LifecycleEvent, LifecycleNotifier, SpeechEngine, UtteranceRequest, VoiceDescriptor,
};
use crate::{Result, SpeakitError};
use log::info;

/// Engine that records requests instead of speaking them
pub struct RecordingEngine {
    voices: Vec<VoiceDescriptor>,
    notify: LifecycleNotifier,
    speaking: bool,
    /// Emit `Finished` right after `Started`
    auto_finish: bool,
    fail_next: Option<String>,
    /// Most recent requests, oldest first
    submitted: Vec<UtteranceRequest>,
    /// Cap on `submitted`; `None` keeps everything
    history_limit: Option<usize>,
    /// Requests accepted over the engine's lifetime
    spoken: usize,
}

/// Small registry for `--dry-run`, so the voice controls have something to show
pub fn demo_voices() -> Vec<VoiceDescriptor> {
    vec![
        VoiceDescriptor::new("demo-en-us", "Demo English (US)", "en-US"),
        VoiceDescriptor::new("demo-en-gb", "Demo English (UK)", "en-GB"),
        VoiceDescriptor::new("demo-hi-in", "Demo Hindi", "hi-IN"),
        VoiceDescriptor::new("demo-fr-fr", "Demo French", "fr-FR"),
    ]
}

impl RecordingEngine {
    /// Create an engine that finishes each utterance immediately
    pub fn new(voices: Vec<VoiceDescriptor>, notify: LifecycleNotifier) -> Self {
        Self {
            voices,
            notify,
            speaking: false,
            auto_finish: true,
            fail_next: None,
            submitted: Vec::new(),
            history_limit: None,
            spoken: 0,
        }
    }

    /// Keep only the last `limit` requests
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Leave utterances playing until `finish` is called
    pub fn hold_playback(mut self) -> Self {
        self.auto_finish = false;
        self
    }

    /// Replace the voice registry
    pub fn set_voices(&mut self, voices: Vec<VoiceDescriptor>) {
        self.voices = voices;
    }

    /// Force the speaking flag
    pub fn set_speaking(&mut self, speaking: bool) {
        self.speaking = speaking;
    }

    /// Make the next `speak` call fail with `reason`
    pub fn fail_next(&mut self, reason: &str) {
        self.fail_next = Some(reason.to_string());
    }

    /// End the held utterance
    pub fn finish(&mut self) {
        if self.speaking {
            self.speaking = false;
            (self.notify)(LifecycleEvent::Finished);
        }
    }

    /// Requests still held, oldest first
    pub fn submitted(&self) -> &[UtteranceRequest] {
        &self.submitted
    }

    /// Number of requests accepted so far
    pub fn spoken(&self) -> usize {
        self.spoken
    }
}

impl SpeechEngine for RecordingEngine {
    fn voices(&self) -> Result<Vec<VoiceDescriptor>> {
        Ok(self.voices.clone())
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn speak(&mut self, request: &UtteranceRequest) -> Result<()> {
        if let Some(reason) = self.fail_next.take() {
            return Err(SpeakitError::Speech(reason));
        }

        info!(
            "Recording utterance [{}] voice={:?}: {}",
            request.language,
            request.voice.as_ref().map(|v| v.name.as_str()),
            request.text
        );
        self.submitted.push(request.clone());
        self.spoken += 1;
        if let Some(limit) = self.history_limit {
            if self.submitted.len() > limit {
                let excess = self.submitted.len() - limit;
                self.submitted.drain(..excess);
            }
        }

        self.speaking = true;
        (self.notify)(LifecycleEvent::Started);
        if self.auto_finish {
            self.finish();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Arc;

    fn channel_notifier() -> (LifecycleNotifier, mpsc::Receiver<LifecycleEvent>) {
        let (tx, rx) = mpsc::channel();
        let notify: LifecycleNotifier = Arc::new(move |event| {
            let _ = tx.send(event);
        });
        (notify, rx)
    }

    #[test]
    fn test_auto_finish() {
        let (notify, rx) = channel_notifier();
        let mut engine = RecordingEngine::new(Vec::new(), notify);

        engine.speak(&UtteranceRequest::new("Hello", "en")).unwrap();

        assert!(!engine.is_speaking());
        assert_eq!(engine.submitted().len(), 1);
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(events, vec![LifecycleEvent::Started, LifecycleEvent::Finished]);
    }

    #[test]
    fn test_hold_playback() {
        let (notify, rx) = channel_notifier();
        let mut engine = RecordingEngine::new(Vec::new(), notify).hold_playback();

        engine.speak(&UtteranceRequest::new("Hello", "en")).unwrap();
        assert!(engine.is_speaking());
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![LifecycleEvent::Started]);

        engine.finish();
        assert!(!engine.is_speaking());
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![LifecycleEvent::Finished]);
    }

    #[test]
    fn test_history_limit() {
        let (notify, _rx) = channel_notifier();
        let mut engine = RecordingEngine::new(demo_voices(), notify).with_history_limit(1);

        engine.speak(&UtteranceRequest::new("One", "en")).unwrap();
        engine.speak(&UtteranceRequest::new("Two", "en")).unwrap();
        engine.speak(&UtteranceRequest::new("Three", "en")).unwrap();

        assert_eq!(engine.spoken(), 3);
        assert_eq!(engine.submitted().len(), 1);
        assert_eq!(engine.submitted()[0].text, "Three");
    }

    #[test]
    fn test_fail_next() {
        let (notify, rx) = channel_notifier();
        let mut engine = RecordingEngine::new(Vec::new(), notify);
        engine.fail_next("device busy");

        assert!(engine.speak(&UtteranceRequest::new("Hello", "en")).is_err());
        assert!(engine.submitted().is_empty());
        assert_eq!(rx.try_iter().count(), 0);

        // Only the next call fails
        assert!(engine.speak(&UtteranceRequest::new("Hello", "en")).is_ok());
    }
}
