//! Playback scenarios
//!
//! Drives the catalog and utterance controller together the way the
//! event loop does, with the recording backend standing in for audio.

use speakit::catalog::{FallbackTable, VoiceCatalog};
use speakit::controller::{Labels, Messages, TriggerOutcome, TriggerState, UtteranceController};
use speakit::speech::backends::recording::RecordingEngine;
use speakit::speech::{LifecycleEvent, LifecycleNotifier, Tuning, VoiceDescriptor};
use speakit::ui::UiState;
use std::sync::mpsc;
use std::sync::Arc;

struct Page {
    catalog: VoiceCatalog,
    controller: UtteranceController,
    engine: RecordingEngine,
    ui: UiState,
    events: mpsc::Receiver<LifecycleEvent>,
}

impl Page {
    fn open(voices: Vec<VoiceDescriptor>, language: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        let notify: LifecycleNotifier = Arc::new(move |event| {
            let _ = tx.send(event);
        });
        let engine = RecordingEngine::new(voices, notify).hold_playback();

        let mut catalog = VoiceCatalog::new(FallbackTable::builtin());
        catalog.refresh(&engine);

        let controller =
            UtteranceController::new(Labels::default(), Messages::default(), Tuning::default());
        let mut ui = UiState::new(language, &controller.labels().idle);
        ui.voice_select.render(catalog.populate(language));

        Self {
            catalog,
            controller,
            engine,
            ui,
            events: rx,
        }
    }

    fn choose_language(&mut self, language: &str) {
        self.ui.language = language.to_string();
        self.ui.voice_select.render(self.catalog.populate(language));
    }

    fn play(&mut self, text: &str) -> TriggerOutcome {
        self.ui.text = text.to_string();
        let outcome = self
            .controller
            .trigger(&mut self.ui, &self.catalog, &mut self.engine);
        self.pump();
        outcome
    }

    fn pump(&mut self) {
        let pending: Vec<_> = self.events.try_iter().collect();
        for event in pending {
            self.controller.on_event(&event, &mut self.ui);
        }
    }
}

fn registry() -> Vec<VoiceDescriptor> {
    vec![
        VoiceDescriptor::new("com.apple.samantha", "Samantha", "en-US"),
        VoiceDescriptor::new("com.apple.daniel", "Daniel", "en-GB"),
        VoiceDescriptor::new("com.apple.lekha", "Lekha", "hi-IN"),
        VoiceDescriptor::new("com.apple.amelie", "Amélie", "fr-CA"),
    ]
}

#[test]
fn test_hello_is_trimmed_and_spoken() {
    let mut page = Page::open(registry(), "en");

    assert_eq!(page.play("  Hello  "), TriggerOutcome::Submitted);
    assert_eq!(page.engine.submitted().len(), 1);
    assert_eq!(page.engine.submitted()[0].text, "Hello");
    assert_eq!(page.controller.state(), TriggerState::Speaking);
    assert!(!page.ui.trigger.enabled);
}

#[test]
fn test_whitespace_only_is_rejected() {
    let mut page = Page::open(registry(), "en");

    assert_eq!(page.play("   "), TriggerOutcome::EmptyText);
    assert!(page.engine.submitted().is_empty());
    assert!(!page.ui.error.is_empty());
    assert!(page.ui.trigger.enabled);
}

#[test]
fn test_marathi_uses_hindi_placeholder() {
    let page = Page::open(
        vec![
            VoiceDescriptor::new("a", "Lekha", "hi-IN"),
            VoiceDescriptor::new("b", "Kiyara", "hi-IN"),
        ],
        "mr",
    );

    assert_eq!(page.ui.voice_select.options.len(), 1);
    assert_eq!(
        page.ui.voice_select.options[0].label,
        "Hindi Voice (Marathi not supported)"
    );
    assert!(page.ui.voice_select.enabled);
}

#[test]
fn test_unsupported_language_disables_voices() {
    let mut page = Page::open(registry(), "en");
    page.choose_language("xx");

    assert_eq!(page.ui.voice_select.options.len(), 1);
    assert_eq!(page.ui.voice_select.options[0].label, "No voice available");
    assert!(!page.ui.voice_select.enabled);

    // Playback is still allowed; the engine picks its default
    assert_eq!(page.play("Hello"), TriggerOutcome::Submitted);
    assert!(page.engine.submitted()[0].voice.is_none());
    assert_eq!(page.engine.submitted()[0].language, "xx");
}

#[test]
fn test_one_option_per_matching_voice() {
    let page = Page::open(registry(), "en");
    let labels: Vec<_> = page
        .ui
        .voice_select
        .options
        .iter()
        .map(|o| o.label.as_str())
        .collect();

    assert_eq!(labels, vec!["Samantha", "Daniel"]);
    assert!(page.ui.voice_select.enabled);
}

#[test]
fn test_trigger_while_speaking_changes_nothing() {
    let mut page = Page::open(registry(), "en");
    page.play("First");
    page.ui.error = "left over".to_string();
    let trigger_before = page.ui.trigger.clone();

    assert_eq!(page.play("Second"), TriggerOutcome::Busy);
    assert_eq!(page.engine.submitted().len(), 1);
    assert_eq!(page.ui.error, "left over");
    assert_eq!(page.ui.trigger, trigger_before);
}

#[test]
fn test_language_switch_keeps_indices_aligned() {
    let mut page = Page::open(registry(), "en");
    assert!(page.ui.voice_select.select(1));

    page.choose_language("fr");
    assert_eq!(page.ui.voice_select.selected, 0);

    page.play("Bonjour");
    let voice = page.engine.submitted()[0].voice.clone().unwrap();
    assert_eq!(voice.name, "Amélie");
}

#[test]
fn test_full_cycle_then_replay() {
    let mut page = Page::open(registry(), "en");
    assert!(page.ui.voice_select.select(1));

    page.play("Hello");
    page.engine.finish();
    page.pump();
    assert_eq!(page.controller.state(), TriggerState::Idle);
    assert_eq!(page.ui.trigger.label, "Play Converted Sound");

    assert_eq!(page.play("Again"), TriggerOutcome::Submitted);
    let submitted = page.engine.submitted();
    assert_eq!(submitted.len(), 2);
    assert_eq!(submitted[1].voice.as_ref().unwrap().id, "com.apple.daniel");
}

#[test]
fn test_synthesis_error_recovers() {
    let mut page = Page::open(registry(), "en");
    page.play("Hello");

    page.controller.on_event(
        &LifecycleEvent::Failed("synthesis-failed".to_string()),
        &mut page.ui,
    );
    assert_eq!(page.ui.error, "Speech synthesis failed. Try again.");
    assert!(page.ui.trigger.enabled);

    // Next successful trigger clears the message
    page.engine.set_speaking(false);
    assert_eq!(page.play("Retry by hand"), TriggerOutcome::Submitted);
    assert!(page.ui.error.is_empty());
}
