//! Application state management
//!
//! The State struct owns the voice catalog, the utterance controller, the
//! speech engine and the UI controls. The event loop feeds it one
//! [`AppEvent`] at a time and each handler runs to completion.

pub mod config;
pub mod languages;

use crate::catalog::VoiceCatalog;
use crate::controller::UtteranceController;
use crate::input::{
    create_default_commands, keymap::HELP, parse_line, Command, CommandAction,
};
use crate::speech::{LifecycleEvent, SpeechEngine};
use crate::ui::{render, UiState};
use crate::Result;
use config::{Config, LanguageOption};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::io::Write;

/// Everything the event loop can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A line typed by the user
    Line(String),
    /// The platform voice registry is (newly) available
    VoicesChanged,
    /// Progress of the current utterance
    Lifecycle(LifecycleEvent),
    /// stdin reached end of file
    InputClosed,
}

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main application state
pub struct State {
    /// Language option list shown by :languages
    pub languages: Vec<LanguageOption>,

    /// Cached voice registry
    pub catalog: VoiceCatalog,

    /// Play button / error display logic
    pub controller: UtteranceController,

    /// Control state
    pub ui: UiState,

    /// Speech engine
    engine: Box<dyn SpeechEngine>,

    /// Console command table
    commands: HashMap<&'static str, CommandAction>,
}

impl State {
    /// Build the application state from configuration
    ///
    /// The voice list stays empty until the first `VoicesChanged` event.
    pub fn new(config: &Config, engine: Box<dyn SpeechEngine>) -> Self {
        let catalog =
            VoiceCatalog::new(config.fallbacks()).with_no_voice_label(&config.no_voice_label());
        let controller =
            UtteranceController::new(config.labels(), config.messages(), config.tuning());
        let ui = UiState::new(&config.language(), &controller.labels().idle);

        info!("State initialized with language '{}'", ui.language);

        Self {
            languages: config.languages(),
            catalog,
            controller,
            ui,
            engine,
            commands: create_default_commands(),
        }
    }

    /// Handle one event and print whatever it changed
    pub fn handle<W: Write>(&mut self, event: AppEvent, out: &mut W) -> Result<Flow> {
        let before = self.ui.clone();
        let flow = self.dispatch(event, out)?;
        render::render_changes(out, &before, &self.ui)?;
        Ok(flow)
    }

    fn dispatch<W: Write>(&mut self, event: AppEvent, out: &mut W) -> Result<Flow> {
        match event {
            AppEvent::VoicesChanged => {
                self.catalog.refresh(&*self.engine);
                self.populate();
            }
            AppEvent::Lifecycle(event) => {
                debug!("Lifecycle event: {:?}", event);
                self.controller.on_event(&event, &mut self.ui);
            }
            AppEvent::InputClosed => {
                info!("Input closed");
                return Ok(Flow::Quit);
            }
            AppEvent::Line(line) => match parse_line(&line, &self.commands) {
                Ok(command) => return self.run_command(command, out),
                Err(e) => writeln!(out, "{}", e)?,
            },
        }

        Ok(Flow::Continue)
    }

    fn run_command<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::SetText(text) => self.ui.text = text,
            Command::SetLanguage(code) => self.change_language(&code),
            Command::SelectVoice(position) => {
                if !self.ui.voice_select.select(position) {
                    writeln!(out, "No selectable voice at {}", position)?;
                }
            }
            Command::Play => {
                let outcome = self
                    .controller
                    .trigger(&mut self.ui, &self.catalog, &mut *self.engine);
                debug!("Trigger outcome: {:?}", outcome);
            }
            Command::ListVoices => render::render_voice_select(out, &self.ui.voice_select)?,
            Command::ListLanguages => {
                render::render_languages(out, &self.languages, &self.ui.language)?
            }
            Command::Refresh => {
                self.catalog.refresh(&*self.engine);
                self.populate();
            }
            Command::Help => {
                for (usage, description) in HELP {
                    writeln!(out, "  {:<14} {}", usage, description)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Switch language and rebuild the voice list from the cached registry
    pub fn change_language(&mut self, code: &str) {
        if !self.languages.iter().any(|l| l.code == code) {
            warn!("Language '{}' is not in the option list", code);
        }
        self.ui.language = code.to_string();
        self.populate();
    }

    /// Re-render the voice selection for the current language
    fn populate(&mut self) {
        let rendered = self.catalog.populate(&self.ui.language);
        self.ui.voice_select.render(rendered);
    }
}
