//! speakit - console text-to-speech
//!
//! Converts typed text into speech using the host platform's synthesizer.
//! The user picks a language and a voice, then plays the text back.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod input;
pub mod speech;
pub mod state;
pub mod ui;

pub use error::{Result, SpeakitError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "speakit";
