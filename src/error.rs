//! Error types for speakit

use std::io;
use thiserror::Error;

/// Main error type for speakit
#[derive(Error, Debug)]
pub enum SpeakitError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for speakit operations
pub type Result<T> = std::result::Result<T, SpeakitError>;

impl From<String> for SpeakitError {
    fn from(s: String) -> Self {
        SpeakitError::Other(s)
    }
}

impl From<&str> for SpeakitError {
    fn from(s: &str) -> Self {
        SpeakitError::Other(s.to_string())
    }
}

impl From<tts::Error> for SpeakitError {
    fn from(e: tts::Error) -> Self {
        SpeakitError::Speech(e.to_string())
    }
}
