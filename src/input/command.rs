//! Parsing of console input lines

use super::keymap::CommandAction;
use std::collections::HashMap;
use thiserror::Error;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the text area contents
    SetText(String),
    SetLanguage(String),
    /// Select the voice option at this position
    SelectVoice(usize),
    Play,
    ListVoices,
    ListLanguages,
    Refresh,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command ':{0}' (try :help)")]
    Unknown(String),

    #[error(":{0} needs an argument")]
    MissingArgument(String),

    #[error("'{0}' is not a voice number")]
    InvalidIndex(String),
}

/// Parse one line of input
///
/// Lines starting with ':' are commands; anything else is text. A leading
/// "\:" escapes the colon so text can start with one.
pub fn parse_line(
    line: &str,
    commands: &HashMap<&'static str, CommandAction>,
) -> std::result::Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(escaped) = line.strip_prefix("\\:") {
        return Ok(Command::SetText(format!(":{}", escaped)));
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::SetText(line.to_string()));
    };

    let mut parts = rest.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    let action = commands
        .get(name)
        .copied()
        .ok_or_else(|| CommandError::Unknown(name.to_string()))?;

    let command = match action {
        CommandAction::Language => {
            let code = arg.ok_or_else(|| CommandError::MissingArgument(name.to_string()))?;
            Command::SetLanguage(code.to_string())
        }
        CommandAction::Voice => {
            let index = arg.ok_or_else(|| CommandError::MissingArgument(name.to_string()))?;
            let index = index
                .parse()
                .map_err(|_| CommandError::InvalidIndex(index.to_string()))?;
            Command::SelectVoice(index)
        }
        CommandAction::Play => Command::Play,
        CommandAction::Voices => Command::ListVoices,
        CommandAction::Languages => Command::ListLanguages,
        CommandAction::Refresh => Command::Refresh,
        CommandAction::Help => Command::Help,
        CommandAction::Quit => Command::Quit,
    };

    Ok(command)
}
