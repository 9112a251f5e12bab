//! Default console command bindings

use std::collections::HashMap;

/// Action identifier for console commands
///
/// Each variant is something the user can ask for with a `:` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    // Controls
    Language,
    Voice,
    Play,

    // Listings
    Voices,
    Languages,
    Help,

    // Registry
    Refresh,

    Quit,
}

/// Create the default command table
pub fn create_default_commands() -> HashMap<&'static str, CommandAction> {
    let mut map = HashMap::new();

    map.insert("lang", CommandAction::Language);
    map.insert("l", CommandAction::Language);
    map.insert("voice", CommandAction::Voice);
    map.insert("v", CommandAction::Voice);
    map.insert("play", CommandAction::Play);
    map.insert("p", CommandAction::Play);

    map.insert("voices", CommandAction::Voices);
    map.insert("languages", CommandAction::Languages);
    map.insert("help", CommandAction::Help);
    map.insert("h", CommandAction::Help);

    map.insert("refresh", CommandAction::Refresh);

    map.insert("quit", CommandAction::Quit);
    map.insert("q", CommandAction::Quit);

    map
}

/// One-line usage text per command, in display order
pub const HELP: &[(&str, &str)] = &[
    ("<text>", "set the text to convert"),
    (":lang <code>", "choose a language (:l)"),
    (":voice <n>", "choose a voice from the list (:v)"),
    (":play", "speak the text (:p)"),
    (":voices", "show the voice list"),
    (":languages", "show the language list"),
    (":refresh", "reload the system voices"),
    (":help", "show this help (:h)"),
    (":quit", "exit (:q)"),
];
