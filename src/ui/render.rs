//! Console rendering of UI state

use super::{TriggerControl, UiState, VoiceSelect};
use crate::state::config::LanguageOption;
use std::io::{self, Write};

/// Print every control that differs between `before` and `after`
pub fn render_changes<W: Write>(
    out: &mut W,
    before: &UiState,
    after: &UiState,
) -> io::Result<()> {
    if before.language != after.language {
        writeln!(out, "Language: {}", after.language)?;
    }
    if before.voice_select != after.voice_select {
        render_voice_select(out, &after.voice_select)?;
    }
    if before.trigger != after.trigger {
        render_trigger(out, &after.trigger)?;
    }
    if before.error != after.error {
        if after.error.is_empty() {
            writeln!(out, "Error cleared")?;
        } else {
            render_error(out, &after.error)?;
        }
    }
    out.flush()
}

/// Print the voice dropdown, marking the selected entry
pub fn render_voice_select<W: Write>(out: &mut W, select: &VoiceSelect) -> io::Result<()> {
    let state = if select.enabled { "" } else { " (disabled)" };
    writeln!(out, "Voices{}:", state)?;
    for (position, option) in select.options.iter().enumerate() {
        let marker = if position == select.selected { '*' } else { ' ' };
        writeln!(out, " {} {:>2}  {}", marker, position, option.label)?;
    }
    Ok(())
}

pub fn render_trigger<W: Write>(out: &mut W, trigger: &TriggerControl) -> io::Result<()> {
    if trigger.enabled {
        writeln!(out, "[{}]", trigger.label)
    } else {
        writeln!(out, "[{}] (busy)", trigger.label)
    }
}

pub fn render_error<W: Write>(out: &mut W, error: &str) -> io::Result<()> {
    writeln!(out, "Error: {}", error)
}

/// Print the language option list, marking the current code
pub fn render_languages<W: Write>(
    out: &mut W,
    languages: &[LanguageOption],
    current: &str,
) -> io::Result<()> {
    writeln!(out, "Languages:")?;
    for language in languages {
        let marker = if language.code == current { '*' } else { ' ' };
        writeln!(out, " {} {:<6} {}", marker, language.code, language.name)?;
    }
    Ok(())
}
