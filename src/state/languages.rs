//! Built-in language option list

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Default language selection options (code, display name)
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("mr", "Marathi"),
    ("bn", "Bengali"),
    ("gu", "Gujarati"),
    ("pa", "Punjabi"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
    ("ur", "Urdu"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
];

static LANGUAGE_NAMES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| DEFAULT_LANGUAGES.iter().copied().collect());

/// Display name for a code, or the code itself if unknown
pub fn language_name(code: &str) -> &str {
    LANGUAGE_NAMES.get(code).copied().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(language_name("mr"), "Marathi");
        assert_eq!(language_name("hi"), "Hindi");
    }

    #[test]
    fn test_unknown_code_passthrough() {
        assert_eq!(language_name("xx"), "xx");
    }
}
