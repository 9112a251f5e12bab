//! Configuration management

use super::languages::DEFAULT_LANGUAGES;
use crate::catalog::FallbackTable;
use crate::controller::{Labels, Messages};
use crate::speech::Tuning;
use crate::{Result, SpeakitError};
use ini::Ini;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// An entry in the language selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
}

/// Application configuration
///
/// Holds the initial language, tuning, UI text, the language option
/// list and the voice fallback table. Selections made while running
/// are never written back.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.speakit.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from ~/.speakit.cfg, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(path).map_err(|e| {
                SpeakitError::IniParse(format!("Failed to load config: {}", e))
            })?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(path)
                .map_err(|e| SpeakitError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self {
            ini,
            path: path.to_path_buf(),
        })
    }

    /// Get config file path (~/.speakit.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".speakit.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();
        let labels = Labels::default();
        let messages = Messages::default();

        ini.with_section(Some("speech"))
            .set("language", "en")
            .set("rate", "1.0")
            .set("pitch", "1.0")
            .set("volume", "1.0");

        ini.with_section(Some("labels"))
            .set("idle", labels.idle)
            .set("speaking", labels.speaking);

        ini.with_section(Some("messages"))
            .set("empty_text", messages.empty_text)
            .set("synthesis_failed", messages.synthesis_failed)
            .set("no_voice", crate::catalog::NO_VOICE_LABEL);

        for (code, name) in DEFAULT_LANGUAGES {
            ini.with_section(Some("languages")).set(*code, *name);
        }

        let fallbacks = FallbackTable::builtin();
        if let Some(rule) = fallbacks.get("mr") {
            ini.with_section(Some("fallbacks")).set("mr", rule.substitute.as_str());
            ini.with_section(Some("fallback_labels")).set("mr", rule.label.as_str());
        }

        ini
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get a float value from config
    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Initial language code
    pub fn language(&self) -> String {
        self.get_string("speech", "language", "en")
    }

    /// Rate/pitch/volume multipliers; negative values fall back to 1.0
    pub fn tuning(&self) -> Tuning {
        let read = |key: &str| {
            let value = self.get_float("speech", key, 1.0);
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                warn!("Ignoring invalid {} value {}", key, value);
                1.0
            }
        };

        Tuning {
            rate: read("rate"),
            pitch: read("pitch"),
            volume: read("volume"),
        }
    }

    /// Play button labels
    pub fn labels(&self) -> Labels {
        let defaults = Labels::default();
        Labels {
            idle: self.get_string("labels", "idle", &defaults.idle),
            speaking: self.get_string("labels", "speaking", &defaults.speaking),
        }
    }

    /// Error messages
    pub fn messages(&self) -> Messages {
        let defaults = Messages::default();
        Messages {
            empty_text: self.get_string("messages", "empty_text", &defaults.empty_text),
            synthesis_failed: self.get_string(
                "messages",
                "synthesis_failed",
                &defaults.synthesis_failed,
            ),
        }
    }

    /// Placeholder label when no voice matches
    pub fn no_voice_label(&self) -> String {
        self.get_string("messages", "no_voice", crate::catalog::NO_VOICE_LABEL)
    }

    /// Language option list, in file order
    pub fn languages(&self) -> Vec<LanguageOption> {
        match self.ini.section(Some("languages")) {
            Some(section) => section
                .iter()
                .map(|(code, name)| LanguageOption {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            None => DEFAULT_LANGUAGES
                .iter()
                .map(|(code, name)| LanguageOption {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Fallback table from [fallbacks] and [fallback_labels]
    ///
    /// Without a [fallbacks] section the built-in table applies. A present
    /// section replaces it entirely. A missing label is generated from the
    /// language names.
    pub fn fallbacks(&self) -> FallbackTable {
        let Some(section) = self.ini.section(Some("fallbacks")) else {
            debug!("No [fallbacks] section, using built-in rules");
            return FallbackTable::builtin();
        };

        let mut table = FallbackTable::new();
        for (language, substitute) in section.iter() {
            let label = self
                .ini
                .get_from(Some("fallback_labels"), language)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    format!(
                        "{} Voice ({} not supported)",
                        super::languages::language_name(substitute),
                        super::languages::language_name(language)
                    )
                });
            table.insert(language, substitute, &label);
        }

        debug!("Loaded {} fallback rules", table.len());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speakit.cfg");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.language(), "en");
        assert_eq!(config.tuning(), Tuning::default());
        assert_eq!(config.labels(), Labels::default());
        assert_eq!(config.messages(), Messages::default());
        assert_eq!(config.fallbacks(), FallbackTable::builtin());
    }

    #[test]
    fn test_generated_fallback_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speakit.cfg");
        fs::write(&path, "[fallbacks]\npa = hi\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        let table = config.fallbacks();
        assert_eq!(
            table.get("pa").unwrap().label,
            "Hindi Voice (Punjabi not supported)"
        );
        assert!(table.get("mr").is_none());
    }

    #[test]
    fn test_invalid_tuning_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speakit.cfg");
        fs::write(&path, "[speech]\nrate = -2\npitch = fast\nvolume = 0.5\n").unwrap();

        let tuning = Config::load_from(&path).unwrap().tuning();
        assert_eq!(tuning.rate, 1.0);
        assert_eq!(tuning.pitch, 1.0);
        assert_eq!(tuning.volume, 0.5);
    }

    #[test]
    fn test_languages_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speakit.cfg");
        fs::write(&path, "[languages]\nfr = French\nen = English\n").unwrap();

        let codes: Vec<_> = Config::load_from(&path)
            .unwrap()
            .languages()
            .into_iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(codes, vec!["fr", "en"]);
    }
}
