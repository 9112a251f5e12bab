//! Substitute languages for languages with no installed voices

use std::collections::HashMap;

/// One substitution: which code to try instead, and how to label it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRule {
    pub substitute: String,
    pub label: String,
}

/// Language code -> substitution
///
/// Only one hop is ever taken; a substitute's own entry is not followed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackTable {
    rules: HashMap<String, FallbackRule>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `language`
    pub fn insert(&mut self, language: &str, substitute: &str, label: &str) {
        self.rules.insert(
            language.to_string(),
            FallbackRule {
                substitute: substitute.to_string(),
                label: label.to_string(),
            },
        );
    }

    pub fn get(&self, language: &str) -> Option<&FallbackRule> {
        self.rules.get(language)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Built-in table: Marathi falls back to Hindi
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert("mr", "hi", "Hindi Voice (Marathi not supported)");
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_marathi() {
        let table = FallbackTable::builtin();
        let rule = table.get("mr").unwrap();
        assert_eq!(rule.substitute, "hi");
        assert_eq!(rule.label, "Hindi Voice (Marathi not supported)");
        assert!(table.get("hi").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = FallbackTable::builtin();
        table.insert("mr", "hi-IN", "Hindi");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("mr").unwrap().substitute, "hi-IN");
    }
}
