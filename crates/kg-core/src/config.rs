//! Configuration structures for the normalizer.

use crate::error::{NormError, NormResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Lexicon overrides.
///
/// Every table maps a written token to its spoken expansion and is merged
/// over the built-in table of the same name: an existing key gets the new
/// expansion, an unknown key is added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Period-delimited abbreviations ("ж.б." → "жана башка").
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,

    /// Kyrgyz uppercase acronyms, expanded with case-suffix harmony.
    #[serde(default)]
    pub acronyms: BTreeMap<String, String>,

    /// Measurement units ("км" → "километр").
    #[serde(default)]
    pub units: BTreeMap<String, String>,

    /// Currency symbols ("$" → "доллар").
    #[serde(default)]
    pub currencies: BTreeMap<String, String>,

    /// Standalone symbols ("%" → "пайыз").
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
}

impl NormalizerConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> NormResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> NormResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check that no table contains an empty token.
    pub fn validate(&self) -> NormResult<()> {
        let tables = [
            ("abbreviations", &self.abbreviations),
            ("acronyms", &self.acronyms),
            ("units", &self.units),
            ("currencies", &self.currencies),
            ("symbols", &self.symbols),
        ];

        for (name, table) in tables {
            if table.keys().any(|k| k.trim().is_empty()) {
                return Err(NormError::config(format!("empty token in `{name}` table")));
            }
        }

        Ok(())
    }

    /// Check whether any override is present.
    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
            && self.acronyms.is_empty()
            && self.units.is_empty()
            && self.currencies.is_empty()
            && self.symbols.is_empty()
    }
}
