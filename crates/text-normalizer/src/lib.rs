//! # text-normalizer
//!
//! Kyrgyz text normalization for speech synthesis.
//!
//! Written text is rewritten into a fully spelled-out word sequence by an
//! ordered cascade of rules, handling:
//! - Cardinal, ordinal and decimal numbers
//! - Dates, years, centuries and clock times
//! - Currency, units and percentages
//! - Abbreviations and acronyms (with case-suffix harmony)
//! - Phone numbers, e-mail addresses and symbols
//! - Roman numerals and simple arithmetic
//!
//! # Example
//!
//! ```
//! use text_normalizer::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! assert_eq!(normalizer.normalize("50%"), "элүү пайыз");
//! ```

pub mod lexicon;
pub mod morphology;
pub mod num2words;
pub mod roman;
pub mod rules;

use kg_core::{NormResult, NormText, NormalizerConfig, StageChange, TextNormalizer};
use once_cell::sync::Lazy;
use tracing::{debug, info, instrument, warn};

pub use lexicon::Lexicon;
pub use morphology::MorphologyEngine;
pub use num2words::{NumeralGenerator, MAX_NUMERAL};
pub use roman::roman_to_integer;
pub use rules::{Engines, Rule};

/// Process-wide instance behind [`normalize`], built on first use.
static DEFAULT: Lazy<Normalizer> = Lazy::new(Normalizer::new);

/// Normalize `input` with the shared built-in normalizer.
pub fn normalize(input: &str) -> String {
    DEFAULT.normalize(input)
}

/// Text normalizer running the rule cascade.
#[derive(Debug)]
pub struct Normalizer {
    engines: Engines,
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the built-in lexicon.
    pub fn new() -> Self {
        Self::with_config(&NormalizerConfig::default())
            .expect("built-in trigger patterns must compile")
    }

    /// Create a normalizer whose lexicon is extended by `config`.
    ///
    /// All tables are merged and all trigger patterns compiled here, once.
    pub fn with_config(config: &NormalizerConfig) -> NormResult<Self> {
        config.validate()?;
        let lexicon = Lexicon::with_config(config);
        let rules = rules::default_rules(&lexicon)?;

        info!(
            stages = rules.len(),
            abbreviations = lexicon.abbreviations().len(),
            acronyms = lexicon.acronyms().len(),
            units = lexicon.units().len(),
            currencies = lexicon.currencies().len(),
            symbols = lexicon.symbols().len(),
            "normalizer ready"
        );

        Ok(Self::with_rules(rules))
    }

    /// Create a normalizer with custom rules.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            engines: Engines::new(),
            rules,
        }
    }

    /// Rewrite `input` into spoken words. Never fails.
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn normalize(&self, input: &str) -> String {
        self.run(input, None)
    }

    /// Like [`Normalizer::normalize`], also recording every stage that changed the text.
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn normalize_traced(&self, input: &str) -> NormText {
        let mut changes = Vec::new();
        let text = self.run(input, Some(&mut changes));
        NormText::with_changes(text, changes)
    }

    fn run(&self, input: &str, mut trace: Option<&mut Vec<StageChange>>) -> String {
        let mut text = input.to_string();

        for rule in &self.rules {
            match rule.apply(&text, &self.engines) {
                Ok(output) if output != text => {
                    debug!(stage = rule.name(), "stage rewrote text");
                    if let Some(changes) = trace.as_deref_mut() {
                        changes.push(StageChange {
                            stage: rule.name().to_string(),
                            before: text.clone(),
                            after: output.clone(),
                        });
                    }
                    text = output;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(stage = rule.name(), error = %err, "stage failed, text left unchanged");
                }
            }
        }

        text
    }

    /// Stage names in cascade order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Spell an integer as a cardinal numeral.
    pub fn cardinal(&self, num: i64) -> NormResult<String> {
        self.engines.numerals.cardinal(num)
    }

    /// Spell an integer as an ordinal numeral.
    pub fn ordinal(&self, num: i64) -> NormResult<String> {
        self.engines.numerals.ordinal(num)
    }

    /// Spell a decimal literal ("3,5").
    pub fn decimal(&self, raw: &str) -> NormResult<String> {
        self.engines.numerals.decimal(raw)
    }

    /// Attach a case suffix to `stem` following vowel and consonant harmony.
    pub fn harmonize(&self, stem: &str, suffix: &str) -> String {
        self.engines.morphology.harmonize(stem, suffix)
    }
}

impl TextNormalizer for Normalizer {
    fn normalize(&self, input: &str) -> String {
        Normalizer::normalize(self, input)
    }
}
