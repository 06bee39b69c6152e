//! Addresses, quotes, standalone symbols and whitespace.

use super::{compile, group, rewrite, Engines, Rule};
use crate::lexicon::Lexicon;
use fancy_regex::{escape, Regex};
use kg_core::NormResult;

/// Drops the city marker "г." and reads "N-кичи район" as an ordinal.
#[derive(Debug)]
pub struct AddressRule {
    city: Regex,
    district: Regex,
}

impl AddressRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            city: compile(r"\bг\.\s*")?,
            district: compile(r"(\d+)\s*-?\s*кичи\s*район")?,
        })
    }
}

impl Rule for AddressRule {
    fn name(&self) -> &str {
        "addresses"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let text = rewrite(&self.city, input, |_| Some(String::new()))?;
        rewrite(&self.district, &text, |caps| {
            let ordinal = engines.numerals.ordinal_str(group(caps, 1)).ok()?;
            Some(format!("{ordinal} кичи район"))
        })
    }
}

const QUOTE_MARKS: &[char] = &['«', '»', '„', '“', '”', '"', '‘', '’', '‚', '\''];

/// Joins apostrophe-split words and strips quotation marks.
#[derive(Debug)]
pub struct QuoteRule {
    apostrophe: Regex,
}

impl QuoteRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            apostrophe: compile(r"(\w+)'(\w+)")?,
        })
    }
}

impl Rule for QuoteRule {
    fn name(&self) -> &str {
        "quotes"
    }

    fn apply(&self, input: &str, _engines: &Engines) -> NormResult<String> {
        let text = rewrite(&self.apostrophe, input, |caps| {
            Some(format!("{}{}", group(caps, 1), group(caps, 2)))
        })?;
        Ok(text.replace(QUOTE_MARKS, ""))
    }
}

/// "№ N" and symbols standing alone between spaces or commas.
#[derive(Debug)]
pub struct SymbolRule {
    numero: Regex,
    numero_name: String,
    symbols: Vec<(Regex, String)>,
}

impl SymbolRule {
    pub fn new(lexicon: &Lexicon) -> NormResult<Self> {
        let symbols = lexicon
            .symbols()
            .iter()
            .map(|(symbol, name)| {
                let pattern = format!(r"(?<![^,\s]){}(?![^,\s])", escape(symbol));
                Ok((compile(&pattern)?, name.clone()))
            })
            .collect::<NormResult<_>>()?;

        Ok(Self {
            numero: compile(r"№\s*(\d+)")?,
            numero_name: lexicon.symbol("№").unwrap_or("номур").to_string(),
            symbols,
        })
    }
}

impl Rule for SymbolRule {
    fn name(&self) -> &str {
        "symbols"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let mut text = rewrite(&self.numero, input, |caps| {
            let number = engines.numerals.cardinal_str(group(caps, 1)).ok()?;
            Some(format!("{} {number}", self.numero_name))
        })?;

        for (re, name) in &self.symbols {
            text = rewrite(re, &text, |_| Some(name.clone()))?;
        }

        Ok(text)
    }
}

/// Normalize whitespace (collapse multiple spaces, trim).
#[derive(Debug)]
pub struct WhitespaceRule;

impl Rule for WhitespaceRule {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn apply(&self, input: &str, _engines: &Engines) -> NormResult<String> {
        Ok(input.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
