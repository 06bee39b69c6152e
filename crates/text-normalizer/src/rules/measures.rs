//! Units of measure and percentages.

use super::{compile, group, rewrite, Engines, Rule};
use crate::lexicon::Lexicon;
use fancy_regex::{escape, Regex};
use kg_core::NormResult;

/// Amount followed by a unit token, scanned longest token first.
#[derive(Debug)]
pub struct UnitRule {
    units: Vec<(Regex, String)>,
}

impl UnitRule {
    pub fn new(lexicon: &Lexicon) -> NormResult<Self> {
        let units = lexicon
            .units()
            .iter()
            .map(|(unit, name)| {
                // unit tokens may end in a non-word char (m²)
                let pattern = format!(r"(\d+(?:[,.]\d+)?)\s*{}(?!\w)", escape(unit));
                Ok((compile(&pattern)?, name.clone()))
            })
            .collect::<NormResult<_>>()?;

        Ok(Self { units })
    }
}

impl Rule for UnitRule {
    fn name(&self) -> &str {
        "units"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let mut text = input.to_string();
        for (re, name) in &self.units {
            text = rewrite(re, &text, |caps| {
                Some(format!("{} {name}", engines.numerals.decimal(group(caps, 1)).ok()?))
            })?;
        }
        Ok(text)
    }
}

/// Percent ranges, then single percentages.
#[derive(Debug)]
pub struct PercentRule {
    range: Regex,
    single: Regex,
}

impl PercentRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            range: compile(r"(\d+(?:[,.]\d+)?)\s*[-–—]\s*(\d+(?:[,.]\d+)?)\s*%")?,
            single: compile(r"(\d+(?:[,.]\d+)?)\s*%")?,
        })
    }
}

impl Rule for PercentRule {
    fn name(&self) -> &str {
        "percent"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;

        let text = rewrite(&self.range, input, |caps| {
            Some(format!(
                "{} {} пайыз",
                n.decimal(group(caps, 1)).ok()?,
                n.decimal(group(caps, 2)).ok()?
            ))
        })?;

        rewrite(&self.single, &text, |caps| {
            Some(format!("{} пайыз", n.decimal(group(caps, 1)).ok()?))
        })
    }
}
