//! Centuries and roman numerals.

use super::{compile, group, rewrite, Engines, Rule};
use crate::roman::roman_to_integer;
use fancy_regex::Regex;
use kg_core::NormResult;

/// Ordinal of a roman numeral, `None` when it decodes to zero.
fn roman_ordinal(engines: &Engines, roman: &str) -> Option<String> {
    match roman_to_integer(roman) {
        0 => None,
        value => engines.numerals.ordinal(value).ok(),
    }
}

fn plural_tag(tag: &str) -> &'static str {
    if tag == "кылымдары" {
        "кылымдары"
    } else {
        "кылымдар"
    }
}

/// Century ranges and singles tagged with a century word.
#[derive(Debug)]
pub struct CenturyRule {
    roman_range: Regex,
    numeric_range: Regex,
    roman_single: Regex,
}

impl CenturyRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            roman_range: compile(
                r"\b([IVXLCDM]{1,15})\s*[-–—]\s*([IVXLCDM]{1,15})\s*[-.]?\s*(кылымдары|кылымдар|кк)\.?",
            )?,
            numeric_range: compile(r"(\d+)\s*[-–—]\s*(\d+)\s*[-.]?\s*(кылымдары|кылымдар|кк)\.?")?,
            roman_single: compile(r"\b([IVXLCDM]{1,15})\s*-?\s*(?=кылым)")?,
        })
    }
}

impl Rule for CenturyRule {
    fn name(&self) -> &str {
        "centuries"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;

        let text = rewrite(&self.roman_range, input, |caps| {
            Some(format!(
                "{} {} {}",
                roman_ordinal(engines, group(caps, 1))?,
                roman_ordinal(engines, group(caps, 2))?,
                plural_tag(group(caps, 3))
            ))
        })?;

        let text = rewrite(&self.numeric_range, &text, |caps| {
            Some(format!(
                "{} {} {}",
                n.ordinal_str(group(caps, 1)).ok()?,
                n.ordinal_str(group(caps, 2)).ok()?,
                plural_tag(group(caps, 3))
            ))
        })?;

        rewrite(&self.roman_single, &text, |caps| {
            Some(format!("{} ", roman_ordinal(engines, group(caps, 1))?))
        })
    }
}

/// Roman numerals left over after the contextual rules.
///
/// Any standalone token made only of I, V, X, L, C, D, M is read as an
/// ordinal, so a Latin word spelled with those letters alone is converted too.
#[derive(Debug)]
pub struct RomanRule {
    century: Regex,
    standalone: Regex,
}

impl RomanRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            century: compile(r"\b([IVXLCDM]{1,15})\s*к\.")?,
            standalone: compile(r"(?<![a-zA-Z])\b([IVXLCDM]{1,15})\b(?!\.|\s*[a-zA-Z])")?,
        })
    }
}

impl Rule for RomanRule {
    fn name(&self) -> &str {
        "roman_numerals"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let text = rewrite(&self.century, input, |caps| {
            Some(format!("{} кылым", roman_ordinal(engines, group(caps, 1))?))
        })?;

        rewrite(&self.standalone, &text, |caps| {
            roman_ordinal(engines, group(caps, 1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    fn centuries() -> CenturyRule {
        CenturyRule::new().unwrap()
    }

    #[test]
    fn test_roman_century_range() {
        assert_eq!(
            run(&centuries(), "XIX-XX кылымдар"),
            "он тогузунчу жыйырманчы кылымдар"
        );
        assert_eq!(
            run(&centuries(), "XVIII–XIX кылымдары"),
            "он сегизинчи он тогузунчу кылымдары"
        );
    }

    #[test]
    fn test_numeric_century_range() {
        assert_eq!(
            run(&centuries(), "19-20 кк."),
            "он тогузунчу жыйырманчы кылымдар"
        );
    }

    #[test]
    fn test_single_century_keeps_suffix() {
        assert_eq!(run(&centuries(), "XX кылымда"), "жыйырманчы кылымда");
        assert_eq!(run(&centuries(), "IV кылым"), "төртүнчү кылым");
    }

    #[test]
    fn test_roman_century_abbreviation() {
        let rule = RomanRule::new().unwrap();
        assert_eq!(run(&rule, "IVк."), "төртүнчү кылым");
    }

    #[test]
    fn test_standalone_roman() {
        let rule = RomanRule::new().unwrap();
        assert_eq!(run(&rule, "Петр I падыша"), "Петр биринчи падыша");
        assert_eq!(run(&rule, "I am"), "I am");
        assert_eq!(run(&rule, "XIV."), "XIV.");
    }
}
