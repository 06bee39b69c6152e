//! Normalization rules.
//!
//! Each cascade stage is one [`Rule`]. A rule owns its compiled trigger
//! patterns, and renders matches through the shared [`Engines`]. The
//! order returned by [`default_rules`] is load-bearing: earlier, more
//! specific shapes must be rewritten before later, more general rules
//! see the same digits.

mod abbreviations;
mod arithmetic;
mod centuries;
mod cleanup;
mod contact;
mod dates;
mod measures;
mod money;
mod numbers;
mod ordinals;
mod time;

use crate::lexicon::Lexicon;
use crate::morphology::MorphologyEngine;
use crate::num2words::NumeralGenerator;
use fancy_regex::{Captures, Regex};
use kg_core::{NormError, NormResult};

pub use abbreviations::{AbbreviationRule, AcronymRule};
pub use arithmetic::{ArithmeticRule, FractionRule};
pub use centuries::{CenturyRule, RomanRule};
pub use cleanup::{AddressRule, QuoteRule, SymbolRule, WhitespaceRule};
pub use contact::{EmailRule, PhoneRule};
pub use dates::{DateRule, YearRule};
pub use measures::{PercentRule, UnitRule};
pub use money::CurrencyRule;
pub use numbers::{
    DecimalRule, IntegerRule, LeftoverDigitsRule, MalformedRunRule, SpacedThousandsRule,
    ThousandsShorthandRule,
};
pub use ordinals::{CounterRule, OrdinalMarkerRule};
pub use time::{DotTimeRule, TimeRule};

/// A text normalization rule.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Apply the rule to the input text.
    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String>;
}

/// Generators shared by all rules.
#[derive(Debug, Clone, Default)]
pub struct Engines {
    pub numerals: NumeralGenerator,
    pub morphology: MorphologyEngine,
}

impl Engines {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Create the cascade in its fixed order.
pub fn default_rules(lexicon: &Lexicon) -> NormResult<Vec<Box<dyn Rule>>> {
    Ok(vec![
        Box::new(AbbreviationRule::new(lexicon)?),
        Box::new(EmailRule::new()?),
        Box::new(PhoneRule::new()?),
        Box::new(MalformedRunRule::new()?),
        Box::new(DateRule::new()?),
        Box::new(YearRule::new()?),
        Box::new(TimeRule::new()?),
        Box::new(ThousandsShorthandRule::new()?),
        Box::new(CurrencyRule::new(lexicon)?),
        Box::new(DotTimeRule::new()?),
        Box::new(OrdinalMarkerRule::new()?),
        Box::new(CounterRule::new(lexicon)?),
        Box::new(UnitRule::new(lexicon)?),
        Box::new(PercentRule::new()?),
        Box::new(CenturyRule::new()?),
        Box::new(ArithmeticRule::new()?),
        Box::new(AcronymRule::new(lexicon)?),
        Box::new(AddressRule::new()?),
        Box::new(FractionRule::new()?),
        Box::new(QuoteRule::new()?),
        Box::new(SymbolRule::new(lexicon)?),
        Box::new(RomanRule::new()?),
        Box::new(DecimalRule::new()?),
        Box::new(SpacedThousandsRule::new()?),
        Box::new(IntegerRule::new()?),
        Box::new(LeftoverDigitsRule::new()?),
        Box::new(WhitespaceRule),
    ])
}

/// Compile a trigger pattern.
pub(crate) fn compile(pattern: &str) -> NormResult<Regex> {
    Regex::new(pattern).map_err(|e| NormError::pattern(format!("{pattern}: {e}")))
}

/// Replace every match of `re` in `input` with the output of `render`.
///
/// A `None` from `render` puts the matched text back unchanged.
pub(crate) fn rewrite<F>(re: &Regex, input: &str, mut render: F) -> NormResult<String>
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in re.captures_iter(input) {
        let caps = caps.map_err(|e| NormError::pattern(e.to_string()))?;
        let Some(whole) = caps.get(0) else {
            continue;
        };

        out.push_str(&input[last..whole.start()]);
        match render(&caps) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(whole.as_str()),
        }
        last = whole.end();
    }

    out.push_str(&input[last..]);
    Ok(out)
}

/// Text of capture group `i`, empty when the group did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Regex alternation of literal tokens, in the given order.
pub(crate) fn alternation<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    tokens
        .into_iter()
        .map(fancy_regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

/// Split a digit run on `.`/`/` and spell every group as a cardinal.
pub(crate) fn spell_groups(numerals: &NumeralGenerator, run: &str) -> Option<String> {
    let words = run
        .split(['.', '/'])
        .filter(|part| !part.is_empty())
        .map(|part| numerals.cardinal_str(part).ok())
        .collect::<Option<Vec<_>>>()?;
    Some(words.join(" "))
}

/// Ordinal particles written after a numeral ("5-чи", "3үнчү").
pub(crate) const ORDINAL_PARTICLES: &str = "чи|чу|чү|нчи|нчу|нчү|ынчы|инчи|үнчү|унчу";

/// Case suffixes recognized directly after a clock time.
pub(crate) const CLOCK_SUFFIXES: &str = "га|ге|го|гө|ка|ке|ко|кө|да|де|до|дө|та|те|то|тө";

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Run a single rule against the built-in engines.
    pub fn run(rule: &dyn Rule, input: &str) -> String {
        rule.apply(input, &Engines::new()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_order() {
        let rules = default_rules(&Lexicon::new()).unwrap();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "abbreviations",
                "email",
                "phone",
                "malformed_runs",
                "dates",
                "years",
                "time",
                "thousands_shorthand",
                "currency",
                "dot_time",
                "ordinal_markers",
                "counters",
                "units",
                "percent",
                "centuries",
                "arithmetic",
                "acronyms",
                "addresses",
                "fractions",
                "quotes",
                "symbols",
                "roman_numerals",
                "decimals",
                "spaced_thousands",
                "integers",
                "leftover_digits",
                "whitespace",
            ]
        );
    }

    #[test]
    fn test_rewrite_reinserts_on_none() {
        let re = compile(r"\d+").unwrap();
        let out = rewrite(&re, "a 1 b 22 c", |caps| {
            let digits = group(caps, 0);
            (digits.len() == 1).then(|| "one".to_string())
        })
        .unwrap();
        assert_eq!(out, "a one b 22 c");
    }

    #[test]
    fn test_compile_error_is_pattern_error() {
        assert!(matches!(compile("(unclosed"), Err(NormError::Pattern(_))));
    }

    #[test]
    fn test_alternation_escapes() {
        assert_eq!(alternation(["$", "км/ч"]), r"\$|км/ч");
    }

    #[test]
    fn test_spell_groups() {
        let numerals = NumeralGenerator::new();
        assert_eq!(
            spell_groups(&numerals, "192.168.1.1").unwrap(),
            "жүз токсон эки жүз алтымыш сегиз бир бир"
        );
    }
}
