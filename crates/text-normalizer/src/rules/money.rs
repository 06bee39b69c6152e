//! Monetary amounts.

use super::{alternation, compile, group, rewrite, Engines, Rule};
use crate::lexicon::{lookup, Lexicon, Table, NATIONAL_CURRENCY};
use fancy_regex::{escape, Regex};
use kg_core::NormResult;

/// Amount literal with an optional `,`/`.` fraction.
const AMOUNT: &str = r"(\d+(?:[,.]\d+)?)";

#[derive(Debug)]
struct SymbolPatterns {
    prefix: Regex,
    suffix: Regex,
    name: String,
}

/// Sums in сом (with тыйын), magnitude words and currency symbols.
#[derive(Debug)]
pub struct CurrencyRule {
    magnitude: Regex,
    large_numbers: Table,
    minor_units: Regex,
    grouped: Regex,
    plain: Regex,
    symbols: Vec<SymbolPatterns>,
}

impl CurrencyRule {
    pub fn new(lexicon: &Lexicon) -> NormResult<Self> {
        let magnitudes = alternation(lexicon.large_numbers().iter().map(|(k, _)| k.as_str()));
        let words = alternation(lexicon.currency_words());
        let som = escape(NATIONAL_CURRENCY);

        let symbols = lexicon
            .currencies()
            .iter()
            .map(|(symbol, name)| {
                let symbol = escape(symbol);
                Ok(SymbolPatterns {
                    prefix: compile(&format!("{symbol}{AMOUNT}"))?,
                    suffix: compile(&format!(r"{AMOUNT}\s*{symbol}"))?,
                    name: name.clone(),
                })
            })
            .collect::<NormResult<_>>()?;

        Ok(Self {
            magnitude: compile(&format!(r"{AMOUNT}\s*({magnitudes})\s*({words})"))?,
            large_numbers: lexicon.large_numbers().to_vec(),
            minor_units: compile(&format!(
                r"(?<!\d)(\d{{1,3}}(?:\s\d{{3}})*|\d+)[,.](\d{{2}})\s*{som}"
            ))?,
            grouped: compile(&format!(r"(?<!\d)(\d{{1,3}}(?:\s\d{{3}})+)\s*{som}\b"))?,
            plain: compile(&format!(r"(\d+)\s*{som}\b"))?,
            symbols,
        })
    }

    fn large_number<'a>(&'a self, token: &'a str) -> &'a str {
        lookup(&self.large_numbers, token).unwrap_or(token)
    }
}

fn strip_spaces(digits: &str) -> String {
    digits.chars().filter(|c| !c.is_whitespace()).collect()
}

impl Rule for CurrencyRule {
    fn name(&self) -> &str {
        "currency"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;

        let mut text = rewrite(&self.magnitude, input, |caps| {
            Some(format!(
                "{} {} {}",
                n.decimal(group(caps, 1)).ok()?,
                self.large_number(group(caps, 2)),
                group(caps, 3)
            ))
        })?;

        text = rewrite(&self.minor_units, &text, |caps| {
            Some(format!(
                "{} {NATIONAL_CURRENCY} {} тыйын",
                n.cardinal_str(&strip_spaces(group(caps, 1))).ok()?,
                n.cardinal_str(group(caps, 2)).ok()?
            ))
        })?;

        text = rewrite(&self.grouped, &text, |caps| {
            let sum = n.cardinal_str(&strip_spaces(group(caps, 1))).ok()?;
            Some(format!("{sum} {NATIONAL_CURRENCY}"))
        })?;

        text = rewrite(&self.plain, &text, |caps| {
            let sum = n.cardinal_str(group(caps, 1)).ok()?;
            Some(format!("{sum} {NATIONAL_CURRENCY}"))
        })?;

        for symbol in &self.symbols {
            let render = |caps: &fancy_regex::Captures<'_>| {
                Some(format!("{} {}", n.decimal(group(caps, 1)).ok()?, symbol.name))
            };
            text = rewrite(&symbol.prefix, &text, render)?;
            text = rewrite(&symbol.suffix, &text, render)?;
        }

        Ok(text)
    }
}
