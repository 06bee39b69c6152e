//! Plain numerals: malformed digit runs, shorthand, decimals and the
//! catch-all integer stages at the end of the cascade.

use super::{compile, group, rewrite, spell_groups, Engines, Rule};
use fancy_regex::Regex;
use kg_core::NormResult;

/// Splits dot/slash-joined digit runs that carry a group of three or more
/// digits ("192.168.1.1") into separate cardinals.
///
/// Runs shaped exactly like a numeric date are left for the date stage.
#[derive(Debug)]
pub struct MalformedRunRule {
    pattern: Regex,
}

impl MalformedRunRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"(?<![\d./])\d+(?:[./]\d+)+(?!\d)")?,
        })
    }
}

fn is_date_shaped(run: &str) -> bool {
    let separators: Vec<char> = run.chars().filter(|c| matches!(c, '.' | '/')).collect();
    let parts: Vec<&str> = run.split(['.', '/']).collect();

    parts.len() == 3
        && separators[0] == separators[1]
        && parts[0].len() <= 2
        && parts[1].len() <= 2
        && matches!(parts[2].len(), 2 | 4)
}

impl Rule for MalformedRunRule {
    fn name(&self) -> &str {
        "malformed_runs"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            let run = group(caps, 0);
            let has_long_group = run.split(['.', '/']).any(|part| part.len() >= 3);
            if !has_long_group || is_date_shaped(run) {
                return None;
            }
            spell_groups(&engines.numerals, run)
        })
    }
}

/// "5k" → "беш миң".
#[derive(Debug)]
pub struct ThousandsShorthandRule {
    pattern: Regex,
}

impl ThousandsShorthandRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b(\d+)k\b")?,
        })
    }
}

impl Rule for ThousandsShorthandRule {
    fn name(&self) -> &str {
        "thousands_shorthand"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            let count = engines.numerals.cardinal_str(group(caps, 1)).ok()?;
            Some(format!("{count} миң"))
        })
    }
}

/// Comma-decimal literals ("3,5").
#[derive(Debug)]
pub struct DecimalRule {
    pattern: Regex,
}

impl DecimalRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b(\d+,\d+)\b")?,
        })
    }
}

impl Rule for DecimalRule {
    fn name(&self) -> &str {
        "decimals"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            engines.numerals.decimal(group(caps, 1)).ok()
        })
    }
}

/// Space-grouped thousands ("1 000 000") read as one number.
#[derive(Debug)]
pub struct SpacedThousandsRule {
    pattern: Regex,
}

impl SpacedThousandsRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b\d{1,3}(?:\s\d{3})+\b")?,
        })
    }
}

impl Rule for SpacedThousandsRule {
    fn name(&self) -> &str {
        "spaced_thousands"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            let digits: String = group(caps, 0)
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            engines.numerals.cardinal_str(&digits).ok()
        })
    }
}

/// Standalone integers.
#[derive(Debug)]
pub struct IntegerRule {
    pattern: Regex,
}

impl IntegerRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b(\d+)\b")?,
        })
    }
}

impl Rule for IntegerRule {
    fn name(&self) -> &str {
        "integers"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            engines.numerals.cardinal_str(group(caps, 1)).ok()
        })
    }
}

/// Last resort for digits glued to letters or separators.
///
/// A number too large to spell is read digit by digit.
#[derive(Debug)]
pub struct LeftoverDigitsRule {
    letter_digit: Regex,
    joined: Regex,
    digits: Regex,
}

impl LeftoverDigitsRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            letter_digit: compile(r"([а-яөүңА-ЯӨҮҢa-zA-Z])(\d+)")?,
            joined: compile(r"\d+[./]\d+(?:[./]\d+)*")?,
            digits: compile(r"\d+")?,
        })
    }
}

impl Rule for LeftoverDigitsRule {
    fn name(&self) -> &str {
        "leftover_digits"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let text = rewrite(&self.letter_digit, input, |caps| {
            Some(format!("{} {}", group(caps, 1), group(caps, 2)))
        })?;

        let text = rewrite(&self.joined, &text, |caps| {
            spell_groups(&engines.numerals, group(caps, 0))
        })?;

        rewrite(&self.digits, &text, |caps| {
            let digits = group(caps, 0);
            engines.numerals.cardinal_str(digits).ok().or_else(|| {
                let spoken = engines.numerals.digits(digits);
                (!spoken.is_empty()).then_some(spoken)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    #[test]
    fn test_malformed_runs_split() {
        let rule = MalformedRunRule::new().unwrap();
        assert_eq!(
            run(&rule, "IP 192.168.1.1"),
            "IP жүз токсон эки жүз алтымыш сегиз бир бир"
        );
        assert_eq!(
            run(&rule, "2024/2025"),
            "эки миң жыйырма төрт эки миң жыйырма беш"
        );
    }

    #[test]
    fn test_malformed_runs_leave_dates_and_short_runs() {
        let rule = MalformedRunRule::new().unwrap();
        assert_eq!(run(&rule, "01.02.2024"), "01.02.2024");
        assert_eq!(run(&rule, "15/03/2024"), "15/03/2024");
        assert_eq!(run(&rule, "12.30"), "12.30");
        assert_eq!(run(&rule, "3.5"), "3.5");
    }

    #[test]
    fn test_thousands_shorthand() {
        let rule = ThousandsShorthandRule::new().unwrap();
        assert_eq!(run(&rule, "5k көрүү"), "беш миң көрүү");
        assert_eq!(run(&rule, "5kg"), "5kg");
    }

    #[test]
    fn test_decimals() {
        let rule = DecimalRule::new().unwrap();
        assert_eq!(run(&rule, "3,5 литр"), "үч бүтүн ондон беш литр");
    }

    #[test]
    fn test_spaced_thousands() {
        let rule = SpacedThousandsRule::new().unwrap();
        assert_eq!(run(&rule, "1 000 000 адам"), "бир миллион адам");
        assert_eq!(run(&rule, "12 345"), "он эки миң үч жүз кырк беш");
    }

    #[test]
    fn test_integers() {
        let rule = IntegerRule::new().unwrap();
        assert_eq!(run(&rule, "25 бала"), "жыйырма беш бала");
        // beyond the numeral bound, left for the last stage
        assert_eq!(run(&rule, "9999999999999999"), "9999999999999999");
    }

    #[test]
    fn test_leftover_digits() {
        let rule = LeftoverDigitsRule::new().unwrap();
        assert_eq!(run(&rule, "A4 формат"), "A төрт формат");
        assert_eq!(run(&rule, "v1.2"), "v бир эки");
        assert_eq!(
            run(&rule, "1234567890123456"),
            "бир эки үч төрт беш алты жети сегиз тогуз нөл бир эки үч төрт беш алты"
        );
    }
}
