//! Arithmetic expressions and fractions.

use super::{compile, group, rewrite, Engines, Rule};
use fancy_regex::Regex;
use kg_core::NormResult;

const MULTIPLY: &str = "[×xXхХ*]";

/// Equations first, then dash ranges, then bare binary operations.
#[derive(Debug)]
pub struct ArithmeticRule {
    equations: Vec<(Regex, &'static str)>,
    operations: Vec<(Regex, &'static str)>,
}

impl ArithmeticRule {
    pub fn new() -> NormResult<Self> {
        let equation = |op: &str| compile(&format!(r"(\d+)\s*{op}\s*(\d+)\s*=\s*(\d+)"));

        Ok(Self {
            equations: vec![
                (equation(MULTIPLY)?, "көбөйтүү"),
                (equation(r"\+")?, "кошуу"),
                (equation("[-−–—]")?, "кемитүү"),
                (equation("/")?, "бөлүү"),
            ],
            operations: vec![
                (compile(r"\b(\d+)\s*[-–—]\s*(\d+)\b")?, "кемитүү"),
                (compile(r"(\d+)\s*\+\s*(\d+)")?, "кошуу"),
                (compile(&format!(r"(\d+)\s*{MULTIPLY}\s*(\d+)"))?, "көбөйтүү"),
                // tight "N/M" is a fraction
                (compile(r"(\d+)\s+/\s+(\d+)")?, "бөлүү"),
            ],
        })
    }
}

impl Rule for ArithmeticRule {
    fn name(&self) -> &str {
        "arithmetic"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;
        let mut text = input.to_string();

        for (re, operator) in &self.equations {
            text = rewrite(re, &text, |caps| {
                Some(format!(
                    "{} {operator} {} барабар {}",
                    n.cardinal_str(group(caps, 1)).ok()?,
                    n.cardinal_str(group(caps, 2)).ok()?,
                    n.cardinal_str(group(caps, 3)).ok()?
                ))
            })?;
        }

        for (re, operator) in &self.operations {
            text = rewrite(re, &text, |caps| {
                Some(format!(
                    "{} {operator} {}",
                    n.cardinal_str(group(caps, 1)).ok()?,
                    n.cardinal_str(group(caps, 2)).ok()?
                ))
            })?;
        }

        Ok(text)
    }
}

const VOWELS: &[char] = &['а', 'о', 'у', 'ы', 'э', 'е', 'ө', 'ү', 'и'];
const VOICELESS: &[char] = &['к', 'п', 'с', 'т', 'ф', 'х', 'ц', 'ч', 'ш', 'щ'];

/// Ablative ending for a spelled denominator ("төрт" → "төн", "эки" → "нен").
fn ablative_suffix(word: &str) -> String {
    let suffix = match word.chars().rev().find(|c| VOWELS.contains(c)) {
        Some('ө' | 'ү') => "дөн",
        Some('о' | 'у') => "дон",
        Some('е' | 'и') => "ден",
        _ => "дан",
    };

    let tail = &suffix['д'.len_utf8()..];
    match word.chars().last() {
        Some(c) if VOICELESS.contains(&c) => format!("т{tail}"),
        Some(c) if VOWELS.contains(&c) => format!("н{tail}"),
        _ => suffix.to_string(),
    }
}

/// "3/4" → "төрттөн үч".
#[derive(Debug)]
pub struct FractionRule {
    pattern: Regex,
}

impl FractionRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b(\d+)/(\d+)\b")?,
        })
    }
}

impl Rule for FractionRule {
    fn name(&self) -> &str {
        "fractions"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            let numerator = engines.numerals.cardinal_str(group(caps, 1)).ok()?;
            let denominator = engines.numerals.cardinal_str(group(caps, 2)).ok()?;
            let suffix = ablative_suffix(&denominator);
            Some(format!("{denominator}{suffix} {numerator}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    fn rule() -> ArithmeticRule {
        ArithmeticRule::new().unwrap()
    }

    #[test]
    fn test_equations() {
        assert_eq!(run(&rule(), "2+2=4"), "эки кошуу эки барабар төрт");
        assert_eq!(run(&rule(), "5 × 3 = 15"), "беш көбөйтүү үч барабар он беш");
        assert_eq!(run(&rule(), "8 / 2 = 4"), "сегиз бөлүү эки барабар төрт");
    }

    #[test]
    fn test_equation_before_range() {
        assert_eq!(run(&rule(), "10-3=7"), "он кемитүү үч барабар жети");
    }

    #[test]
    fn test_bare_operations() {
        assert_eq!(run(&rule(), "10-5"), "он кемитүү беш");
        assert_eq!(run(&rule(), "3+4"), "үч кошуу төрт");
        assert_eq!(
            run(&rule(), "1920x1080"),
            "бир миң тогуз жүз жыйырма көбөйтүү бир миң сексен"
        );
        assert_eq!(run(&rule(), "6 / 3"), "алты бөлүү үч");
        assert_eq!(run(&rule(), "1/2"), "1/2");
    }

    #[test]
    fn test_fractions() {
        let rule = FractionRule::new().unwrap();
        assert_eq!(run(&rule, "3/4"), "төрттөн үч");
        assert_eq!(run(&rule, "1/2"), "экинен бир");
        assert_eq!(run(&rule, "2/5"), "бештен эки");
        assert_eq!(run(&rule, "1/10"), "ондон бир");
        assert_eq!(run(&rule, "1/100"), "жүздөн бир");
    }
}
