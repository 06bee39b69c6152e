//! Ordinal markers and counted nouns.

use super::{compile, group, rewrite, Engines, Rule, ORDINAL_PARTICLES};
use crate::lexicon::{lookup, Lexicon, Table};
use fancy_regex::Regex;
use kg_core::NormResult;

/// "15-август" → "он бешинчи август", "5-чи" / "3үнчү" → ordinal.
#[derive(Debug)]
pub struct OrdinalMarkerRule {
    dashed_word: Regex,
    particle: Regex,
}

impl OrdinalMarkerRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            dashed_word: compile(r"(\d+)-([а-яөүңА-ЯӨҮҢ]+)")?,
            particle: compile(&format!(
                r"(\d+)\s*-?\s*({ORDINAL_PARTICLES})(?![а-яөүңА-ЯӨҮҢ])"
            ))?,
        })
    }
}

fn is_particle(word: &str) -> bool {
    ORDINAL_PARTICLES.split('|').any(|p| p == word)
}

impl Rule for OrdinalMarkerRule {
    fn name(&self) -> &str {
        "ordinal_markers"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;

        let text = rewrite(&self.dashed_word, input, |caps| {
            let ordinal = n.ordinal_str(group(caps, 1)).ok()?;
            let word = group(caps, 2);
            if is_particle(word) {
                Some(ordinal)
            } else {
                Some(format!("{ordinal} {word}"))
            }
        })?;

        rewrite(&self.particle, &text, |caps| {
            n.ordinal_str(group(caps, 1)).ok()
        })
    }
}

/// Age, school grade, course and glued time units.
#[derive(Debug)]
pub struct CounterRule {
    age: Regex,
    grade: Regex,
    short_units: Regex,
    course: Regex,
    units: Table,
}

impl CounterRule {
    pub fn new(lexicon: &Lexicon) -> NormResult<Self> {
        let units = ["мин", "мүн", "сек", "саат"]
            .into_iter()
            .map(|token| {
                let name = lexicon.unit(token).unwrap_or(token);
                (token.to_string(), name.to_string())
            })
            .collect();

        Ok(Self {
            age: compile(r"(\d+)\s*жашта")?,
            grade: compile(r"(\d+)(чи|чу|чү)\s*класста")?,
            short_units: compile(r"(\d+)(мин|мүн|сек|саат)\b")?,
            course: compile(r"(\d+)\s*-?\s*курста")?,
            units,
        })
    }

    fn unit_name<'a>(&'a self, token: &'a str) -> &'a str {
        lookup(&self.units, token).unwrap_or(token)
    }
}

impl Rule for CounterRule {
    fn name(&self) -> &str {
        "counters"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;

        let text = rewrite(&self.age, input, |caps| {
            Some(format!("{} жашта", n.cardinal_str(group(caps, 1)).ok()?))
        })?;

        let text = rewrite(&self.grade, &text, |caps| {
            Some(format!("{} класста", n.ordinal_str(group(caps, 1)).ok()?))
        })?;

        let text = rewrite(&self.short_units, &text, |caps| {
            Some(format!(
                "{} {}",
                n.cardinal_str(group(caps, 1)).ok()?,
                self.unit_name(group(caps, 2))
            ))
        })?;

        rewrite(&self.course, &text, |caps| {
            Some(format!("{} курста", n.ordinal_str(group(caps, 1)).ok()?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;
    use kg_core::NormalizerConfig;

    #[test]
    fn test_dash_ordinal_with_word() {
        let rule = OrdinalMarkerRule::new().unwrap();
        assert_eq!(run(&rule, "15-августта"), "он бешинчи августта");
        assert_eq!(run(&rule, "3-класс"), "үчүнчү класс");
    }

    #[test]
    fn test_particle_absorbed() {
        let rule = OrdinalMarkerRule::new().unwrap();
        assert_eq!(run(&rule, "5-чи"), "бешинчи");
        assert_eq!(run(&rule, "3үнчү орун"), "үчүнчү орун");
        assert_eq!(run(&rule, "10 чу"), "онунчу");
    }

    #[test]
    fn test_particle_needs_word_end() {
        let rule = OrdinalMarkerRule::new().unwrap();
        assert_eq!(run(&rule, "5 чуркоочу"), "5 чуркоочу");
    }

    #[test]
    fn test_counters() {
        let rule = CounterRule::new(&Lexicon::new()).unwrap();
        assert_eq!(run(&rule, "12 жашта"), "он эки жашта");
        assert_eq!(run(&rule, "7чи класста"), "жетинчи класста");
        assert_eq!(run(&rule, "30мин"), "отуз мүнөт");
        assert_eq!(run(&rule, "2сек"), "эки секунд");
        assert_eq!(run(&rule, "2-курста"), "экинчи курста");
    }

    #[test]
    fn test_counter_units_follow_overrides() {
        let mut config = NormalizerConfig::default();
        config.units.insert("мин".to_string(), "минута".to_string());
        let rule = CounterRule::new(&Lexicon::with_config(&config)).unwrap();
        assert_eq!(run(&rule, "5мин"), "беш минута");
        assert_eq!(run(&rule, "5мүн"), "беш мүнөт");
    }
}
