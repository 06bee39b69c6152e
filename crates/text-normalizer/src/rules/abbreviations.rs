//! Dotted abbreviations and uppercase acronyms.

use super::{compile, group, rewrite, Engines, Rule};
use crate::lexicon::Lexicon;
use fancy_regex::{escape, Regex};
use kg_core::NormResult;

/// Letters and digits that must not touch an abbreviation.
const WORD_CHARS: &str = "а-яөүңА-ЯӨҮҢA-Za-z0-9";

/// Nominal case endings that may follow an acronym ("КРнын", "БУУга").
const CASE_ENDINGS: &str = "нын|нун|нүн|нин|дын|дун|дүн|дин|тын|тун|түн|тин|\
    га|ге|ка|ке|го|гө|ко|кө|да|де|та|те|до|дө|то|тө|\
    дан|ден|тан|тен|дон|дөн|тон|төн|н|ы|и|у|ү";

/// Expands period-delimited abbreviations and abbreviated month names.
#[derive(Debug)]
pub struct AbbreviationRule {
    abbreviations: Vec<(Regex, String)>,
    months: Vec<(Regex, String)>,
}

impl AbbreviationRule {
    pub fn new(lexicon: &Lexicon) -> NormResult<Self> {
        let abbreviations = lexicon
            .abbreviations()
            .iter()
            .map(|(abbr, full)| {
                let pattern = format!(
                    "(?<![{WORD_CHARS}]){}(?![{WORD_CHARS}])",
                    escape(abbr)
                );
                Ok((compile(&pattern)?, full.clone()))
            })
            .collect::<NormResult<_>>()?;

        let months = lexicon
            .month_abbreviations()
            .iter()
            .map(|(abbr, full)| {
                let pattern = format!(r"(?i)\b{}\b\.?", escape(abbr));
                Ok((compile(&pattern)?, full.clone()))
            })
            .collect::<NormResult<_>>()?;

        Ok(Self {
            abbreviations,
            months,
        })
    }
}

impl Rule for AbbreviationRule {
    fn name(&self) -> &str {
        "abbreviations"
    }

    fn apply(&self, input: &str, _engines: &Engines) -> NormResult<String> {
        let mut text = input.to_string();
        for (re, full) in self.abbreviations.iter().chain(&self.months) {
            text = rewrite(re, &text, |_| Some(full.clone()))?;
        }
        Ok(text)
    }
}

/// Expands Kyrgyz acronyms with their case ending and spells Latin ones.
#[derive(Debug)]
pub struct AcronymRule {
    kyrgyz: Vec<(Regex, String)>,
    english: Vec<(Regex, String)>,
}

impl AcronymRule {
    pub fn new(lexicon: &Lexicon) -> NormResult<Self> {
        let kyrgyz = lexicon
            .acronyms()
            .iter()
            .map(|(abbr, full)| {
                let pattern = format!(r"\b{}({CASE_ENDINGS})?\b", escape(abbr));
                Ok((compile(&pattern)?, full.clone()))
            })
            .collect::<NormResult<_>>()?;

        let english = lexicon
            .english_acronyms()
            .iter()
            .map(|(abbr, spoken)| {
                let pattern = format!(r"\b{}(?![A-Za-z0-9])", escape(abbr));
                Ok((compile(&pattern)?, spoken.clone()))
            })
            .collect::<NormResult<_>>()?;

        Ok(Self { kyrgyz, english })
    }
}

impl Rule for AcronymRule {
    fn name(&self) -> &str {
        "acronyms"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let mut text = input.to_string();

        for (re, full) in &self.kyrgyz {
            text = rewrite(re, &text, |caps| {
                Some(engines.morphology.harmonize(full, group(caps, 1)))
            })?;
        }

        for (re, spoken) in &self.english {
            text = rewrite(re, &text, |_| Some(spoken.clone()))?;
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    fn abbreviations() -> AbbreviationRule {
        AbbreviationRule::new(&Lexicon::new()).unwrap()
    }

    fn acronyms() -> AcronymRule {
        AcronymRule::new(&Lexicon::new()).unwrap()
    }

    #[test]
    fn test_longest_abbreviation_wins() {
        let rule = abbreviations();
        assert_eq!(
            run(&rule, "китеп, дептер ж.б.у.с. алды"),
            "китеп, дептер жана башка ушул сыяктуу алды"
        );
        assert_eq!(run(&rule, "алма ж.б."), "алма жана башка");
    }

    #[test]
    fn test_abbreviation_inside_word_untouched() {
        let rule = abbreviations();
        assert_eq!(run(&rule, "мкрн"), "мкрн");
        assert_eq!(run(&rule, "IV к."), "IV кылым");
        assert_eq!(run(&rule, "Чүй обл. Кара-Балта"), "Чүй облусу Кара-Балта");
    }

    #[test]
    fn test_month_abbreviations() {
        let rule = abbreviations();
        assert_eq!(run(&rule, "5 янв. 2024"), "5 январь 2024");
        assert_eq!(run(&rule, "Дек"), "декабрь");
        assert_eq!(run(&rule, "март"), "март");
    }

    #[test]
    fn test_acronym_with_case_ending() {
        let rule = acronyms();
        assert_eq!(run(&rule, "КРнын"), "кыргыз республикасынын");
        assert_eq!(run(&rule, "БУУнун"), "бириккен улуттар уюмунун");
        assert_eq!(run(&rule, "КР"), "кыргыз республикасы");
    }

    #[test]
    fn test_acronym_not_inside_word() {
        let rule = acronyms();
        assert_eq!(run(&rule, "КРАН"), "КРАН");
    }

    #[test]
    fn test_english_acronyms() {
        let rule = acronyms();
        assert_eq!(run(&rule, "IT компания"), "ай ти компания");
        assert_eq!(run(&rule, "HTTPS протокол"), "эйч ти ти пи эс протокол");
        assert_eq!(run(&rule, "ITга"), "ай тига");
    }
}
