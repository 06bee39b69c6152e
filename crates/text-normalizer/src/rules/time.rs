//! Clock times ("14:30", "саат 9.15да").

use super::{compile, group, rewrite, Engines, Rule, CLOCK_SUFFIXES};
use crate::morphology::MorphologyEngine;
use fancy_regex::Regex;
use kg_core::NormResult;

/// Spell `hours` and `minutes`, attaching a harmonized case suffix if given.
///
/// "00" minutes are dropped, a leading zero reads as "нөл", and idiomatic
/// minute forms from the exception table win over general harmony.
fn render_clock(
    engines: &Engines,
    hours: &str,
    minutes: &str,
    suffix: Option<&str>,
) -> Option<String> {
    let n = &engines.numerals;
    let hours = n.cardinal_str(hours).ok()?;
    let base = suffix.map(MorphologyEngine::case_base);

    let spoken = if minutes == "00" {
        hours
    } else if let Some(digit) = minutes.strip_prefix('0') {
        format!("{hours} нөл {}", n.cardinal_str(digit).ok()?)
    } else {
        let minutes = n.cardinal_str(minutes).ok()?;
        if let Some(form) = base.and_then(|b| engines.morphology.exception(&minutes, b)) {
            return Some(format!("{hours} {form}"));
        }
        format!("{hours} {minutes}")
    };

    Some(match base {
        Some(base) => MorphologyEngine::apply_harmony(&spoken, base),
        None => spoken,
    })
}

/// Colon times, then dotted times after "саат"/"убакыт".
#[derive(Debug)]
pub struct TimeRule {
    with_suffix: Regex,
    keyword: Regex,
    bare: Regex,
    dotted_keyword: Regex,
}

impl TimeRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            with_suffix: compile(&format!(r"(\d{{1,2}}):(\d{{2}})({CLOCK_SUFFIXES})"))?,
            keyword: compile(r"(саат|убакыт)\s+(\d{1,2}):(\d{2})\b")?,
            bare: compile(r"\b(\d{1,2}):(\d{2})\b")?,
            dotted_keyword: compile(&format!(
                r"((?:саат|убакыт)\s+)(\d{{1,2}})\.(\d{{2}})({CLOCK_SUFFIXES})?"
            ))?,
        })
    }
}

impl Rule for TimeRule {
    fn name(&self) -> &str {
        "time"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let text = rewrite(&self.with_suffix, input, |caps| {
            render_clock(engines, group(caps, 1), group(caps, 2), Some(group(caps, 3)))
        })?;

        let text = rewrite(&self.keyword, &text, |caps| {
            let clock = render_clock(engines, group(caps, 2), group(caps, 3), None)?;
            Some(format!("{} {clock}", group(caps, 1)))
        })?;

        let text = rewrite(&self.bare, &text, |caps| {
            render_clock(engines, group(caps, 1), group(caps, 2), None)
        })?;

        rewrite(&self.dotted_keyword, &text, |caps| {
            let suffix = caps.get(4).map(|m| m.as_str());
            let clock = render_clock(engines, group(caps, 2), group(caps, 3), suffix)?;
            Some(format!("{}{clock}", group(caps, 1)))
        })
    }
}

/// Dotted times with a case suffix but no keyword ("9.30да").
#[derive(Debug)]
pub struct DotTimeRule {
    pattern: Regex,
}

impl DotTimeRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(&format!(r"\b(\d{{1,2}})\.(\d{{2}})({CLOCK_SUFFIXES})"))?,
        })
    }
}

impl Rule for DotTimeRule {
    fn name(&self) -> &str {
        "dot_time"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            render_clock(engines, group(caps, 1), group(caps, 2), Some(group(caps, 3)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    fn time() -> TimeRule {
        TimeRule::new().unwrap()
    }

    #[test]
    fn test_bare_clock() {
        assert_eq!(run(&time(), "14:30"), "он төрт отуз");
        assert_eq!(run(&time(), "9:00"), "тогуз");
        assert_eq!(run(&time(), "8:05"), "сегиз нөл беш");
    }

    #[test]
    fn test_clock_with_suffix() {
        // idiomatic minute form
        assert_eq!(run(&time(), "14:30га"), "он төрт отузга");
        assert_eq!(run(&time(), "10:15ке"), "он он бешке");
        assert_eq!(run(&time(), "10:15те"), "он он беште");
        // whole hours take general harmony
        assert_eq!(run(&time(), "14:00дө"), "он төрттө");
        assert_eq!(run(&time(), "9:05ке"), "тогуз нөл бешке");
    }

    #[test]
    fn test_keyword_clock() {
        assert_eq!(run(&time(), "саат 7:45"), "саат жети кырк беш");
        assert_eq!(run(&time(), "саат 9.30да"), "саат тогуз отузда");
        assert_eq!(run(&time(), "убакыт 18.00"), "убакыт он сегиз");
    }

    #[test]
    fn test_dot_time_without_keyword() {
        let rule = DotTimeRule::new().unwrap();
        assert_eq!(run(&rule, "9.30да келет"), "тогуз отузда келет");
        assert_eq!(run(&rule, "3.5 литр"), "3.5 литр");
    }
}
