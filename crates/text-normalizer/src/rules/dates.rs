//! Calendar dates and tagged years.

use super::{compile, group, rewrite, Engines, Rule};
use crate::lexicon::{month_name, MONTH_NAMES};
use crate::num2words::NumeralGenerator;
use fancy_regex::Regex;
use kg_core::NormResult;

/// Two-digit years below this value belong to the 2000s, the rest to the 1900s.
const YEAR_THRESHOLD: i64 = 50;

const LETTERS: &str = "а-яёөүңА-ЯЁӨҮҢa-zA-Z";

/// Rewrites the supported date shapes, most specific first.
#[derive(Debug)]
pub struct DateRule {
    year_of: Regex,
    day_month_year: Regex,
    iso: Regex,
    named_month: Regex,
    dotted: Regex,
    slashed: Regex,
}

impl DateRule {
    pub fn new() -> NormResult<Self> {
        let months = MONTH_NAMES.join("|");
        Ok(Self {
            year_of: compile(&format!(
                r"(\d{{4}})\s*-?\s*жылдын\s+(\d{{1,2}})\s*-?\s*([{LETTERS}]+)"
            ))?,
            day_month_year: compile(&format!(
                r"(?<!\d)(\d{{1,2}})\s*-?\s*([{LETTERS}]+),?\s*(\d{{4}})\s*[-.]\s*жыл"
            ))?,
            iso: compile(r"(\d{4})-(\d{2})-(\d{2})\s+(\d{1,2}):(\d{2})")?,
            named_month: compile(&format!(r"(?i)\b(\d{{1,2}})\s+({months})\s+(\d{{4}})\b"))?,
            dotted: compile(r"\b(\d{1,2})\.(\d{1,2})\.(\d{2,4})\b")?,
            slashed: compile(r"\b(\d{1,2})/(\d{1,2})/(\d{2,4})\b")?,
        })
    }
}

impl Rule for DateRule {
    fn name(&self) -> &str {
        "dates"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;

        let text = rewrite(&self.year_of, input, |caps| {
            Some(format!(
                "{} жылдын {} {}",
                n.cardinal_str(group(caps, 1)).ok()?,
                n.cardinal_str(group(caps, 2)).ok()?,
                group(caps, 3)
            ))
        })?;

        let text = rewrite(&self.day_month_year, &text, |caps| {
            Some(format!(
                "{} {} {} жыл",
                n.cardinal_str(group(caps, 1)).ok()?,
                group(caps, 2),
                n.ordinal_str(group(caps, 3)).ok()?
            ))
        })?;

        let text = rewrite(&self.iso, &text, |caps| {
            let month = month_name(group(caps, 2).parse().ok()?)?;
            Some(format!(
                "{} жылдын {month} айынын {} күнү саат {} {}",
                n.cardinal_str(group(caps, 1)).ok()?,
                n.cardinal_str(group(caps, 3)).ok()?,
                n.cardinal_str(group(caps, 4)).ok()?,
                n.cardinal_str(group(caps, 5)).ok()?
            ))
        })?;

        let text = rewrite(&self.named_month, &text, |caps| {
            Some(format!(
                "{} {} {} жыл",
                n.ordinal_str(group(caps, 1)).ok()?,
                group(caps, 2).to_lowercase(),
                n.ordinal_str(group(caps, 3)).ok()?
            ))
        })?;

        let text = rewrite(&self.dotted, &text, |caps| numeric_date(n, caps))?;
        rewrite(&self.slashed, &text, |caps| numeric_date(n, caps))
    }
}

/// Render `D.M.Y`, swapping day and month when only the first field can be a month.
fn numeric_date(n: &NumeralGenerator, caps: &fancy_regex::Captures<'_>) -> Option<String> {
    let first: u32 = group(caps, 1).parse().ok()?;
    let second: u32 = group(caps, 2).parse().ok()?;
    let (day, month) = if second > 12 && first <= 12 {
        (second, first)
    } else {
        (first, second)
    };

    let month = month_name(month)?;
    let year = expand_year(group(caps, 3))?;

    Some(format!(
        "{} жыл {} {month}",
        n.ordinal(year).ok()?,
        n.ordinal(i64::from(day)).ok()?
    ))
}

fn expand_year(raw: &str) -> Option<i64> {
    let year: i64 = raw.parse().ok()?;
    if raw.len() != 2 {
        return Some(year);
    }
    if year < YEAR_THRESHOLD {
        Some(2000 + year)
    } else {
        Some(1900 + year)
    }
}

/// Year ranges and single years followed by a year tag.
#[derive(Debug)]
pub struct YearRule {
    range: Regex,
    single: Regex,
}

impl YearRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            range: compile(r"(\d{4})\s*[-–—]\s*(\d{4})\s*[-.]?\s*(жылдары|жылдар|жж|гг)\.?")?,
            single: compile(r"(\d{4})\s*[-.]?\s*(жылы|жыл|жж|гг|ж|г)\.?(?!\w)")?,
        })
    }
}

impl Rule for YearRule {
    fn name(&self) -> &str {
        "years"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let n = &engines.numerals;

        let text = rewrite(&self.range, input, |caps| {
            let tag = if group(caps, 3) == "жылдары" {
                "жылдары"
            } else {
                "жылдар"
            };
            Some(format!(
                "{} {} {tag}",
                n.ordinal_str(group(caps, 1)).ok()?,
                n.ordinal_str(group(caps, 2)).ok()?
            ))
        })?;

        rewrite(&self.single, &text, |caps| {
            let tag = if group(caps, 2) == "жылы" { "жылы" } else { "жыл" };
            Some(format!("{} {tag}", n.ordinal_str(group(caps, 1)).ok()?))
        })
    }
}
