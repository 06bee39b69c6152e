//! E-mail addresses and phone numbers.

use super::{compile, group, rewrite, Engines, Rule};
use fancy_regex::Regex;
use kg_core::NormResult;

/// Reads `local@domain.tld` as words.
#[derive(Debug)]
pub struct EmailRule {
    pattern: Regex,
}

impl EmailRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            pattern: compile(r"\b([a-zA-Z0-9._%+-]+)@([a-zA-Z0-9.-]+)\.([a-zA-Z]{2,})\b")?,
        })
    }
}

impl Rule for EmailRule {
    fn name(&self) -> &str {
        "email"
    }

    fn apply(&self, input: &str, _engines: &Engines) -> NormResult<String> {
        rewrite(&self.pattern, input, |caps| {
            Some(format!(
                "{} эт белгиси {} чекит {}",
                group(caps, 1),
                group(caps, 2),
                group(caps, 3)
            ))
        })
    }
}

/// Reads phone numbers and short codes digit by digit.
#[derive(Debug)]
pub struct PhoneRule {
    international: Regex,
    mobile: Regex,
    keyword: Regex,
}

impl PhoneRule {
    pub fn new() -> NormResult<Self> {
        Ok(Self {
            international: compile(r"\+996[\s-]?(\d{3})[\s-]?(\d{3})[\s-]?(\d{3})")?,
            mobile: compile(r"\b(0\d{3})[\s-]?(\d{3})[\s-]?(\d{3})\b")?,
            keyword: compile(
                r"(?i)(номер|номери|тел|телефон|звоните|позвоните|code|код|борбор|индекс|почтовый|WhatsApp|Telegram)[\s:：-]*(\d{3,6})\b",
            )?,
        })
    }
}

impl Rule for PhoneRule {
    fn name(&self) -> &str {
        "phone"
    }

    fn apply(&self, input: &str, engines: &Engines) -> NormResult<String> {
        let digits = |caps: &fancy_regex::Captures<'_>| {
            (1..=3)
                .map(|i| engines.numerals.digits(group(caps, i)))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let text = rewrite(&self.international, input, |caps| {
            Some(format!("плюс тогуз тогуз алты {}", digits(caps)))
        })?;
        let text = rewrite(&self.mobile, &text, |caps| Some(digits(caps)))?;

        rewrite(&self.keyword, &text, |caps| {
            Some(format!(
                "{} {}",
                group(caps, 1),
                engines.numerals.digits(group(caps, 2))
            ))
        })
    }
}
