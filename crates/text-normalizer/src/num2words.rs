//! Number to words conversion for Kyrgyz.
//!
//! Cardinals are built by walking a descending list of magnitude buckets
//! (trillion, billion, million, thousand) and spelling each bucket count
//! below one thousand. Ordinals reuse the same buckets and switch to a
//! dedicated suffixed root when the remainder is zero ("жүзүнчү",
//! "миңинчи").

use kg_core::{NormError, NormResult};

/// Largest magnitude the generator will spell (just below 10^15).
pub const MAX_NUMERAL: i64 = 999_999_999_999_999;

/// Upper bound of the precomputed cache.
const CACHE_MAX: usize = 100;

const ONES: [&str; 10] = [
    "", "бир", "эки", "үч", "төрт", "беш", "алты", "жети", "сегиз", "тогуз",
];

const TENS: [&str; 10] = [
    "", "он", "жыйырма", "отуз", "кырк", "элүү", "алтымыш", "жетимиш", "сексен", "токсон",
];

const HUNDREDS: [&str; 10] = [
    "",
    "жүз",
    "эки жүз",
    "үч жүз",
    "төрт жүз",
    "беш жүз",
    "алты жүз",
    "жети жүз",
    "сегиз жүз",
    "тогуз жүз",
];

const ORDINAL_ONES: [&str; 10] = [
    "нөлүнчү",
    "биринчи",
    "экинчи",
    "үчүнчү",
    "төртүнчү",
    "бешинчи",
    "алтынчы",
    "жетинчи",
    "сегизинчи",
    "тогузунчу",
];

const ORDINAL_TENS: [&str; 10] = [
    "",
    "онунчу",
    "жыйырманчы",
    "отузунчу",
    "кыркынчы",
    "элүүнчү",
    "алтымышынчы",
    "жетимишинчи",
    "сексенинчи",
    "токсонунчу",
];

/// Magnitude buckets: (size, cardinal name, ordinal root).
const MAGNITUDES: [(u64, &str, &str); 4] = [
    (1_000_000_000_000, "триллион", "триллионунчу"),
    (1_000_000_000, "миллиард", "миллиардынчы"),
    (1_000_000, "миллион", "миллионунчу"),
    (1_000, "миң", "миңинчи"),
];

/// Place-value words for fractional digit counts 1..=6.
const DECIMAL_PLACES: [&str; 6] = [
    "ондон",
    "жүздөн",
    "миңден",
    "он миңден",
    "жүз миңден",
    "миллиондон",
];

const DIGITS: [&str; 10] = [
    "нөл", "бир", "эки", "үч", "төрт", "беш", "алты", "жети", "сегиз", "тогуз",
];

/// Cardinal and ordinal numeral generator.
///
/// Results for `0..=100` are computed once at construction and served from
/// a read-only cache afterwards.
#[derive(Debug, Clone)]
pub struct NumeralGenerator {
    cardinal_cache: Vec<String>,
    ordinal_cache: Vec<String>,
}

impl Default for NumeralGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumeralGenerator {
    /// Create a generator and fill the `0..=100` cache.
    pub fn new() -> Self {
        let range = 0..=CACHE_MAX as u64;
        Self {
            cardinal_cache: range.clone().map(spell_cardinal).collect(),
            ordinal_cache: range.map(spell_ordinal).collect(),
        }
    }

    /// Spell an integer as a cardinal numeral.
    pub fn cardinal(&self, num: i64) -> NormResult<String> {
        let magnitude = check_range(num)?;
        let words = if magnitude <= CACHE_MAX as u64 {
            self.cardinal_cache[magnitude as usize].clone()
        } else {
            spell_cardinal(magnitude)
        };

        if num < 0 {
            Ok(format!("минус {words}"))
        } else {
            Ok(words)
        }
    }

    /// Spell an integer as an ordinal numeral.
    pub fn ordinal(&self, num: i64) -> NormResult<String> {
        let magnitude = check_range(num)?;
        let words = if magnitude <= CACHE_MAX as u64 {
            self.ordinal_cache[magnitude as usize].clone()
        } else {
            spell_ordinal(magnitude)
        };

        if num < 0 {
            Ok(format!("минус {words}"))
        } else {
            Ok(words)
        }
    }

    /// Spell a digit string as a cardinal.
    pub fn cardinal_str(&self, digits: &str) -> NormResult<String> {
        self.cardinal(parse_int(digits)?)
    }

    /// Spell a digit string as an ordinal.
    pub fn ordinal_str(&self, digits: &str) -> NormResult<String> {
        self.ordinal(parse_int(digits)?)
    }

    /// Spell a decimal literal such as `3,5` or `0.25`.
    ///
    /// The integer part becomes a cardinal ("нөл" when empty), followed by
    /// "бүтүн", a place-value word chosen by the number of fractional
    /// digits, and the fractional digits as a cardinal. Seven or more
    /// fractional digits get no place-value word.
    pub fn decimal(&self, raw: &str) -> NormResult<String> {
        let (whole, fraction) = match raw.split_once([',', '.']) {
            Some((whole, fraction)) => (whole, fraction),
            None => (raw, ""),
        };

        let whole = if whole.is_empty() { 0 } else { parse_int(whole)? };
        let mut result = self.cardinal(whole)?;

        if !fraction.is_empty() {
            let fraction_words = self.cardinal(parse_int(fraction)?)?;
            result.push_str(" бүтүн ");
            if let Some(place) = DECIMAL_PLACES.get(fraction.chars().count() - 1) {
                result.push_str(place);
                result.push(' ');
            }
            result.push_str(&fraction_words);
        }

        Ok(result)
    }

    /// Read the digits of a string one by one, skipping everything else.
    pub fn digits(&self, raw: &str) -> String {
        raw.chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| DIGITS[d as usize])
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn check_range(num: i64) -> NormResult<u64> {
    let magnitude = num.unsigned_abs();
    if magnitude > MAX_NUMERAL as u64 {
        return Err(NormError::OutOfRange { value: num });
    }
    Ok(magnitude)
}

fn parse_int(digits: &str) -> NormResult<i64> {
    digits
        .parse::<i64>()
        .map_err(|_| NormError::invalid_number(digits))
}

// ============================================================================
// Spelling
// ============================================================================

/// Spell 1..=999, empty for zero.
fn spell_below_thousand(num: u64) -> String {
    let num = num as usize;
    [HUNDREDS[num / 100], TENS[(num % 100) / 10], ONES[num % 10]]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn spell_cardinal(num: u64) -> String {
    if num == 0 {
        return "нөл".to_string();
    }

    let mut parts = Vec::new();
    let mut rest = num;

    for (size, name, _) in MAGNITUDES {
        if rest >= size {
            parts.push(spell_below_thousand(rest / size));
            parts.push(name.to_string());
            rest %= size;
        }
    }

    if rest > 0 {
        parts.push(spell_below_thousand(rest));
    }

    parts.join(" ")
}

fn ordinal_below_hundred(num: usize) -> String {
    if num < 10 {
        return ORDINAL_ONES[num].to_string();
    }

    let (tens, ones) = (num / 10, num % 10);
    if ones == 0 {
        ORDINAL_TENS[tens].to_string()
    } else {
        format!("{} {}", TENS[tens], ORDINAL_ONES[ones])
    }
}

fn ordinal_below_thousand(num: u64) -> String {
    let num = num as usize;
    if num < 100 {
        return ordinal_below_hundred(num);
    }

    let (hundreds, rest) = (num / 100, num % 100);
    if rest == 0 {
        format!("{}үнчү", HUNDREDS[hundreds])
    } else {
        format!("{} {}", HUNDREDS[hundreds], ordinal_below_hundred(rest))
    }
}

fn spell_ordinal(num: u64) -> String {
    let mut parts = Vec::new();
    let mut rest = num;

    for (size, name, root) in MAGNITUDES {
        if rest >= size {
            parts.push(spell_below_thousand(rest / size));
            rest %= size;
            if rest == 0 {
                parts.push(root.to_string());
                return parts.join(" ");
            }
            parts.push(name.to_string());
        }
    }

    parts.push(ordinal_below_thousand(rest));
    parts.join(" ")
}
