//! Roman numeral decoding.

/// Symbol table in descending value order, subtractive pairs included.
const ROMAN_VALUES: [(&str, i64); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Convert a roman numeral to an integer (`XIV` → 14).
///
/// The table is walked once from the largest symbol down, consuming each
/// symbol as many times as it repeats at the current position. Input is
/// not validated: non-standard repetition is summed, and characters left
/// over once the table is exhausted are ignored, so malformed numerals
/// yield a best-effort value instead of an error.
pub fn roman_to_integer(roman: &str) -> i64 {
    let roman = roman.to_uppercase();
    let mut rest = roman.as_str();
    let mut total = 0;

    for (symbol, value) in ROMAN_VALUES {
        while let Some(tail) = rest.strip_prefix(symbol) {
            total += value;
            rest = tail;
        }
    }

    total
}
