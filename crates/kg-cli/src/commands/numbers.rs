//! Numeral commands: cardinal, ordinal and roman.

use anyhow::{bail, Result};
use text_normalizer::{roman_to_integer, NumeralGenerator};

pub fn cardinal(number: i64) -> Result<()> {
    println!("{}", NumeralGenerator::new().cardinal(number)?);
    Ok(())
}

pub fn ordinal(number: i64) -> Result<()> {
    println!("{}", NumeralGenerator::new().ordinal(number)?);
    Ok(())
}

/// Print the decoded value and its ordinal reading.
pub fn roman(numeral: &str) -> Result<()> {
    let value = roman_to_integer(numeral);
    if value == 0 {
        bail!("not a roman numeral: {numeral}");
    }

    println!("{value}");
    println!("{}", NumeralGenerator::new().ordinal(value)?);
    Ok(())
}
