//! Info command implementation.

use text_normalizer::{Normalizer, MAX_NUMERAL};

/// Run the info command.
pub fn run() {
    println!("Kyrgyz Text Normalizer");
    println!("======================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    println!("Cascade stages: {}", Normalizer::new().stage_names().len());
    println!("Largest spelled number: {MAX_NUMERAL}");
    println!();
    println!("Crates:");
    println!("  kg-core: Core types, traits and errors");
    println!("  text-normalizer: Numerals, morphology and the rule cascade");
    println!("  kg-cli: This CLI tool");
}
