//! Property sweeps over the numeral generator and the full cascade.

use std::sync::Arc;
use std::thread;

use text_normalizer::{normalize, Normalizer, NumeralGenerator, MAX_NUMERAL};

const SUPPORTED: &[&str] = &[
    "15 км жол курулду",
    "Баасы $500",
    "2.5 млн сом",
    "1 000,50 сом",
    "01.02.2024",
    "30 Ноябрь 2025",
    "2024-жылы 5-майда",
    "14:30",
    "саат 14:30га чейин",
    "50%",
    "10-15%",
    "XIX-XX кылымдар",
    "Телефон: +996 555 123 456",
    "192.168.1.1",
    "2+2=4",
    "3/4 бөлүгү",
    "12 жашта",
    "№ 5 мектеп",
    "5k көрүү",
    "1 000 000 адам",
    "3,5 литр",
    "A4 формат",
    "12345678901234567890",
];

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

#[test]
fn test_cardinals_never_contain_digits() {
    let numerals = NumeralGenerator::new();
    let samples = (0..=20_000)
        .chain((0..MAX_NUMERAL).step_by(7_919_000_000_003).take(200))
        .chain([MAX_NUMERAL, -MAX_NUMERAL, -1, -1_000_000]);

    for n in samples {
        let words = numerals.cardinal(n).unwrap();
        assert!(!words.is_empty(), "empty cardinal for {n}");
        assert!(!has_digit(&words), "digits in cardinal for {n}: {words}");
    }
}

#[test]
fn test_ordinals_never_contain_digits() {
    let numerals = NumeralGenerator::new();
    for n in (0..=5_000).chain([1_000_000, 1_000_000_000, 1_000_000_000_000]) {
        let words = numerals.ordinal(n).unwrap();
        assert!(!has_digit(&words), "digits in ordinal for {n}: {words}");
    }
}

#[test]
fn test_out_of_range_is_an_error() {
    let numerals = NumeralGenerator::new();
    assert!(numerals.cardinal(MAX_NUMERAL + 1).is_err());
    assert!(numerals.ordinal(-(MAX_NUMERAL + 1)).is_err());
}

#[test]
fn test_normalized_output_has_no_digits() {
    let normalizer = Normalizer::new();
    for input in SUPPORTED {
        let output = normalizer.normalize(input);
        assert!(!has_digit(&output), "digits left in '{input}': '{output}'");
        assert!(!output.contains("  "), "double space in '{output}'");
        assert_eq!(output.trim(), output);
    }
}

#[test]
fn test_normalization_is_deterministic() {
    let first = Normalizer::new();
    let second = Normalizer::new();
    for input in SUPPORTED {
        assert_eq!(first.normalize(input), first.normalize(input));
        assert_eq!(first.normalize(input), second.normalize(input));
    }
}

#[test]
fn test_odd_input_is_total() {
    let normalizer = Normalizer::new();
    for input in ["::::", "$$$", "-5", "%%", "1/0", "0/0", "№", "…", "🙂 5", "\t\n"] {
        let output = normalizer.normalize(input);
        assert!(!output.contains("  "));
    }
}

#[test]
fn test_concurrent_use_matches_sequential() {
    let normalizer = Arc::new(Normalizer::new());
    let expected: Vec<String> = SUPPORTED.iter().map(|s| normalizer.normalize(s)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let normalizer = Arc::clone(&normalizer);
            thread::spawn(move || {
                SUPPORTED
                    .iter()
                    .map(|s| normalizer.normalize(s))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_shared_instance_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| normalize("50%")))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "элүү пайыз");
    }
}
