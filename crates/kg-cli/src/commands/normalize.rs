//! Normalize command implementation.

use anyhow::{Context, Result};
use kg_core::NormalizerConfig;
use std::path::Path;
use text_normalizer::Normalizer;
use tracing::debug;

/// Resolve `@path` to the file's contents; anything else is literal text.
fn read_input(input: &str) -> Result<String> {
    match input.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {path}")),
        None => Ok(input.to_string()),
    }
}

fn build_normalizer(config: Option<&Path>) -> Result<Normalizer> {
    let Some(path) = config else {
        return Ok(Normalizer::new());
    };

    let config = NormalizerConfig::from_file(path)
        .with_context(|| format!("failed to load config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded lexicon overrides");

    Normalizer::with_config(&config).context("invalid lexicon overrides")
}

/// Run the normalize command. Each input line is normalized on its own.
pub fn run(input: &str, config: Option<&Path>, trace: bool) -> Result<()> {
    let text = read_input(input)?;
    let normalizer = build_normalizer(config)?;

    for line in text.lines() {
        if !trace {
            println!("{}", normalizer.normalize(line));
            continue;
        }

        let result = normalizer.normalize_traced(line);
        println!("{}", result.text);
        for change in &result.changes {
            println!("  [{}] '{}' -> '{}'", change.stage, change.before, change.after);
        }
    }

    Ok(())
}
