//! Stages command implementation.

use text_normalizer::Normalizer;

/// Run the stages command.
pub fn run() {
    let normalizer = Normalizer::new();
    for (i, name) in normalizer.stage_names().iter().enumerate() {
        println!("{:>2}. {name}", i + 1);
    }
}
