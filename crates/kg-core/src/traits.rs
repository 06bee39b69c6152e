//! Trait definitions for normalizer components.

/// Text normalization trait.
///
/// Implementations convert raw input text into a fully spelled-out word
/// sequence suitable for a speech-synthesis front end. Normalization is
/// total: unrecognized spans pass through unchanged.
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text.
    fn normalize(&self, input: &str) -> String;
}
