//! Core data types for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// A single cascade stage that modified the text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageChange {
    /// Name of the stage.
    pub stage: String,
    /// Buffer before the stage ran.
    pub before: String,
    /// Buffer after the stage ran.
    pub after: String,
}

/// Normalized text with the stage trace that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormText {
    /// The normalized text content.
    pub text: String,
    /// Stages that changed the buffer, in cascade order.
    pub changes: Vec<StageChange>,
}

impl NormText {
    /// Create a new NormText without trace information.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changes: Vec::new(),
        }
    }

    /// Create NormText with a stage trace.
    pub fn with_changes(text: impl Into<String>, changes: Vec<StageChange>) -> Self {
        Self {
            text: text.into(),
            changes,
        }
    }

    /// Names of the stages that modified the buffer.
    pub fn touched_stages(&self) -> Vec<&str> {
        self.changes.iter().map(|c| c.stage.as_str()).collect()
    }
}
