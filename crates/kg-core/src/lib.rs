//! # kg-core
//!
//! Core types, traits, and error definitions for the Kyrgyz text normalizer.
//!
//! This crate provides the foundational abstractions shared by the
//! normalizer library and its command-line front end:
//!
//! - Result types (`NormText`, `StageChange`)
//! - The `TextNormalizer` trait
//! - Unified error handling via `NormError`
//! - Lexicon override configuration (`NormalizerConfig`)

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::NormalizerConfig;
pub use error::{NormError, NormResult};
pub use traits::TextNormalizer;
pub use types::{NormText, StageChange};
