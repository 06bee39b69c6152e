//! CLI command implementations.

pub mod info;
pub mod normalize;
pub mod numbers;
pub mod stages;
