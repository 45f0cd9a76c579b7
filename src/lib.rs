//! Generator for numbered initializer-list preprocessor macros.
//!
//! `RAINY_INITIALIZER_LIST(N)` expands to a brace list of `N` empty elements;
//! this crate emits the dispatch header and the `1..=256` definitions behind it.

pub mod cli;
pub mod config;
pub mod emit;
pub mod errors;
pub mod generator;
pub mod logger;

use crate::config::GeneratorConfig;
use crate::errors::GenError;
use crate::generator::{MacroSequence, SequenceBuilder};

/// Builds the sequence for the default constants.
///
/// # Errors
/// Never for the built-in constants; kept fallible to match [`generate_with`].
pub fn generate() -> Result<MacroSequence, GenError> {
    generate_with(GeneratorConfig::default())
}

/// Validates `config` and builds the full sequence.
///
/// # Errors
/// Returns a configuration error before anything is generated.
pub fn generate_with(config: GeneratorConfig) -> Result<MacroSequence, GenError> {
    Ok(SequenceBuilder::new(config)?.build())
}
