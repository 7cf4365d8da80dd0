//! Error types for otel-filter-translator
//!
//! Translation raises exactly one structured error: a required configuration
//! section was absent from the input tree. Everything else about the input
//! shape is handled permissively by the walk itself.

use thiserror::Error;

/// Errors raised while translating a pipeline's filter stage
///
/// Derives `PartialEq` so callers and tests can compare errors by value;
/// the string form is stable and part of the contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A required configuration key is absent from the input tree
    #[error("missing key {key:?} for {id:?}")]
    MissingKey {
        /// Component identifier of the stage being translated
        id: String,
        /// Dotted path of the key that could not be resolved
        key: String,
    },
}

/// Result type alias for translation
pub type TranslateResult<T> = Result<T, TranslateError>;
