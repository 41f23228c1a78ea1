use thiserror::Error;

/// Errors surfaced while building a [`crate::Hyphenator`].
///
/// Construction is the only fallible operation; per-word and per-text calls
/// are total and degrade to returning their input unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The pattern text was empty or contained no tokens.
    #[error("pattern text must contain at least one pattern")]
    NoPatterns,
}
