#![forbid(unsafe_code)]

//! Pattern loaders and the embedded language catalog for `softbreak`.
//!
//! The engine itself only ever sees two strings (pattern tokens and
//! exception tokens); everything about where those strings come from lives
//! here. Three sources are provided:
//!
//! - [`EmbeddedLoader`]: tables compiled into the binary, per [`Language`].
//! - [`FilePatternsLoader`]: TeX-format pattern/exception files on disk, for
//!   full-size tables.
//! - Any custom [`PatternsLoader`] implementation.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use softbreak::{BuildError, Hyphenator, Options};

/// Errors from loading pattern text or building the engine from it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Source of raw pattern and exception text.
pub trait PatternsLoader {
    fn load_patterns(&self) -> Result<String, LoadError>;

    /// Exception lists are optional; the default is none.
    fn load_exceptions(&self) -> Result<String, LoadError> {
        Ok(String::new())
    }

    /// Whether the pattern text is already in ascending pattern order.
    /// Sources that cannot guarantee this make the engine sort at build
    /// time.
    fn pre_sorted(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Embedded catalog
// ---------------------------------------------------------------------------

/// Languages with tables compiled into this crate.
///
/// The embedded English table is a compact subset of the full
/// `hyph-en-us.tex` patterns, sufficient for common words, tests, and
/// benchmarks. Full-size tables for any language drop in through
/// [`FilePatternsLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Language {
    EnglishUs,
}

impl Language {
    fn patterns(self) -> &'static str {
        match self {
            Self::EnglishUs => include_str!("data/en_us.pat.txt"),
        }
    }

    fn exceptions(self) -> &'static str {
        match self {
            Self::EnglishUs => include_str!("data/en_us.hyp.txt"),
        }
    }
}

/// Loader over the embedded [`Language`] catalog.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedLoader {
    language: Language,
}

impl EmbeddedLoader {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl PatternsLoader for EmbeddedLoader {
    fn load_patterns(&self) -> Result<String, LoadError> {
        Ok(self.language.patterns().to_string())
    }

    fn load_exceptions(&self) -> Result<String, LoadError> {
        Ok(self.language.exceptions().to_string())
    }

    // The embedded tables are grouped thematically, not lexicographically.
    fn pre_sorted(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// File loader
// ---------------------------------------------------------------------------

/// Loads whitespace-separated pattern (and optionally exception) tokens
/// from UTF-8 files.
#[derive(Debug, Clone)]
pub struct FilePatternsLoader {
    patterns_path: PathBuf,
    exceptions_path: Option<PathBuf>,
}

impl FilePatternsLoader {
    #[must_use]
    pub fn new(patterns_path: impl Into<PathBuf>) -> Self {
        Self {
            patterns_path: patterns_path.into(),
            exceptions_path: None,
        }
    }

    #[must_use]
    pub fn with_exceptions(mut self, path: impl Into<PathBuf>) -> Self {
        self.exceptions_path = Some(path.into());
        self
    }
}

impl PatternsLoader for FilePatternsLoader {
    fn load_patterns(&self) -> Result<String, LoadError> {
        Ok(fs::read_to_string(&self.patterns_path)?)
    }

    fn load_exceptions(&self) -> Result<String, LoadError> {
        match &self.exceptions_path {
            Some(path) => Ok(fs::read_to_string(path)?),
            None => Ok(String::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine construction
// ---------------------------------------------------------------------------

/// Build a [`Hyphenator`] from any loader.
///
/// Forces a pattern sort whenever the loader does not guarantee ascending
/// order, regardless of `opts.sort_patterns`.
///
/// # Errors
///
/// I/O failures from the loader, or [`BuildError`] when the loaded pattern
/// text is empty.
pub fn hyphenator_from(
    loader: &dyn PatternsLoader,
    opts: Options,
) -> Result<Hyphenator, LoadError> {
    let patterns = loader.load_patterns()?;
    let exceptions = loader.load_exceptions()?;
    let opts = if loader.pre_sorted() {
        opts
    } else {
        opts.with_sort_patterns(true)
    };
    debug!(
        patterns_len = patterns.len(),
        exceptions_len = exceptions.len(),
        "pattern text loaded"
    );
    Ok(Hyphenator::build(&patterns, &exceptions, opts)?)
}

/// Build a [`Hyphenator`] for an embedded language.
///
/// # Errors
///
/// [`BuildError`] variants wrapped in [`LoadError`]; the embedded tables
/// themselves cannot fail to load.
pub fn hyphenator_for(language: Language, opts: Options) -> Result<Hyphenator, LoadError> {
    hyphenator_from(&EmbeddedLoader::new(language), opts)
}
