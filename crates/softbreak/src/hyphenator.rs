//! Word- and text-level orchestration.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::error::BuildError;
use crate::exceptions::ExceptionTable;
use crate::levels::levels_for_word;
use crate::mask::{apply_margins, mask_from_levels};
use crate::pattern::PatternStore;

/// Engine configuration, immutable once the [`Hyphenator`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Symbol inserted at each break point. Defaults to `"&shy;"`.
    pub hyphen_symbol: String,
    /// Words of this many characters or fewer are left untouched.
    pub min_word_length: usize,
    /// Minimum letters kept unbroken at each edge of a word.
    pub min_letter_count: usize,
    /// Hyphenate the trailing word of a text. Off by default; a text that
    /// is a single bare word is still hyphenated (see
    /// [`Hyphenator::hyphenate_text`]).
    pub hyphenate_last_word: bool,
    /// Sort the pattern table during construction. Needed for source tables
    /// that are not already in ascending order.
    pub sort_patterns: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hyphen_symbol: "&shy;".to_string(),
            min_word_length: 5,
            min_letter_count: 3,
            hyphenate_last_word: false,
            sort_patterns: false,
        }
    }
}

impl Options {
    #[must_use]
    pub fn with_hyphen_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.hyphen_symbol = symbol.into();
        self
    }

    #[must_use]
    pub fn with_min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = length;
        self
    }

    #[must_use]
    pub fn with_min_letter_count(mut self, count: usize) -> Self {
        self.min_letter_count = count;
        self
    }

    #[must_use]
    pub fn with_hyphenate_last_word(mut self, enabled: bool) -> Self {
        self.hyphenate_last_word = enabled;
        self
    }

    #[must_use]
    pub fn with_sort_patterns(mut self, enabled: bool) -> Self {
        self.sort_patterns = enabled;
        self
    }
}

/// The hyphenation engine: pattern store, exception table, and configuration.
///
/// Built once from raw pattern/exception text; every operation afterwards is
/// a pure function over immutable state, so a `Hyphenator` can be shared
/// across threads freely.
#[derive(Debug, Clone)]
pub struct Hyphenator {
    store: PatternStore,
    exceptions: ExceptionTable,
    opts: Options,
}

impl Hyphenator {
    /// Build an engine from whitespace-separated pattern and exception
    /// tokens.
    ///
    /// # Errors
    ///
    /// [`BuildError::NoPatterns`] when `patterns_text` contains no tokens.
    pub fn build(
        patterns_text: &str,
        exceptions_text: &str,
        opts: Options,
    ) -> Result<Self, BuildError> {
        let store = PatternStore::build(patterns_text, opts.sort_patterns)?;
        let exceptions = ExceptionTable::build(exceptions_text);
        debug!(
            patterns = store.len(),
            exceptions = exceptions.len(),
            "hyphenation engine built"
        );
        Ok(Self {
            store,
            exceptions,
            opts,
        })
    }

    /// Insert break symbols into every eligible word of `text`.
    ///
    /// The text is partitioned into maximal runs of letters and everything
    /// else; separators pass through verbatim, in position and count. Unless
    /// [`Options::hyphenate_last_word`] is set, the trailing word (plus any
    /// punctuation after it) is exempted — except when no separator precedes
    /// it, i.e. the whole text is one word, which is hyphenated normally.
    #[must_use]
    pub fn hyphenate_text(&self, text: &str) -> String {
        trace!(len = text.len(), "hyphenating text");
        if self.opts.hyphenate_last_word {
            return self.hyphenate_runs(text);
        }
        let tail_start = exempt_tail_start(text);
        let mut out = self.hyphenate_runs(&text[..tail_start]);
        out.push_str(&text[tail_start..]);
        out
    }

    /// Insert break symbols into a single word.
    ///
    /// Total over all inputs: ineligible or unbreakable words come back
    /// unchanged (borrowed, no allocation). Case is preserved; matching is
    /// done on the lowercased word.
    #[must_use]
    pub fn hyphenate_word<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().count() <= self.opts.min_word_length {
            return Cow::Borrowed(word);
        }
        let lower = word.to_lowercase();
        if let Some(mask) = self.exceptions.lookup(&lower) {
            // Exceptions are authoritative: no margin correction.
            return self.render(word, mask);
        }
        let levels = levels_for_word(&self.store, &lower);
        let mut mask = mask_from_levels(&levels);
        apply_margins(&mut mask, self.opts.min_letter_count);
        self.render(word, &mask)
    }

    /// Walk the original-case word, emitting the break symbol before every
    /// letter the mask marks.
    fn render<'a>(&self, word: &'a str, mask: &[bool]) -> Cow<'a, str> {
        let breaks = mask.iter().filter(|&&b| b).count();
        if breaks == 0 {
            return Cow::Borrowed(word);
        }
        let mut out =
            String::with_capacity(word.len() + breaks * self.opts.hyphen_symbol.len());
        for (i, ch) in word.chars().enumerate() {
            if mask.get(i).copied().unwrap_or(false) {
                out.push_str(&self.opts.hyphen_symbol);
            }
            out.push(ch);
        }
        Cow::Owned(out)
    }

    /// Hyphenate every letter run of `text`, keeping separators verbatim.
    fn hyphenate_runs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word = String::new();
        for ch in text.chars() {
            if ch.is_alphabetic() {
                word.push(ch);
            } else {
                if !word.is_empty() {
                    out.push_str(&self.hyphenate_word(&word));
                    word.clear();
                }
                out.push(ch);
            }
        }
        if !word.is_empty() {
            out.push_str(&self.hyphenate_word(&word));
        }
        out
    }
}

/// Byte offset where the exempted trailing word begins, or `text.len()` when
/// nothing is exempted.
///
/// Scans backward: trailing separators belong to the tail; the first
/// separator hit after a letter marks the boundary. Reaching the front of
/// the text without one means the text is a single leading word, which is
/// deliberately not exempted.
fn exempt_tail_start(text: &str) -> usize {
    let mut word_start = None;
    for (idx, ch) in text.char_indices().rev() {
        if ch.is_alphabetic() {
            word_start = Some(idx);
        } else if let Some(start) = word_start {
            return start;
        }
    }
    text.len()
}
