//! Hyphenation patterns and the sorted pattern store.

use std::cmp::Ordering;

use crate::error::BuildError;

/// A compiled hyphenation pattern.
///
/// Liang patterns interleave digits with characters: `"hy3p"` means the
/// position between `y` and `p` carries level 3. Odd levels allow a break,
/// even levels forbid one; higher levels win. The marker `.` is an ordinary
/// pattern character that anchors a pattern to the start or end of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    chars: Vec<char>,
    levels: Vec<u8>,
}

impl Pattern {
    /// Parse a single whitespace-free pattern token.
    ///
    /// A digit sets the level immediately before the next character; a
    /// character with no preceding digit gets level 0 at that position. A
    /// trailing level 0 is appended when the token does not end in a digit,
    /// so `levels.len() == chars.len() + 1` for every well-formed token.
    ///
    /// - `"hy3p"` → chars `['h','y','p']`, levels `[0,0,3,0]`
    /// - `"2ph"` → chars `['p','h']`, levels `[2,0,0]`
    /// - `".ab4c"` → chars `['.','a','b','c']`, levels `[0,0,0,4,0]`
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let mut chars = Vec::with_capacity(token.len());
        let mut levels = Vec::with_capacity(token.len() + 1);
        let mut wait_digit = true;
        for ch in token.chars() {
            if let Some(digit) = ch.to_digit(10) {
                levels.push(digit as u8);
                wait_digit = false;
            } else {
                if wait_digit {
                    levels.push(0);
                }
                chars.push(ch);
                wait_digit = true;
            }
        }
        if wait_digit {
            levels.push(0);
        }
        Self { chars, levels }
    }

    /// The pattern's character sequence, markers included.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Levels at each inter-character position; `levels()[i]` sits
    /// immediately before `chars()[i]`, the last entry after the final char.
    #[must_use]
    pub fn levels(&self) -> &[u8] {
        &self.levels
    }
}

impl Ord for Pattern {
    /// Lexicographic on the character sequence; when one sequence is a
    /// prefix of the other, the shorter pattern sorts first. Levels only
    /// break full ties so the ordering stays consistent with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars
            .as_slice()
            .cmp(&other.chars)
            .then_with(|| self.levels.cmp(&other.levels))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The sorted set of patterns for one language.
///
/// The matcher walks a forward-only cursor through the store, which is only
/// valid over ascending order. Pattern tables shipped pre-sorted can skip
/// the sort; others (several European-language tables) must pass
/// `sort = true`.
#[derive(Debug, Clone)]
pub struct PatternStore {
    patterns: Vec<Pattern>,
}

impl PatternStore {
    /// Parse whitespace-separated pattern tokens, optionally sorting them.
    ///
    /// # Errors
    ///
    /// [`BuildError::NoPatterns`] when the text contains no tokens.
    pub fn build(patterns_text: &str, sort: bool) -> Result<Self, BuildError> {
        let mut patterns: Vec<Pattern> = patterns_text
            .split_whitespace()
            .map(Pattern::parse)
            .collect();
        if patterns.is_empty() {
            return Err(BuildError::NoPatterns);
        }
        if sort {
            patterns.sort();
        }
        Ok(Self { patterns })
    }

    pub(crate) fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Number of stored patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
