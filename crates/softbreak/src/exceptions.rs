//! Explicit word → mask overrides for words the patterns get wrong.

use rustc_hash::FxHashMap;

use crate::mask::HyphenMask;

/// Exception table: exact word matches bypass pattern matching entirely,
/// margin correction included.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    masks: FxHashMap<String, HyphenMask>,
}

impl ExceptionTable {
    /// Build from whitespace-separated tokens like `"ta-ble"`.
    ///
    /// The lookup key is the token with literal hyphens removed; the mask
    /// marks a break before every letter a hyphen precedes. Keys keep the
    /// token's original case while [`lookup`](Self::lookup) receives the
    /// already-lowercased word, so a token that is not lowercase in the
    /// source file can never match. That asymmetry is reference behavior
    /// and is kept as-is.
    #[must_use]
    pub fn build(exceptions_text: &str) -> Self {
        let mut masks = FxHashMap::default();
        for token in exceptions_text.split_whitespace() {
            let key: String = token.chars().filter(|&ch| ch != '-').collect();
            if key.is_empty() {
                continue;
            }
            let mut mask = HyphenMask::new();
            let mut pending = false;
            for ch in token.chars() {
                if ch == '-' {
                    pending = true;
                } else {
                    mask.push(pending && !mask.is_empty());
                    pending = false;
                }
            }
            masks.insert(key, mask);
        }
        Self { masks }
    }

    /// Exact-match lookup; no normalization happens here.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&[bool]> {
        self.masks.get(word).map(|mask| mask.as_slice())
    }

    /// Number of exception words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}
