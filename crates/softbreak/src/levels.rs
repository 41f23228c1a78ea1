//! Level computation over the marker-padded word.

use smallvec::SmallVec;

use crate::pattern::PatternStore;

/// Synthetic anchor appended to both ends of a word before matching.
pub(crate) const MARKER: char = '.';

pub(crate) type LevelsBuf = SmallVec<[u8; 24]>;

/// Compute, for the padded word `"." + word + "."`, the maximum pattern
/// level at every inter-character position.
///
/// Every stored pattern whose character sequence occurs at offset `i` of
/// the padded word contributes `levels[i + k] = max(levels[i + k],
/// pattern.levels[k])` for each of its positions; a final-position write
/// landing past the buffer is dropped (it can never reach the mask).
///
/// The store is sorted, so per start offset the candidate window only grows
/// and a monotone cursor can skip patterns comparing strictly less than the
/// window. Once every remaining pattern compares less, no longer window can
/// match and the inner scan stops. Window comparisons are plain `[char]`
/// slice comparisons; nothing is allocated per candidate.
pub(crate) fn levels_for_word(store: &PatternStore, word: &str) -> LevelsBuf {
    let mut padded: SmallVec<[char; 24]> = SmallVec::with_capacity(word.len() + 2);
    padded.push(MARKER);
    padded.extend(word.chars());
    padded.push(MARKER);

    let mut levels = LevelsBuf::from_elem(0, padded.len());
    let patterns = store.patterns();

    for start in 0..padded.len() {
        let mut cursor = 0;
        for end in (start + 1)..=padded.len() {
            let window = &padded[start..end];
            while cursor < patterns.len() && patterns[cursor].chars() < window {
                cursor += 1;
            }
            if cursor == patterns.len() {
                break;
            }
            if patterns[cursor].chars() == window {
                for (k, &level) in patterns[cursor].levels().iter().enumerate() {
                    let pos = start + k;
                    if pos < levels.len() && level > levels[pos] {
                        levels[pos] = level;
                    }
                }
            }
        }
    }

    levels
}
