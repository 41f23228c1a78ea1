//! Property-based invariant tests for the hyphenation engine.
//!
//! These verify the structural laws that must hold for any input:
//!
//! 1. Words at or under the minimum length come back unchanged.
//! 2. Removing the break symbol reconstructs the word exactly (round-trip).
//! 3. No break lands inside the edge margins.
//! 4. Exception words emit exactly the table's breaks.
//! 5. Text hyphenation preserves every non-letter character in order.
//! 6. Text hyphenation round-trips like words do.
//! 7. No input panics the engine.

use proptest::prelude::*;
use softbreak::{Hyphenator, Options};

// ── Helpers ─────────────────────────────────────────────────────────────

const SYMBOL: char = '\u{2027}'; // hyphenation point; never in generated input

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,14}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    // Letter runs mixed with digits, punctuation, and whitespace.
    "[a-zA-Z0-9 .,;!?-]{0,60}"
}

fn pattern_text_strategy() -> impl Strategy<Value = String> {
    // Tokens alternating letters and digits, e.g. "b1c", "3de", "ab4".
    proptest::collection::vec("[1-9]?[a-e]{1,2}[1-9]?[a-e]{0,2}", 1..20)
        .prop_map(|tokens| tokens.join(" "))
}

fn engine(patterns: &str, min_word_length: usize, min_letter_count: usize) -> Hyphenator {
    Hyphenator::build(
        patterns,
        "",
        Options::default()
            .with_hyphen_symbol(SYMBOL)
            .with_min_word_length(min_word_length)
            .with_min_letter_count(min_letter_count)
            // Generated pattern text is in arbitrary order.
            .with_sort_patterns(true),
    )
    .expect("at least one token generated")
}

/// Letter indices at which the break symbol was inserted.
fn break_positions(rendered: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut letters = 0usize;
    for ch in rendered.chars() {
        if ch == SYMBOL {
            positions.push(letters);
        } else {
            letters += 1;
        }
    }
    positions
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Minimum word length
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn short_words_unchanged(word in word_strategy(), patterns in pattern_text_strategy()) {
        let hyph = engine(&patterns, 5, 1);
        if word.chars().count() <= 5 {
            prop_assert_eq!(hyph.hyphenate_word(&word), word.as_str());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Round-trip: stripping the symbol restores the word
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn word_round_trip(word in word_strategy(), patterns in pattern_text_strategy()) {
        let hyph = engine(&patterns, 2, 1);
        let stripped: String = hyph
            .hyphenate_word(&word)
            .chars()
            .filter(|&c| c != SYMBOL)
            .collect();
        prop_assert_eq!(stripped, word);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Margin law
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn breaks_respect_margins(
        word in word_strategy(),
        patterns in pattern_text_strategy(),
        margin in 0usize..4,
    ) {
        let hyph = engine(&patterns, 2, margin);
        let rendered = hyph.hyphenate_word(&word);
        let len = word.chars().count();
        for pos in break_positions(&rendered) {
            prop_assert!(pos >= margin, "break at {} under margin {}", pos, margin);
            prop_assert!(
                pos + margin.max(1) - 1 < len,
                "break at {} inside right margin {} of {}-letter word",
                pos, margin, len
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Exception override
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exceptions_are_authoritative(
        patterns in pattern_text_strategy(),
        gaps in proptest::collection::vec(any::<bool>(), 6),
    ) {
        // Build an exception token for the fixed word "abcdefg" from the
        // generated gap pattern.
        let word = "abcdefg";
        let mut token = String::new();
        for (i, ch) in word.chars().enumerate() {
            if i > 0 && gaps[i - 1] {
                token.push('-');
            }
            token.push(ch);
        }

        let hyph = Hyphenator::build(
            &patterns,
            &token,
            Options::default()
                .with_hyphen_symbol(SYMBOL)
                .with_min_word_length(2)
                .with_min_letter_count(3)
                .with_sort_patterns(true),
        ).unwrap();

        let expected: Vec<usize> =
            (1..7).filter(|&i| gaps[i - 1]).collect();
        prop_assert_eq!(break_positions(&hyph.hyphenate_word(word)), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5 + 6. Text laws: separator preservation and round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn text_preserves_separators(
        text in text_strategy(),
        patterns in pattern_text_strategy(),
        last_word in any::<bool>(),
    ) {
        let hyph = Hyphenator::build(
            &patterns,
            "",
            Options::default()
                .with_hyphen_symbol(SYMBOL)
                .with_min_word_length(2)
                .with_min_letter_count(1)
                .with_hyphenate_last_word(last_word)
                .with_sort_patterns(true),
        ).unwrap();

        let rendered = hyph.hyphenate_text(&text);

        let stripped: String = rendered.chars().filter(|&c| c != SYMBOL).collect();
        prop_assert_eq!(&stripped, &text);

        let separators = |s: &str| -> String {
            s.chars().filter(|c| !c.is_alphabetic() && *c != SYMBOL).collect()
        };
        prop_assert_eq!(separators(&rendered), separators(&text));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Totality: nothing panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,40}", patterns in pattern_text_strategy()) {
        let hyph = engine(&patterns, 5, 3);
        let _ = hyph.hyphenate_text(&text);
    }
}
