#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use softbreak::{Hyphenator, Options};

static ENGINE: OnceLock<Hyphenator> = OnceLock::new();

fn engine() -> &'static Hyphenator {
    ENGINE.get_or_init(|| {
        Hyphenator::build(
            ".a1b b1c c3d ing5. 2e.",
            "ex-cep-tion",
            Options::default()
                .with_hyphen_symbol("\u{2027}")
                .with_min_word_length(2)
                .with_min_letter_count(1)
                .with_sort_patterns(true),
        )
        .expect("static pattern set builds")
    })
}

fuzz_target!(|text: &str| {
    let out = engine().hyphenate_text(text);
    // Stripping the inserted symbol must restore the input.
    let stripped: String = out.chars().filter(|&c| c != '\u{2027}').collect();
    assert_eq!(stripped, text.replace('\u{2027}', ""));
});
