//! Break masks: levels → per-letter booleans, plus margin correction.

use smallvec::SmallVec;

/// One boolean per letter of a word; `mask[i]` permits a break immediately
/// before letter `i`. Index 0 is structurally false — no content precedes
/// the first letter.
pub(crate) type HyphenMask = SmallVec<[bool; 24]>;

/// Derive the break mask from the padded-word level array.
///
/// `levels[i + 1]` is the level in the gap before letter `i` (offset by the
/// leading marker); odd means break allowed.
pub(crate) fn mask_from_levels(levels: &[u8]) -> HyphenMask {
    let mask_len = levels.len().saturating_sub(2);
    let mut mask = HyphenMask::from_elem(false, mask_len);
    for i in 1..mask_len {
        mask[i] = levels[i + 1] % 2 != 0;
    }
    mask
}

/// Clear break slots that fall within `min_letter_count` letters of either
/// edge of the word. Words too short to keep both margins lose every break.
pub(crate) fn apply_margins(mask: &mut [bool], min_letter_count: usize) {
    if mask.len() > min_letter_count {
        let head = min_letter_count;
        let tail = min_letter_count.saturating_sub(1);
        mask[..head].fill(false);
        let len = mask.len();
        mask[len - tail..].fill(false);
    } else {
        mask.fill(false);
    }
}
