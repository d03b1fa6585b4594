//! Accent- and case-insensitive text folding.

use unicode_normalization::UnicodeNormalization;

/// Fold text for comparison: lowercase, canonical decomposition, then drop
/// combining diacritical marks. Absent input folds to the empty string.
///
/// `normalize(Some("Café"))` and `normalize(Some("CAFE"))` both give `"cafe"`.
#[must_use]
pub fn normalize(input: Option<&str>) -> String {
    input
        .unwrap_or_default()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

/// U+0300..=U+036F, the Combining Diacritical Marks block.
const fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}
