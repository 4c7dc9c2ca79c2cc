//! Text folding for crisis-phrase matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for phrase matching: lowercase, canonical decomposition with
/// combining marks removed, dotless `ı` to `i`, typographic apostrophes to `'`.
///
/// `"KENDİMİ ÖLDÜRMEK"` and `"kendimi oldurmek"` fold to the same string.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            // No decomposition exists for the dotless i.
            'ı' => 'i',
            '\u{2018}' | '\u{2019}' | '\u{02BC}' => '\'',
            other => other,
        })
        .collect()
}
