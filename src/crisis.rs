//! Crisis-language detection.
//!
//! High-precision phrase matching for explicit self-harm and suicide
//! language. Both phrase lists are always scanned: a user may write in
//! either language regardless of device locale. Single words such as
//! "die" or "kill" are deliberately absent.

use once_cell::sync::Lazy;

use crate::language::Language;
use crate::normalize::fold;

static CRISIS_PHRASES_EN: &[&str] = &[
    "kill myself",
    "want to die",
    "end my life",
    "suicide",
    "don't want to live",
    "no reason to live",
    "better off dead",
    "can't go on",
    "end it all",
];

static CRISIS_PHRASES_TR: &[&str] = &[
    "kendimi öldür",
    "ölmek istiyorum",
    "yaşamak istemiyorum",
    "intihar",
    "hayatıma son",
    "yaşamanın anlamı yok",
    "ölsem daha iyi",
    "dayanamıyorum",
    "her şeyi bitir",
];

struct CrisisPhrase {
    original: &'static str,
    folded: String,
    language: Language,
}

static CRISIS_PHRASES: Lazy<Vec<CrisisPhrase>> = Lazy::new(|| {
    let en = CRISIS_PHRASES_EN.iter().map(|&p| (p, Language::English));
    let tr = CRISIS_PHRASES_TR.iter().map(|&p| (p, Language::Turkish));
    en.chain(tr)
        .map(|(original, language)| CrisisPhrase {
            original,
            folded: fold(original),
            language,
        })
        .collect()
});

/// Static crisis phrases for `language`, in their original spelling.
pub fn crisis_phrases(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => CRISIS_PHRASES_EN,
        Language::Turkish => CRISIS_PHRASES_TR,
    }
}

fn find_phrase(text: &str) -> Option<&'static CrisisPhrase> {
    if text.trim().is_empty() {
        return None;
    }
    let haystack = fold(text);
    CRISIS_PHRASES
        .iter()
        .find(|phrase| haystack.contains(phrase.folded.as_str()))
}

/// The first crisis phrase found in `text`, as written in the phrase list.
pub fn matched_phrase(text: &str) -> Option<&'static str> {
    find_phrase(text).map(|phrase| phrase.original)
}

/// Whether `text` contains explicit crisis language.
///
/// `language` is accepted for symmetry with [`crate::analyze`]; it does not
/// narrow the scan.
pub fn detect_crisis(text: &str, language: Language) -> bool {
    match find_phrase(text) {
        Some(phrase) => {
            tracing::warn!(
                hint = language.code(),
                phrase_language = phrase.language.code(),
                "crisis language detected"
            );
            true
        }
        None => false,
    }
}
