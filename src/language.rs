//! Language hint handling.
//!
//! The host passes a two-letter code or a full locale identifier. Only
//! Turkish is distinguished; everything else uses the English tables.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "tr")]
    Turkish,
}

impl Language {
    /// Parse a language hint such as `"tr"`, `"TR"`, `"tr-TR"` or `"tr_TR"`.
    ///
    /// Total: unknown, empty or malformed hints fall back to English.
    pub fn from_hint(hint: &str) -> Self {
        let primary = hint
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        if primary.eq_ignore_ascii_case("tr") {
            Language::Turkish
        } else {
            Language::English
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }

    /// Lowercase `text` using this language's casing rules.
    ///
    /// Turkish maps `I` to `ı` and `İ` to `i`; the generic Unicode mapping
    /// would turn `İ` into `i` + U+0307 and miss keywords like `hiç`.
    pub fn lowercase(self, text: &str) -> String {
        match self {
            Language::English => text.to_lowercase(),
            Language::Turkish => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    match c {
                        'I' => out.push('ı'),
                        'İ' => out.push('i'),
                        _ => out.extend(c.to_lowercase()),
                    }
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_parsing() {
        assert_eq!(Language::from_hint("tr"), Language::Turkish);
        assert_eq!(Language::from_hint(" TR "), Language::Turkish);
        assert_eq!(Language::from_hint("tr-TR"), Language::Turkish);
        assert_eq!(Language::from_hint("tr_TR"), Language::Turkish);
        assert_eq!(Language::from_hint("en"), Language::English);
        assert_eq!(Language::from_hint("de_DE"), Language::English);
        assert_eq!(Language::from_hint("tra"), Language::English);
        assert_eq!(Language::from_hint(""), Language::English);
    }

    #[test]
    fn test_turkish_casing() {
        assert_eq!(Language::Turkish.lowercase("HİÇ"), "hiç");
        assert_eq!(Language::Turkish.lowercase("KIRMIZI"), "kırmızı");
        assert_eq!(Language::English.lowercase("NEVER"), "never");
    }

    #[test]
    fn test_lowercase_keeps_non_ascii() {
        assert_eq!(Language::English.lowercase("ÖLMEK Şimdi"), "ölmek şimdi");
        assert_eq!(Language::Turkish.lowercase("ÖLMEK Şimdi"), "ölmek şimdi");
    }
}
