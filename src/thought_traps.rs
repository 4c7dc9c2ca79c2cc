//! Thought trap classification: keyword scoring over ten categories.
//!
//! Matching is plain substring containment on the lowercased text, not
//! word-boundary aware: `"should"` also hits inside `"shoulder"`.

use serde::Serialize;

use crate::language::Language;
use crate::trap_keywords::ThoughtTrapCategory;

/// Lowest score that makes it into the result list.
pub const MIN_SCORE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrapSuggestion {
    pub category: ThoughtTrapCategory,
    /// One of 0.3, 0.6 or 0.9.
    pub score: f64,
    /// Number of distinct keywords found in the text.
    pub matched: usize,
}

/// Coarse step function from keyword hits to score.
pub fn score_for_matches(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 0.3,
        2 => 0.6,
        _ => 0.9,
    }
}

/// Count the keywords of `category` found in any of the lowercased
/// haystacks. A keyword counts once even if several haystacks contain it.
fn match_count(haystacks: &[&str], category: ThoughtTrapCategory, language: Language) -> usize {
    category
        .keywords(language)
        .iter()
        .filter(|kw| haystacks.iter().any(|h| h.contains(*kw)))
        .count()
}

/// Suggest possible thought traps for `text`, highest score first.
///
/// Categories without a single keyword hit are dropped. Equal scores keep
/// the canonical category order.
pub fn analyze(text: &str, language: Language) -> Vec<TrapSuggestion> {
    let cased = language.lowercase(text);
    // Turkish casing turns ASCII `I` into `ı`; all-caps text typed without
    // `İ` still has to match keywords spelled with `i`.
    let generic = match language {
        Language::Turkish => Some(text.to_lowercase()),
        Language::English => None,
    };
    let mut haystacks = vec![cased.as_str()];
    haystacks.extend(generic.as_deref());

    let mut suggestions: Vec<TrapSuggestion> = ThoughtTrapCategory::ALL
        .into_iter()
        .map(|category| {
            let matched = match_count(&haystacks, category, language);
            TrapSuggestion {
                category,
                score: score_for_matches(matched),
                matched,
            }
        })
        .filter(|s| s.score >= MIN_SCORE)
        .collect();

    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        language = language.code(),
        suggestions = suggestions.len(),
        "thought trap analysis complete"
    );
    suggestions
}

/// [`analyze`] with a raw language hint such as `"tr"` or `"en_US"`.
pub fn analyze_with_hint(text: &str, language_hint: &str) -> Vec<TrapSuggestion> {
    analyze(text, Language::from_hint(language_hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(results: &[TrapSuggestion]) -> Vec<ThoughtTrapCategory> {
        results.iter().map(|s| s.category).collect()
    }

    fn assert_well_formed(results: &[TrapSuggestion]) {
        for s in results {
            assert!([0.3, 0.6, 0.9].contains(&s.score), "bad score {}", s.score);
        }
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_score_steps() {
        assert_eq!(score_for_matches(0), 0.0);
        assert_eq!(score_for_matches(1), 0.3);
        assert_eq!(score_for_matches(2), 0.6);
        assert_eq!(score_for_matches(3), 0.9);
        assert_eq!(score_for_matches(12), 0.9);
    }

    #[test]
    fn test_benign_text_is_empty() {
        assert!(analyze("I went for a nice walk today", Language::English).is_empty());
        assert!(analyze("", Language::English).is_empty());
        assert!(analyze("", Language::Turkish).is_empty());
    }

    #[test]
    fn test_all_or_nothing() {
        let results = analyze(
            "I always fail at everything, it's completely ruined",
            Language::English,
        );
        assert!(categories(&results).contains(&ThoughtTrapCategory::AllOrNothing));
        assert_eq!(results[0].category, ThoughtTrapCategory::AllOrNothing);
        assert_eq!(results[0].score, 0.9);
        assert_well_formed(&results);
    }

    #[test]
    fn test_should_statements() {
        let results = analyze(
            "I should be more productive, I must work harder",
            Language::English,
        );
        let should = results
            .iter()
            .find(|s| s.category == ThoughtTrapCategory::ShouldStatements)
            .unwrap();
        assert_eq!(should.matched, 2);
        assert_eq!(should.score, 0.6);
    }

    #[test]
    fn test_labeling() {
        let results = analyze("I'm such a stupid idiot loser", Language::English);
        assert!(categories(&results).contains(&ThoughtTrapCategory::Labeling));
        assert_well_formed(&results);
    }

    #[test]
    fn test_sorted_highest_first() {
        let results = analyze(
            "I always fail, it's completely impossible, everything is totally ruined",
            Language::English,
        );
        assert!(results.len() >= 2);
        assert_well_formed(&results);
    }

    #[test]
    fn test_uppercase_input() {
        let results = analyze("EVERYONE HATES ME, NOBODY CARES", Language::English);
        assert!(categories(&results).contains(&ThoughtTrapCategory::Overgeneralization));
    }

    #[test]
    fn test_turkish_keywords() {
        let results = analyze(
            "hep başarısız oluyorum, hiçbir şey yolunda gitmiyor",
            Language::Turkish,
        );
        assert!(!results.is_empty());
        assert!(categories(&results).contains(&ThoughtTrapCategory::Labeling));
        assert_well_formed(&results);
    }

    #[test]
    fn test_turkish_uppercase_dotted_i() {
        let results = analyze("HİÇBİR ŞEY YOLUNDA GİTMİYOR", Language::Turkish);
        let aon = results
            .iter()
            .find(|s| s.category == ThoughtTrapCategory::AllOrNothing)
            .unwrap();
        assert_eq!(aon.matched, 2);
    }

    #[test]
    fn test_turkish_ascii_uppercase_i() {
        let results = analyze("HIÇBIR ŞEY YOLUNDA GITMIYOR", Language::Turkish);
        let aon = results
            .iter()
            .find(|s| s.category == ThoughtTrapCategory::AllOrNothing)
            .unwrap();
        assert_eq!(aon.score, 0.6);
        assert_eq!(aon.matched, 2);
        assert!(categories(&results).contains(&ThoughtTrapCategory::Overgeneralization));
        assert_well_formed(&results);
    }

    #[test]
    fn test_keyword_counted_once_across_casings() {
        // "hep" is found by both the Turkish and the generic lowercasing.
        let results = analyze("HEP", Language::Turkish);
        let aon = results
            .iter()
            .find(|s| s.category == ThoughtTrapCategory::AllOrNothing)
            .unwrap();
        assert_eq!(aon.matched, 1);
        assert_eq!(aon.score, 0.3);
    }

    #[test]
    fn test_hint_selects_table() {
        let text = "hep başarısız oluyorum";
        assert!(!analyze_with_hint(text, "tr").is_empty());
        assert!(analyze_with_hint(text, "en").is_empty());
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        let results = analyze("my shoulder hurts", Language::English);
        assert_eq!(categories(&results), vec![ThoughtTrapCategory::ShouldStatements]);
        assert_eq!(results[0].score, 0.3);
    }

    #[test]
    fn test_idempotent() {
        let text = "It's all my fault, I'm such a failure and I should have known";
        assert_eq!(analyze(text, Language::English), analyze(text, Language::English));
    }
}
