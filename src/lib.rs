//! Deterministic safety heuristics for the Untwist self-help app.
//!
//! Three pure, stateless components over static tables:
//! 1. Thought trap classification (bilingual keyword scoring)
//! 2. Crisis-language detection (bilingual phrase matching with diacritic folding)
//! 3. Crisis hotline registry (per-country lines and country resolution)
//!
//! No I/O, no shared mutable state: every function is safe to call from
//! any thread. Enable the `python` feature for the native host module.

pub mod crisis;
pub mod hotlines;
pub mod language;
pub mod normalize;
pub mod thought_traps;
pub mod trap_keywords;

#[cfg(feature = "python")]
mod python;

pub use crisis::{crisis_phrases, detect_crisis, matched_phrase};
pub use hotlines::{
    all_hotlines, find_a_helpline_url, flag_emoji, hotline_by_id, local_hotlines,
    other_hotlines, resolved_country_code, supported_country_codes, Hotline, HotlineError,
};
pub use language::Language;
pub use thought_traps::{analyze, analyze_with_hint, score_for_matches, TrapSuggestion};
pub use trap_keywords::{ThoughtTrapCategory, UnknownCategory};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Untwist core: native safety heuristics for a Python host.
#[cfg(feature = "python")]
#[pymodule]
fn untwist_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyHotline>()?;

    // Thought traps
    m.add_function(wrap_pyfunction!(python::analyze, m)?)?;

    // Crisis language
    m.add_function(wrap_pyfunction!(python::detect_crisis, m)?)?;

    // Hotlines
    m.add_function(wrap_pyfunction!(python::local_hotlines, m)?)?;
    m.add_function(wrap_pyfunction!(python::other_hotlines, m)?)?;
    m.add_function(wrap_pyfunction!(python::resolved_country_code, m)?)?;
    m.add_function(wrap_pyfunction!(python::supported_country_codes, m)?)?;

    Ok(())
}
