//! Python host bindings.
//!
//! Thin wrappers returning plain Python values; all logic stays in the
//! pure Rust modules.

use pyo3::prelude::*;

use crate::hotlines::{self, Hotline};
use crate::language::Language;
use crate::thought_traps;

/// Read-only hotline record handed to Python.
#[pyclass(frozen, get_all, name = "Hotline")]
#[derive(Clone)]
pub struct PyHotline {
    pub id: String,
    pub country_code: String,
    pub raw_number: String,
    pub display_number: String,
    pub name_key: String,
    pub name_default: String,
    pub source_url: Option<String>,
    pub last_verified_at: Option<String>,
    pub dial_url: Option<String>,
}

impl From<&Hotline> for PyHotline {
    fn from(h: &Hotline) -> Self {
        PyHotline {
            id: h.id.to_string(),
            country_code: h.country_code.to_string(),
            raw_number: h.raw_number.to_string(),
            display_number: h.display_number.to_string(),
            name_key: h.name_key.to_string(),
            name_default: h.name_default.to_string(),
            source_url: h.source_url.map(str::to_string),
            last_verified_at: h.last_verified_at.map(str::to_string),
            dial_url: h.dial_url().ok().map(|u| u.to_string()),
        }
    }
}

#[pymethods]
impl PyHotline {
    fn __repr__(&self) -> String {
        format!("Hotline(id={:?}, country_code={:?})", self.id, self.country_code)
    }
}

/// Rank possible thought traps.
///
/// Returns a list of (category_id, score) tuples, highest score first.
#[pyfunction]
#[pyo3(signature = (text, language_hint="en"))]
pub fn analyze(text: &str, language_hint: &str) -> Vec<(String, f64)> {
    thought_traps::analyze_with_hint(text, language_hint)
        .into_iter()
        .map(|s| (s.category.id().to_string(), s.score))
        .collect()
}

/// Check text for explicit crisis language in either supported language.
#[pyfunction]
#[pyo3(signature = (text, language_hint="en"))]
pub fn detect_crisis(text: &str, language_hint: &str) -> bool {
    crate::crisis::detect_crisis(text, Language::from_hint(language_hint))
}

#[pyfunction]
#[pyo3(signature = (country_code=None))]
pub fn local_hotlines(country_code: Option<&str>) -> Vec<PyHotline> {
    hotlines::local_hotlines(country_code)
        .into_iter()
        .map(PyHotline::from)
        .collect()
}

#[pyfunction]
#[pyo3(signature = (country_code=None))]
pub fn other_hotlines(country_code: Option<&str>) -> Vec<PyHotline> {
    hotlines::other_hotlines(country_code)
        .into_iter()
        .map(PyHotline::from)
        .collect()
}

#[pyfunction]
#[pyo3(signature = (override_code=None, system_locale_country_code=None))]
pub fn resolved_country_code(
    override_code: Option<&str>,
    system_locale_country_code: Option<&str>,
) -> Option<String> {
    hotlines::resolved_country_code(override_code, system_locale_country_code)
}

/// Sorted list of country codes with at least one hotline.
#[pyfunction]
pub fn supported_country_codes() -> Vec<String> {
    hotlines::supported_country_codes()
        .iter()
        .map(|c| c.to_string())
        .collect()
}
