//! Generates the static hotline table from `config/hotlines.toml`.
//!
//! Every dataset invariant is checked here, so the runtime registry never
//! has to deal with a malformed entry.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

const SOURCE: &str = "config/hotlines.toml";

struct Entry {
    id: String,
    country_code: String,
    number: String,
    display_number: String,
    name_key: String,
    name_default: String,
    source_url: Option<String>,
    last_verified_at: Option<String>,
}

fn main() {
    println!("cargo:rerun-if-changed={SOURCE}");
    println!("cargo:rerun-if-changed=build.rs");

    let raw = fs::read_to_string(SOURCE)
        .unwrap_or_else(|e| panic!("failed to read {SOURCE}: {e}"));
    let doc: toml::Table =
        toml::from_str(&raw).unwrap_or_else(|e| panic!("failed to parse {SOURCE}: {e}"));

    let rows = doc
        .get("hotline")
        .and_then(toml::Value::as_array)
        .unwrap_or_else(|| panic!("{SOURCE}: expected [[hotline]] entries"));

    let mut seen_ids = HashSet::new();
    let mut entries = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let table = row
            .as_table()
            .unwrap_or_else(|| panic!("{SOURCE}: hotline #{idx} is not a table"));
        let entry = parse_entry(idx, table);
        if !seen_ids.insert(entry.id.clone()) {
            panic!("{SOURCE}: duplicate hotline id '{}'", entry.id);
        }
        entries.push(entry);
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("hotlines.rs");
    fs::write(&dest, render(&entries))
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", dest.display()));
}

fn parse_entry(idx: usize, table: &toml::Table) -> Entry {
    let required = |key: &str| -> String {
        let value = table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        if value.is_empty() {
            panic!("{SOURCE}: hotline #{idx} is missing '{key}'");
        }
        value.to_string()
    };
    let optional = |key: &str| -> Option<String> {
        table
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let entry = Entry {
        id: required("id"),
        country_code: required("country_code"),
        number: required("number"),
        display_number: required("display_number"),
        name_key: required("name_key"),
        name_default: required("name_default"),
        source_url: optional("source_url"),
        last_verified_at: optional("last_verified_at"),
    };

    if entry.country_code.len() != 2 || !entry.country_code.bytes().all(|b| b.is_ascii_uppercase())
    {
        panic!(
            "{SOURCE}: hotline '{}' has invalid country_code '{}'",
            entry.id, entry.country_code
        );
    }
    if !is_dialable(&entry.number) {
        panic!(
            "{SOURCE}: hotline '{}' has invalid number '{}'",
            entry.id, entry.number
        );
    }
    if let Some(url) = &entry.source_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            panic!("{SOURCE}: hotline '{}' has invalid source_url '{url}'", entry.id);
        }
    }
    if let Some(date) = &entry.last_verified_at {
        if !is_iso_date(date) {
            panic!(
                "{SOURCE}: hotline '{}' has invalid last_verified_at '{date}'",
                entry.id
            );
        }
    }
    entry
}

// Same rule as `DIALABLE` in src/hotlines.rs, which guards `Hotline::dial_url`.
fn is_dialable(number: &str) -> bool {
    let digits = number.strip_prefix('+').unwrap_or(number);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_iso_date(date: &str) -> bool {
    let mut parts = date.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return false;
    }
    if ![y, m, d].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
        return false;
    }
    let (Ok(year), Ok(month), Ok(day)) = (y.parse::<u32>(), m.parse::<u32>(), d.parse::<u32>())
    else {
        return false;
    };
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}

fn render(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str("// @generated by build.rs from config/hotlines.toml\n");
    out.push_str("pub(crate) static HOTLINES: &[Hotline] = &[\n");
    for e in entries {
        out.push_str(&format!(
            "    Hotline {{\n        id: {:?},\n        country_code: {:?},\n        raw_number: {:?},\n        display_number: {:?},\n        name_key: {:?},\n        name_default: {:?},\n        source_url: {},\n        last_verified_at: {},\n    }},\n",
            e.id,
            e.country_code,
            e.number,
            e.display_number,
            e.name_key,
            e.name_default,
            render_opt(&e.source_url),
            render_opt(&e.last_verified_at),
        ));
    }
    out.push_str("];\n");
    out
}

fn render_opt(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("Some({v:?})"),
        None => "None".to_string(),
    }
}
