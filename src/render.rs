//! Purpose: Turn query results into the CLI's human text and JSON documents.
//! Exports: `format_record`, `search_text`, `duplicates_text`, `search_json`, `duplicates_json`,
//! `count_json`.
//! Role: Pure rendering; callers decide where and whether to print.
//! Invariants: Human output lists records in the order the query engine returned them.
//! Invariants: JSON documents embed records verbatim (original key order).

use serde_json::{Value, json};

use client_cli::core::record::value_text;
use client_cli::{DuplicateGroup, Record};

use crate::color_json::{Painter, Style};

/// `Key: value, Key: value`, keys capitalized, null rendered empty.
pub(crate) fn format_record(record: &Record, painter: Painter) -> String {
    record
        .iter()
        .map(|(key, value)| {
            let label = painter.paint(&format!("{}:", capitalize(key)), Style::Key);
            let text = value_text(value).unwrap_or_default();
            format!("{label} {text}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub(crate) fn search_text(field: &str, query: &str, results: &[&Record], painter: Painter) -> String {
    if results.is_empty() {
        return format!("No records found with {field} matching '{query}'");
    }
    let mut lines = vec![
        format!(
            "Found {} record(s) with {field} matching '{query}':",
            results.len()
        ),
        String::new(),
    ];
    lines.extend(results.iter().map(|record| format_record(record, painter)));
    lines.join("\n")
}

pub(crate) fn duplicates_text(field: &str, groups: &[DuplicateGroup<'_>], painter: Painter) -> String {
    if groups.is_empty() {
        return format!("No duplicate {field} values found in the dataset");
    }
    let mut lines = Vec::new();
    for group in groups {
        lines.extend(group.records.iter().map(|record| format_record(record, painter)));
        lines.push(String::new());
    }
    lines.push(format!(
        "Found {} {field} value(s) with duplicates:",
        groups.len()
    ));
    lines.join("\n")
}

pub(crate) fn search_json(field: &str, query: &str, results: &[&Record]) -> Value {
    json!({
        "field": field,
        "query": query,
        "count": results.len(),
        "records": results,
    })
}

pub(crate) fn duplicates_json(field: &str, groups: &[DuplicateGroup<'_>]) -> Value {
    json!({
        "field": field,
        "groups": groups,
    })
}

pub(crate) fn count_json(count: usize) -> Value {
    json!({ "count": count })
}
