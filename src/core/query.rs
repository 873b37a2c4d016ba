//! Purpose: Field-based search and duplicate detection over a loaded dataset.
//! Exports: `QueryEngine`, `DuplicateGroup`.
//! Role: Read-only query surface consumed by the CLI shell.
//! Invariants: Results borrow from the dataset and keep dataset order.
//! Invariants: Search is case-insensitive substring; duplicate grouping is exact-value.
//! Invariants: Empty datasets accept any field; non-empty ones reject fields no record has.
//! Notes: All operations are linear scans; nothing is indexed or cached between calls.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::record::{Dataset, Record};

pub const NAME_FIELD: &str = "full_name";
pub const EMAIL_FIELD: &str = "email";

// Absent fields group with explicit nulls.
static NULL: Value = Value::Null;

/// Records sharing one exact value of a field. Always holds two or more records.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DuplicateGroup<'a> {
    pub value: &'a Value,
    pub count: usize,
    pub records: Vec<&'a Record>,
}

#[derive(Clone, Debug)]
pub struct QueryEngine {
    dataset: Dataset,
}

impl QueryEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn total_count(&self) -> usize {
        self.dataset.len()
    }

    pub fn search_by_field(&self, field: &str, query: &str) -> Result<Vec<&Record>> {
        let needle = query.trim();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        self.validate_field_exists(field)?;

        let needle = needle.to_lowercase();
        let matches = self
            .dataset
            .records()
            .iter()
            .filter(|record| {
                record
                    .text(field)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .collect::<Vec<_>>();
        trace!(field, matches = matches.len(), "search");
        Ok(matches)
    }

    pub fn search_by_name(&self, query: &str) -> Result<Vec<&Record>> {
        self.search_by_field(NAME_FIELD, query)
    }

    pub fn find_duplicates_by_field(&self, field: &str) -> Result<Vec<DuplicateGroup<'_>>> {
        self.validate_field_exists(field)?;

        // Keyed by canonical JSON text so `1` and `"1"` stay distinct.
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<DuplicateGroup<'_>> = Vec::new();
        for record in self.dataset.records() {
            let value = record.get(field).unwrap_or(&NULL);
            let key = value.to_string();
            match slots.get(&key) {
                Some(&slot) => {
                    let group = &mut groups[slot];
                    group.records.push(record);
                    group.count += 1;
                }
                None => {
                    slots.insert(key, groups.len());
                    groups.push(DuplicateGroup {
                        value,
                        count: 1,
                        records: vec![record],
                    });
                }
            }
        }
        groups.retain(|group| group.count > 1);
        trace!(field, groups = groups.len(), "duplicates");
        Ok(groups)
    }

    pub fn find_duplicate_emails(&self) -> Result<Vec<DuplicateGroup<'_>>> {
        self.find_duplicates_by_field(EMAIL_FIELD)
    }

    fn validate_field_exists(&self, field: &str) -> Result<()> {
        let records = self.dataset.records();
        let Some(first) = records.first() else {
            return Ok(());
        };
        if records.iter().any(|record| record.contains_field(field)) {
            return Ok(());
        }
        // Hint samples the first record only; heterogeneous datasets may have more keys.
        let available = first.keys().collect::<Vec<_>>().join(", ");
        Err(Error::new(ErrorKind::UnknownField)
            .with_message(format!(
                "field '{field}' not found in dataset. Available fields: {available}"
            ))
            .with_field(field)
            .with_hint(format!("Try one of: {available}")))
    }
}
