// src/extractors/fields.rs
//! Key/value extraction for the metadata section.

use crate::extractors::row::{resolve_value, Row, RowCursor, PLACEHOLDER};
use crate::extractors::section::is_section_start;
use serde::{Deserialize, Serialize};

// --- Constants ---
pub const COMMENT_KEY: &str = "Comment";
pub const CUSTOMER_KEY: &str = "Customer name";
pub const DEALER_KEY: &str = "Dealer name";
/// Dealer names are masked to this constant whatever the export says.
pub const DEALER_MASK: &str = "Northside Marine";
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// Keys recognised in the metadata section.
pub const METADATA_KEYS: &[&str] = &[
    "YAMAHA DIAGNOSTIC SYSTEM",
    "Save date & time",
    CUSTOMER_KEY,
    DEALER_KEY,
    "Number of engines",
    COMMENT_KEY,
    "Model name",
    "Engine serial number (PID number)",
    "ECM number",
];

/// Name a raw key is shown under.
pub fn display_name(key: &str) -> &str {
    match key {
        "Save date & time" => "Service Date",
        other => other,
    }
}

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub key: String,
    pub value: String,
}

impl FieldEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// False when the value is the placeholder.
    pub fn present(&self) -> bool {
        self.value != PLACEHOLDER
    }
}

/// Everything pulled out of the metadata section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFields {
    /// Present entries only, in block order.
    pub entries: Vec<FieldEntry>,
    pub customer_name: String,
}

/// Extracts the recognised metadata fields from a section's rows.
///
/// Repeated keys each produce an entry. The comment is taken from the row
/// after the `Comment` key (unless that row opens a new section) and is
/// placed after the other fields; the last comment seen wins.
pub fn extract_metadata(rows: &[Row]) -> MetadataFields {
    let mut entries = Vec::new();
    let mut comment = PLACEHOLDER;
    let mut customer_name: Option<String> = None;
    let mut cursor = RowCursor::new(rows);

    while let Some(row) = cursor.next() {
        let Some(key) = row.first().filter(|k| METADATA_KEYS.contains(k)) else {
            continue;
        };

        if key == COMMENT_KEY {
            comment = cursor
                .next_if(|next| !is_section_start(next))
                .and_then(Row::first)
                .unwrap_or(PLACEHOLDER);
            continue;
        }

        let value = match key {
            DEALER_KEY => DEALER_MASK,
            _ => resolve_value(row, key),
        };
        if value == PLACEHOLDER {
            tracing::debug!("Metadata key '{}' has no value, omitting", key);
            continue;
        }

        if key == CUSTOMER_KEY && customer_name.is_none() {
            customer_name = Some(value.to_string());
        }
        entries.push(FieldEntry::new(display_name(key), value));
    }

    if comment != PLACEHOLDER {
        entries.push(FieldEntry::new(COMMENT_KEY, comment));
    }

    MetadataFields {
        entries,
        customer_name: customer_name.unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Row> {
        raw.iter().map(|r| Row::normalize(*r)).collect()
    }

    fn keys(fields: &MetadataFields) -> Vec<&str> {
        fields.entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_extracts_known_keys_with_remap_and_mask() {
        let fields = extract_metadata(&rows(&[
            &["YAMAHA DIAGNOSTIC SYSTEM", "", "Ver 1.80"],
            &["Save date & time", "", "2024/05/01 10:22"],
            &["Customer name", "", "Jane Doe"],
            &["Dealer name", "", "Some Other Dealer"],
            &["Not a key", "", "ignored"],
            &["Model name", "F150"],
        ]));

        assert_eq!(
            keys(&fields),
            vec!["YAMAHA DIAGNOSTIC SYSTEM", "Service Date", "Customer name", "Dealer name", "Model name"]
        );
        assert_eq!(fields.entries[3].value, DEALER_MASK);
        assert_eq!(fields.entries[4].value, "F150");
        assert_eq!(fields.customer_name, "Jane Doe");
    }

    #[test]
    fn test_dealer_mask_applies_without_value() {
        let fields = extract_metadata(&rows(&[&["Dealer name"]]));
        assert_eq!(fields.entries, vec![FieldEntry::new("Dealer name", DEALER_MASK)]);
    }

    #[test]
    fn test_placeholder_fields_are_omitted() {
        let fields = extract_metadata(&rows(&[
            &["Model name", "Model name"],
            &["ECM number"],
        ]));
        assert!(fields.entries.is_empty());
        assert_eq!(fields.customer_name, UNKNOWN_CUSTOMER);
    }

    #[test]
    fn test_comment_continuation() {
        let fields = extract_metadata(&rows(&[
            &["Comment"],
            &["Great bike"],
            &["Model name", "", "F150"],
        ]));
        assert_eq!(keys(&fields), vec!["Model name", "Comment"]);
        assert_eq!(fields.entries[1].value, "Great bike");
    }

    #[test]
    fn test_comment_followed_by_marker_is_omitted() {
        let fields = extract_metadata(&rows(&[&["Comment"], &["1. Diagnosis"]]));
        assert!(fields.entries.iter().all(|e| e.key != COMMENT_KEY));
    }

    #[test]
    fn test_comment_row_is_consumed() {
        // The consumed comment text must not be read as a key on its own.
        let fields = extract_metadata(&rows(&[&["Comment"], &["Model name"], &["ECM number", "", "X1"]]));
        assert_eq!(keys(&fields), vec!["ECM number", "Comment"]);
        assert_eq!(fields.entries[1].value, "Model name");
    }

    #[test]
    fn test_customer_name_first_match_wins_and_duplicates_kept() {
        let fields = extract_metadata(&rows(&[
            &["Customer name", "", "First"],
            &["Customer name", "", "Second"],
        ]));
        assert_eq!(fields.customer_name, "First");
        assert_eq!(keys(&fields), vec!["Customer name", "Customer name"]);
    }
}
