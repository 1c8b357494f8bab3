// src/extractors/row.rs
//! Normalized rows and the cell accessors every extractor shares.
//!
//! Raw readout exports are loosely positioned: a key may sit in column 0
//! with its value in column 1 or column 2, and rows of the same section
//! differ in width. [`Row::cell`] is the single place that decides what an
//! absent cell looks like, and [`resolve_value`] is the single fallback
//! chain built on top of it.

use serde::{Deserialize, Serialize};

/// Reserved value meaning "field not present". Never forwarded to a report block.
pub const PLACEHOLDER: &str = "(empty)";

/// One normalized row: quoting and surrounding whitespace stripped from every cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row(Vec<String>);

impl Row {
    /// Normalizes a raw row. Side-effect free.
    pub fn normalize<S: AsRef<str>>(raw: &[S]) -> Self {
        Row(raw.iter().map(|c| normalize_cell(c.as_ref())).collect())
    }

    /// True when every cell is empty after normalization (or there are no cells).
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|c| c.is_empty())
    }

    /// Cell at `idx`, or `None` if the row is too short or the cell is empty.
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.0
            .get(idx)
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// First cell, the one carrying keys, item names and section markers.
    pub fn first(&self) -> Option<&str> {
        self.cell(0)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Exactly `width` cells, padding missing ones with empty strings.
    pub fn take_padded(&self, width: usize) -> Vec<String> {
        (0..width)
            .map(|i| self.0.get(i).cloned().unwrap_or_default())
            .collect()
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

/// Normalizes every raw row and drops the ones that end up blank.
pub fn normalize_rows<S: AsRef<str>>(raw_rows: &[Vec<S>]) -> Vec<Row> {
    raw_rows
        .iter()
        .map(|r| Row::normalize(r))
        .filter(|r| !r.is_blank())
        .collect()
}

/// Value for a key/value row: the third cell if present, else the second
/// cell unless it just repeats the key (a header row), else [`PLACEHOLDER`].
pub fn resolve_value<'a>(row: &'a Row, key: &str) -> &'a str {
    row.cell(2)
        .or_else(|| row.cell(1).filter(|v| *v != key))
        .unwrap_or(PLACEHOLDER)
}

/// Forward-only cursor over a section's rows with one-row lookahead.
pub struct RowCursor<'a> {
    rows: &'a [Row],
    pos: usize,
}

impl<'a> RowCursor<'a> {
    pub fn new(rows: &'a [Row]) -> Self {
        Self { rows, pos: 0 }
    }

    /// Next row without consuming it.
    pub fn peek(&self) -> Option<&'a Row> {
        self.rows.get(self.pos)
    }

    /// Consumes the next row only if `pred` accepts it.
    pub fn next_if(&mut self, pred: impl FnOnce(&Row) -> bool) -> Option<&'a Row> {
        let row = self.peek().filter(|r| pred(r))?;
        self.pos += 1;
        Some(row)
    }
}

impl<'a> Iterator for RowCursor<'a> {
    type Item = &'a Row;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.get(self.pos)?;
        self.pos += 1;
        Some(row)
    }
}
