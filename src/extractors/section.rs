// src/extractors/section.rs

// --- Imports ---
use crate::extractors::row::Row;
use crate::utils::error::PipelineError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;

// --- Constants ---
/// Section that collects every row seen before the first marker.
pub const DEFAULT_SECTION: &str = "Metadata";

// --- Regex Patterns (Lazy Static) ---
// "3. Diagnosis", "3.Diagnosis" -- but not "1.5" or a bare "3."
static SECTION_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-7]\.\s*[^\d\s]").expect("Failed to compile SECTION_START_RE")
});

/// True if the row's first cell is a section-start marker.
pub fn is_section_start(row: &Row) -> bool {
    row.first().is_some_and(|c| SECTION_START_RE.is_match(c))
}

/// Leading section number of a marker cell ("3. Diagnosis" -> 3).
pub fn section_number(name: &str) -> Option<u8> {
    let (digits, _) = name.split_once('.')?;
    digits.trim().parse().ok()
}

// --- Data Structures ---
/// Insertion-ordered mapping from section name to its rows.
///
/// The name list records first appearance; the table is only used for
/// lookup. Iteration never depends on hash order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    order: Vec<String>,
    rows: HashMap<String, Vec<Row>>,
}

impl Sections {
    /// Appends a row to `name`, creating the section on first use.
    fn push(&mut self, name: &str, row: Row) {
        match self.rows.get_mut(name) {
            Some(rows) => rows.push(row),
            None => {
                self.order.push(name.to_string());
                self.rows.insert(name.to_string(), vec![row]);
            }
        }
    }

    /// Section names in first-appearance order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Rows of a section; empty if the section never appeared.
    pub fn get(&self, name: &str) -> &[Row] {
        self.rows.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Names of every section whose marker carries `number`, in input order.
    pub fn numbered_names(&self, number: u8) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| section_number(name) == Some(number))
            .map(String::as_str)
            .collect()
    }

    /// Rows of every section carrying `number`, concatenated in input order.
    /// Markers differing only in title ("3. Engine record" / "3. Engine Record")
    /// land in separate sections; this reads them as one.
    pub fn numbered_rows(&self, number: u8) -> Cow<'_, [Row]> {
        match self.numbered_names(number).as_slice() {
            [] => Cow::Borrowed(&[]),
            [name] => Cow::Borrowed(self.get(name)),
            names => {
                tracing::debug!("Merging {} sections numbered {}: {:?}", names.len(), number, names);
                Cow::Owned(names.iter().flat_map(|name| self.get(name).iter().cloned()).collect())
            }
        }
    }

    /// (name, rows) pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Row])> {
        self.order.iter().map(|name| (name.as_str(), self.get(name)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Groups normalized rows into sections in a single left-to-right scan.
///
/// A marker row switches the current section and is kept as that section's
/// first row. A repeated marker appends to the existing section.
pub fn segment(rows: Vec<Row>) -> Result<Sections, PipelineError> {
    if rows.is_empty() {
        return Err(PipelineError::Structural(
            "input contains no rows to segment".to_string(),
        ));
    }

    let mut sections = Sections::default();
    let mut current = DEFAULT_SECTION.to_string();

    for row in rows {
        if is_section_start(&row) {
            if let Some(marker) = row.first() {
                current = marker.to_string();
                tracing::debug!("Section start marker: '{}'", current);
            }
        }
        sections.push(&current, row);
    }

    tracing::info!(
        "Segmented input into {} sections: {:?}",
        sections.len(),
        sections.names()
    );
    Ok(sections)
}
