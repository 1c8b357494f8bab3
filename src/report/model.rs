// src/report/model.rs
//! Renderer-agnostic report model.
//!
//! A [`ReportModel`] is an ordered list of typed blocks, built once per
//! conversion and handed off read-only. The constructors here are the only
//! way to make blocks, so the invariants hold for every model:
//! no metadata entry carries the placeholder, and no block is empty
//! without a fallback message.

use crate::extractors::{FieldEntry, RecordRow, SeriesPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// What a chart rasterizer needs: labels, values and the chart kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec<'a> {
    pub title: &'a str,
    pub labels: Vec<&'a str>,
    pub values: Vec<f64>,
    pub kind: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataBlock {
    entries: Vec<FieldEntry>,
}

impl MetadataBlock {
    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBlock {
    title: String,
    series: Vec<SeriesPoint>,
    kind: ChartKind,
}

impl ChartBlock {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn chart_spec(&self) -> ChartSpec<'_> {
        ChartSpec {
            title: &self.title,
            labels: self.series.iter().map(|p| p.label.as_str()).collect(),
            values: self.series.iter().map(|p| p.value).collect(),
            kind: self.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    title: String,
    columns: Vec<String>,
    rows: Vec<RecordRow>,
}

impl TableBlock {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[RecordRow] {
        &self.rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyBlock {
    title: String,
    message: String,
}

impl EmptyBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Metadata(MetadataBlock),
    Chart(ChartBlock),
    Table(TableBlock),
    Empty(EmptyBlock),
}

impl Block {
    /// Metadata block from the present entries, or the fallback if none are left.
    pub fn metadata(title: &str, entries: Vec<FieldEntry>, fallback: &str) -> Self {
        let entries: Vec<_> = entries.into_iter().filter(FieldEntry::present).collect();
        if entries.is_empty() {
            return Block::Empty(EmptyBlock::new(title, fallback));
        }
        Block::Metadata(MetadataBlock { entries })
    }

    pub fn chart(title: &str, series: Vec<SeriesPoint>, kind: ChartKind, fallback: &str) -> Self {
        if series.is_empty() {
            return Block::Empty(EmptyBlock::new(title, fallback));
        }
        Block::Chart(ChartBlock {
            title: title.to_string(),
            series,
            kind,
        })
    }

    pub fn table(title: &str, columns: &[&str], rows: Vec<RecordRow>, fallback: &str) -> Self {
        if rows.is_empty() {
            return Block::Empty(EmptyBlock::new(title, fallback));
        }
        Block::Table(TableBlock {
            title: title.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Block::Metadata(_) => "Metadata",
            Block::Chart(c) => c.title(),
            Block::Table(t) => t.title(),
            Block::Empty(e) => e.title(),
        }
    }

    pub fn is_empty_fallback(&self) -> bool {
        matches!(self, Block::Empty(_))
    }
}

/// The core's sole output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    customer_name: String,
    section_order: Vec<String>,
    blocks: Vec<Block>,
}

impl ReportModel {
    pub(crate) fn new(customer_name: String, section_order: Vec<String>, blocks: Vec<Block>) -> Self {
        Self {
            customer_name,
            section_order,
            blocks,
        }
    }

    /// First customer name in the metadata section, or "Unknown".
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Section names in the order they first appeared in the input.
    pub fn section_order(&self) -> &[String] {
        &self.section_order
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::PLACEHOLDER;

    #[test]
    fn test_metadata_block_drops_placeholders() {
        let block = Block::metadata(
            "Metadata",
            vec![FieldEntry::new("Model name", PLACEHOLDER), FieldEntry::new("ECM number", "X1")],
            "none",
        );
        match block {
            Block::Metadata(m) => assert_eq!(m.entries(), &[FieldEntry::new("ECM number", "X1")]),
            other => panic!("expected metadata block, got {:?}", other),
        }

        let empty = Block::metadata("Metadata", vec![FieldEntry::new("Model name", PLACEHOLDER)], "none");
        assert_eq!(empty, Block::Empty(EmptyBlock::new("Metadata", "none")));
    }

    #[test]
    fn test_empty_content_becomes_fallback() {
        let chart = Block::chart("Oil", Vec::new(), ChartKind::Line, "No data available");
        assert!(chart.is_empty_fallback());
        assert_eq!(chart.title(), "Oil");

        let table = Block::table("Diagnosis", &["Code"], Vec::new(), "No records found");
        assert_eq!(table, Block::Empty(EmptyBlock::new("Diagnosis", "No records found")));
    }

    #[test]
    fn test_chart_spec() {
        let block = Block::chart(
            "Hours",
            vec![
                SeriesPoint { label: "0 - 1000 r/min".into(), value: 2.0 },
                SeriesPoint { label: "1000 - 2000 r/min".into(), value: 3.5 },
            ],
            ChartKind::Bar,
            "none",
        );
        let Block::Chart(chart) = block else {
            panic!("expected chart block");
        };
        let spec = chart.chart_spec();
        assert_eq!(spec.labels, vec!["0 - 1000 r/min", "1000 - 2000 r/min"]);
        assert_eq!(spec.values, vec![2.0, 3.5]);
        assert_eq!(spec.kind, ChartKind::Bar);
    }

    #[test]
    fn test_block_serializes_with_type_tag() {
        let block = Block::Empty(EmptyBlock::new("Diagnosis", "No records found"));
        let json = serde_json::to_value(&block).expect("serializable");
        assert_eq!(json["type"], "empty");
        assert_eq!(json["message"], "No records found");
    }
}
