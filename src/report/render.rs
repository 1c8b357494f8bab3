// src/report/render.rs
use crate::report::model::{Block, ChartBlock, ChartKind, MetadataBlock, ReportModel, TableBlock};
use crate::utils::error::RenderError;
use std::fmt::Write;

/// Turns a finished report model into a document.
pub trait DocumentRenderer {
    fn render(&self, model: &ReportModel) -> Result<String, RenderError>;
}

/// Plain Markdown rendering of a report. Layout is deliberately minimal.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    /// Width in characters of the longest chart bar.
    pub bar_width: usize,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, model: &ReportModel) -> Result<String, RenderError> {
        let mut out = String::new();
        writeln!(out, "# Diagnostic Report: {}", model.customer_name())?;

        for block in model.blocks() {
            writeln!(out)?;
            match block {
                Block::Metadata(meta) => write_metadata(&mut out, meta)?,
                Block::Chart(chart) => self.write_chart(&mut out, chart)?,
                Block::Table(table) => write_table(&mut out, table)?,
                Block::Empty(empty) => {
                    writeln!(out, "## {}", empty.title())?;
                    writeln!(out)?;
                    writeln!(out, "_{}_", empty.message())?;
                }
            }
        }

        Ok(out)
    }
}

impl MarkdownRenderer {
    fn write_chart(&self, out: &mut String, chart: &ChartBlock) -> Result<(), RenderError> {
        let spec = chart.chart_spec();
        let kind = match spec.kind {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        };
        writeln!(out, "## {} ({})", spec.title, kind)?;
        writeln!(out)?;
        writeln!(out, "```")?;

        let max = spec.values.iter().copied().fold(0.0_f64, f64::max);
        let label_width = spec.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        for (label, value) in spec.labels.iter().zip(&spec.values) {
            let len = if max > 0.0 {
                ((value / max) * self.bar_width as f64).round().max(0.0) as usize
            } else {
                0
            };
            writeln!(out, "{:<width$} | {} {}", label, "#".repeat(len), value, width = label_width)?;
        }

        writeln!(out, "```")?;
        Ok(())
    }
}

/// Metadata laid out two entries per row, `**Field:** value` in each cell.
fn write_metadata(out: &mut String, meta: &MetadataBlock) -> Result<(), RenderError> {
    writeln!(out, "| | |")?;
    writeln!(out, "|---|---|")?;
    for pair in meta.entries().chunks(2) {
        let cells: Vec<_> = pair
            .iter()
            .map(|e| format!("**{}:** {}", e.key, e.value).replace('|', "\\|"))
            .collect();
        writeln!(out, "| {} | {} |", cells[0], cells.get(1).map(String::as_str).unwrap_or_default())?;
    }
    Ok(())
}

fn write_table(out: &mut String, table: &TableBlock) -> Result<(), RenderError> {
    writeln!(out, "## {}", table.title())?;
    writeln!(out)?;
    writeln!(out, "| {} |", table.columns().join(" | "))?;
    writeln!(out, "|{}", "---|".repeat(table.columns().len()))?;
    for row in table.rows() {
        let cells: Vec<_> = row.0.iter().map(|c| c.replace('|', "\\|")).collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{segment, Row};
    use crate::report::build_report;

    fn model(raw: &[&[&str]]) -> ReportModel {
        let sections = segment(raw.iter().map(|r| Row::normalize(*r)).collect()).expect("non-empty input");
        build_report(&sections)
    }

    #[test]
    fn test_metadata_renders_two_entries_per_row() {
        let report = model(&[
            &["Customer name", "", "Jane"],
            &["Model name", "", "F150"],
            &["ECM number", "", "6AW-8591A"],
        ]);
        let md = MarkdownRenderer::default().render(&report).expect("render succeeds");
        assert!(md.contains("| **Customer name:** Jane | **Model name:** F150 |\n"));
        assert!(md.contains("| **ECM number:** 6AW-8591A |  |\n"));
    }

    #[test]
    fn test_markdown_contains_blocks() {
        let report = model(&[
            &["Customer name", "", "Jane"],
            &["4. Operating hours by engine speed"],
            &["0 - 1000 r/min", "10"],
            &["1000 - 2000 r/min", "5"],
            &["7. Data comparison"],
            &["Battery | main", "12.1", "12.6", "V"],
        ]);
        let md = MarkdownRenderer::default().render(&report).expect("render succeeds");

        assert!(md.starts_with("# Diagnostic Report: Jane\n"));
        assert!(md.contains("|---|---|\n| **Customer name:** Jane |  |\n"));
        assert!(md.contains("## Operating Hours by Engine Speed (bar)"));
        assert!(md.contains(&format!("0 - 1000 r/min    | {} 10", "#".repeat(40))));
        assert!(md.contains(&format!("1000 - 2000 r/min | {} 5", "#".repeat(20))));
        assert!(md.contains("| Item | Before | After | Unit |"));
        assert!(md.contains("| Battery \\| main | 12.1 | 12.6 | V |"));
        assert!(md.contains("## Oil Exchange Record\n\n_No data available_"));
    }
}
