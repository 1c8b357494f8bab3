// src/report/builder.rs
//! Assembles extracted sections into a [`ReportModel`] in a fixed block order.

use crate::extractors::records::{MONITOR_CHANNEL_MARKERS, MONITOR_SENTINEL};
use crate::extractors::section::DEFAULT_SECTION;
use crate::extractors::{
    aggregate_metrics, extract_metadata, extract_records, oil_exchange_series,
    speed_range_series, RecordPolicy, Row, Sections, SeriesPoint,
};
use crate::report::model::{Block, ChartKind, ReportModel};

pub const NO_CHART_DATA: &str = "No data available";
pub const NO_TABLE_RECORDS: &str = "No records found";
pub const NO_METADATA: &str = "No metadata found";

/// A chart-bearing numbered section.
struct ChartSection {
    number: u8,
    title: &'static str,
    kind: ChartKind,
    extract: fn(&[Row]) -> Vec<SeriesPoint>,
}

/// A record-bearing numbered section.
struct TableSection {
    number: u8,
    title: &'static str,
    columns: &'static [&'static str],
    policy: RecordPolicy,
}

const CHARTS: &[ChartSection] = &[
    ChartSection {
        number: 4,
        title: "Operating Hours by Engine Speed",
        kind: ChartKind::Bar,
        extract: speed_range_series,
    },
    ChartSection {
        number: 5,
        title: "Oil Exchange Record",
        kind: ChartKind::Line,
        extract: oil_exchange_series,
    },
];

const TABLES: &[TableSection] = &[
    TableSection {
        number: 3,
        title: "Engine Record",
        columns: &["Item", "Value"],
        policy: RecordPolicy::KeyValue,
    },
    TableSection {
        number: 6,
        title: "Engine Monitor",
        columns: &["Item", "Value", "Unit"],
        policy: RecordPolicy::SentinelTruncated {
            sentinel: MONITOR_SENTINEL,
            excluded: MONITOR_CHANNEL_MARKERS,
        },
    },
    TableSection {
        number: 1,
        title: "Diagnosis",
        columns: &["Code", "Item", "Result"],
        policy: RecordPolicy::DigitKeyed { cell: 0 },
    },
    TableSection {
        number: 2,
        title: "Diagnosis Record",
        columns: &["Code", "Item", "Count", "Hours"],
        policy: RecordPolicy::DigitKeyed { cell: 0 },
    },
    TableSection {
        number: 7,
        title: "Data Comparison",
        columns: &["Item", "Before", "After", "Unit"],
        policy: RecordPolicy::Plain,
    },
];

/// Builds the report: metadata (with promoted metrics), the charts, then the tables.
///
/// Every block is appended once and never touched again. A section that is
/// missing or yields nothing becomes an empty-fallback block.
pub fn build_report(sections: &Sections) -> ReportModel {
    let mut blocks = Vec::with_capacity(1 + CHARTS.len() + TABLES.len());

    let metadata = extract_metadata(sections.get(DEFAULT_SECTION));
    let mut entries = metadata.entries;
    entries.extend(aggregate_metrics(sections));
    tracing::info!("Metadata block with {} entries", entries.len());
    blocks.push(Block::metadata(DEFAULT_SECTION, entries, NO_METADATA));

    for chart in CHARTS {
        let series = (chart.extract)(&sections.numbered_rows(chart.number));
        tracing::debug!("Chart '{}': {} points", chart.title, series.len());
        blocks.push(Block::chart(chart.title, series, chart.kind, NO_CHART_DATA));
    }

    for table in TABLES {
        let rows = extract_records(&sections.numbered_rows(table.number), table.columns, table.policy);
        tracing::debug!("Table '{}': {} rows", table.title, rows.len());
        blocks.push(Block::table(table.title, table.columns, rows, NO_TABLE_RECORDS));
    }

    let fallbacks = blocks.iter().filter(|b| b.is_empty_fallback()).count();
    tracing::info!(
        "Assembled report for '{}': {} blocks ({} empty)",
        metadata.customer_name,
        blocks.len(),
        fallbacks
    );

    ReportModel::new(metadata.customer_name, sections.names().to_vec(), blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{segment, FieldEntry, RecordRow};
    use crate::report::model::EmptyBlock;

    fn sections(raw: &[&[&str]]) -> Sections {
        segment(raw.iter().map(|r| Row::normalize(*r)).collect()).expect("non-empty input")
    }

    fn titles(model: &ReportModel) -> Vec<&str> {
        model.blocks().iter().map(Block::title).collect()
    }

    #[test]
    fn test_fixed_block_order_with_fallbacks() {
        let model = build_report(&sections(&[&["Model name", "", "F150"]]));
        assert_eq!(
            titles(&model),
            vec![
                "Metadata",
                "Operating Hours by Engine Speed",
                "Oil Exchange Record",
                "Engine Record",
                "Engine Monitor",
                "Diagnosis",
                "Diagnosis Record",
                "Data Comparison",
            ]
        );
        assert!(matches!(model.blocks()[0], Block::Metadata(_)));
        assert!(model.blocks()[1..].iter().all(Block::is_empty_fallback));
        assert_eq!(
            model.blocks()[1],
            Block::Empty(EmptyBlock::new("Operating Hours by Engine Speed", NO_CHART_DATA))
        );
        assert_eq!(
            model.blocks()[3],
            Block::Empty(EmptyBlock::new("Engine Record", NO_TABLE_RECORDS))
        );
        assert_eq!(model.customer_name(), "Unknown");
    }

    #[test]
    fn test_total_hours_appended_after_comment() {
        let model = build_report(&sections(&[
            &["Customer name", "", "Jane"],
            &["Comment"],
            &["Runs rough"],
            &["3. Engine record"],
            &["Total operating hours", "", "88.2"],
        ]));
        let Block::Metadata(meta) = &model.blocks()[0] else {
            panic!("expected metadata block");
        };
        let keys: Vec<_> = meta.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["Customer name", "Comment", "Total Engine Hours"]);
        assert!(matches!(model.blocks()[3], Block::Table(_)), "Engine record has a row");
    }

    #[test]
    fn test_metadata_fallback_when_nothing_present() {
        let model = build_report(&sections(&[&["1. Diagnosis"], &["15", "Pump", "OK"]]));
        assert_eq!(
            model.blocks()[0],
            Block::Empty(EmptyBlock::new("Metadata", NO_METADATA))
        );
        let Block::Table(diag) = &model.blocks()[5] else {
            panic!("expected diagnosis table");
        };
        assert_eq!(diag.columns(), &["Code", "Item", "Result"]);
        assert_eq!(diag.rows().len(), 1);
    }

    #[test]
    fn test_diagnosis_keeps_only_coded_rows() {
        let model = build_report(&sections(&[
            &["1. Diagnosis"],
            &["No.", "Item", "Result"],
            &["", "Thermo sensor", "NG"],
            &["1A", "Oil pressure", "NG"],
            &["15", "Thermo sensor", "NG"],
        ]));
        let Block::Table(diag) = &model.blocks()[5] else {
            panic!("expected diagnosis table");
        };
        assert_eq!(
            diag.rows(),
            &[RecordRow(vec!["15".into(), "Thermo sensor".into(), "NG".into()])]
        );
    }

    #[test]
    fn test_same_number_sections_feed_one_block() {
        let model = build_report(&sections(&[
            &["3. Engine record"],
            &["Number of starts", "12"],
            &["3. Engine Record"],
            &["Total operating hours", "", "99"],
        ]));
        assert_eq!(model.section_order(), &["3. Engine record", "3. Engine Record"]);

        let Block::Metadata(meta) = &model.blocks()[0] else {
            panic!("expected metadata block with the promoted hours");
        };
        assert_eq!(meta.entries(), &[FieldEntry::new("Total Engine Hours", "99")]);

        let Block::Table(record) = &model.blocks()[3] else {
            panic!("expected engine record table");
        };
        let items: Vec<_> = record.rows().iter().map(|r| r.0[0].as_str()).collect();
        assert_eq!(items, vec!["Number of starts", "Total operating hours"]);
    }
}
