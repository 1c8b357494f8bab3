// src/extractors/mod.rs
pub mod fields;
pub mod metrics;
pub mod records;
pub mod row;
pub mod section;
pub mod series;

// Re-export key extraction types for convenience
pub use fields::{extract_metadata, FieldEntry, MetadataFields};
pub use metrics::aggregate_metrics;
pub use records::{extract_records, RecordPolicy, RecordRow};
pub use row::{normalize_rows, Row, PLACEHOLDER};
pub use section::{is_section_start, segment, Sections};
pub use series::{oil_exchange_series, speed_range_series, SeriesPoint};
