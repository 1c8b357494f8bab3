// src/report/mod.rs
pub mod builder;
pub mod model;
pub mod render;

// Re-export key report types for convenience
pub use builder::build_report;
pub use model::{Block, ChartBlock, ChartKind, ChartSpec, EmptyBlock, MetadataBlock, ReportModel, TableBlock};
pub use render::{DocumentRenderer, MarkdownRenderer};
