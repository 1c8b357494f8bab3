// src/lib.rs
//! Turns a section-delimited diagnostic readout export into a
//! renderer-agnostic report model.
//!
//! ```
//! let rows = vec![
//!     vec!["\"Customer name\"", "\"\"", "\"Jane Doe\""],
//!     vec!["4. Operating hours by engine speed"],
//!     vec!["0 - 1000 r/min", "12.5"],
//! ];
//! let model = readout_report::convert(&rows).unwrap();
//! assert_eq!(model.customer_name(), "Jane Doe");
//! ```

pub mod extractors;
pub mod input;
pub mod pipeline;
pub mod report;
pub mod storage;
pub mod utils;

pub use pipeline::convert;
pub use report::ReportModel;
pub use utils::error::PipelineError;
