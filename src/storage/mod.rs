// src/storage/mod.rs
use crate::report::{Block, ReportModel};
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// File stem shared by every output of one conversion: `<customer>_<timestamp>`.
    pub fn file_stem(model: &ReportModel) -> String {
        format!(
            "{}_{}",
            sanitize(model.customer_name()),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        )
    }

    /// Saves the report model as pretty-printed JSON
    pub fn save_model(&self, model: &ReportModel, stem: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_report.json", stem));

        let json = serde_json::to_string_pretty(model)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved report model to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves a rendered document
    pub fn save_rendered(&self, rendered: &str, stem: &str, extension: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_report.{}", stem, extension));
        fs::write(&file_path, rendered).map_err(StorageError::IoError)?;

        tracing::info!("Saved rendered report to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the conversion in JSON format
    pub fn save_report_metadata(&self, model: &ReportModel, source: &Path, stem: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", stem));

        let blocks = model.blocks();
        let metadata = serde_json::json!({
            "source_file": source.display().to_string(),
            "customer_name": model.customer_name(),
            "sections": model.section_order(),
            "block_count": blocks.len(),
            "chart_blocks": blocks.iter().filter(|b| matches!(b, Block::Chart(_))).count(),
            "table_blocks": blocks.iter().filter(|b| matches!(b, Block::Table(_))).count(),
            "empty_blocks": blocks.iter().filter(|b| b.is_empty_fallback()).count(),
            "conversion_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Keeps a customer name usable as part of a file name.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed.to_string()
    }
}
