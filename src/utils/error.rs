// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Structural error: {0}")]
    Structural(String), // Input row sequence is empty; fatal for the whole conversion
}

/// A cell that failed typed conversion during series/record extraction.
/// Never propagated: the Series Builder logs it and skips the row.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot coerce {cell:?} to {target}")]
pub struct CoercionWarning {
    pub cell: String,
    pub target: &'static str,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV decoding error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Reading input failed: {0}")]
    Input(#[from] InputError),

    #[error("Conversion failed: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
