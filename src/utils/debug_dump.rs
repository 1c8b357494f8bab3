// src/utils/debug_dump.rs
use crate::extractors::section::{is_section_start, Sections};
use crate::utils::error::AppError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Formats segmented sections as text: one header per section, then its rows
/// with the marker row flagged.
pub fn format_sections(sections: &Sections) -> String {
    let mut dump = String::new();

    for (name, rows) in sections.iter() {
        dump.push_str(&format!("=== {} ({} rows) ===\n", name, rows.len()));
        for (idx, row) in rows.iter().enumerate() {
            let marker = if is_section_start(row) { "*" } else { " " };
            dump.push_str(&format!("{}{:>4}: {}\n", marker, idx, row.cells().join(" | ")));
        }
        dump.push('\n');
    }

    dump
}

/// Saves the segmenter's view of the input for debugging.
pub fn write_section_dump(sections: &Sections, filename: &Path) -> Result<(), AppError> {
    let mut file = File::create(filename)?;
    file.write_all(format_sections(sections).as_bytes())?;

    tracing::info!("Saved section dump to {}", filename.display());
    Ok(())
}
