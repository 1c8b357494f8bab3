// src/main.rs
use clap::{Parser, ValueEnum};
use readout_report::extractors::{normalize_rows, segment};
use readout_report::report::{DocumentRenderer, MarkdownRenderer};
use readout_report::storage::StorageManager;
use readout_report::utils::{self, AppError};
use readout_report::{convert, input};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
    Both,
}

/// Command Line Interface for the diagnostic readout report converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Readout export (comma-separated) to convert
    input: PathBuf,

    /// Output directory for the report files
    #[arg(short, long, env = "READOUT_OUTPUT_DIR", default_value = "./output")]
    output_dir: PathBuf,

    /// Which report files to write
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Debug mode - save the segmented sections next to the report
    #[arg(short, long)]
    debug: bool,

    /// Print the Markdown report to stdout instead of writing files
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting conversion for args: {:?}", args);

    // 3. Read the raw rows; decoding is the reader's concern
    let raw_rows = input::read_rows(&args.input)?;

    // 4. Run the extraction pipeline
    let model = convert(&raw_rows)?;
    let renderer = MarkdownRenderer::default();

    if args.stdout {
        print!("{}", renderer.render(&model)?);
        return Ok(());
    }

    // 5. Write outputs
    let storage = StorageManager::new(&args.output_dir)?;
    let stem = StorageManager::file_stem(&model);

    if matches!(args.format, OutputFormat::Json | OutputFormat::Both) {
        storage.save_model(&model, &stem)?;
    }
    if matches!(args.format, OutputFormat::Markdown | OutputFormat::Both) {
        let rendered = renderer.render(&model)?;
        storage.save_rendered(&rendered, &stem, "md")?;
    }
    storage.save_report_metadata(&model, &args.input, &stem)?;

    if args.debug {
        let sections = segment(normalize_rows(&raw_rows))?;
        let dump_path = storage.base_dir().join(format!("{}_sections.txt", stem));
        if let Err(e) = utils::debug_dump::write_section_dump(&sections, &dump_path) {
            tracing::warn!("Failed to write section dump: {}", e);
        }
    }

    tracing::info!(
        "Conversion finished for '{}': {} blocks written to {}",
        model.customer_name(),
        model.blocks().len(),
        storage.base_dir().display()
    );
    Ok(())
}
