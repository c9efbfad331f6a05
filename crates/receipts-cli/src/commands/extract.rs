use receipts_core::extraction::pdftotext::PdftotextExtractor;
use receipts_core::model::ExtractOptions;
use receipts_core::trace::ParseEventKind;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    show_trace: bool,
    options: &ExtractOptions,
) -> Result<(), receipts_core::error::ReceiptError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let extraction = receipts_core::ingest_pdf(&pdf_bytes, &extractor, options)?;

    if show_trace {
        for event in &extraction.trace.events {
            eprintln!("  line {:>4}  {:?}: {}", event.line, event.kind, event.detail);
        }
    }

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&extraction.records)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} record(s), written to {}",
                extraction.records.len(),
                path.display()
            );
            let discarded = extraction.trace.count(ParseEventKind::ItemDiscarded)
                + extraction.trace.count(ParseEventKind::OrphanDropped);
            if discarded > 0 {
                eprintln!("  {} item(s) discarded during extraction", discarded);
            }
        }
        None => {
            let output_str = match output_format {
                "json" => serde_json::to_string_pretty(&extraction.records)?,
                _ => output::table::format_records(&extraction.records),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
