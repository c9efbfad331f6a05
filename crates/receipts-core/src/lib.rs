pub mod aggregate;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod trace;

use error::ReceiptError;
use extraction::PdfExtractor;
use model::ExtractOptions;
use parsing::Extraction;

/// Main API entry point: turn a consignment receipt PDF into sales records.
///
/// Extracts text through the given backend, flattens the pages into one
/// ordered line stream, collapses repeated per-page header blocks, and runs
/// the grouping walk. Malformed receipt content yields partial or empty
/// records, never an error; only the extraction backend itself can fail.
pub fn ingest_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ExtractOptions,
) -> Result<Extraction, ReceiptError> {
    let pages = extractor.extract_pages(pdf_bytes)?;

    let lines: Vec<String> = pages.into_iter().flat_map(|p| p.lines).collect();

    Ok(parsing::process_lines(lines, options))
}
