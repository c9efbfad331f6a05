pub mod extract;
pub mod headers;
pub mod lines;
pub mod values;

use crate::model::{ExtractOptions, SalesRecord};
use crate::trace::ParseTrace;
use serde::{Deserialize, Serialize};

/// Records extracted from one line stream, plus the parse trace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Extraction {
    pub records: Vec<SalesRecord>,
    pub trace: ParseTrace,
}

/// Run the full line-stream pipeline: collapse repeated header blocks, then
/// walk the deduplicated sequence and extract sales records.
///
/// Content that matches no recognized pattern degrades to partial or empty
/// output; this function never fails.
pub fn process_lines(raw_lines: Vec<String>, opts: &ExtractOptions) -> Extraction {
    let mut trace = ParseTrace::default();
    let lines = headers::strip_repeated_headers(raw_lines, &mut trace);
    let records = extract::extract_records(&lines, opts, &mut trace);
    Extraction { records, trace }
}
