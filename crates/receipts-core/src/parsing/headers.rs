use crate::trace::{ParseEventKind, ParseTrace};

/// Column labels that make up the receipt table header. The header block
/// repeats once per page in the source PDF.
pub const HEADER_LABELS: [&str; 6] = [
    "Customer Name",
    "Account Number",
    "Item Name",
    "Item Number",
    "Price",
    "Date Sold",
];

/// A line is a header line iff it contains every column label as a
/// substring, in any order.
pub fn is_header_line(line: &str) -> bool {
    HEADER_LABELS.iter().all(|label| line.contains(label))
}

/// Collapse repeated header blocks: keep the first header line encountered,
/// drop every later one, pass all other lines through in order.
///
/// A single left-to-right pass. Running it on its own output is a no-op
/// since at most one header line remains.
pub fn strip_repeated_headers(lines: Vec<String>, trace: &mut ParseTrace) -> Vec<String> {
    let mut cleaned = Vec::with_capacity(lines.len());
    let mut seen_header = false;

    for (i, line) in lines.into_iter().enumerate() {
        if is_header_line(&line) {
            if seen_header {
                trace.push(i, ParseEventKind::HeaderSkipped, "repeated header block");
                continue;
            }
            seen_header = true;
        }
        cleaned.push(line);
    }

    cleaned
}
