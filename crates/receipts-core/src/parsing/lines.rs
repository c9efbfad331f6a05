use crate::model::ExtractOptions;
use crate::parsing::headers::HEADER_LABELS;
use regex::Regex;
use std::sync::LazyLock;

/// Semantic kind of a single line in the deduplicated stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    CustomerName,
    AccountNumber,
    ItemNumber,
    Other,
}

// Letters, spaces and the punctuation that shows up in personal and
// business names on the receipts.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s,.()&'-]+$").expect("name pattern"));

// [0-9] rather than \d: account and item tokens are ASCII digits only, and
// the digit-count bound below assumes one byte per digit.
static ITEM_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,5}-[0-9]+$").expect("item number pattern"));

static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern"));

/// Bounds-checked view over the deduplicated line sequence. Relative lookups
/// past either end come back as None instead of faulting, so a truncated
/// group is a normal control-flow branch for the extractor.
pub struct LineCursor<'a> {
    lines: &'a [String],
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        LineCursor { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Trimmed text of the line at `index`, or None past the end.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).map(|l| l.trim())
    }

    /// Trimmed text of the line `offset` positions before `index`.
    pub fn get_back(&self, index: usize, offset: usize) -> Option<&'a str> {
        index.checked_sub(offset).and_then(|i| self.get(i))
    }
}

/// Whether `text` is an account number token under the configured digit
/// bound.
pub fn is_account_number(text: &str, opts: &ExtractOptions) -> bool {
    DIGITS_PATTERN.is_match(text)
        && text.len() >= opts.min_account_digits
        && text.len() <= opts.max_account_digits
}

/// Whether `text` is an item number token, after stripping
/// thousands-separator commas.
pub fn is_item_number(text: &str) -> bool {
    ITEM_NUMBER_PATTERN.is_match(&text.replace(',', ""))
}

/// Classify the line at `index`. Pure function of (sequence, index, options);
/// rules are tried in fixed priority order and the first match wins.
///
/// A customer name is only recognized when the very next line is an account
/// number token. The classifier itself never consumes lines; the extractor
/// decides how many a match spans.
pub fn classify(cursor: &LineCursor<'_>, index: usize, opts: &ExtractOptions) -> LineKind {
    let Some(text) = cursor.get(index) else {
        return LineKind::Other;
    };

    if NAME_PATTERN.is_match(text) && !HEADER_LABELS.iter().any(|label| text.contains(label)) {
        if let Some(next) = cursor.get(index + 1) {
            if is_account_number(next, opts) {
                return LineKind::CustomerName;
            }
        }
    }

    if is_account_number(text, opts) {
        return LineKind::AccountNumber;
    }

    if is_item_number(text) {
        return LineKind::ItemNumber;
    }

    LineKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn kind_at(items: &[&str], index: usize) -> LineKind {
        let lines = lines(items);
        let cursor = LineCursor::new(&lines);
        classify(&cursor, index, &ExtractOptions::default())
    }

    #[test]
    fn test_customer_requires_following_account() {
        assert_eq!(kind_at(&["Jane Doe", "123"], 0), LineKind::CustomerName);
        assert_eq!(kind_at(&["Jane Doe", "Widget"], 0), LineKind::Other);
        assert_eq!(kind_at(&["Jane Doe"], 0), LineKind::Other);
    }

    #[test]
    fn test_name_punctuation_set() {
        assert_eq!(
            kind_at(&["O'Brien & Sons, Ltd. (est.)", "4200"], 0),
            LineKind::CustomerName
        );
        assert_eq!(kind_at(&["Smith-Jones", "123"], 0), LineKind::CustomerName);
        // Digits disqualify the name pattern
        assert_eq!(kind_at(&["Jane Doe 2", "123"], 0), LineKind::Other);
    }

    #[test]
    fn test_header_labels_disqualify_customer() {
        let header = "Customer Name Account Number Item Name Item Number Price Date Sold";
        assert_eq!(kind_at(&[header, "123"], 0), LineKind::Other);
    }

    #[test]
    fn test_account_number_digit_bounds() {
        let opts = ExtractOptions::default();
        assert!(is_account_number("123", &opts));
        assert!(is_account_number("12345", &opts));
        assert!(!is_account_number("12", &opts));
        assert!(!is_account_number("123456", &opts));
        assert!(!is_account_number("12a", &opts));

        let narrow = ExtractOptions {
            max_account_digits: 4,
            ..ExtractOptions::default()
        };
        assert!(!is_account_number("12345", &narrow));
        assert!(is_account_number("1234", &narrow));
    }

    #[test]
    fn test_configured_bound_flows_into_classify() {
        let items = lines(&["Jane Doe", "12345"]);
        let cursor = LineCursor::new(&items);
        let narrow = ExtractOptions {
            max_account_digits: 4,
            ..ExtractOptions::default()
        };
        assert_eq!(classify(&cursor, 0, &narrow), LineKind::Other);
        assert_eq!(
            classify(&cursor, 0, &ExtractOptions::default()),
            LineKind::CustomerName
        );
    }

    #[test]
    fn test_item_number_pattern() {
        assert_eq!(kind_at(&["100-1"], 0), LineKind::ItemNumber);
        assert_eq!(kind_at(&["12345-678"], 0), LineKind::ItemNumber);
        // Commas are stripped before matching
        assert_eq!(kind_at(&["1,234-5"], 0), LineKind::ItemNumber);
        // Six digits before the dash is too many
        assert_eq!(kind_at(&["123456-7"], 0), LineKind::Other);
        // Dates are not item numbers
        assert_eq!(kind_at(&["2024-01-01"], 0), LineKind::Other);
    }

    #[test]
    fn test_bare_digits_classify_as_account() {
        assert_eq!(kind_at(&["123"], 0), LineKind::AccountNumber);
        assert_eq!(kind_at(&["$10.00"], 0), LineKind::Other);
    }

    #[test]
    fn test_whitespace_trimmed_before_matching() {
        assert_eq!(kind_at(&["  Jane Doe  ", " 123 "], 0), LineKind::CustomerName);
        assert_eq!(kind_at(&["  100-1  "], 0), LineKind::ItemNumber);
    }

    #[test]
    fn test_cursor_bounds() {
        let items = lines(&["a", "b"]);
        let cursor = LineCursor::new(&items);
        assert_eq!(cursor.get(1), Some("b"));
        assert_eq!(cursor.get(2), None);
        assert_eq!(cursor.get_back(1, 1), Some("a"));
        assert_eq!(cursor.get_back(0, 1), None);
    }

    #[test]
    fn test_out_of_range_index_is_other() {
        let items = lines(&["a"]);
        let cursor = LineCursor::new(&items);
        assert_eq!(classify(&cursor, 5, &ExtractOptions::default()), LineKind::Other);
    }
}
