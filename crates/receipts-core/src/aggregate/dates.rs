use chrono::{Datelike, NaiveDate};

// Formats seen across receipt batches; tried in order, first parse wins.
// %y before %Y: chrono's %Y happily parses a 2-digit year, while %y chokes
// on the trailing digits of a 4-digit one.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Parse a raw `date_sold` field into a calendar date. None means the row is
/// excluded from date-keyed aggregates; it is not an error.
pub fn parse_date_sold(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// First day of the date's month, for month-bucketed series.
pub(crate) fn month_bucket(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
