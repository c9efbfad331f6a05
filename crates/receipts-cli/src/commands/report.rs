use receipts_core::aggregate::{self, DateBucket};
use receipts_core::extraction::pdftotext::PdftotextExtractor;
use receipts_core::model::ExtractOptions;
use std::path::PathBuf;

use crate::output;
use crate::View;

pub fn run(
    input_file: PathBuf,
    view: View,
    output_format: &str,
    min_count: usize,
    top: usize,
    monthly: bool,
    options: &ExtractOptions,
) -> Result<(), receipts_core::error::ReceiptError> {
    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let extraction = receipts_core::ingest_pdf(&pdf_bytes, &extractor, options)?;
    let records = &extraction.records;

    match view {
        View::Account => {
            let rows = aggregate::totals_by_account(records);
            match output_format {
                "json" => output::json::print(&rows)?,
                _ => println!("{}", output::table::format_account_totals(&rows)),
            }
        }
        View::Category => {
            let rows = aggregate::totals_by_category(records);
            match output_format {
                "json" => output::json::print(&rows)?,
                _ => println!("{}", output::table::format_category_totals(&rows)),
            }
        }
        View::Item => {
            let rows = aggregate::totals_by_item(records, min_count);
            match output_format {
                "json" => output::json::print(&rows)?,
                _ => println!("{}", output::table::format_item_sales(&rows)),
            }
        }
        View::ItemName => {
            let rows = aggregate::totals_by_item_name(records);
            match output_format {
                "json" => output::json::print(&rows)?,
                _ => println!("{}", output::table::format_item_name_sales(&rows)),
            }
        }
        View::ItemDetailed => {
            let rows = aggregate::totals_by_item_detailed(records);
            match output_format {
                "json" => output::json::print(&rows)?,
                _ => println!("{}", output::table::format_item_sales_detailed(&rows)),
            }
        }
        View::Date => {
            let bucket = if monthly { DateBucket::Month } else { DateBucket::Day };
            let rows = aggregate::sales_by_date(records, bucket);
            match output_format {
                "json" => output::json::print(&rows)?,
                _ => println!("{}", output::table::format_date_sales(&rows)),
            }
        }
        View::Customer => {
            let rows = aggregate::top_customers(records, top);
            match output_format {
                "json" => output::json::print(&rows)?,
                _ => println!("{}", output::table::format_customer_stats(&rows)),
            }
        }
    }

    Ok(())
}
