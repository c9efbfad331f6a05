use receipts_core::error::ReceiptError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), ReceiptError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
