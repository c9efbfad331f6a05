use receipts_core::aggregate::{
    AccountTotal, CategoryTotal, CustomerStats, DateSales, ItemNameSales, ItemSales,
    ItemSalesDetailed,
};
use receipts_core::model::SalesRecord;
use rust_decimal::Decimal;

fn money(value: Decimal) -> String {
    format!("${:.2}", value)
}

fn price_cell(price: Option<Decimal>) -> String {
    match price {
        Some(p) => money(p),
        None => "-".to_string(),
    }
}

fn width<'a, I>(values: I, heading: &str) -> usize
where
    I: Iterator<Item = &'a str>,
{
    values.map(|v| v.len()).max().unwrap_or(0).max(heading.len())
}

pub fn format_records(records: &[SalesRecord]) -> String {
    if records.is_empty() {
        return "No sales records found.".to_string();
    }

    let customer_w = width(records.iter().map(|r| r.customer_name.as_str()), "Customer");
    let item_w = width(records.iter().map(|r| r.item_name.as_str()), "Item");
    let number_w = width(records.iter().map(|r| r.item_number.as_str()), "Number");

    let mut out = String::new();
    out.push_str(&format!(
        "{:<customer_w$}  {:<7}  {:<item_w$}  {:<number_w$}  {:>10}  {}\n",
        "Customer", "Account", "Item", "Number", "Price", "Date Sold"
    ));
    for r in records {
        out.push_str(&format!(
            "{:<customer_w$}  {:<7}  {:<item_w$}  {:<number_w$}  {:>10}  {}\n",
            r.customer_name,
            r.account_number,
            r.item_name,
            r.item_number,
            price_cell(r.price),
            r.date_sold
        ));
    }
    out
}

pub fn format_account_totals(rows: &[AccountTotal]) -> String {
    if rows.is_empty() {
        return "No sales records found.".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("{:<8}  {:>12}  {:>6}\n", "Account", "Total", "Count"));
    for row in rows {
        out.push_str(&format!(
            "{:<8}  {:>12}  {:>6}\n",
            row.account_number,
            money(row.total),
            row.count
        ));
    }
    out
}

pub fn format_category_totals(rows: &[CategoryTotal]) -> String {
    if rows.is_empty() {
        return "No sales records found.".to_string();
    }
    let names: Vec<String> = rows.iter().map(|r| r.category.to_string()).collect();
    let category_w = width(names.iter().map(|n| n.as_str()), "Category");

    let mut out = String::new();
    out.push_str(&format!(
        "{:<category_w$}  {:>12}  {:>6}\n",
        "Category", "Total", "Count"
    ));
    for (row, name) in rows.iter().zip(&names) {
        out.push_str(&format!(
            "{:<category_w$}  {:>12}  {:>6}\n",
            name,
            money(row.total),
            row.count
        ));
    }
    out
}

pub fn format_item_sales(rows: &[ItemSales]) -> String {
    if rows.is_empty() {
        return "No sales records found.".to_string();
    }
    let number_w = width(rows.iter().map(|r| r.item_number.as_str()), "Number");
    let item_w = width(rows.iter().map(|r| r.item_name.as_str()), "Item");

    let mut out = String::new();
    out.push_str(&format!(
        "{:<number_w$}  {:<item_w$}  {:>12}  {:>6}\n",
        "Number", "Item", "Total", "Count"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<number_w$}  {:<item_w$}  {:>12}  {:>6}\n",
            row.item_number,
            row.item_name,
            money(row.total),
            row.count
        ));
    }
    out
}

pub fn format_item_name_sales(rows: &[ItemNameSales]) -> String {
    if rows.is_empty() {
        return "No sales records found.".to_string();
    }
    let item_w = width(rows.iter().map(|r| r.item_name.as_str()), "Item");

    let mut out = String::new();
    out.push_str(&format!(
        "{:<item_w$}  {:>12}  {:>6}\n",
        "Item", "Total", "Count"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<item_w$}  {:>12}  {:>6}\n",
            row.item_name,
            money(row.total),
            row.count
        ));
    }
    out
}

pub fn format_item_sales_detailed(rows: &[ItemSalesDetailed]) -> String {
    if rows.is_empty() {
        return "No sales records found.".to_string();
    }
    let number_w = width(rows.iter().map(|r| r.item_number.as_str()), "Number");
    let item_w = width(rows.iter().map(|r| r.item_name.as_str()), "Item");
    let customer_w = width(rows.iter().map(|r| r.customer_name.as_str()), "Customer");

    let mut out = String::new();
    out.push_str(&format!(
        "{:<number_w$}  {:<item_w$}  {:<customer_w$}  {:<8}  {:>12}  {:>6}\n",
        "Number", "Item", "Customer", "Account", "Total", "Count"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<number_w$}  {:<item_w$}  {:<customer_w$}  {:<8}  {:>12}  {:>6}\n",
            row.item_number,
            row.item_name,
            row.customer_name,
            row.account_number,
            money(row.total),
            row.count
        ));
    }
    out
}

pub fn format_date_sales(rows: &[DateSales]) -> String {
    if rows.is_empty() {
        return "No dated sales found.".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("{:<10}  {:>12}\n", "Date", "Total"));
    for row in rows {
        out.push_str(&format!(
            "{:<10}  {:>12}\n",
            row.date.to_string(),
            money(row.total)
        ));
    }
    out
}

pub fn format_customer_stats(rows: &[CustomerStats]) -> String {
    if rows.is_empty() {
        return "No sales records found.".to_string();
    }
    let customer_w = width(rows.iter().map(|r| r.customer_name.as_str()), "Customer");

    let mut out = String::new();
    out.push_str(&format!(
        "{:<customer_w$}  {:>12}  {:>6}  {:>10}\n",
        "Customer", "Total", "Count", "Avg Price"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<customer_w$}  {:>12}  {:>6}  {:>10}\n",
            row.customer_name,
            money(row.total),
            row.count,
            money(row.mean_price)
        ));
    }
    out
}
