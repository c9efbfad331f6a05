//! Pure reductions over extracted sales records.
//!
//! Each view is a separate named function with its own row shape; none of
//! them mutate or reorder the input records. Unless a view says otherwise,
//! keys appear in order of first appearance in the record stream.

pub mod dates;

use crate::model::{AccountCategory, SalesRecord};
use chrono::NaiveDate;
use dates::{month_bucket, parse_date_sold};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTotal {
    pub account_number: String,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: AccountCategory,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSales {
    pub item_number: String,
    /// Item name of the first record seen for this item number.
    pub item_name: String,
    pub total: Decimal,
    pub count: usize,
}

/// Coarser item roll-up keyed on the item name alone, so variants of the
/// same product under different numbers land in one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemNameSales {
    pub item_name: String,
    pub total: Decimal,
    pub count: usize,
}

/// Item roll-up at the finest granularity: the same item number sold under
/// two customers produces two rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSalesDetailed {
    pub item_number: String,
    pub item_name: String,
    pub customer_name: String,
    pub account_number: String,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSales {
    pub date: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub customer_name: String,
    pub total: Decimal,
    pub count: usize,
    /// Mean over records that carried a price; zero when none did.
    pub mean_price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    Day,
    /// Bucket by month; rows are keyed on the first of the month.
    Month,
}

/// Sum of prices and record count per account number. An absent price sums
/// as zero but the record still counts.
pub fn totals_by_account(records: &[SalesRecord]) -> Vec<AccountTotal> {
    let mut rows: Vec<AccountTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in records {
        let idx = *index.entry(r.account_number.as_str()).or_insert_with(|| {
            rows.push(AccountTotal {
                account_number: r.account_number.clone(),
                total: Decimal::ZERO,
                count: 0,
            });
            rows.len() - 1
        });
        rows[idx].total += r.price.unwrap_or_default();
        rows[idx].count += 1;
    }

    rows
}

/// Account totals rolled up into merchandise categories.
pub fn totals_by_category(records: &[SalesRecord]) -> Vec<CategoryTotal> {
    let mut rows: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<AccountCategory, usize> = HashMap::new();

    for r in records {
        let category = AccountCategory::from_account(&r.account_number);
        let idx = *index.entry(category).or_insert_with(|| {
            rows.push(CategoryTotal {
                category,
                total: Decimal::ZERO,
                count: 0,
            });
            rows.len() - 1
        });
        rows[idx].total += r.price.unwrap_or_default();
        rows[idx].count += 1;
    }

    rows
}

/// Sum of prices and occurrence count per item number. Rows with fewer than
/// `min_count` occurrences are filtered out (0 keeps everything).
pub fn totals_by_item(records: &[SalesRecord], min_count: usize) -> Vec<ItemSales> {
    let mut rows: Vec<ItemSales> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in records {
        let idx = *index.entry(r.item_number.as_str()).or_insert_with(|| {
            rows.push(ItemSales {
                item_number: r.item_number.clone(),
                item_name: r.item_name.clone(),
                total: Decimal::ZERO,
                count: 0,
            });
            rows.len() - 1
        });
        rows[idx].total += r.price.unwrap_or_default();
        rows[idx].count += 1;
    }

    rows.retain(|row| row.count >= min_count);
    rows
}

/// Sum of prices and occurrence count per item name.
pub fn totals_by_item_name(records: &[SalesRecord]) -> Vec<ItemNameSales> {
    let mut rows: Vec<ItemNameSales> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in records {
        let idx = *index.entry(r.item_name.as_str()).or_insert_with(|| {
            rows.push(ItemNameSales {
                item_name: r.item_name.clone(),
                total: Decimal::ZERO,
                count: 0,
            });
            rows.len() - 1
        });
        rows[idx].total += r.price.unwrap_or_default();
        rows[idx].count += 1;
    }

    rows
}

/// Item totals keyed jointly by item number, name, customer, and account.
pub fn totals_by_item_detailed(records: &[SalesRecord]) -> Vec<ItemSalesDetailed> {
    let mut rows: Vec<ItemSalesDetailed> = Vec::new();
    let mut index: HashMap<(&str, &str, &str, &str), usize> = HashMap::new();

    for r in records {
        let key = (
            r.item_number.as_str(),
            r.item_name.as_str(),
            r.customer_name.as_str(),
            r.account_number.as_str(),
        );
        let idx = *index.entry(key).or_insert_with(|| {
            rows.push(ItemSalesDetailed {
                item_number: r.item_number.clone(),
                item_name: r.item_name.clone(),
                customer_name: r.customer_name.clone(),
                account_number: r.account_number.clone(),
                total: Decimal::ZERO,
                count: 0,
            });
            rows.len() - 1
        });
        rows[idx].total += r.price.unwrap_or_default();
        rows[idx].count += 1;
    }

    rows
}

/// Sum of prices per calendar date (or month), ascending by date. Records
/// whose `date_sold` does not parse are silently excluded.
pub fn sales_by_date(records: &[SalesRecord], bucket: DateBucket) -> Vec<DateSales> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for r in records {
        let Some(date) = parse_date_sold(&r.date_sold) else {
            continue;
        };
        let key = match bucket {
            DateBucket::Day => date,
            DateBucket::Month => month_bucket(date),
        };
        *totals.entry(key).or_default() += r.price.unwrap_or_default();
    }

    totals
        .into_iter()
        .map(|(date, total)| DateSales { date, total })
        .collect()
}

/// Per-customer totals ranked by total descending, truncated to `top_n`.
/// Ties keep first-appearance order.
pub fn top_customers(records: &[SalesRecord], top_n: usize) -> Vec<CustomerStats> {
    struct Acc {
        total: Decimal,
        count: usize,
        priced: usize,
    }

    let mut order: Vec<&str> = Vec::new();
    let mut acc: HashMap<&str, Acc> = HashMap::new();

    for r in records {
        let entry = acc.entry(r.customer_name.as_str()).or_insert_with(|| {
            order.push(r.customer_name.as_str());
            Acc {
                total: Decimal::ZERO,
                count: 0,
                priced: 0,
            }
        });
        entry.count += 1;
        if let Some(price) = r.price {
            entry.total += price;
            entry.priced += 1;
        }
    }

    let mut rows: Vec<CustomerStats> = order
        .into_iter()
        .map(|name| {
            let a = &acc[name];
            let mean_price = if a.priced > 0 {
                a.total / Decimal::from(a.priced as u64)
            } else {
                Decimal::ZERO
            };
            CustomerStats {
                customer_name: name.to_string(),
                total: a.total,
                count: a.count,
                mean_price,
            }
        })
        .collect();

    // Stable sort keeps first-appearance order among equal totals.
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows.truncate(top_n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(
        customer: &str,
        account: &str,
        item_name: &str,
        item_number: &str,
        price: Option<Decimal>,
        date: &str,
    ) -> SalesRecord {
        SalesRecord {
            customer_name: customer.into(),
            account_number: account.into(),
            item_name: item_name.into(),
            item_number: item_number.into(),
            price,
            date_sold: date.into(),
        }
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            record("Jane Doe", "123", "Widget", "100-1", Some(dec!(10.00)), "2024-01-01"),
            record("Jane Doe", "123", "Gizmo", "100-2", Some(dec!(4.00)), "2024-01-02"),
            record("John Smith", "456", "Widget", "100-1", Some(dec!(10.00)), "2024-01-01"),
            record("John Smith", "456", "Scarf", "300-7", None, "2024-02-10"),
        ]
    }

    #[test]
    fn test_totals_by_account_sums_and_counts() {
        let rows = totals_by_account(&sample());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].account_number, "123");
        assert_eq!(rows[0].total, dec!(14.00));
        assert_eq!(rows[0].count, 2);
        // None price counts toward occurrences but adds nothing to the sum
        assert_eq!(rows[1].account_number, "456");
        assert_eq!(rows[1].total, dec!(10.00));
        assert_eq!(rows[1].count, 2);
    }

    #[test]
    fn test_totals_by_item_repeated_number() {
        let rows = totals_by_item(&sample(), 0);
        let widget = rows.iter().find(|r| r.item_number == "100-1").unwrap();
        assert_eq!(widget.total, dec!(20.00));
        assert_eq!(widget.count, 2);
        assert_eq!(widget.item_name, "Widget");
    }

    #[test]
    fn test_totals_by_item_min_count_filter() {
        let rows = totals_by_item(&sample(), 2);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item_number, "100-1");
    }

    #[test]
    fn test_totals_by_item_name_merges_numbers() {
        let mut records = sample();
        // Same name as 100-1 but a different item number
        records.push(record("Jane Doe", "123", "Widget", "100-9", Some(dec!(2.00)), "2024-01-09"));
        let rows = totals_by_item_name(&records);
        let widget = rows.iter().find(|r| r.item_name == "Widget").unwrap();
        assert_eq!(widget.total, dec!(22.00));
        assert_eq!(widget.count, 3);
    }

    #[test]
    fn test_totals_by_item_detailed_splits_by_customer() {
        let rows = totals_by_item_detailed(&sample());
        let widget_rows: Vec<_> = rows.iter().filter(|r| r.item_number == "100-1").collect();
        assert_eq!(widget_rows.len(), 2);
        assert_eq!(widget_rows[0].customer_name, "Jane Doe");
        assert_eq!(widget_rows[1].customer_name, "John Smith");
        assert!(widget_rows.iter().all(|r| r.total == dec!(10.00)));
    }

    #[test]
    fn test_sales_by_date_skips_unparseable() {
        let mut records = sample();
        records.push(record("Jane Doe", "123", "Mug", "200-4", Some(dec!(6.00)), "no date"));
        let rows = sales_by_date(&records, DateBucket::Day);
        // 3 distinct parseable dates; the "no date" row is excluded
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(rows[0].total, dec!(20.00));
    }

    #[test]
    fn test_sales_by_date_ascending() {
        let rows = sales_by_date(&sample(), DateBucket::Day);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_sales_by_month_buckets() {
        let rows = sales_by_date(&sample(), DateBucket::Month);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(rows[0].total, dec!(24.00));
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_top_customers_ranking_and_mean() {
        let rows = top_customers(&sample(), 10);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customer_name, "Jane Doe");
        assert_eq!(rows[0].total, dec!(14.00));
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].mean_price, dec!(7.00));
        // John Smith's unpriced scarf counts but does not enter the mean
        assert_eq!(rows[1].count, 2);
        assert_eq!(rows[1].mean_price, dec!(10.00));
    }

    #[test]
    fn test_top_customers_tie_keeps_first_appearance() {
        let records = vec![
            record("Beta", "200", "A", "100-1", Some(dec!(5.00)), "2024-01-01"),
            record("Alpha", "300", "B", "100-2", Some(dec!(5.00)), "2024-01-01"),
        ];
        let rows = top_customers(&records, 10);
        assert_eq!(rows[0].customer_name, "Beta");
        assert_eq!(rows[1].customer_name, "Alpha");
    }

    #[test]
    fn test_top_customers_truncates() {
        let rows = top_customers(&sample(), 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name, "Jane Doe");
    }

    #[test]
    fn test_totals_by_category_rolls_up_accounts() {
        let records = vec![
            record("A", "150", "Bread", "100-1", Some(dec!(3.00)), "2024-01-01"),
            record("B", "199", "Jam", "100-2", Some(dec!(4.00)), "2024-01-01"),
            record("C", "310", "Quilt", "300-1", Some(dec!(25.00)), "2024-01-01"),
        ];
        let rows = totals_by_category(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, AccountCategory::Food);
        assert_eq!(rows[0].total, dec!(7.00));
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].category, AccountCategory::HomeLinens);
    }

    #[test]
    fn test_empty_records_empty_views() {
        let records: Vec<SalesRecord> = Vec::new();
        assert!(totals_by_account(&records).is_empty());
        assert!(totals_by_item(&records, 0).is_empty());
        assert!(sales_by_date(&records, DateBucket::Day).is_empty());
        assert!(top_customers(&records, 5).is_empty());
    }
}
