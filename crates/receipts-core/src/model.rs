use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One sold item attributed to a customer. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub customer_name: String,
    pub account_number: String,
    pub item_name: String,
    /// Item number with thousands-separator commas stripped.
    pub item_number: String,
    /// None when the price line carried no currency marker or did not parse.
    pub price: Option<Decimal>,
    /// Raw text from the receipt; parsed to a calendar date only by the
    /// date-keyed aggregate views.
    pub date_sold: String,
}

/// What to do with item data encountered before any customer/account pair
/// has been recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Discard orphaned items.
    #[default]
    Drop,
    /// Hold orphaned items and attribute them to the first customer
    /// recognized afterwards.
    AttachToNextCustomer,
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Minimum digit count for an account number token.
    pub min_account_digits: usize,
    /// Maximum digit count for an account number token.
    pub max_account_digits: usize,
    pub orphan_policy: OrphanPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            min_account_digits: 3,
            max_account_digits: 5,
            orphan_policy: OrphanPolicy::Drop,
        }
    }
}

/// Merchandise category derived from the account number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountCategory {
    Wholesale,
    Food,
    #[serde(rename = "Stationery/Jewelry/Accessories")]
    StationeryJewelryAccessories,
    #[serde(rename = "Home/Linens")]
    HomeLinens,
    Toys,
    #[serde(rename = "Clothing/Children's")]
    ClothingChildrens,
    #[serde(rename = "Sweaters/Knits")]
    SweatersKnits,
    Holiday,
    #[serde(rename = "Wood Items/Toys")]
    WoodItemsToys,
    #[serde(rename = "Former Consignor Items")]
    FormerConsignor,
    Unknown,
}

impl AccountCategory {
    pub fn from_account(account_number: &str) -> AccountCategory {
        let Ok(num) = account_number.trim().parse::<u32>() else {
            return AccountCategory::Unknown;
        };
        match num {
            1000.. => AccountCategory::Wholesale,
            100..=199 => AccountCategory::Food,
            200..=299 => AccountCategory::StationeryJewelryAccessories,
            300..=399 => AccountCategory::HomeLinens,
            400..=499 => AccountCategory::Toys,
            500..=599 => AccountCategory::ClothingChildrens,
            600..=699 => AccountCategory::SweatersKnits,
            700..=799 => AccountCategory::Holiday,
            800..=899 => AccountCategory::WoodItemsToys,
            900..=999 => AccountCategory::FormerConsignor,
            _ => AccountCategory::Unknown,
        }
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountCategory::Wholesale => "Wholesale",
            AccountCategory::Food => "Food",
            AccountCategory::StationeryJewelryAccessories => "Stationery/Jewelry/Accessories",
            AccountCategory::HomeLinens => "Home/Linens",
            AccountCategory::Toys => "Toys",
            AccountCategory::ClothingChildrens => "Clothing/Children's",
            AccountCategory::SweatersKnits => "Sweaters/Knits",
            AccountCategory::Holiday => "Holiday",
            AccountCategory::WoodItemsToys => "Wood Items/Toys",
            AccountCategory::FormerConsignor => "Former Consignor Items",
            AccountCategory::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}
