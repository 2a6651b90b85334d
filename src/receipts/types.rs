use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted by a client.
///
/// Amounts, date and time stay as the strings the client sent; the scoring
/// rules parse them individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // "YYYY-MM-DD"
    pub purchase_time: String, // "HH:MM", 24-hour
    pub items: Vec<Item>,
    pub total: String,         // e.g. "6.49"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A scored receipt held by the store. Never modified after insertion.
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    pub id: String,
    pub points: u64,
    pub received_at: DateTime<Utc>,
    pub receipt: Receipt,
}

/// Result of accepting a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub id: String,
    pub points: u64,
}
