use serde::{Deserialize, Serialize};

/// Point values awarded by each receipt rule.
///
/// Every rule is optional; an omitted rule awards nothing. The defaults are
/// the standard loyalty program values.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   retailer_char: 1
///   round_total: 50
///   quarter_multiple: 25
///   item_pair: 5
///   description_price_percent: 20
///   odd_day: 6
///   afternoon: 10
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points per alphanumeric character in the retailer name
    #[serde(default)]
    pub retailer_char: Option<i64>,

    /// Points when the total is a whole dollar amount
    #[serde(default)]
    pub round_total: Option<i64>,

    /// Points when the total is a multiple of 0.25
    #[serde(default)]
    pub quarter_multiple: Option<i64>,

    /// Points for every two items on the receipt
    #[serde(default)]
    pub item_pair: Option<i64>,

    /// Percent of an item's price (rounded up) awarded when the trimmed
    /// description length is a multiple of 3
    #[serde(default)]
    pub description_price_percent: Option<i64>,

    /// Points when the purchase day of month is odd
    #[serde(default)]
    pub odd_day: Option<i64>,

    /// Points when the purchase time is after 14:00 and before 17:00
    #[serde(default)]
    pub afternoon: Option<i64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            retailer_char: Some(1),
            round_total: Some(50),
            quarter_multiple: Some(25),
            item_pair: Some(5),
            description_price_percent: Some(20),
            odd_day: Some(6),
            afternoon: Some(10),
        }
    }
}

impl ScoringConfig {
    /// A config with every rule disabled.
    pub fn empty() -> Self {
        Self {
            retailer_char: None,
            round_total: None,
            quarter_multiple: None,
            item_pair: None,
            description_price_percent: None,
            odd_day: None,
            afternoon: None,
        }
    }
}
