use super::config::ScoringConfig;
use super::rules;
use crate::receipts::types::Receipt;

#[derive(Debug, Clone, PartialEq)]
pub struct RuleContribution {
    pub label: &'static str,  // e.g. "Retailer", "Round total"
    pub description: String,  // e.g. "6 alphanumeric chars x1"
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointsResult {
    pub points: u64,
    pub breakdown: Vec<RuleContribution>,
}

impl PointsResult {
    /// Points awarded by the rule with the given label (0 if it did not apply).
    pub fn points_for(&self, label: &str) -> i64 {
        self.breakdown
            .iter()
            .filter(|c| c.label == label)
            .map(|c| c.points)
            .sum()
    }
}

pub const RETAILER: &str = "Retailer";
pub const ROUND_TOTAL: &str = "Round total";
pub const QUARTER_MULTIPLE: &str = "Quarter multiple";
pub const ITEM_PAIRS: &str = "Item pairs";
pub const DESCRIPTIONS: &str = "Descriptions";
pub const ODD_DAY: &str = "Odd day";
pub const AFTERNOON: &str = "Afternoon";

/// Score a receipt. Every rule is independent; a field that fails to parse
/// only zeroes out the rules that read it.
pub fn calculate_points(receipt: &Receipt, config: &ScoringConfig) -> PointsResult {
    let mut breakdown = Vec::new();

    if let Some(per_char) = config.retailer_char {
        let chars = rules::alphanumeric_count(&receipt.retailer);
        breakdown.push(RuleContribution {
            label: RETAILER,
            description: format!("{} alphanumeric chars x{}", chars, per_char),
            points: chars.saturating_mul(per_char),
        });
    }

    let total = rules::parse_amount(&receipt.total);
    if total.is_none() {
        tracing::debug!(total = %receipt.total, "unparseable total, total rules skipped");
    }

    if let Some(bonus) = config.round_total {
        let whole = total.is_some_and(rules::is_whole);
        breakdown.push(RuleContribution {
            label: ROUND_TOTAL,
            description: format!("total '{}' whole: {}", receipt.total, whole),
            points: if whole { bonus } else { 0 },
        });
    }

    if let Some(bonus) = config.quarter_multiple {
        let quarter = total.is_some_and(rules::is_quarter_multiple);
        breakdown.push(RuleContribution {
            label: QUARTER_MULTIPLE,
            description: format!("total '{}' multiple of 0.25: {}", receipt.total, quarter),
            points: if quarter { bonus } else { 0 },
        });
    }

    if let Some(per_pair) = config.item_pair {
        let pairs = (receipt.items.len() / 2) as i64;
        breakdown.push(RuleContribution {
            label: ITEM_PAIRS,
            description: format!("{} items, {} pairs x{}", receipt.items.len(), pairs, per_pair),
            points: pairs.saturating_mul(per_pair),
        });
    }

    if let Some(percent) = config.description_price_percent {
        let mut points: i64 = 0;
        let mut matched = 0;
        for item in &receipt.items {
            if !rules::description_qualifies(&item.short_description) {
                continue;
            }
            matched += 1;
            let share = rules::parse_amount(&item.price)
                .map(|price| rules::price_share(price, percent))
                .unwrap_or(0);
            points = points.saturating_add(share);
        }
        breakdown.push(RuleContribution {
            label: DESCRIPTIONS,
            description: format!("{} of {} descriptions matched, {}% of price", matched, receipt.items.len(), percent),
            points,
        });
    }

    if let Some(bonus) = config.odd_day {
        let day = rules::day_of_month(&receipt.purchase_date);
        let odd = day.is_some_and(|d| d % 2 == 1);
        breakdown.push(RuleContribution {
            label: ODD_DAY,
            description: match day {
                Some(d) => format!("day {} odd: {}", d, odd),
                None => format!("unparseable date '{}'", receipt.purchase_date),
            },
            points: if odd { bonus } else { 0 },
        });
    }

    if let Some(bonus) = config.afternoon {
        let time = rules::hour_minute(&receipt.purchase_time);
        let inside = time.is_some_and(|(h, m)| rules::in_afternoon_window(h, m));
        breakdown.push(RuleContribution {
            label: AFTERNOON,
            description: match time {
                Some((h, m)) => format!("{:02}:{:02} in 14:01-16:59: {}", h, m, inside),
                None => format!("unparseable time '{}'", receipt.purchase_time),
            },
            points: if inside { bonus } else { 0 },
        });
    }

    // Saturate on huge amounts, floor at zero
    let sum = breakdown
        .iter()
        .fold(0i64, |acc, c| acc.saturating_add(c.points));
    PointsResult {
        points: u64::try_from(sum).unwrap_or(0),
        breakdown,
    }
}
