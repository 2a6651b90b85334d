use super::config::ScoringConfig;

/// Largest point value (or price percent) a single rule may award.
pub const MAX_RULE_VALUE: i64 = 1_000_000;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("retailer_char", config.retailer_char),
        ("round_total", config.round_total),
        ("quarter_multiple", config.quarter_multiple),
        ("item_pair", config.item_pair),
        ("description_price_percent", config.description_price_percent),
        ("odd_day", config.odd_day),
        ("afternoon", config.afternoon),
    ];

    for (name, value) in fields {
        if let Some(value) = value {
            if value < 0 {
                errors.push(format!(
                    "scoring.{}: must be non-negative (got {})",
                    name, value
                ));
            } else if value > MAX_RULE_VALUE {
                errors.push(format!(
                    "scoring.{}: must be at most {} (got {})",
                    name, MAX_RULE_VALUE, value
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
