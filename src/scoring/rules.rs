use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// Count of Unicode letters and digits in a retailer name.
pub fn alphanumeric_count(retailer: &str) -> i64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as i64
}

/// Parse a currency amount such as "6.49". Returns None for anything that
/// is not a plain decimal number.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(s).ok()
}

/// True when the amount has no fractional part ("9.00", "12").
pub fn is_whole(amount: Decimal) -> bool {
    amount.fract().is_zero()
}

/// True when the amount is an exact multiple of 0.25.
pub fn is_quarter_multiple(amount: Decimal) -> bool {
    amount
        .checked_rem(Decimal::new(25, 2))
        .is_some_and(|rem| rem.is_zero())
}

/// True when the trimmed description length is a multiple of 3 (including 0).
pub fn description_qualifies(description: &str) -> bool {
    description.trim().chars().count() % 3 == 0
}

/// `ceil(price * percent / 100)`, floored at zero and saturating at
/// `i64::MAX` for amounts too large to represent.
pub fn price_share(price: Decimal, percent: i64) -> i64 {
    if price.is_sign_negative() || percent <= 0 {
        return 0;
    }
    price
        .checked_mul(Decimal::from(percent))
        .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|share| share.ceil().to_i64())
        .unwrap_or(i64::MAX)
        .max(0)
}

/// Day of month from a `YYYY-MM-DD` date (the third `-` separated field).
pub fn day_of_month(date: &str) -> Option<u32> {
    date.split('-').nth(2)?.parse().ok()
}

/// Hour and minute from a 24-hour `HH:MM` time.
pub fn hour_minute(time: &str) -> Option<(u32, u32)> {
    let mut parts = time.split(':');
    let hour = parts.next()?.parse().ok()?;
    let minute = parts.next()?.parse().ok()?;
    Some((hour, minute))
}

/// Strictly after 14:00 and before 17:00. Exactly 14:00 is outside.
pub fn in_afternoon_window(hour: u32, minute: u32) -> bool {
    if !(AFTERNOON_START_HOUR..=AFTERNOON_END_HOUR).contains(&hour) {
        return false;
    }
    !(hour == AFTERNOON_START_HOUR && minute == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Decimal {
        parse_amount(s).unwrap()
    }

    #[test]
    fn test_alphanumeric_count() {
        assert_eq!(alphanumeric_count("Target"), 6);
        assert_eq!(alphanumeric_count("M&M Corner Market"), 14);
        assert_eq!(alphanumeric_count("  - & -  "), 0);
        assert_eq!(alphanumeric_count("Café 7"), 5);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("6.49"), Some(Decimal::new(649, 2)));
        assert_eq!(parse_amount("12"), Some(Decimal::new(12, 0)));
        assert!(parse_amount("abc").is_none());
        assert!(parse_amount("").is_none());
        assert!(parse_amount("1.2.3").is_none());
    }

    #[test]
    fn test_is_whole() {
        assert!(is_whole(amount("9.00")));
        assert!(is_whole(amount("0")));
        assert!(!is_whole(amount("35.35")));
        assert!(!is_whole(amount("10.25")));
    }

    #[test]
    fn test_is_quarter_multiple() {
        assert!(is_quarter_multiple(amount("9.00")));
        assert!(is_quarter_multiple(amount("10.25")));
        assert!(is_quarter_multiple(amount("10.50")));
        assert!(is_quarter_multiple(amount("0.75")));
        assert!(!is_quarter_multiple(amount("35.35")));
        assert!(!is_quarter_multiple(amount("10.20")));
    }

    #[test]
    fn test_description_qualifies() {
        assert!(description_qualifies("Emils Cheese Pizza")); // 18 chars
        assert!(description_qualifies("   Klarbrunn 12-PK 12 FL OZ  ")); // 24 trimmed
        assert!(description_qualifies("   "));
        assert!(!description_qualifies("Mountain Dew 12PK")); // 17 chars
        assert!(!description_qualifies("Gatorade"));
    }

    #[test]
    fn test_price_share_rounds_up() {
        assert_eq!(price_share(amount("12.25"), 20), 3); // 2.45
        assert_eq!(price_share(amount("12.00"), 20), 3); // 2.4
        assert_eq!(price_share(amount("5.00"), 20), 1); // exactly 1
        assert_eq!(price_share(amount("0"), 20), 0);
    }

    #[test]
    fn test_price_share_floors_negative_at_zero() {
        assert_eq!(price_share(amount("-12.25"), 20), 0);
        assert_eq!(price_share(amount("12.25"), 0), 0);
    }

    #[test]
    fn test_price_share_saturates() {
        // 8e18 still fits in i64
        assert_eq!(price_share(amount("40000000000000000000"), 20), 8_000_000_000_000_000_000);
        // 2e19 does not
        assert_eq!(price_share(amount("100000000000000000000"), 20), i64::MAX);
        // Decimal overflow on the multiplication
        assert_eq!(price_share(Decimal::MAX, 20), i64::MAX);
    }

    #[test]
    fn test_day_of_month() {
        assert_eq!(day_of_month("2022-01-01"), Some(1));
        assert_eq!(day_of_month("2022-03-20"), Some(20));
        assert!(day_of_month("2022-03").is_none());
        assert!(day_of_month("2022-03-xx").is_none());
        assert!(day_of_month("").is_none());
    }

    #[test]
    fn test_hour_minute() {
        assert_eq!(hour_minute("13:01"), Some((13, 1)));
        assert_eq!(hour_minute("16:59"), Some((16, 59)));
        assert!(hour_minute("1600").is_none());
        assert!(hour_minute("ab:cd").is_none());
    }

    #[test]
    fn test_afternoon_window_boundaries() {
        assert!(!in_afternoon_window(13, 59));
        assert!(!in_afternoon_window(14, 0));
        assert!(in_afternoon_window(14, 1));
        assert!(in_afternoon_window(14, 33));
        assert!(in_afternoon_window(16, 0));
        assert!(in_afternoon_window(16, 59));
        assert!(!in_afternoon_window(17, 0));
    }
}
