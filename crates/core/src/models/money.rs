use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount for display, e.g. `USD 120.00`.
///
/// This is the only place amounts are rounded. Totals are computed at full
/// precision and rounded to two places here, half away from zero.
pub fn format_currency(amount: Decimal, currency_code: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency_code} {rounded:.2}")
}
