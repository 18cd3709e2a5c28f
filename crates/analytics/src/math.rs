//! Small numeric helpers shared by every report section.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a report value to two decimal places, halves away from zero.
///
/// Applied only when a value is written into the report; accumulators
/// always keep full precision.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `numerator / denominator`, or zero when the denominator is not positive
/// or the quotient does not fit in a `Decimal`.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}

/// `part / whole * 100` over counts, or zero for an empty whole.
pub fn percent(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) / Decimal::from(whole) * Decimal::ONE_HUNDRED
}

/// Win rate with break-even and unresolved trades excluded from the base.
pub fn win_rate(wins: usize, losses: usize) -> Decimal {
    percent(wins, wins + losses)
}
