//! Normalization of the per-trade fields that have more than one source.
//!
//! Journal records carry the outcome in either `result` or the older
//! `tradeOutcome` field, and the traded symbol in either `instrument` or the
//! older `tradePair`. Both are resolved here, once per trade, so that no
//! aggregator has to know about the legacy fields.

use core_types::{Outcome, Trade};
use rust_decimal::Decimal;

/// Resolves a trade's outcome.
///
/// `result` wins over `tradeOutcome`; an empty `result` counts as absent.
/// Matching is case-insensitive and `"break even"` is accepted as `be`.
/// Anything unrecognized resolves to [`Outcome::Unknown`].
pub fn resolve_outcome(trade: &Trade) -> Outcome {
    let raw = non_empty(trade.result.as_deref()).or_else(|| non_empty(trade.trade_outcome.as_deref()));

    match raw.map(str::to_lowercase).as_deref() {
        Some("win") => Outcome::Win,
        Some("loss") => Outcome::Loss,
        Some("be") | Some("break even") => Outcome::BreakEven,
        _ => Outcome::Unknown,
    }
}

/// Resolves the traded symbol: `instrument`, then `tradePair`.
///
/// Returns `None` when neither is set; callers choose their own fallback.
pub fn resolve_instrument(trade: &Trade) -> Option<&str> {
    non_empty(trade.instrument.as_deref()).or_else(|| non_empty(trade.trade_pair.as_deref()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A trade with its derived fields resolved, borrowed from the input list.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTrade<'a> {
    pub trade: &'a Trade,
    pub outcome: Outcome,
    /// `pnl` with an absent value treated as zero.
    pub pnl: Decimal,
    /// Resolved instrument, or the configured unknown label.
    pub instrument: &'a str,
}

impl<'a> ResolvedTrade<'a> {
    pub fn new(trade: &'a Trade, unknown_label: &'a str) -> Self {
        Self {
            trade,
            outcome: resolve_outcome(trade),
            pnl: trade.pnl_or_zero(),
            instrument: resolve_instrument(trade).unwrap_or(unknown_label),
        }
    }
}

/// Resolves every trade in order.
pub fn resolve_all<'a>(trades: &'a [Trade], unknown_label: &'a str) -> Vec<ResolvedTrade<'a>> {
    trades
        .iter()
        .map(|trade| ResolvedTrade::new(trade, unknown_label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn trade() -> Trade {
        Trade::new(Utc::now())
    }

    #[test]
    fn prefers_result_over_trade_outcome() {
        let t = trade().with_result("loss").with_trade_outcome("Win");
        assert_eq!(resolve_outcome(&t), Outcome::Loss);
    }

    #[test]
    fn falls_back_to_trade_outcome_when_result_is_blank() {
        let t = trade().with_result("").with_trade_outcome("Win");
        assert_eq!(resolve_outcome(&t), Outcome::Win);
    }

    #[test]
    fn normalizes_case_and_break_even_spelling() {
        assert_eq!(resolve_outcome(&trade().with_result("WIN")), Outcome::Win);
        assert_eq!(resolve_outcome(&trade().with_trade_outcome("Break Even")), Outcome::BreakEven);
        assert_eq!(resolve_outcome(&trade().with_result("Be")), Outcome::BreakEven);
    }

    #[test]
    fn missing_or_unrecognized_outcome_is_unknown() {
        assert_eq!(resolve_outcome(&trade()), Outcome::Unknown);
        assert_eq!(resolve_outcome(&trade().with_result("scratch")), Outcome::Unknown);
    }

    #[test]
    fn instrument_falls_back_to_trade_pair_then_label() {
        let with_pair = trade().with_trade_pair("EURUSD");
        assert_eq!(resolve_instrument(&with_pair), Some("EURUSD"));

        let both = trade().with_instrument("NAS100").with_trade_pair("EURUSD");
        assert_eq!(resolve_instrument(&both), Some("NAS100"));

        let neither = trade().with_instrument("  ");
        assert_eq!(ResolvedTrade::new(&neither, "Unknown").instrument, "Unknown");
    }
}
