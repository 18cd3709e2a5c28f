use crate::math::round2;
use crate::outcome::ResolvedTrade;
use crate::report::ExecutionScorePoint;
use rust_decimal::Decimal;

/// Execution-score series for charting.
///
/// Only trades with a positive score are kept; `trade_number` counts from 1
/// over the kept trades, so it is a display index rather than a record id.
pub fn execution_scores(trades: &[ResolvedTrade<'_>]) -> Vec<ExecutionScorePoint> {
    trades
        .iter()
        .filter_map(|t| {
            t.trade
                .execution_score
                .filter(|score| *score > Decimal::ZERO)
                .map(|score| (t, score))
        })
        .enumerate()
        .map(|(i, (t, score))| ExecutionScorePoint {
            trade_number: i + 1,
            date: t.trade.date,
            score: round2(score),
            pnl: round2(t.pnl),
        })
        .collect()
}
