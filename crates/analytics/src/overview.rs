use crate::math::{ratio, round2, win_rate};
use crate::outcome::ResolvedTrade;
use crate::report::Overview;
use core_types::Outcome;
use rust_decimal::Decimal;

/// Computes the scalar summary section.
///
/// Callers must not pass an empty slice; the composer short-circuits to the
/// empty report before getting here.
pub fn overview(trades: &[ResolvedTrade<'_>]) -> Overview {
    let total_trades = trades.len();

    let mut winning_trades = 0usize;
    let mut losing_trades = 0usize;
    let mut break_even_trades = 0usize;
    let mut total_pnl = Decimal::ZERO;
    let mut winning_pnl = Decimal::ZERO;
    let mut losing_sum = Decimal::ZERO;
    let mut score_sum = Decimal::ZERO;
    let mut best = Decimal::ZERO;
    let mut worst = Decimal::ZERO;

    for t in trades {
        total_pnl += t.pnl;
        score_sum += t.trade.execution_score.unwrap_or(Decimal::ZERO);
        best = best.max(t.pnl);
        worst = worst.min(t.pnl);

        match t.outcome {
            Outcome::Win => {
                winning_trades += 1;
                winning_pnl += t.pnl;
            }
            Outcome::Loss => {
                losing_trades += 1;
                losing_sum += t.pnl;
            }
            Outcome::BreakEven => break_even_trades += 1,
            Outcome::Unknown => {}
        }
    }

    let losing_pnl = losing_sum.abs();
    let count = Decimal::from(total_trades);
    let avg_win = ratio(winning_pnl, Decimal::from(winning_trades));
    let avg_loss = ratio(losing_pnl, Decimal::from(losing_trades));
    let win_rate = win_rate(winning_trades, losing_trades);
    let win_fraction = win_rate / Decimal::ONE_HUNDRED;
    let expectancy = win_fraction * avg_win - (Decimal::ONE - win_fraction) * avg_loss;

    Overview {
        total_trades,
        winning_trades,
        losing_trades,
        break_even_trades,
        total_pnl: round2(total_pnl),
        avg_pnl: round2(ratio(total_pnl, count)),
        winning_pnl: round2(winning_pnl),
        losing_pnl: round2(losing_pnl),
        avg_win: round2(avg_win),
        avg_loss: round2(avg_loss),
        win_rate: round2(win_rate),
        profit_factor: round2(ratio(winning_pnl, losing_pnl)),
        payoff_ratio: round2(ratio(avg_win, avg_loss)),
        expectancy: round2(expectancy),
        // Unscored trades count as zero in the mean.
        avg_execution_score: round2(ratio(score_sum, count)),
        best_trade: round2(best),
        worst_trade: round2(worst),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::resolve_all;
    use chrono::{TimeZone, Utc};
    use core_types::Trade;
    use rust_decimal_macros::dec;

    fn trade(pnl: Decimal, result: &str) -> Trade {
        Trade::new(Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap())
            .with_pnl(pnl)
            .with_result(result)
    }

    #[test]
    fn break_even_is_excluded_from_win_rate() {
        let trades = vec![trade(dec!(100), "win"), trade(dec!(-40), "loss"), trade(dec!(0), "be")];
        let o = overview(&resolve_all(&trades, "Unknown"));

        assert_eq!(o.total_trades, 3);
        assert_eq!(o.break_even_trades, 1);
        assert_eq!(o.win_rate, dec!(50));
    }

    #[test]
    fn ratios_and_expectancy() {
        let trades = vec![
            trade(dec!(200), "win"),
            trade(dec!(100), "win"),
            trade(dec!(-50), "loss"),
            trade(dec!(-100), "loss"),
        ];
        let o = overview(&resolve_all(&trades, "Unknown"));

        assert_eq!(o.total_pnl, dec!(150));
        assert_eq!(o.avg_pnl, dec!(37.5));
        assert_eq!(o.winning_pnl, dec!(300));
        assert_eq!(o.losing_pnl, dec!(150));
        assert_eq!(o.avg_win, dec!(150));
        assert_eq!(o.avg_loss, dec!(75));
        assert_eq!(o.profit_factor, dec!(2));
        assert_eq!(o.payoff_ratio, dec!(2));
        // 0.5 * 150 - 0.5 * 75
        assert_eq!(o.expectancy, dec!(37.5));
        assert_eq!(o.best_trade, dec!(200));
        assert_eq!(o.worst_trade, dec!(-100));
    }

    #[test]
    fn all_wins_guard_loss_ratios() {
        let trades = vec![trade(dec!(10), "win"), trade(dec!(30), "win")];
        let o = overview(&resolve_all(&trades, "Unknown"));

        assert_eq!(o.profit_factor, Decimal::ZERO);
        assert_eq!(o.payoff_ratio, Decimal::ZERO);
        assert_eq!(o.avg_loss, Decimal::ZERO);
        assert_eq!(o.win_rate, dec!(100));
        assert_eq!(o.worst_trade, Decimal::ZERO);
    }

    #[test]
    fn all_losses_floor_best_trade_at_zero() {
        let trades = vec![trade(dec!(-10), "loss"), trade(dec!(-30), "loss")];
        let o = overview(&resolve_all(&trades, "Unknown"));

        assert_eq!(o.best_trade, Decimal::ZERO);
        assert_eq!(o.worst_trade, dec!(-30));
        assert_eq!(o.win_rate, Decimal::ZERO);
        assert_eq!(o.expectancy, dec!(-20));
    }

    #[test]
    fn execution_score_average_counts_unscored_trades_as_zero() {
        let trades = vec![
            trade(dec!(10), "win").with_execution_score(dec!(8)),
            trade(dec!(-5), "loss"),
        ];
        let o = overview(&resolve_all(&trades, "Unknown"));
        assert_eq!(o.avg_execution_score, dec!(4));
    }
}
