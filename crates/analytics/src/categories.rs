//! Performance leaderboards by session, instrument and strategy.

use crate::bucket::{Bucket, group_by};
use crate::math::{ratio, round2, win_rate};
use crate::outcome::ResolvedTrade;
use crate::report::CategoryStats;
use rust_decimal::Decimal;

/// Groups trades by `category` and ranks the groups by total P&L, best first.
///
/// Groups with equal P&L keep their alphabetical order.
pub fn leaderboard<'a, F>(trades: &[ResolvedTrade<'a>], category: F) -> Vec<CategoryStats>
where
    F: FnMut(&ResolvedTrade<'a>) -> String,
{
    let mut groups: Vec<(String, Bucket)> = group_by(trades, category).into_iter().collect();
    groups.sort_by(|(_, a), (_, b)| b.pnl.cmp(&a.pnl));

    groups
        .into_iter()
        .map(|(name, bucket)| CategoryStats {
            name,
            trades: bucket.count,
            wins: bucket.wins,
            losses: bucket.losses,
            pnl: round2(bucket.pnl),
            win_rate: round2(win_rate(bucket.wins, bucket.losses)),
            avg_pnl: round2(ratio(bucket.pnl, Decimal::from(bucket.count))),
        })
        .collect()
}

pub fn by_session(trades: &[ResolvedTrade<'_>], unknown_label: &str) -> Vec<CategoryStats> {
    leaderboard(trades, |t| {
        t.trade
            .session
            .map(|s| s.to_string())
            .unwrap_or_else(|| unknown_label.to_string())
    })
}

pub fn by_instrument(trades: &[ResolvedTrade<'_>]) -> Vec<CategoryStats> {
    leaderboard(trades, |t| t.instrument.to_string())
}

pub fn by_strategy(trades: &[ResolvedTrade<'_>], unknown_label: &str) -> Vec<CategoryStats> {
    leaderboard(trades, |t| {
        t.trade
            .strategy
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(unknown_label)
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::resolve_all;
    use chrono::{TimeZone, Utc};
    use core_types::{Session, Trade};
    use rust_decimal_macros::dec;

    fn trade(pnl: Decimal, result: &str) -> Trade {
        Trade::new(Utc.with_ymd_and_hms(2024, 5, 6, 8, 0, 0).unwrap())
            .with_pnl(pnl)
            .with_result(result)
    }

    #[test]
    fn sessions_are_ranked_by_total_pnl() {
        let trades = vec![
            trade(dec!(-20), "loss").with_session(Session::Asian),
            trade(dec!(50), "win").with_session(Session::London),
            trade(dec!(30), "win").with_session(Session::NewYork),
            trade(dec!(40), "win").with_session(Session::NewYork),
            trade(dec!(-10), "loss").with_session(Session::NewYork),
        ];
        let rows = by_session(&resolve_all(&trades, "Unknown"), "Unknown");

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["NY", "London", "Asian"]);
        assert_eq!(rows[0].trades, 3);
        assert_eq!(rows[0].pnl, dec!(60));
        assert_eq!(rows[0].win_rate, dec!(66.67));
        assert_eq!(rows[0].avg_pnl, dec!(20));
    }

    #[test]
    fn instruments_fall_back_through_trade_pair_to_unknown() {
        let trades = vec![
            trade(dec!(10), "win").with_instrument("XAUUSD"),
            trade(dec!(20), "win").with_trade_pair("XAUUSD"),
            trade(dec!(5), "win"),
        ];
        let rows = by_instrument(&resolve_all(&trades, "Unknown"));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "XAUUSD");
        assert_eq!(rows[0].trades, 2);
        assert_eq!(rows[1].name, "Unknown");
    }

    #[test]
    fn missing_strategy_uses_the_unknown_label() {
        let trades = vec![
            trade(dec!(10), "win").with_strategy("Breakout"),
            trade(dec!(-10), "loss").with_strategy(""),
        ];
        let rows = by_strategy(&resolve_all(&trades, "Unknown"), "No strategy");

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Breakout", "No strategy"]);
    }

    #[test]
    fn equal_pnl_keeps_alphabetical_order() {
        let trades = vec![
            trade(dec!(10), "win").with_strategy("Zeta"),
            trade(dec!(10), "win").with_strategy("Alpha"),
        ];
        let rows = by_strategy(&resolve_all(&trades, "Unknown"), "Unknown");
        assert_eq!(rows[0].name, "Alpha");
        assert_eq!(rows[1].name, "Zeta");
    }
}
