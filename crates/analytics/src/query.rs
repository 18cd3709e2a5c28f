//! Caller-side selection of the trades a report is generated for.
//!
//! The engine itself never filters or sorts; request handlers and the CLI
//! run a `TradeQuery` first to build the ordered input list it expects.

use crate::outcome::resolve_instrument;
use chrono::NaiveDate;
use core_types::{Direction, Session, Trade};
use serde::Deserialize;

/// Criteria for selecting trades. Absent criteria match every trade.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeQuery {
    /// First trade day to include (UTC, inclusive).
    pub from: Option<NaiveDate>,
    /// Last trade day to include (UTC, inclusive).
    pub to: Option<NaiveDate>,
    /// Matched case-insensitively against the resolved instrument.
    pub instrument: Option<String>,
    pub strategy: Option<String>,
    pub session: Option<Session>,
    pub direction: Option<Direction>,
    /// `Some(true)` keeps only backtests, `Some(false)` only live trades.
    pub is_backtest: Option<bool>,
}

impl TradeQuery {
    pub fn matches(&self, trade: &Trade) -> bool {
        let day = trade.date.date_naive();

        self.from.is_none_or(|from| day >= from)
            && self.to.is_none_or(|to| day <= to)
            && self.instrument.as_deref().is_none_or(|wanted| {
                resolve_instrument(trade).is_some_and(|i| i.eq_ignore_ascii_case(wanted.trim()))
            })
            && self.strategy.as_deref().is_none_or(|wanted| {
                trade
                    .strategy
                    .as_deref()
                    .is_some_and(|s| s.trim().eq_ignore_ascii_case(wanted.trim()))
            })
            && self.session.is_none_or(|s| trade.session == Some(s))
            && self.direction.is_none_or(|d| trade.direction == Some(d))
            && self.is_backtest.is_none_or(|b| trade.is_backtest == b)
    }

    /// Returns the matching trades sorted ascending by date.
    ///
    /// The sort is stable, so trades sharing a timestamp keep their
    /// original relative order.
    pub fn apply(&self, trades: &[Trade]) -> Vec<Trade> {
        let mut selected: Vec<Trade> = trades.iter().filter(|t| self.matches(t)).cloned().collect();
        selected.sort_by_key(|t| t.date);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(d: u32) -> Trade {
        Trade::new(Utc.with_ymd_and_hms(2024, 6, d, 12, 0, 0).unwrap())
    }

    #[test]
    fn empty_query_sorts_everything() {
        let trades = vec![at(3), at(1), at(2)];
        let selected = TradeQuery::default().apply(&trades);

        let days: Vec<_> = selected.iter().map(|t| t.date.date_naive().to_string()).collect();
        assert_eq!(days, vec!["2024-06-01", "2024-06-02", "2024-06-03"]);
    }

    #[test]
    fn date_range_is_inclusive() {
        let trades = vec![at(1), at(2), at(3), at(4)];
        let query = TradeQuery {
            from: NaiveDate::from_ymd_opt(2024, 6, 2),
            to: NaiveDate::from_ymd_opt(2024, 6, 3),
            ..Default::default()
        };
        assert_eq!(query.apply(&trades).len(), 2);
    }

    #[test]
    fn instrument_matches_legacy_pair_field() {
        let trades = vec![
            at(1).with_trade_pair("eurusd"),
            at(2).with_instrument("GBPUSD"),
        ];
        let query = TradeQuery {
            instrument: Some("EURUSD".to_string()),
            ..Default::default()
        };
        let selected = query.apply(&trades);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].trade_pair.as_deref(), Some("eurusd"));
    }

    #[test]
    fn separates_backtests_from_live_trades() {
        let trades = vec![at(1).backtest(true), at(2), at(3).backtest(true)];
        let backtests = TradeQuery {
            is_backtest: Some(true),
            ..Default::default()
        };
        let live = TradeQuery {
            is_backtest: Some(false),
            ..Default::default()
        };
        assert_eq!(backtests.apply(&trades).len(), 2);
        assert_eq!(live.apply(&trades).len(), 1);
    }

    #[test]
    fn deserializes_from_camel_case_json() {
        let query: TradeQuery =
            serde_json::from_str(r#"{ "from": "2024-01-01", "session": "NY", "isBacktest": false }"#).unwrap();
        assert_eq!(query.session, Some(Session::NewYork));
        assert_eq!(query.is_backtest, Some(false));
        assert!(query.to.is_none());
    }
}
