use crate::outcome::ResolvedTrade;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Running totals for one group of trades.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub count: usize,
    pub pnl: Decimal,
    pub wins: usize,
    pub losses: usize,
}

impl Bucket {
    pub fn record(&mut self, trade: &ResolvedTrade<'_>) {
        self.count += 1;
        self.pnl += trade.pnl;
        if trade.outcome.is_win() {
            self.wins += 1;
        } else if trade.outcome.is_loss() {
            self.losses += 1;
        }
    }
}

/// Groups trades into buckets keyed by `key`, in a single pass.
///
/// The map is ordered by key, so iteration order never depends on the order
/// trades were inserted in.
pub fn group_by<'a, K, F>(trades: &[ResolvedTrade<'a>], mut key: F) -> BTreeMap<K, Bucket>
where
    K: Ord,
    F: FnMut(&ResolvedTrade<'a>) -> K,
{
    let mut buckets = BTreeMap::new();
    for trade in trades {
        buckets
            .entry(key(trade))
            .or_insert_with(Bucket::default)
            .record(trade);
    }
    buckets
}
