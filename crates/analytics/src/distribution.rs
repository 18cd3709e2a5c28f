//! Fixed-range histograms over risk:reward and dollar outcome.
//!
//! Both histograms emit only non-empty buckets, always in the canonical
//! range order below, never by frequency.

use crate::math::{percent, round2};
use crate::outcome::ResolvedTrade;
use crate::report::{PnlBucket, RiskRewardBucket};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Planned reward-to-risk ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRewardRange {
    BelowOne,
    OneToTwo,
    TwoToThree,
    ThreeToFive,
    FiveAndAbove,
}

impl RiskRewardRange {
    pub const ALL: [RiskRewardRange; 5] = [
        RiskRewardRange::BelowOne,
        RiskRewardRange::OneToTwo,
        RiskRewardRange::TwoToThree,
        RiskRewardRange::ThreeToFive,
        RiskRewardRange::FiveAndAbove,
    ];

    pub fn classify(ratio: Decimal) -> Self {
        if ratio < Decimal::ONE {
            RiskRewardRange::BelowOne
        } else if ratio < Decimal::TWO {
            RiskRewardRange::OneToTwo
        } else if ratio < Decimal::from(3) {
            RiskRewardRange::TwoToThree
        } else if ratio < Decimal::from(5) {
            RiskRewardRange::ThreeToFive
        } else {
            RiskRewardRange::FiveAndAbove
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskRewardRange::BelowOne => "<1:1",
            RiskRewardRange::OneToTwo => "1:1-2:1",
            RiskRewardRange::TwoToThree => "2:1-3:1",
            RiskRewardRange::ThreeToFive => "3:1-5:1",
            RiskRewardRange::FiveAndAbove => ">5:1",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Parses a risk:reward annotation into a reward-per-unit-risk ratio.
///
/// Accepts `risk:reward` (e.g. `1:2` -> 2, `2:3` -> 1.5) or a bare number
/// (`2.5`). Returns `None` for anything unparseable, a non-positive risk leg,
/// or a negative ratio.
pub fn parse_risk_reward(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let ratio = match text.split_once(':') {
        Some((risk, reward)) => {
            let risk = Decimal::from_str(risk.trim()).ok()?;
            let reward = Decimal::from_str(reward.trim()).ok()?;
            if risk <= Decimal::ZERO {
                return None;
            }
            reward.checked_div(risk)?
        }
        None => Decimal::from_str(text).ok()?,
    };
    (ratio >= Decimal::ZERO).then_some(ratio)
}

#[derive(Debug, Clone, Copy, Default)]
struct HistogramCell {
    count: usize,
    wins: usize,
    pnl: Decimal,
}

/// Histogram of planned risk:reward. Trades without a parseable value are skipped.
///
/// The per-bucket win rate is `wins / count`, so break-even and unresolved
/// trades inside a bucket weigh as losses.
pub fn risk_reward_distribution(trades: &[ResolvedTrade<'_>]) -> Vec<RiskRewardBucket> {
    let mut cells = [HistogramCell::default(); 5];

    for t in trades {
        let Some(ratio) = t.trade.risk_reward.as_deref().and_then(parse_risk_reward) else {
            continue;
        };
        let cell = &mut cells[RiskRewardRange::classify(ratio).index()];
        cell.count += 1;
        cell.pnl += t.pnl;
        if t.outcome.is_win() {
            cell.wins += 1;
        }
    }

    RiskRewardRange::ALL
        .iter()
        .zip(cells)
        .filter(|(_, cell)| cell.count > 0)
        .map(|(range, cell)| RiskRewardBucket {
            range: range.label().to_string(),
            count: cell.count,
            wins: cell.wins,
            pnl: round2(cell.pnl),
            win_rate: round2(percent(cell.wins, cell.count)),
        })
        .collect()
}

/// Dollar thresholds separating the outcome buckets; lower bounds inclusive.
const PNL_EDGES: [i64; 6] = [-200, -100, 0, 100, 200, 300];

const PNL_LABELS: [&str; 7] = [
    "< -$200",
    "-$200 to -$100",
    "-$100 to $0",
    "$0 to $100",
    "$100 to $200",
    "$200 to $300",
    "$300+",
];

/// Index into [`PNL_LABELS`] for a trade's P&L.
pub fn pnl_bucket_index(pnl: Decimal) -> usize {
    PNL_EDGES
        .iter()
        .take_while(|&&edge| pnl >= Decimal::from(edge))
        .count()
}

/// Histogram of realized dollar outcomes over seven fixed ranges.
pub fn pnl_distribution(trades: &[ResolvedTrade<'_>]) -> Vec<PnlBucket> {
    let mut cells = [HistogramCell::default(); 7];

    for t in trades {
        let cell = &mut cells[pnl_bucket_index(t.pnl)];
        cell.count += 1;
        cell.pnl += t.pnl;
    }

    PNL_LABELS
        .iter()
        .zip(cells)
        .filter(|(_, cell)| cell.count > 0)
        .map(|(label, cell)| PnlBucket {
            range: label.to_string(),
            count: cell.count,
            pnl: round2(cell.pnl),
        })
        .collect()
}
