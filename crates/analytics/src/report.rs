use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The complete analytics report for one trade list.
///
/// This struct is the final output of the `AnalyticsEngine` and the payload
/// handed to the presentation layer. Every section is always present; for an
/// empty trade list every scalar is zero and every series is empty (see
/// [`AnalyticsReport::empty`]). All numeric leaves are rounded to two decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub overview: Overview,
    pub equity: Vec<EquityPoint>,
    pub monthly: Vec<PeriodPnl>,
    pub weekly: Vec<PeriodPnl>,
    pub daily: Vec<PeriodPnl>,
    pub sessions: Vec<CategoryStats>,
    pub instruments: Vec<CategoryStats>,
    pub strategies: Vec<CategoryStats>,
    pub rr_distribution: Vec<RiskRewardBucket>,
    pub r_multiples: Vec<PnlBucket>,
    pub execution_scores: Vec<ExecutionScorePoint>,
    pub streaks: Streaks,
    pub drawdown: Drawdown,
    pub filters: FilterValues,
}

impl AnalyticsReport {
    /// The canonical zero-valued report returned for an empty trade list.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Scalar summary statistics over the whole trade list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub break_even_trades: usize,
    #[serde(rename = "totalPnL")]
    pub total_pnl: Decimal,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: Decimal,
    #[serde(rename = "winningPnL")]
    pub winning_pnl: Decimal,
    /// Absolute value of the summed losing P&L.
    #[serde(rename = "losingPnL")]
    pub losing_pnl: Decimal,
    pub avg_win: Decimal,
    pub avg_loss: Decimal,
    /// Percentage of wins among decided (win or loss) trades.
    pub win_rate: Decimal,
    pub profit_factor: Decimal,
    pub payoff_ratio: Decimal,
    pub expectancy: Decimal,
    pub avg_execution_score: Decimal,
    pub best_trade: Decimal,
    pub worst_trade: Decimal,
}

/// One point of the equity curve, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub date: DateTime<Utc>,
    pub pnl: Decimal,
    pub cumulative: Decimal,
}

/// Profit and loss for one calendar bucket (month, ISO week or day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPnl {
    /// `YYYY-MM`, `YYYY-Www` or `YYYY-MM-DD`.
    pub period: String,
    pub pnl: Decimal,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: Decimal,
}

/// Leaderboard row for one session, instrument or strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub name: String,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub pnl: Decimal,
    pub win_rate: Decimal,
    #[serde(rename = "avgPnL")]
    pub avg_pnl: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardBucket {
    pub range: String,
    pub count: usize,
    pub wins: usize,
    pub pnl: Decimal,
    pub win_rate: Decimal,
}

/// Dollar-outcome histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlBucket {
    pub range: String,
    pub count: usize,
    pub pnl: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionScorePoint {
    /// 1-based display index among the scored trades.
    pub trade_number: usize,
    pub date: DateTime<Utc>,
    pub score: Decimal,
    pub pnl: Decimal,
}

/// Longest runs seen, plus the run still open at the end of the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streaks {
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
    #[serde(rename = "maxWinStreakPnL")]
    pub max_win_streak_pnl: Decimal,
    #[serde(rename = "maxLossStreakPnL")]
    pub max_loss_streak_pnl: Decimal,
    pub current_win_streak: usize,
    pub current_loss_streak: usize,
    #[serde(rename = "currentWinStreakPnL")]
    pub current_win_streak_pnl: Decimal,
    #[serde(rename = "currentLossStreakPnL")]
    pub current_loss_streak_pnl: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawdown {
    /// Most negative distance from the running peak (always <= 0).
    pub max_drawdown: Decimal,
    pub max_drawdown_percent: Decimal,
    pub series: Vec<DrawdownPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownPoint {
    pub date: DateTime<Utc>,
    pub drawdown: Decimal,
    pub cumulative: Decimal,
}

/// Distinct values observed in the trade list, for populating filter controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterValues {
    pub instruments: BTreeSet<String>,
    pub strategies: BTreeSet<String>,
    pub sessions: BTreeSet<String>,
    pub directions: BTreeSet<String>,
}
