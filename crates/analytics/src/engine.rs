use crate::report::AnalyticsReport;
use crate::{categories, distribution, drawdown, execution, filters, outcome, overview, streaks, time_buckets};
use configuration::AnalyticsConfig;
use core_types::Trade;

/// A stateless calculator that turns a trade list into an `AnalyticsReport`.
///
/// The engine holds only its settings; every call to [`generate`] is an
/// independent pure function of its input, so one engine can be shared
/// freely between threads.
///
/// [`generate`]: AnalyticsEngine::generate
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    weekly_window: usize,
    unknown_label: String,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new(&AnalyticsConfig::default())
    }
}

impl AnalyticsEngine {
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self {
            weekly_window: config.weekly_window,
            unknown_label: config.unknown_label.clone(),
        }
    }

    /// The main entry point for generating a report.
    ///
    /// # Arguments
    ///
    /// * `trades` - The caller's trade selection, sorted ascending by `date`.
    ///   The ordering is not checked; an unsorted list still yields a report
    ///   but its equity, streak and drawdown sections lose their meaning.
    ///
    /// # Returns
    ///
    /// The complete report. An empty input yields [`AnalyticsReport::empty`].
    pub fn generate(&self, trades: &[Trade]) -> AnalyticsReport {
        if trades.is_empty() {
            tracing::debug!("No trades supplied; returning the empty report.");
            return AnalyticsReport::empty();
        }

        let label = self.unknown_label.as_str();
        let resolved = outcome::resolve_all(trades, label);

        let report = AnalyticsReport {
            overview: overview::overview(&resolved),
            equity: time_buckets::equity_curve(&resolved),
            monthly: time_buckets::monthly(&resolved),
            weekly: time_buckets::weekly(&resolved, self.weekly_window),
            daily: time_buckets::daily(&resolved),
            sessions: categories::by_session(&resolved, label),
            instruments: categories::by_instrument(&resolved),
            strategies: categories::by_strategy(&resolved, label),
            rr_distribution: distribution::risk_reward_distribution(&resolved),
            r_multiples: distribution::pnl_distribution(&resolved),
            execution_scores: execution::execution_scores(&resolved),
            streaks: streaks::streaks(&resolved),
            drawdown: drawdown::drawdown(&resolved),
            filters: filters::filter_values(trades),
        };

        tracing::debug!(
            trades = trades.len(),
            total_pnl = %report.overview.total_pnl,
            months = report.monthly.len(),
            "Analytics report generated."
        );

        report
    }
}
