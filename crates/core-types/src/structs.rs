use crate::enums::{Direction, Session};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A single journal entry as handed over by the trade store.
///
/// The record is read-only to the analytics engine. Every field except
/// `date` is optional because journal entries are often filled in
/// incrementally; consumers default absent values rather than reject
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub date: DateTime<Utc>,
    /// Realized profit and loss. Absent means "not recorded" and counts as 0.
    #[serde(default)]
    pub pnl: Option<Decimal>,
    /// `win` / `loss` / `be`, any case.
    #[serde(default)]
    pub result: Option<String>,
    /// Legacy outcome field: `Win` / `Loss` / `Break Even`.
    #[serde(default)]
    pub trade_outcome: Option<String>,
    #[serde(default)]
    pub instrument: Option<String>,
    /// Legacy instrument field.
    #[serde(default)]
    pub trade_pair: Option<String>,
    #[serde(default)]
    pub strategy: Option<String>,
    /// Unrecognized text degrades to `None`.
    #[serde(default, deserialize_with = "lenient_enum")]
    pub session: Option<Session>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub direction: Option<Direction>,
    /// Free text ratio such as `1:2` or `2.5`.
    #[serde(default)]
    pub risk_reward: Option<String>,
    /// Self-assessed execution quality on a 1-10 scale.
    #[serde(default)]
    pub execution_score: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_backtest: bool,
}

/// Parses an optional label through `FromStr`, dropping values it rejects.
fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl Trade {
    /// Creates an otherwise empty record for the given timestamp.
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            pnl: None,
            result: None,
            trade_outcome: None,
            instrument: None,
            trade_pair: None,
            strategy: None,
            session: None,
            direction: None,
            risk_reward: None,
            execution_score: None,
            is_backtest: false,
        }
    }

    pub fn with_pnl(mut self, pnl: Decimal) -> Self {
        self.pnl = Some(pnl);
        self
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = Some(result.into());
        self
    }

    pub fn with_trade_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.trade_outcome = Some(outcome.into());
        self
    }

    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    pub fn with_trade_pair(mut self, pair: impl Into<String>) -> Self {
        self.trade_pair = Some(pair.into());
        self
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_risk_reward(mut self, rr: impl Into<String>) -> Self {
        self.risk_reward = Some(rr.into());
        self
    }

    pub fn with_execution_score(mut self, score: Decimal) -> Self {
        self.execution_score = Some(score);
        self
    }

    pub fn backtest(mut self, is_backtest: bool) -> Self {
        self.is_backtest = is_backtest;
        self
    }

    /// Realized P&L with an absent value treated as zero.
    pub fn pnl_or_zero(&self) -> Decimal {
        self.pnl.unwrap_or(Decimal::ZERO)
    }
}
