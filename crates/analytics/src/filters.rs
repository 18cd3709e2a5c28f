use crate::outcome::resolve_instrument;
use crate::report::FilterValues;
use core_types::Trade;

/// Collects the distinct, non-empty filter values present in the trade list.
pub fn filter_values(trades: &[Trade]) -> FilterValues {
    let mut values = FilterValues::default();

    for trade in trades {
        if let Some(instrument) = resolve_instrument(trade) {
            values.instruments.insert(instrument.to_string());
        }
        if let Some(strategy) = trade.strategy.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            values.strategies.insert(strategy.to_string());
        }
        if let Some(session) = trade.session {
            values.sessions.insert(session.to_string());
        }
        if let Some(direction) = trade.direction {
            values.directions.insert(direction.to_string());
        }
    }

    values
}
