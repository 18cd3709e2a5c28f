//! Peak-to-trough drawdown of the cumulative P&L.

use crate::math::round2;
use crate::outcome::ResolvedTrade;
use crate::report::{Drawdown, DrawdownPoint};
use rust_decimal::Decimal;

/// Running state of the drawdown tracker.
///
/// `peak` starts at zero, so a list that opens with losses is already in
/// drawdown from the first trade.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawdownState {
    pub cumulative: Decimal,
    pub peak: Decimal,
    pub max_drawdown: Decimal,
    pub max_drawdown_percent: Decimal,
}

impl DrawdownState {
    /// Advances the tracker by one trade's P&L.
    pub fn step(self, pnl: Decimal) -> Self {
        let mut next = self;
        next.cumulative += pnl;
        if next.cumulative > next.peak {
            next.peak = next.cumulative;
        }
        let drawdown = next.drawdown();
        if drawdown < next.max_drawdown {
            next.max_drawdown = drawdown;
            next.max_drawdown_percent = next.drawdown_percent();
        }
        next
    }

    /// Distance below the running peak; never positive.
    pub fn drawdown(&self) -> Decimal {
        self.cumulative - self.peak
    }

    /// Drawdown relative to the peak, or zero while the peak is not positive.
    /// A percent too large for a `Decimal` also reads as zero.
    pub fn drawdown_percent(&self) -> Decimal {
        if self.peak > Decimal::ZERO {
            self.drawdown()
                .checked_div(self.peak)
                .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }
}

pub fn drawdown(trades: &[ResolvedTrade<'_>]) -> Drawdown {
    let mut state = DrawdownState::default();
    let mut series = Vec::with_capacity(trades.len());

    for t in trades {
        state = state.step(t.pnl);
        series.push(DrawdownPoint {
            date: t.trade.date,
            drawdown: round2(state.drawdown()),
            cumulative: round2(state.cumulative),
        });
    }

    Drawdown {
        max_drawdown: round2(state.max_drawdown),
        max_drawdown_percent: round2(state.max_drawdown_percent),
        series,
    }
}
