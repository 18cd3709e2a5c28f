//! Win/loss streak tracking.
//!
//! The tracker is a small state machine folded over the resolved outcomes.
//! Break-even and unresolved trades are skipped: they neither extend nor
//! reset a streak, so `win, be, win` is a two-trade winning streak.

use crate::math::round2;
use crate::outcome::ResolvedTrade;
use crate::report::Streaks;
use core_types::Outcome;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreakState {
    pub current_win: usize,
    pub current_win_pnl: Decimal,
    pub max_win: usize,
    pub max_win_pnl: Decimal,
    pub current_loss: usize,
    /// Accumulated as absolute values.
    pub current_loss_pnl: Decimal,
    pub max_loss: usize,
    pub max_loss_pnl: Decimal,
}

impl StreakState {
    /// Advances the tracker by one trade.
    pub fn step(self, outcome: Outcome, pnl: Decimal) -> Self {
        let mut next = self;
        match outcome {
            Outcome::Win => {
                next.current_win += 1;
                next.current_win_pnl += pnl;
                next.current_loss = 0;
                next.current_loss_pnl = Decimal::ZERO;
                if next.current_win > next.max_win {
                    next.max_win = next.current_win;
                    next.max_win_pnl = next.current_win_pnl;
                }
            }
            Outcome::Loss => {
                next.current_loss += 1;
                next.current_loss_pnl += pnl.abs();
                next.current_win = 0;
                next.current_win_pnl = Decimal::ZERO;
                if next.current_loss > next.max_loss {
                    next.max_loss = next.current_loss;
                    next.max_loss_pnl = next.current_loss_pnl;
                }
            }
            Outcome::BreakEven | Outcome::Unknown => {}
        }
        next
    }

    pub fn into_report(self) -> Streaks {
        Streaks {
            max_win_streak: self.max_win,
            max_loss_streak: self.max_loss,
            max_win_streak_pnl: round2(self.max_win_pnl),
            max_loss_streak_pnl: round2(self.max_loss_pnl),
            current_win_streak: self.current_win,
            current_loss_streak: self.current_loss,
            current_win_streak_pnl: round2(self.current_win_pnl),
            current_loss_streak_pnl: round2(self.current_loss_pnl),
        }
    }
}

pub fn streaks(trades: &[ResolvedTrade<'_>]) -> Streaks {
    trades
        .iter()
        .fold(StreakState::default(), |state, t| state.step(t.outcome, t.pnl))
        .into_report()
}
