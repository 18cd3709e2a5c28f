//! Equity curve and calendar-bucketed profit and loss.
//!
//! Bucket keys are derived from the trade timestamp in UTC. The keys are
//! zero-padded so that lexicographic order is chronological order.

use crate::bucket::{Bucket, group_by};
use crate::math::{round2, win_rate};
use crate::outcome::ResolvedTrade;
use crate::report::{EquityPoint, PeriodPnl};
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

/// Running cumulative P&L, one point per trade, in input order.
pub fn equity_curve(trades: &[ResolvedTrade<'_>]) -> Vec<EquityPoint> {
    let mut cumulative = Decimal::ZERO;
    trades
        .iter()
        .map(|t| {
            cumulative += t.pnl;
            EquityPoint {
                date: t.trade.date,
                pnl: round2(t.pnl),
                cumulative: round2(cumulative),
            }
        })
        .collect()
}

pub fn month_key(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m").to_string()
}

pub fn day_key(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYY-Www` using the ISO-8601 week-numbering year and week.
///
/// The ISO year is used rather than the calendar year so that the days of a
/// week straddling New Year share one key.
pub fn week_key(date: &DateTime<Utc>) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

pub fn monthly(trades: &[ResolvedTrade<'_>]) -> Vec<PeriodPnl> {
    by_period(trades, month_key)
}

pub fn daily(trades: &[ResolvedTrade<'_>]) -> Vec<PeriodPnl> {
    by_period(trades, day_key)
}

/// Weekly P&L, keeping only the `window` most recent weeks.
pub fn weekly(trades: &[ResolvedTrade<'_>], window: usize) -> Vec<PeriodPnl> {
    let mut weeks = by_period(trades, week_key);
    if weeks.len() > window {
        weeks.drain(..weeks.len() - window);
    }
    weeks
}

fn by_period(trades: &[ResolvedTrade<'_>], key: fn(&DateTime<Utc>) -> String) -> Vec<PeriodPnl> {
    group_by(trades, |t| key(&t.trade.date))
        .into_iter()
        .map(|(period, bucket)| period_row(period, &bucket))
        .collect()
}

fn period_row(period: String, bucket: &Bucket) -> PeriodPnl {
    PeriodPnl {
        period,
        pnl: round2(bucket.pnl),
        trades: bucket.count,
        wins: bucket.wins,
        losses: bucket.losses,
        win_rate: round2(win_rate(bucket.wins, bucket.losses)),
    }
}
