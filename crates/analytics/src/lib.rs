//! # Journal Analytics Engine
//!
//! This crate turns a user's trade journal into a multi-section performance
//! report: summary statistics, equity curve, calendar P&L, category
//! leaderboards, histograms, execution scores, streaks and drawdown.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of storage,
//!   transport or presentation. It depends only on `core-types` and the typed
//!   `[analytics]` settings from `configuration`.
//! - **Stateless Calculation:** The `AnalyticsEngine` takes a borrowed, date-sorted
//!   trade list and returns a freshly allocated `AnalyticsReport`. Nothing is kept
//!   between calls and nothing can fail: missing fields degrade to zero or are
//!   left out of the aggregate they would feed.
//! - **Independent Sections:** Every section is derived from the raw trades, never
//!   from another section's rounded output.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: composes all sections into one report.
//! - `AnalyticsReport`: the serializable report and its section types.
//! - `TradeQuery`: caller-side filtering and ordering of the input list.

// Declare the modules that constitute this crate.
pub mod bucket;
pub mod categories;
pub mod distribution;
pub mod drawdown;
pub mod engine;
pub mod execution;
pub mod filters;
pub mod math;
pub mod outcome;
pub mod overview;
pub mod query;
pub mod report;
pub mod streaks;
pub mod time_buckets;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use outcome::{ResolvedTrade, resolve_instrument, resolve_outcome};
pub use query::TradeQuery;
pub use report::AnalyticsReport;
