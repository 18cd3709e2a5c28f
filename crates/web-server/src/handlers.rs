use crate::{AppState, error::AppError};
use analytics::{AnalyticsReport, TradeQuery};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use core_types::Trade;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/analytics`.
#[derive(Debug, Deserialize)]
pub struct AnalyticsRequest {
    pub trades: Vec<Trade>,
    #[serde(default)]
    pub query: TradeQuery,
}

/// # GET /api/health
pub async fn health() -> &'static str {
    "OK"
}

/// # POST /api/analytics
/// Selects and orders the posted trades, then generates their report.
pub async fn post_analytics(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyticsRequest>, JsonRejection>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let Json(request) = payload?;
    let trades = request.query.apply(&request.trades);

    tracing::info!(
        received = request.trades.len(),
        selected = trades.len(),
        "Generating analytics report."
    );

    let report = state.engine.generate(&trades);
    Ok(Json(report))
}
