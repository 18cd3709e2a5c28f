use analytics::AnalyticsEngine;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    web_server::router(AnalyticsEngine::default(), 1024 * 1024)
}

async fn post(body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/analytics")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_check() {
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn sorts_filters_and_reports() {
    let body = json!({
        "trades": [
            { "date": "2024-02-01T10:00:00Z", "pnl": -40, "result": "loss", "instrument": "EURUSD" },
            { "date": "2024-01-15T10:00:00Z", "pnl": 100, "result": "win", "instrument": "EURUSD" },
            { "date": "2024-01-20T10:00:00Z", "pnl": 500, "result": "win", "instrument": "XAUUSD", "isBacktest": true }
        ],
        "query": { "isBacktest": false }
    });
    let (status, report) = post(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["overview"]["totalTrades"], 2);
    assert_eq!(report["overview"]["totalPnL"], 60.0);
    assert_eq!(report["overview"]["winRate"], 50.0);
    assert_eq!(report["equity"][0]["cumulative"], 100.0);
    assert_eq!(report["equity"][1]["cumulative"], 60.0);
    assert_eq!(report["filters"]["instruments"], json!(["EURUSD"]));
}

#[tokio::test]
async fn empty_trade_list_returns_empty_report() {
    let (status, report) = post(json!({ "trades": [] }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["overview"]["totalTrades"], 0);
    assert_eq!(report["weekly"], json!([]));
    assert_eq!(report["streaks"]["maxWinStreak"], 0);
}

#[tokio::test]
async fn loosely_cased_labels_do_not_reject_the_payload() {
    let body = json!({
        "trades": [
            { "date": "2024-03-01T10:00:00Z", "pnl": 20, "result": "win", "session": "London", "direction": "Long" },
            { "date": "2024-03-02T10:00:00Z", "pnl": -5, "result": "loss", "session": "london", "direction": "short", "isBacktest": null },
            { "date": "2024-03-03T10:00:00Z", "pnl": 7, "result": "win", "session": "tokyo" }
        ]
    });
    let (status, report) = post(body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["overview"]["totalTrades"], 3);
    assert_eq!(report["filters"]["sessions"], json!(["London"]));
}

#[tokio::test]
async fn malformed_date_is_rejected_with_json_error() {
    let body = json!({ "trades": [ { "date": "31/02/2024", "pnl": 10 } ] });
    let (status, error) = post(body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(error["error"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn invalid_json_is_a_bad_request() {
    let (status, error) = post("{ not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"].is_string());
}
