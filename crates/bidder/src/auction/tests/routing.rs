use super::common::*;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use serde_json::Value;
use std::sync::Arc;

use crate::auction::router::bid_handler;
use crate::auction::BannerId;

fn bid_uri(adsize: &str) -> String {
    format!("/bidder/?ssp=1&bid={BID}&adsize={adsize}")
}

#[tokio::test]
async fn winning_bid_is_json() {
    let response = get(Arc::new(service()), &bid_uri("90x728")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("bidId").and_then(Value::as_str), Some(BID));
    assert_eq!(payload.get("bannerId").and_then(Value::as_u64), Some(1));
    assert_eq!(payload.get("price").and_then(Value::as_u64), Some(10));
}

#[tokio::test]
async fn path_without_trailing_slash_is_served() {
    let uri = format!("/bidder?ssp=1&bid={BID}&adsize=600x160");
    let payload = read_json_body(get(Arc::new(service()), &uri).await).await;
    assert_eq!(payload.get("bannerId").and_then(Value::as_u64), Some(5));
    assert_eq!(payload.get("price").and_then(Value::as_u64), Some(20));
}

#[tokio::test]
async fn no_match_returns_empty_ok() {
    let service = Arc::new(service());
    for adsize in ["250x300", "1x1"] {
        let response = get(service.clone(), &bid_uri(adsize)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(read_body(response).await.is_empty());
    }
}

#[tokio::test]
async fn budget_errors_are_soft() {
    let service = Arc::new(service());
    for adsize in ["200x500", "350x350"] {
        let response = get(service.clone(), &bid_uri(adsize)).await;
        assert_error(response, StatusCode::OK, "Not enough budget.").await;
    }
}

#[tokio::test]
async fn missing_ssp_is_bad_request() {
    let uri = format!("/bidder/?bid={BID}&adsize=600x160");
    let service = Arc::new(service());
    let response = get(service.clone(), &uri).await;
    assert_error(response, StatusCode::BAD_REQUEST, "No SSP Provided.").await;
    assert_eq!(service.ledger().remaining(BannerId(5)), Some(1000));
}

#[tokio::test]
async fn missing_bid_or_size_share_a_message() {
    let service = Arc::new(service());

    let response = get(service.clone(), "/bidder/?ssp=1&adsize=600x160").await;
    assert_error(response, StatusCode::BAD_REQUEST, "No Bid ID Provided.").await;

    let uri = format!("/bidder/?ssp=1&bid={BID}");
    let response = get(service, &uri).await;
    assert_error(response, StatusCode::BAD_REQUEST, "No Bid ID Provided.").await;
}

#[tokio::test]
async fn missing_query_string_is_bad_request() {
    let response = get(Arc::new(service()), "/bidder/").await;
    assert_error(response, StatusCode::BAD_REQUEST, "No SSP Provided.").await;
}

#[tokio::test]
async fn reflected_markup_is_escaped() {
    let uri = "/bidder/?ssp=1&bid=%3Cscript%3Ealert(1)%3C%2Fscript%3E&adsize=90x728";
    let response = get(Arc::new(service()), uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let bid_id = payload
        .get("bidId")
        .and_then(Value::as_str)
        .expect("bid id echoed");
    assert!(!bid_id.contains("<script>alert(1)</script>"));
    assert_eq!(bid_id, "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[tokio::test]
async fn handler_treats_unparsed_query_as_empty() {
    let response = bid_handler(State(Arc::new(service())), None).await;
    assert_error(response, StatusCode::BAD_REQUEST, "No SSP Provided.").await;
}

#[tokio::test]
async fn handler_runs_auction_for_parsed_query() {
    let pairs = [("ssp", "1"), ("bid", BID), ("adsize", "100x100")]
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .to_vec();
    let response = bid_handler(State(Arc::new(service())), Some(Query(pairs))).await;
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("bannerId").and_then(Value::as_u64), Some(6));
    assert_eq!(payload.get("price").and_then(Value::as_u64), Some(10));
}

#[tokio::test]
async fn bid_id_is_echoed_with_its_whitespace() {
    let uri = "/bidder/?ssp=1&bid=%20abc%20&adsize=90x728";
    let payload = read_json_body(get(Arc::new(service()), uri).await).await;
    assert_eq!(payload.get("bidId").and_then(Value::as_str), Some(" abc "));
    assert_eq!(payload.get("bannerId").and_then(Value::as_u64), Some(1));
}

#[tokio::test]
async fn repeated_parameter_uses_first_value() {
    let uri = format!("/bidder/?ssp=1&bid={BID}&adsize=90x728&bid=other");
    let response = get(Arc::new(service()), &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("bidId").and_then(Value::as_str), Some(BID));
    assert_eq!(payload.get("bannerId").and_then(Value::as_u64), Some(1));
    assert_eq!(payload.get("price").and_then(Value::as_u64), Some(10));
}

#[tokio::test]
async fn repeated_ssp_still_reaches_catalog() {
    let uri = format!("/bidder/?ssp=2&ssp=1&bid={BID}&adsize=90x728");
    let payload = read_json_body(get(Arc::new(service()), &uri).await).await;
    assert_eq!(payload.get("bannerId").and_then(Value::as_u64), Some(9));
}
