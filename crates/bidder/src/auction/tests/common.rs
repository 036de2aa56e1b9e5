use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use crate::auction::{bidder_router, BidParams, BidderService};

pub(super) const BID: &str = "db131b41-a0d6-42ee-8e2e-514a7459530d";

pub(super) fn service() -> BidderService {
    BidderService::default()
}

pub(super) fn params(adsize: &str) -> BidParams {
    BidParams::new(Some("1"), Some(BID), Some(adsize))
}

pub(super) async fn get(service: Arc<BidderService>, uri: &str) -> Response {
    bidder_router(service)
        .oneshot(
            Request::get(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn assert_error(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some(message),
        "unexpected payload {payload}"
    );
}
