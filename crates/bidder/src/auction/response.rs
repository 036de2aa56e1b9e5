use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use super::domain::BannerId;
use super::selector::AuctionOutcome;

pub const NOT_ENOUGH_BUDGET: &str = "Not enough budget.";

/// Wire body of a winning bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidResponse {
    pub bid_id: String,
    pub banner_id: BannerId,
    pub price: u64,
}

/// Status code and body for an outcome. `None` means an empty body.
pub fn render(outcome: &AuctionOutcome) -> (StatusCode, Option<serde_json::Value>) {
    match outcome {
        AuctionOutcome::Won(win) => {
            let body = BidResponse {
                bid_id: escape_html(&win.bid_id),
                banner_id: win.banner_id,
                price: win.price,
            };
            (StatusCode::OK, Some(json!(body)))
        }
        AuctionOutcome::NoMatch => (StatusCode::OK, None),
        AuctionOutcome::BudgetExhausted => {
            (StatusCode::OK, Some(json!({ "error": NOT_ENOUGH_BUDGET })))
        }
        AuctionOutcome::Rejected(err) => (
            StatusCode::BAD_REQUEST,
            Some(json!({ "error": err.to_string() })),
        ),
    }
}

impl IntoResponse for AuctionOutcome {
    fn into_response(self) -> Response {
        match render(&self) {
            (status, Some(body)) => (status, Json(body)).into_response(),
            (status, None) => status.into_response(),
        }
    }
}

/// Entity-encode markup characters so echoed caller text stays inert in a browser.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
