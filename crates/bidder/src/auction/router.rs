use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::service::BidderService;
use super::validation::BidParams;

/// Router builder exposing the bidding endpoint.
pub fn bidder_router(service: Arc<BidderService>) -> Router {
    Router::new()
        .route("/bidder", get(bid_handler))
        .route("/bidder/", get(bid_handler))
        .with_state(service)
}

/// Repeated keys resolve to their first value; an undecodable query string is handled
/// as if no parameters were sent.
pub(crate) async fn bid_handler(
    State(service): State<Arc<BidderService>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let params = query
        .map(|Query(pairs)| BidParams::from_pairs(pairs))
        .unwrap_or_default();
    service.auction(&params).into_response()
}
