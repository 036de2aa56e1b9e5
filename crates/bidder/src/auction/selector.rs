use std::cmp::Reverse;

use tracing::warn;

use super::domain::{Banner, BannerId, BidRequest};
use super::ledger::{BudgetLedger, LedgerError};
use super::validation::ValidationError;

/// Result of one auction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionOutcome {
    Won(WinningBid),
    /// No active banner for the platform and size.
    NoMatch,
    /// Every candidate failed its budget reservation.
    BudgetExhausted,
    Rejected(ValidationError),
}

impl AuctionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            AuctionOutcome::Won(_) => "won",
            AuctionOutcome::NoMatch => "no_match",
            AuctionOutcome::BudgetExhausted => "budget_exhausted",
            AuctionOutcome::Rejected(_) => "rejected",
        }
    }
}

/// Banner that reserved budget for a request. `bid_id` is still the raw caller text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningBid {
    pub bid_id: String,
    pub banner_id: BannerId,
    pub price: u64,
}

/// Rank candidates by price, highest first, with the lower banner id winning ties.
pub fn rank<'a>(mut candidates: Vec<&'a Banner>) -> Vec<&'a Banner> {
    candidates.sort_by_key(|banner| (Reverse(banner.price), banner.id));
    candidates
}

/// Walk the ranking and award the first banner whose budget covers its price.
pub fn select(
    request: &BidRequest,
    candidates: Vec<&Banner>,
    ledger: &BudgetLedger,
) -> AuctionOutcome {
    if candidates.is_empty() {
        return AuctionOutcome::NoMatch;
    }

    for banner in rank(candidates) {
        match ledger.try_reserve(banner.id, banner.price) {
            Ok(_) => {
                return AuctionOutcome::Won(WinningBid {
                    bid_id: request.bid_id.clone(),
                    banner_id: banner.id,
                    price: banner.price,
                });
            }
            Err(LedgerError::InsufficientBudget { .. }) => continue,
            Err(err @ LedgerError::UnknownBanner(_)) => {
                warn!(error = %err, "catalog banner missing from ledger");
            }
        }
    }

    AuctionOutcome::BudgetExhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::domain::{AdSize, SspId};

    fn banner(id: u64, price: u64, budget: i64) -> Banner {
        Banner {
            id: BannerId(id),
            ssp: SspId::new("1"),
            ad_size: AdSize::new("100x100"),
            price,
            budget,
            active: true,
        }
    }

    fn request() -> BidRequest {
        BidRequest {
            ssp: SspId::new("1"),
            bid_id: "bid-1".to_string(),
            ad_size: AdSize::new("100x100"),
        }
    }

    fn ledger_for(banners: &[Banner]) -> BudgetLedger {
        BudgetLedger::new(banners.iter().map(|banner| (banner.id, banner.budget)))
    }

    #[test]
    fn rank_orders_by_price_then_lowest_id() {
        let banners = [
            banner(7, 10, 0),
            banner(3, 5, 0),
            banner(6, 10, 0),
            banner(9, 20, 0),
        ];
        let ranked: Vec<_> = rank(banners.iter().collect())
            .into_iter()
            .map(|banner| banner.id.0)
            .collect();
        assert_eq!(ranked, vec![9, 6, 7, 3]);
    }

    #[test]
    fn empty_candidates_are_no_match() {
        let ledger = BudgetLedger::default();
        assert_eq!(
            select(&request(), Vec::new(), &ledger),
            AuctionOutcome::NoMatch
        );
    }

    #[test]
    fn falls_through_to_next_funded_candidate() {
        let banners = [banner(5, 20, 10), banner(8, 15, 100)];
        let ledger = ledger_for(&banners);

        let outcome = select(&request(), banners.iter().collect(), &ledger);

        assert_eq!(
            outcome,
            AuctionOutcome::Won(WinningBid {
                bid_id: "bid-1".to_string(),
                banner_id: BannerId(8),
                price: 15,
            })
        );
        assert_eq!(ledger.remaining(BannerId(5)), Some(10));
        assert_eq!(ledger.remaining(BannerId(8)), Some(85));
    }

    #[test]
    fn all_unfunded_candidates_exhaust_budget() {
        let banners = [banner(3, 10, 5), banner(4, 10, -20)];
        let ledger = ledger_for(&banners);

        let outcome = select(&request(), banners.iter().collect(), &ledger);

        assert_eq!(outcome, AuctionOutcome::BudgetExhausted);
        assert_eq!(outcome.label(), "budget_exhausted");
    }

    #[test]
    fn banner_without_ledger_entry_is_skipped() {
        let banners = [banner(1, 30, 100), banner(2, 10, 100)];
        let ledger = BudgetLedger::new([(BannerId(2), 100)]);

        let outcome = select(&request(), banners.iter().collect(), &ledger);

        assert!(matches!(
            outcome,
            AuctionOutcome::Won(WinningBid {
                banner_id: BannerId(2),
                ..
            })
        ));
    }
}
