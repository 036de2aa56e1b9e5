use tracing::{debug, info, warn};

use super::catalog::Catalog;
use super::ledger::BudgetLedger;
use super::selector::{self, AuctionOutcome};
use super::validation::{self, BidParams};

/// Owns the catalog and its ledger and runs auctions against them.
#[derive(Debug)]
pub struct BidderService {
    catalog: Catalog,
    ledger: BudgetLedger,
}

impl BidderService {
    pub fn new(catalog: Catalog) -> Self {
        let ledger = BudgetLedger::from_catalog(&catalog);
        Self { catalog, ledger }
    }

    /// Validate the parameters, look up candidates, and award at most one banner.
    pub fn auction(&self, params: &BidParams) -> AuctionOutcome {
        let request = match validation::validate(params) {
            Ok(request) => request,
            Err(err) => {
                warn!(field = err.field(), "bid request rejected");
                return AuctionOutcome::Rejected(err);
            }
        };

        let candidates = self.catalog.lookup(&request.ssp, &request.ad_size);
        let eligible = candidates.len();
        let outcome = selector::select(&request, candidates, &self.ledger);

        match &outcome {
            AuctionOutcome::Won(win) => debug!(
                ssp = %request.ssp,
                ad_size = %request.ad_size,
                banner = %win.banner_id,
                price = win.price,
                "auction won"
            ),
            AuctionOutcome::NoMatch => debug!(
                ssp = %request.ssp,
                ad_size = %request.ad_size,
                "no eligible banner"
            ),
            AuctionOutcome::BudgetExhausted => info!(
                ssp = %request.ssp,
                ad_size = %request.ad_size,
                eligible,
                "all eligible banners out of budget"
            ),
            AuctionOutcome::Rejected(_) => {}
        }

        outcome
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BudgetLedger {
        &self.ledger
    }
}

impl Default for BidderService {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}
