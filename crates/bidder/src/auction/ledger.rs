use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use super::catalog::Catalog;
use super::domain::BannerId;

/// Reservation failure. Neither variant mutates the ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("banner {banner} has {remaining} remaining, cannot cover {price}")]
    InsufficientBudget {
        banner: BannerId,
        remaining: i64,
        price: u64,
    },
    #[error("banner {0} has no ledger entry")]
    UnknownBanner(BannerId),
}

/// Remaining spend per banner.
///
/// Each banner owns its own atomic cell, so reservations against different banners never
/// contend and reservations against the same banner serialize through compare-and-swap.
/// The set of cells is fixed at construction.
#[derive(Debug, Default)]
pub struct BudgetLedger {
    balances: HashMap<BannerId, AtomicI64>,
}

impl BudgetLedger {
    pub fn new(balances: impl IntoIterator<Item = (BannerId, i64)>) -> Self {
        Self {
            balances: balances
                .into_iter()
                .map(|(id, budget)| (id, AtomicI64::new(budget)))
                .collect(),
        }
    }

    /// Opening balances taken from each banner's provisioned budget.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.banners().map(|banner| (banner.id, banner.budget)))
    }

    /// Take `price` from the banner's balance if it covers it, returning what is left.
    pub fn try_reserve(&self, banner: BannerId, price: u64) -> Result<i64, LedgerError> {
        let cell = self
            .balances
            .get(&banner)
            .ok_or(LedgerError::UnknownBanner(banner))?;
        let Ok(cost) = i64::try_from(price) else {
            return Err(LedgerError::InsufficientBudget {
                banner,
                remaining: cell.load(Ordering::Acquire),
                price,
            });
        };

        cell.fetch_update(Ordering::AcqRel, Ordering::Acquire, |remaining| {
            (remaining >= cost).then(|| remaining - cost)
        })
        .map(|previous| previous - cost)
        .map_err(|remaining| LedgerError::InsufficientBudget {
            banner,
            remaining,
            price,
        })
    }

    pub fn remaining(&self, banner: BannerId) -> Option<i64> {
        self.balances
            .get(&banner)
            .map(|cell| cell.load(Ordering::Acquire))
    }
}
