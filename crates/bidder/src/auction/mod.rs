//! Ad-slot auction: catalog lookup, budget reservation, and winner selection.
//!
//! A call flows through [`validation::validate`], [`Catalog::lookup`], and
//! [`selector::select`] (which reserves budget on the [`BudgetLedger`]), and the resulting
//! [`AuctionOutcome`] is rendered by [`response`].

pub mod catalog;
pub mod domain;
pub mod ledger;
pub mod response;
pub mod router;
pub mod selector;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError};
pub use domain::{AdSize, Banner, BannerId, BidRequest, SspId};
pub use ledger::{BudgetLedger, LedgerError};
pub use response::{escape_html, BidResponse, NOT_ENOUGH_BUDGET};
pub use router::bidder_router;
pub use selector::{AuctionOutcome, WinningBid};
pub use service::BidderService;
pub use validation::{BidParams, ValidationError};
