//! Bid decision engine: catalog lookup, budget ledger, and auction selection for
//! supply-platform ad slots, plus the ambient configuration and telemetry the HTTP
//! service builds on.

pub mod auction;
pub mod config;
pub mod error;
pub mod telemetry;
