use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque supply-side platform identifier as received on the query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SspId(pub String);

impl SspId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SspId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SspId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Banner identifier. Lower ids win price ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(pub u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ad slot size in `WIDTHxHEIGHT` form. Matching is on the exact string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdSize(pub String);

impl AdSize {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Width and height when the size is well formed, e.g. `(90, 728)` for `"90x728"`.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let (width, height) = self.0.split_once(['x', 'X'])?;
        Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
    }
}

impl Borrow<str> for AdSize {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pre-provisioned creative eligible for a platform's slots of one size.
///
/// `budget` is the remaining spend at load time; the live balance is held by the
/// [`BudgetLedger`](super::ledger::BudgetLedger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub ssp: SspId,
    pub ad_size: AdSize,
    pub price: u64,
    pub budget: i64,
    pub active: bool,
}

/// Validated, per-call auction input. `bid_id` is untrusted caller text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidRequest {
    pub ssp: SspId,
    pub bid_id: String,
    pub ad_size: AdSize,
}
