use super::domain::{AdSize, BidRequest, SspId};

/// Raw query parameters of a bid call. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidParams {
    pub ssp: Option<String>,
    pub bid: Option<String>,
    pub adsize: Option<String>,
}

impl BidParams {
    pub fn new(ssp: Option<&str>, bid: Option<&str>, adsize: Option<&str>) -> Self {
        Self {
            ssp: ssp.map(str::to_string),
            bid: bid.map(str::to_string),
            adsize: adsize.map(str::to_string),
        }
    }

    /// Collect decoded query pairs. The first occurrence of a key wins and unknown keys
    /// are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "ssp" => &mut params.ssp,
                "bid" => &mut params.bid,
                "adsize" => &mut params.adsize,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Missing required parameter.
///
/// A missing ad size reports the bid message; callers that read the wire contract see
/// the same text for both, while the variant keeps them apart for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No SSP Provided.")]
    MissingSsp,
    #[error("No Bid ID Provided.")]
    MissingBid,
    #[error("No Bid ID Provided.")]
    MissingAdSize,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingSsp => "ssp",
            ValidationError::MissingBid => "bid",
            ValidationError::MissingAdSize => "adsize",
        }
    }
}

/// Check presence of `ssp`, `bid`, and `adsize`, in that order.
pub fn validate(params: &BidParams) -> Result<BidRequest, ValidationError> {
    let ssp = required(params.ssp.as_deref()).ok_or(ValidationError::MissingSsp)?;
    let bid_id = params
        .bid
        .as_deref()
        .filter(|bid| !bid.trim().is_empty())
        .ok_or(ValidationError::MissingBid)?;
    let ad_size = required(params.adsize.as_deref()).ok_or(ValidationError::MissingAdSize)?;

    Ok(BidRequest {
        ssp: SspId::new(ssp),
        bid_id: bid_id.to_string(),
        ad_size: AdSize::new(ad_size),
    })
}

/// Trimmed value, or `None` when absent or blank. Lookup keys only; the bid id is echoed
/// as sent.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
