use serde::Deserialize;
use std::io::Read;

use super::CatalogError;
use crate::auction::domain::{AdSize, Banner, BannerId, SspId};

/// Parse `banner_id,ssp,ad_size,price,budget,active` rows into banners.
pub(super) fn parse_banners<R: Read>(reader: R) -> Result<Vec<Banner>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut banners = Vec::new();

    for record in csv_reader.deserialize::<BannerRow>() {
        let row = record?;
        banners.push(row.into_banner()?);
    }

    Ok(banners)
}

#[derive(Debug, Deserialize)]
struct BannerRow {
    banner_id: u64,
    ssp: String,
    ad_size: String,
    price: u64,
    budget: i64,
    active: String,
}

impl BannerRow {
    fn into_banner(self) -> Result<Banner, CatalogError> {
        let id = BannerId(self.banner_id);
        let active = parse_flag(&self.active).ok_or_else(|| CatalogError::InvalidActiveFlag {
            banner: id,
            value: self.active.clone(),
        })?;

        Ok(Banner {
            id,
            ssp: SspId(self.ssp),
            ad_size: AdSize(self.ad_size),
            price: self.price,
            budget: self.budget,
            active,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
