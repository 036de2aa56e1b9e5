use crate::infra::load_catalog;
use bidder::auction::{response, AdSize, BidParams, BidderService};
use bidder::config::AppConfig;
use bidder::error::AppError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Banner catalog CSV; overrides APP_CATALOG_CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BidArgs {
    /// Supply-side platform id
    #[arg(long)]
    pub(crate) ssp: Option<String>,
    /// Bid identifier echoed in the response
    #[arg(long)]
    pub(crate) bid: Option<String>,
    /// Ad slot size, e.g. 90x728
    #[arg(long)]
    pub(crate) adsize: Option<String>,
    /// Banner catalog CSV; overrides APP_CATALOG_CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

fn resolve_catalog_path(explicit: Option<PathBuf>) -> Result<Option<PathBuf>, AppError> {
    match explicit {
        Some(path) => Ok(Some(path)),
        None => Ok(AppConfig::load()?.catalog.csv_path),
    }
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let path = resolve_catalog_path(args.catalog)?;
    let catalog = load_catalog(path.as_deref())?;

    println!("Banner catalog ({} banners)", catalog.len());
    println!(
        "{:>6}  {:<8}  {:<10}  {:>6}  {:>6}  {:>6}  {:>8}  {}",
        "id", "ssp", "size", "width", "height", "price", "budget", "status"
    );
    for banner in catalog.banners() {
        let status = if banner.active { "active" } else { "inactive" };
        let (width, height) = size_columns(&banner.ad_size);
        println!(
            "{:>6}  {:<8}  {:<10}  {:>6}  {:>6}  {:>6}  {:>8}  {}",
            banner.id,
            banner.ssp,
            banner.ad_size,
            width,
            height,
            banner.price,
            banner.budget,
            status
        );
    }

    Ok(())
}

/// Width and height columns for the listing; `-` when the size is not `WIDTHxHEIGHT`.
fn size_columns(ad_size: &AdSize) -> (String, String) {
    match ad_size.dimensions() {
        Some((width, height)) => (width.to_string(), height.to_string()),
        None => ("-".to_string(), "-".to_string()),
    }
}

pub(crate) fn run_bid(args: BidArgs) -> Result<(), AppError> {
    let path = resolve_catalog_path(args.catalog)?;
    let service = BidderService::new(load_catalog(path.as_deref())?);

    let params = BidParams {
        ssp: args.ssp,
        bid: args.bid,
        adsize: args.adsize,
    };
    let outcome = service.auction(&params);
    let (status, body) = response::render(&outcome);

    println!("Outcome: {}", outcome.label());
    println!("HTTP {}", status.as_u16());
    match body {
        Some(body) => println!("{body}"),
        None => println!("(empty body)"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_bid_accepts_seeded_request() {
        let args = BidArgs {
            ssp: Some("1".to_string()),
            bid: Some("cli-bid".to_string()),
            adsize: Some("90x728".to_string()),
            catalog: None,
        };
        assert!(run_bid(args).is_ok());
    }

    #[test]
    fn size_columns_split_well_formed_sizes() {
        assert_eq!(
            size_columns(&AdSize::new("600x160")),
            ("600".to_string(), "160".to_string())
        );
        assert_eq!(
            size_columns(&AdSize::new("banner")),
            ("-".to_string(), "-".to_string())
        );
    }

    #[test]
    fn run_catalog_reports_missing_file() {
        let args = CatalogArgs {
            catalog: Some(PathBuf::from("/nonexistent/bidder/banners.csv")),
        };
        assert!(matches!(run_catalog(args), Err(AppError::Catalog(_))));
    }
}
