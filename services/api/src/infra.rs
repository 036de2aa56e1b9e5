use bidder::auction::{Catalog, CatalogError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog from a CSV file, or fall back to the built-in seed banners.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let catalog = match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)?;
            info!(path = %path.display(), banners = catalog.len(), "loaded banner catalog");
            catalog
        }
        None => {
            let catalog = Catalog::seeded();
            info!(banners = catalog.len(), "using seeded banner catalog");
            catalog
        }
    };
    Ok(catalog)
}
