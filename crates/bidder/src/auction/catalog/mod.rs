mod parser;
mod seed;

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use super::domain::{AdSize, Banner, BannerId, SspId};

/// Error raised while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read banner catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid banner catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("banner {0} is listed more than once")]
    DuplicateBanner(BannerId),
    #[error("banner {0} must have a positive price")]
    ZeroPrice(BannerId),
    #[error("banner {banner} has unrecognized active flag '{value}'")]
    InvalidActiveFlag { banner: BannerId, value: String },
}

/// Read-only index of banners keyed by platform, then ad size.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    banners: BTreeMap<BannerId, Banner>,
    slots: HashMap<SspId, HashMap<AdSize, Vec<BannerId>>>,
}

impl Catalog {
    pub fn new(banners: impl IntoIterator<Item = Banner>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for banner in banners {
            if banner.price == 0 {
                return Err(CatalogError::ZeroPrice(banner.id));
            }
            if catalog.banners.contains_key(&banner.id) {
                return Err(CatalogError::DuplicateBanner(banner.id));
            }
            catalog.index(banner);
        }

        Ok(catalog)
    }

    /// Built-in banner set served when no catalog file is configured.
    pub fn seeded() -> Self {
        let mut catalog = Self::default();
        for banner in seed::banners() {
            catalog.index(banner);
        }
        catalog
    }

    fn index(&mut self, banner: Banner) {
        self.slots
            .entry(banner.ssp.clone())
            .or_default()
            .entry(banner.ad_size.clone())
            .or_default()
            .push(banner.id);
        self.banners.insert(banner.id, banner);
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(parser::parse_banners(reader)?)
    }

    /// Active banners for the slot; empty when the platform or size is unknown.
    pub fn lookup(&self, ssp: &SspId, ad_size: &AdSize) -> Vec<&Banner> {
        self.slots
            .get(ssp.as_str())
            .and_then(|sizes| sizes.get(ad_size.as_str()))
            .into_iter()
            .flatten()
            .filter_map(|id| self.banners.get(id))
            .filter(|banner| banner.active)
            .collect()
    }

    pub fn get(&self, id: BannerId) -> Option<&Banner> {
        self.banners.get(&id)
    }

    /// All banners in id order.
    pub fn banners(&self) -> impl Iterator<Item = &Banner> {
        self.banners.values()
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}
