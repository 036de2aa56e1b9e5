use crate::auction::domain::{AdSize, Banner, BannerId, SspId};

// (id, ssp, size, price, budget, active)
const SEED: &[(u64, &str, &str, u64, i64, bool)] = &[
    (1, "1", "90x728", 10, 1000, true),
    (2, "1", "250x300", 15, 1000, false),
    (3, "1", "200x500", 10, 5, true),
    (4, "1", "350x350", 10, -20, true),
    (5, "1", "600x160", 20, 1000, true),
    (6, "1", "100x100", 10, 1000, true),
    (7, "1", "100x100", 10, 1000, true),
    (8, "1", "600x160", 15, 1000, true),
    (9, "2", "90x728", 12, 500, true),
];

pub(super) fn banners() -> impl Iterator<Item = Banner> {
    SEED.iter()
        .map(|&(id, ssp, size, price, budget, active)| Banner {
            id: BannerId(id),
            ssp: SspId::new(ssp),
            ad_size: AdSize::new(size),
            price,
            budget,
            active,
        })
}
