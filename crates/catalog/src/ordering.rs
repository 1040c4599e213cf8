//! Ordering engine: stable total ordering of catalog items for a sort mode.

use crate::item::{CatalogItem, SortMode};

/// Return a newly ordered copy of `items`; the input is never touched.
///
/// All modes are stable: items with equal keys keep their input order.
/// Names compare case-folded.
pub fn order(items: &[CatalogItem], mode: SortMode) -> Vec<CatalogItem> {
    let mut ordered = items.to_vec();
    match mode {
        SortMode::NameAscending => ordered.sort_by_cached_key(|item| item.name.to_lowercase()),
        SortMode::PriceAscending => ordered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDescending => ordered.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    ordered
}
