//! Catalog items and sort modes.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// One product as delivered in the page-load seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "img", default)]
    pub image: String,
    #[serde(deserialize_with = "Money::deserialize_major")]
    pub price: Money,
    #[serde(default)]
    pub stock: u32,
}

impl Entity for CatalogItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The full, load-time-fixed product list.
///
/// Never mutated after construction; the view only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parse the pre-serialised `[{id, name, img, description, price, stock}]` seed.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("catalog seed: {e}")))?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Active ordering of the catalog. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "a-to-z")]
    NameAscending,
    #[serde(rename = "low-to-high")]
    PriceAscending,
    #[serde(rename = "high-to-low")]
    PriceDescending,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::NameAscending,
        SortMode::PriceAscending,
        SortMode::PriceDescending,
    ];

    /// Value used by the sort `<select>` options.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::NameAscending => "a-to-z",
            SortMode::PriceAscending => "low-to-high",
            SortMode::PriceDescending => "high-to-low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::NameAscending => "Name (A to Z)",
            SortMode::PriceAscending => "Price (low to high)",
            SortMode::PriceDescending => "Price (high to low)",
        }
    }
}

impl core::fmt::Display for SortMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort mode: {s:?}")))
    }
}
