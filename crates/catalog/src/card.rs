//! Product card projection (what one catalog tile shows).

use serde::{Deserialize, Serialize};
use storefront_core::ProductId;

use crate::item::CatalogItem;

/// Presentation settings shared by every card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFormat {
    pub currency_symbol: String,
    pub image_base_path: String,
}

impl Default for CardFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            image_base_path: "/static/images".to_string(),
        }
    }
}

/// Display-ready card. A pure projection of a [`CatalogItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub href: String,
    pub image_src: String,
    pub image_alt: String,
    pub description: String,
    pub price_label: String,
    pub stock_label: String,
    pub in_stock: bool,
}

impl ProductCard {
    pub fn project(item: &CatalogItem, format: &CardFormat) -> Self {
        let stock_label = if item.stock > 0 {
            format!("In Stock: {}", item.stock)
        } else {
            "Out of Stock".to_string()
        };

        Self {
            id: item.id,
            name: item.name.clone(),
            href: format!("/product/{}", item.id),
            image_src: format!("{}/{}", format.image_base_path.trim_end_matches('/'), item.image),
            image_alt: format!("[image of {}]", item.name),
            description: item.description.clone(),
            price_label: format!("Price: {}{}", format.currency_symbol, item.price),
            stock_label,
            in_stock: item.stock > 0,
        }
    }
}
