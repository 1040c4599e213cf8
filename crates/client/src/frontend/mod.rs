//! Leptos frontend for the storefront pages.
//!
//! The server-rendered page provides mount points with their seed data:
//! - `#catalog-root[data-products]`
//! - `#basket-root[data-basket]`
//! - `#reviews-root[data-product-id][data-reviews]`
//!
//! and a hidden `csrf_token` input. Only the roots present are mounted.

pub mod app;
pub mod dom;

use anyhow::{Context, anyhow};
use leptos::*;
use wasm_bindgen::prelude::*;

use storefront_basket::Basket;
use storefront_catalog::{Catalog, CatalogView};
use storefront_core::ProductId;
use storefront_reviews::ReviewBoard;

use crate::client::StorefrontClient;
use crate::config::StorefrontConfig;
use app::{BasketPage, CatalogPage, ReviewsPanel};

/// WASM entry point, called when the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    storefront_observability::init();

    if let Err(err) = mount_all() {
        logging::error!("storefront failed to start: {err:#}");
    }
}

fn mount_all() -> anyhow::Result<()> {
    let config = dom::read_config().context("reading storefront config")?;

    if let Some(root) = dom::root("catalog-root") {
        let raw = dom::data(&root, "products").unwrap_or_else(|| "[]".to_string());
        let catalog = Catalog::from_json(&raw)?;
        let view = CatalogView::new(catalog, config.default_page_size)?;
        let initial = view.recompute()?;
        let format = config.card_format();
        mount_to(root, move || view! { <CatalogPage view=view initial=initial format=format/> });
    }

    if let Some(root) = dom::root("basket-root") {
        let raw = dom::data(&root, "basket").unwrap_or_else(|| "[]".to_string());
        let basket = Basket::from_json(&raw)?;
        let client = client(&config)?;
        let symbol = config.currency_symbol.clone();
        mount_to(root, move || {
            view! { <BasketPage basket=basket client=client currency_symbol=symbol/> }
        });
    }

    if let Some(root) = dom::root("reviews-root") {
        let product_id: ProductId = dom::data(&root, "product-id")
            .ok_or_else(|| anyhow!("reviews-root is missing data-product-id"))?
            .parse()?;
        let raw = dom::data(&root, "reviews").unwrap_or_else(|| "[]".to_string());
        let board = ReviewBoard::from_json(product_id, &raw)?;
        let client = client(&config)?;
        mount_to(root, move || view! { <ReviewsPanel board=board client=client/> });
    }

    Ok(())
}

fn client(config: &StorefrontConfig) -> anyhow::Result<StorefrontClient> {
    let csrf = dom::csrf_token().ok_or_else(|| anyhow!("page has no csrf_token field"))?;
    Ok(StorefrontClient::new(config, csrf)?)
}
