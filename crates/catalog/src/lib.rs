//! Catalog view engine.
//!
//! Keeps the visible page of product cards consistent with three
//! independently mutable inputs: the full item list, the sort mode and the
//! page size. Everything here is synchronous, deterministic domain logic
//! (no IO, no HTTP, no DOM).

pub mod card;
pub mod item;
pub mod ordering;
pub mod pagination;
pub mod view;

pub use card::{CardFormat, ProductCard};
pub use item::{Catalog, CatalogItem, SortMode};
pub use ordering::order;
pub use pagination::{Page, paginate, total_pages};
pub use view::{CatalogCommand, CatalogView, RenderedPage, ViewState};
