//! Catalog view controller.
//!
//! Owns the [`ViewState`] and is the only thing that mutates it. Every UI
//! event arrives as a [`CatalogCommand`]; each accepted command recomputes
//! the derived page through the ordering and pagination engines and emits a
//! [`RenderedPage`] for the view layer to project.

use serde::{Deserialize, Serialize};
use storefront_core::{DomainError, DomainResult};
use tracing::debug;

use crate::card::{CardFormat, ProductCard};
use crate::item::{Catalog, CatalogItem, SortMode};
use crate::ordering::order;
use crate::pagination::{paginate, total_pages};

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sizes offered by the products-per-page control.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Mutable view inputs.
///
/// Invariant: `1 <= current_page <= total_pages` whenever the catalog is
/// non-empty; with an empty catalog `current_page == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    page_size: usize,
    current_page: usize,
    sort_mode: SortMode,
}

impl ViewState {
    pub fn new(page_size: usize) -> DomainResult<Self> {
        ensure_page_size(page_size)?;
        Ok(Self {
            page_size,
            current_page: 1,
            sort_mode: SortMode::NameAscending,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Ascending sizes for the products-per-page control. Always contains the
    /// current size, so the control can show the state it is bound to.
    pub fn page_size_choices(&self) -> Vec<usize> {
        let mut choices = PAGE_SIZE_OPTIONS.to_vec();
        if let Err(at) = choices.binary_search(&self.page_size) {
            choices.insert(at, self.page_size);
        }
        choices
    }
}

fn ensure_page_size(page_size: usize) -> DomainResult<()> {
    if page_size == 0 {
        return Err(DomainError::validation("products per page must be at least 1"));
    }
    Ok(())
}

/// Typed UI event consumed by [`CatalogView::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogCommand {
    PageSizeChanged(usize),
    SortChanged(SortMode),
    PrevPage,
    NextPage,
}

/// Render instruction emitted after every recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub items: Vec<CatalogItem>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl RenderedPage {
    pub fn cards(&self, format: &CardFormat) -> Vec<ProductCard> {
        self.items
            .iter()
            .map(|item| ProductCard::project(item, format))
            .collect()
    }
}

/// The catalog view state machine. Lives for the page's lifetime.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    state: ViewState,
}

impl CatalogView {
    /// Initial state: `page_size`, page 1, name ascending.
    pub fn new(catalog: Catalog, page_size: usize) -> DomainResult<Self> {
        Ok(Self {
            catalog,
            state: ViewState::new(page_size)?,
        })
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Apply one UI event.
    ///
    /// Returns `Ok(None)` when the event is a no-op (navigation past either
    /// end), otherwise the freshly recomputed page.
    pub fn dispatch(&mut self, command: CatalogCommand) -> DomainResult<Option<RenderedPage>> {
        match command {
            CatalogCommand::PageSizeChanged(size) => self.on_page_size_changed(size).map(Some),
            CatalogCommand::SortChanged(mode) => self.on_sort_changed(mode).map(Some),
            CatalogCommand::PrevPage => self.on_prev_page(),
            CatalogCommand::NextPage => self.on_next_page(),
        }
    }

    pub fn on_page_size_changed(&mut self, page_size: usize) -> DomainResult<RenderedPage> {
        ensure_page_size(page_size)?;
        debug!(page_size, "catalog page size changed");
        self.state.page_size = page_size;
        self.state.current_page = 1;
        self.recompute()
    }

    pub fn on_sort_changed(&mut self, mode: SortMode) -> DomainResult<RenderedPage> {
        debug!(sort = %mode, "catalog sort changed");
        self.state.sort_mode = mode;
        self.state.current_page = 1;
        self.recompute()
    }

    pub fn on_prev_page(&mut self) -> DomainResult<Option<RenderedPage>> {
        if !self.can_go_prev() {
            return Ok(None);
        }
        self.state.current_page -= 1;
        debug!(page = self.state.current_page, "catalog previous page");
        self.recompute().map(Some)
    }

    pub fn on_next_page(&mut self) -> DomainResult<Option<RenderedPage>> {
        if !self.can_go_next() {
            return Ok(None);
        }
        self.state.current_page += 1;
        debug!(page = self.state.current_page, "catalog next page");
        self.recompute().map(Some)
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        total_pages(self.catalog.len(), self.state.page_size)
            .is_ok_and(|total| self.state.current_page < total)
    }

    /// Order, slice and describe the current page.
    pub fn recompute(&self) -> DomainResult<RenderedPage> {
        let ordered = order(self.catalog.items(), self.state.sort_mode);
        let page = paginate(&ordered, self.state.page_size, self.state.current_page)?;

        Ok(RenderedPage {
            items: page.visible.to_vec(),
            current_page: self.state.current_page,
            total_pages: page.total_pages,
            page_label: format!("Page {} of {}", self.state.current_page, page.total_pages),
            prev_enabled: page.can_go_prev,
            next_enabled: page.can_go_next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use storefront_core::{Money, ProductId};

    #[test]
    fn page_size_choices_include_the_configured_size() {
        assert_eq!(ViewState::new(10).unwrap().page_size_choices(), PAGE_SIZE_OPTIONS);
        assert_eq!(ViewState::new(25).unwrap().page_size_choices(), [5, 10, 20, 25, 50]);
        assert_eq!(ViewState::new(100).unwrap().page_size_choices(), [5, 10, 20, 50, 100]);
    }

    #[test]
    fn page_size_choices_follow_dispatched_size() {
        let mut view = CatalogView::new(catalog(3), 12).unwrap();
        assert!(view.state().page_size_choices().contains(&12));
        view.dispatch(CatalogCommand::PageSizeChanged(7)).unwrap();
        assert_eq!(view.state().page_size_choices(), [5, 7, 10, 20, 50]);
    }

    fn catalog(n: u64) -> Catalog {
        // Reverse, mixed-case names so name order differs from input order.
        let items = (0..n)
            .map(|i| CatalogItem {
                id: ProductId::new(i),
                name: if i % 2 == 0 {
                    format!("item {:02}", n - i)
                } else {
                    format!("ITEM {:02}", n - i)
                },
                description: String::new(),
                image: format!("{i}.png"),
                price: Money::from_minor(100 * (i % 4)),
                stock: i as u32,
            })
            .collect();
        Catalog::new(items)
    }

    #[test]
    fn twelve_items_paginate_by_ten() {
        let mut view = CatalogView::new(catalog(12), 10).unwrap();

        let first = view.recompute().unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.page_label, "Page 1 of 2");
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);
        let names: Vec<String> = first.items.iter().map(|i| i.name.to_lowercase()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        let second = view.on_next_page().unwrap().unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.page_label, "Page 2 of 2");
        assert!(second.prev_enabled);
        assert!(!second.next_enabled);
    }

    #[test]
    fn navigation_past_either_end_is_a_no_op() {
        let mut view = CatalogView::new(catalog(5), 5).unwrap();
        assert_eq!(view.on_prev_page().unwrap(), None);
        assert_eq!(view.on_next_page().unwrap(), None);
        assert_eq!(view.state().current_page(), 1);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut view = CatalogView::new(catalog(30), 10).unwrap();
        view.on_next_page().unwrap();
        view.on_next_page().unwrap();
        assert_eq!(view.state().current_page(), 3);

        let page = view.on_page_size_changed(25).unwrap();
        assert_eq!(view.state().current_page(), 1);
        assert_eq!(page.page_label, "Page 1 of 2");
    }

    #[test]
    fn sort_change_resets_to_first_page() {
        let mut view = CatalogView::new(catalog(30), 10).unwrap();
        view.on_next_page().unwrap();

        let page = view.on_sort_changed(SortMode::PriceDescending).unwrap();
        assert_eq!(view.state().current_page(), 1);
        assert_eq!(view.state().sort_mode(), SortMode::PriceDescending);
        assert!(page.items.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn zero_page_size_is_rejected_without_state_change() {
        let mut view = CatalogView::new(catalog(30), 10).unwrap();
        view.on_next_page().unwrap();
        let err = view.on_page_size_changed(0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(view.state().page_size(), 10);
        assert_eq!(view.state().current_page(), 2);
        assert!(CatalogView::new(catalog(1), 0).is_err());
    }

    #[test]
    fn empty_catalog_reads_page_one_of_zero() {
        let mut view = CatalogView::new(Catalog::default(), 10).unwrap();
        let page = view.recompute().unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_label, "Page 1 of 0");
        assert!(!page.prev_enabled);
        assert!(!page.next_enabled);
        assert_eq!(view.on_next_page().unwrap(), None);
    }

    #[test]
    fn dispatch_routes_commands() {
        let mut view = CatalogView::new(catalog(12), 10).unwrap();
        assert!(view.dispatch(CatalogCommand::NextPage).unwrap().is_some());
        assert!(view.dispatch(CatalogCommand::NextPage).unwrap().is_none());
        let page = view
            .dispatch(CatalogCommand::SortChanged(SortMode::PriceAscending))
            .unwrap()
            .unwrap();
        assert_eq!(page.current_page, 1);
        let page = view.dispatch(CatalogCommand::PageSizeChanged(4)).unwrap().unwrap();
        assert_eq!(page.total_pages, 3);
    }

    fn arb_command() -> impl Strategy<Value = CatalogCommand> {
        prop_oneof![
            (1usize..15).prop_map(CatalogCommand::PageSizeChanged),
            prop::sample::select(SortMode::ALL.to_vec()).prop_map(CatalogCommand::SortChanged),
            Just(CatalogCommand::PrevPage),
            Just(CatalogCommand::NextPage),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any command sequence keeps the current page in range and
        /// the emitted controls consistent with it.
        #[test]
        fn current_page_stays_in_range(
            n in 0u64..40,
            commands in prop::collection::vec(arb_command(), 0..30)
        ) {
            let mut view = CatalogView::new(catalog(n), DEFAULT_PAGE_SIZE).unwrap();
            for command in commands {
                let resets = matches!(
                    command,
                    CatalogCommand::PageSizeChanged(_) | CatalogCommand::SortChanged(_)
                );
                if let Some(page) = view.dispatch(command).unwrap() {
                    prop_assert_eq!(page.prev_enabled, page.current_page > 1);
                    prop_assert_eq!(page.next_enabled, page.current_page < page.total_pages);
                }
                if resets {
                    prop_assert_eq!(view.state().current_page(), 1);
                }
                let state = view.state();
                if n == 0 {
                    prop_assert_eq!(state.current_page(), 1);
                } else {
                    let total = total_pages(n as usize, state.page_size()).unwrap();
                    prop_assert!(state.current_page() >= 1 && state.current_page() <= total);
                }
            }
        }
    }
}
