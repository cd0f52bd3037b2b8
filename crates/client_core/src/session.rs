//! Catalog session: the single context object behind one browsing session.
//!
//! The session owns the full product collection (read-only after load), the
//! pending and applied filter selections, the sort criterion, pagination and
//! the cart counter. Surfaces feed it [`UiEvent`]s through
//! [`CatalogSession::handle`] and receive the resulting grid back through
//! [`UiSurface`].
//!
//! Filter toggles only edit the pending selection. The grid changes when the
//! shopper applies filters, clears them, loads more or changes the sort.

use shared::{
    domain::{Product, SortCriterion},
    error::CatalogError,
};
use tracing::{debug, error, info};

use crate::{
    cart::CartCounter,
    filter::{filter_options, FilterSelection},
    pagination::Pagination,
    sort::sort_products,
    surface::{UiEvent, UiSurface},
    view::{ProductCard, RenderMode},
    ProductSource,
};

#[derive(Debug, Clone, Default)]
pub struct CatalogSession {
    products: Vec<Product>,
    pending: FilterSelection,
    applied: FilterSelection,
    sort: SortCriterion,
    pagination: Pagination,
    cart: CartCounter,
}

impl CatalogSession {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Fetches the product list once. Failures are logged and returned; nothing is rendered.
    pub async fn load<S>(source: &S) -> Result<Self, CatalogError>
    where
        S: ProductSource + ?Sized,
    {
        match source.fetch_products().await {
            Ok(products) => {
                info!(count = products.len(), "product list loaded");
                Ok(Self::new(products))
            }
            Err(err) => {
                error!(error = %err, "failed to load product list");
                Err(err)
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn pending_filters(&self) -> &FilterSelection {
        &self.pending
    }

    pub fn applied_filters(&self) -> &FilterSelection {
        &self.applied
    }

    pub fn has_active_filters(&self) -> bool {
        self.applied.has_active_filters()
    }

    pub fn sort_criterion(&self) -> SortCriterion {
        self.sort
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    /// Applied filters (or the raw list when none are active), then the current sort.
    pub fn active_collection(&self) -> Vec<Product> {
        let base = if self.applied.has_active_filters() {
            self.applied.apply(&self.products)
        } else {
            self.products.clone()
        };
        sort_products(base, self.sort)
    }

    pub fn start<U>(&self, surface: &mut U)
    where
        U: UiSurface + ?Sized,
    {
        surface.render_filter_options(&filter_options(&self.products));
        self.refresh(surface);
        surface.render_cart_count(self.cart.count());
    }

    pub fn handle<U>(&mut self, event: UiEvent, surface: &mut U)
    where
        U: UiSurface + ?Sized,
    {
        debug!(?event, "handling ui event");
        match event {
            UiEvent::ToggleColor { color, on } => self.pending.toggle_color(&color, on),
            UiEvent::ToggleSize { size, on } => self.pending.toggle_size(&size, on),
            UiEvent::TogglePriceRange { range, on } => self.pending.toggle_price_range(range, on),
            UiEvent::ApplyFilters => {
                self.applied = self.pending.clone();
                self.refresh(surface);
            }
            UiEvent::ClearFilters => {
                self.pending.reset();
                self.applied.reset();
                self.pagination.reset();
                self.refresh(surface);
            }
            UiEvent::LoadMore => self.load_more(surface),
            UiEvent::SortChanged(criterion) => {
                self.sort = criterion;
                self.refresh(surface);
            }
            UiEvent::Buy => {
                let count = self.cart.increment();
                surface.render_cart_count(count);
            }
        }
    }

    fn refresh<U>(&self, surface: &mut U)
    where
        U: UiSurface + ?Sized,
    {
        let active = self.active_collection();
        surface.render_products(&cards(self.pagination.page(&active)), RenderMode::Replace);
        surface.set_load_more_visible(self.pagination.has_more(&active));
    }

    // The grid already shows the previous page of the same active collection,
    // so only the newly revealed cards are appended.
    fn load_more<U>(&mut self, surface: &mut U)
    where
        U: UiSurface + ?Sized,
    {
        let active = self.active_collection();
        let shown = self.pagination.page(&active).len();
        self.pagination.advance();
        let page = self.pagination.page(&active);
        surface.render_products(&cards(&page[shown..]), RenderMode::Append);
        surface.set_load_more_visible(self.pagination.has_more(&active));
    }
}

fn cards(products: &[Product]) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from).collect()
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
