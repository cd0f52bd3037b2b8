//! Boundary between the catalog state machine and whatever draws it.

use shared::domain::{PriceRange, SortCriterion};

use crate::{
    filter::FilterOptions,
    view::{ProductCard, RenderMode},
};

/// Discrete user actions a surface reports back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ToggleColor { color: String, on: bool },
    ToggleSize { size: String, on: bool },
    TogglePriceRange { range: PriceRange, on: bool },
    LoadMore,
    SortChanged(SortCriterion),
    ApplyFilters,
    ClearFilters,
    Buy,
}

pub trait UiSurface {
    fn render_products(&mut self, cards: &[ProductCard], mode: RenderMode);
    fn render_filter_options(&mut self, options: &FilterOptions);
    fn set_load_more_visible(&mut self, visible: bool);
    fn render_cart_count(&mut self, count: u64);
}
