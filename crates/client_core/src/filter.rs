//! Filter selection state and the stable predicate pass over the product list.

use std::collections::HashSet;

use shared::domain::{PriceBracket, PriceRange, Product, PRICE_BRACKETS};

/// Colors, sizes and price ranges a product must match.
///
/// Each dimension is a union; dimensions are intersected. An empty dimension
/// places no constraint on the product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    colors: HashSet<String>,
    sizes: HashSet<String>,
    price_ranges: Vec<PriceRange>,
}

impl FilterSelection {
    pub fn toggle_color(&mut self, color: &str, on: bool) {
        toggle(&mut self.colors, color, on);
    }

    pub fn toggle_size(&mut self, size: &str, on: bool) {
        toggle(&mut self.sizes, size, on);
    }

    /// Ranges are kept as a set: adding a range already present is a no-op.
    pub fn toggle_price_range(&mut self, range: PriceRange, on: bool) {
        if on {
            if !self.price_ranges.contains(&range) {
                self.price_ranges.push(range);
            }
        } else {
            self.price_ranges.retain(|selected| *selected != range);
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.colors.is_empty() || !self.sizes.is_empty() || !self.price_ranges.is_empty()
    }

    pub fn reset(&mut self) {
        self.colors.clear();
        self.sizes.clear();
        self.price_ranges.clear();
    }

    pub fn colors(&self) -> &HashSet<String> {
        &self.colors
    }

    pub fn sizes(&self) -> &HashSet<String> {
        &self.sizes
    }

    pub fn price_ranges(&self) -> &[PriceRange] {
        &self.price_ranges
    }

    pub fn matches(&self, product: &Product) -> bool {
        let color_match = self.colors.is_empty() || self.colors.contains(&product.color);
        let size_match = self.sizes.is_empty()
            || product
                .size
                .values()
                .iter()
                .any(|size| self.sizes.contains(size));
        let price_match = self.price_ranges.is_empty()
            || self
                .price_ranges
                .iter()
                .any(|range| range.contains(product.price));

        color_match && size_match && price_match
    }

    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }
}

fn toggle(set: &mut HashSet<String>, value: &str, on: bool) {
    if on {
        set.insert(value.to_string());
    } else {
        set.remove(value);
    }
}

/// Option lists for the filter controls, always built from the full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price_brackets: &'static [PriceBracket],
}

/// Distinct colors and sizes in first-seen order.
pub fn filter_options(products: &[Product]) -> FilterOptions {
    let mut colors = Vec::new();
    let mut seen_colors = HashSet::new();
    let mut sizes = Vec::new();
    let mut seen_sizes = HashSet::new();

    for product in products {
        if seen_colors.insert(product.color.as_str()) {
            colors.push(product.color.clone());
        }
        for size in product.size.values() {
            if seen_sizes.insert(size.as_str()) {
                sizes.push(size.clone());
            }
        }
    }

    FilterOptions {
        colors,
        sizes,
        price_brackets: &PRICE_BRACKETS,
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
