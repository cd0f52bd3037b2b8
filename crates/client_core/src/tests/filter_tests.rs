use super::*;
use chrono::{TimeZone, Utc};
use shared::domain::{Installments, SizeField};

fn product(name: &str, price: f64, color: &str, size: SizeField) -> Product {
    Product {
        name: name.to_string(),
        price,
        image: format!("img/{name}.png"),
        installments: Installments(1, price),
        color: color.to_string(),
        size,
        date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

fn one(size: &str) -> SizeField {
    SizeField::One(size.to_string())
}

fn many(sizes: &[&str]) -> SizeField {
    SizeField::Many(sizes.iter().map(|s| s.to_string()).collect())
}

fn catalog() -> Vec<Product> {
    vec![
        product("camisa", 50.0, "Branco", many(&["P", "M"])),
        product("vestido", 120.0, "Vermelho", one("M")),
        product("casaco", 320.0, "Preto", many(&["G", "GG"])),
        product("bermuda", 75.0, "Branco", one("42")),
        product("bolsa", 899.0, "Vermelho", one("U")),
    ]
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn empty_selection_returns_everything_in_order() {
    let selection = FilterSelection::default();
    assert!(!selection.has_active_filters());
    assert_eq!(selection.apply(&catalog()), catalog());
}

#[test]
fn colors_are_a_union() {
    let mut selection = FilterSelection::default();
    selection.toggle_color("Branco", true);
    selection.toggle_color("Preto", true);

    assert_eq!(
        names(&selection.apply(&catalog())),
        ["camisa", "casaco", "bermuda"]
    );
}

#[test]
fn size_matches_any_listed_size_or_single_value() {
    let mut selection = FilterSelection::default();
    selection.toggle_size("M", true);

    assert_eq!(names(&selection.apply(&catalog())), ["camisa", "vestido"]);
}

#[test]
fn dimensions_are_intersected() {
    let mut selection = FilterSelection::default();
    selection.toggle_color("Branco", true);
    selection.toggle_size("M", true);
    selection.toggle_price_range(PRICE_BRACKETS[0].range, true);

    let filtered = selection.apply(&catalog());
    assert_eq!(names(&filtered), ["camisa"]);
    assert!(filtered.iter().all(|p| selection.matches(p)));
}

#[test]
fn price_bounds_are_inclusive() {
    let mut selection = FilterSelection::default();
    selection.toggle_price_range(PriceRange::new(0.0, 50.0), true);
    assert_eq!(names(&selection.apply(&catalog())), ["camisa"]);

    let mut selection = FilterSelection::default();
    selection.toggle_price_range(PriceRange::new(51.0, 150.0), true);
    assert_eq!(names(&selection.apply(&catalog())), ["vestido", "bermuda"]);
}

#[test]
fn open_ended_bracket_matches_expensive_products() {
    let mut selection = FilterSelection::default();
    selection.toggle_price_range(PRICE_BRACKETS[4].range, true);
    assert_eq!(names(&selection.apply(&catalog())), ["bolsa"]);
}

#[test]
fn price_ranges_are_a_union_without_duplicates() {
    let mut selection = FilterSelection::default();
    selection.toggle_price_range(PRICE_BRACKETS[0].range, true);
    selection.toggle_price_range(PRICE_BRACKETS[0].range, true);
    selection.toggle_price_range(PRICE_BRACKETS[3].range, true);
    assert_eq!(selection.price_ranges().len(), 2);

    assert_eq!(names(&selection.apply(&catalog())), ["camisa", "casaco"]);

    selection.toggle_price_range(PRICE_BRACKETS[0].range, false);
    assert_eq!(selection.price_ranges(), [PRICE_BRACKETS[3].range]);
}

#[test]
fn toggling_color_on_then_off_restores_unfiltered_view() {
    let mut selection = FilterSelection::default();
    selection.toggle_color("red", true);
    assert!(selection.has_active_filters());

    selection.toggle_color("red", false);
    assert!(selection.colors().is_empty());
    assert!(!selection.has_active_filters());
    assert_eq!(selection.apply(&catalog()), catalog());
}

#[test]
fn toggles_are_idempotent() {
    let mut selection = FilterSelection::default();
    selection.toggle_size("P", true);
    selection.toggle_size("P", true);
    assert_eq!(selection.sizes().len(), 1);

    selection.toggle_size("XG", false);
    assert_eq!(selection.sizes().len(), 1);
}

#[test]
fn unknown_range_has_no_matches() {
    let mut selection = FilterSelection::default();
    selection.toggle_price_range(PriceRange::new(10_000.0, 20_000.0), true);
    assert!(selection.apply(&catalog()).is_empty());
}

#[test]
fn reset_clears_every_dimension() {
    let mut selection = FilterSelection::default();
    selection.toggle_color("Preto", true);
    selection.toggle_size("G", true);
    selection.toggle_price_range(PRICE_BRACKETS[2].range, true);

    selection.reset();
    assert_eq!(selection, FilterSelection::default());
}

#[test]
fn options_are_distinct_in_first_seen_order() {
    let options = filter_options(&catalog());
    assert_eq!(options.colors, ["Branco", "Vermelho", "Preto"]);
    assert_eq!(options.sizes, ["P", "M", "G", "GG", "42", "U"]);
    assert_eq!(options.price_brackets.len(), 5);
}
