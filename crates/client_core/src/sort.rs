use shared::domain::{Product, SortCriterion};

/// Reorders `products` by `criterion`, consuming the input. The sort is stable.
pub fn sort_products(mut products: Vec<Product>, criterion: SortCriterion) -> Vec<Product> {
    match criterion {
        SortCriterion::None => {}
        SortCriterion::Recency => products.sort_by(|a, b| b.date.cmp(&a.date)),
        SortCriterion::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortCriterion::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    products
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use shared::domain::{Installments, SizeField};

    use super::*;

    fn product(name: &str, price: f64, day: u32) -> Product {
        Product {
            name: name.to_string(),
            price,
            image: format!("img/{name}.png"),
            installments: Installments(1, price),
            color: "Preto".to_string(),
            size: SizeField::One("M".to_string()),
            date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn none_keeps_input_order() {
        let input = vec![product("b", 20.0, 1), product("a", 10.0, 2)];
        assert_eq!(names(&sort_products(input, SortCriterion::None)), ["b", "a"]);
    }

    #[test]
    fn recency_puts_latest_first() {
        let input = vec![
            product("old", 10.0, 1),
            product("newest", 10.0, 20),
            product("mid", 10.0, 10),
        ];
        assert_eq!(
            names(&sort_products(input, SortCriterion::Recency)),
            ["newest", "mid", "old"]
        );
    }

    #[test]
    fn descending_after_ascending_is_descending() {
        let input = vec![
            product("mid", 50.0, 1),
            product("cheap", 5.0, 2),
            product("pricey", 500.0, 3),
        ];
        let ascending = sort_products(input, SortCriterion::PriceAsc);
        assert_eq!(names(&ascending), ["cheap", "mid", "pricey"]);

        let descending = sort_products(ascending, SortCriterion::PriceDesc);
        assert_eq!(names(&descending), ["pricey", "mid", "cheap"]);
    }

    #[test]
    fn equal_prices_keep_relative_order() {
        let input = vec![
            product("first", 30.0, 1),
            product("cheap", 1.0, 2),
            product("second", 30.0, 3),
        ];
        assert_eq!(
            names(&sort_products(input, SortCriterion::PriceAsc)),
            ["cheap", "first", "second"]
        );
    }
}
