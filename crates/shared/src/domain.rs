use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Installment plan attached to a product: `[count, amount]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Installments(pub u32, pub f64);

impl Installments {
    pub fn count(&self) -> u32 {
        self.0
    }

    pub fn amount(&self) -> f64 {
        self.1
    }
}

/// A product lists either one size or several.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    One(String),
    Many(Vec<String>),
}

impl SizeField {
    /// Sizes as a slice; a single size is a one-element slice.
    pub fn values(&self) -> &[String] {
        match self {
            SizeField::One(size) => std::slice::from_ref(size),
            SizeField::Many(sizes) => sizes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(rename = "parcelamento")]
    pub installments: Installments,
    pub color: String,
    pub size: SizeField,
    #[serde(with = "crate::protocol::product_date")]
    pub date: DateTime<Utc>,
}

/// Inclusive price interval. `max` may be `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBracket {
    pub label: &'static str,
    pub range: PriceRange,
}

pub const PRICE_BRACKETS: [PriceBracket; 5] = [
    PriceBracket {
        label: "de R$0 até R$50",
        range: PriceRange::new(0.0, 50.0),
    },
    PriceBracket {
        label: "de R$51 até R$150",
        range: PriceRange::new(51.0, 150.0),
    },
    PriceBracket {
        label: "de R$151 até R$300",
        range: PriceRange::new(151.0, 300.0),
    },
    PriceBracket {
        label: "de R$301 até R$500",
        range: PriceRange::new(301.0, 500.0),
    },
    PriceBracket {
        label: "a partir de R$500",
        range: PriceRange::new(501.0, f64::INFINITY),
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCriterion {
    #[default]
    None,
    Recency,
    PriceAsc,
    PriceDesc,
}

impl SortCriterion {
    /// Value of the matching option in the sort select control.
    pub fn code(self) -> &'static str {
        match self {
            SortCriterion::None => "0",
            SortCriterion::Recency => "1",
            SortCriterion::PriceAsc => "2",
            SortCriterion::PriceDesc => "3",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(SortCriterion::None),
            "1" => Some(SortCriterion::Recency),
            "2" => Some(SortCriterion::PriceAsc),
            "3" => Some(SortCriterion::PriceDesc),
            _ => None,
        }
    }
}
