//! Presentation projection of products: what a surface draws for each grid cell.

use shared::domain::Product;

pub const BUY_LABEL: &str = "COMPRAR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Replace,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub installments: String,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.to_uppercase(),
            price: format_brl(product.price),
            installments: format!(
                "Até {}x de {}",
                product.installments.count(),
                format_brl(product.installments.amount())
            ),
            image: product.image.clone(),
        }
    }
}

/// Formats an amount as Brazilian real in pt-BR style, e.g. `R$ 1.234,56`.
///
/// The separator after `R$` is a non-breaking space. Cents are rounded half
/// away from zero on the shortest decimal form of `value`, so `1.005` shows
/// as `R$ 1,01`.
pub fn format_brl(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = round_to_cents(&value.abs().to_string());
    let (units, fraction) = cents.split_at(cents.len() - 2);

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (index, digit) in units.chars().enumerate() {
        if index > 0 && (units.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = cents.bytes().all(|digit| digit == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}R$\u{a0}{grouped},{fraction}")
}

/// Digits of a non-negative decimal string scaled to cents, at least three long.
fn round_to_cents(decimal: &str) -> String {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        let mut index = digits.len();
        loop {
            if index == 0 {
                digits.insert(0, b'1');
                break;
            }
            index -= 1;
            if digits[index] == b'9' {
                digits[index] = b'0';
            } else {
                digits[index] += 1;
                break;
            }
        }
    }

    let first = digits
        .iter()
        .position(|digit| *digit != b'0')
        .unwrap_or(digits.len())
        .min(digits.len() - 3);
    digits[first..].iter().map(|digit| char::from(*digit)).collect()
}
