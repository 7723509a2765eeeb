// src/dtos/product.rs
use serde::Serialize;

use crate::models::product::Product;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image_url: String,
    pub rating: f64,
    pub review_count: i32,
    pub category: String,
    pub shopee_url: String,
    pub shopee_product_id: String,
    pub tags: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub formatted_price: String,
    pub formatted_original_price: Option<String>,
    pub discount_percentage: Option<i32>,
}

// Convert from Model to Response DTO, attaching the derived display fields
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            formatted_price: format_rupiah(product.price),
            formatted_original_price: product.original_price.map(format_rupiah),
            discount_percentage: discount_percentage(product.price, product.original_price),
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            original_price: product.original_price,
            image_url: product.image_url,
            rating: product.rating,
            review_count: product.review_count,
            category: product.category,
            shopee_url: product.shopee_url,
            shopee_product_id: product.shopee_product_id,
            tags: product.tags.0,
            created_at: product.created_at.map(|dt| dt.to_rfc3339()),
            updated_at: product.updated_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

// Whole rupiah with "." as the thousands separator, e.g. 100000 -> "Rp 100.000"
pub fn format_rupiah(amount: f64) -> String {
    let units = amount.round() as i64;
    let (sign, units) = if units < 0 { ("-", -units) } else { ("", units) };
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {sign}{grouped}")
}

// Percentage off the original price, rounded half away from zero. An
// original price at or below the current price is not a discount.
pub fn discount_percentage(price: f64, original_price: Option<f64>) -> Option<i32> {
    let original = original_price?;
    if original <= price {
        return None;
    }
    Some((((original - price) / original) * 100.0).round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_rupiah_with_dot_grouping() {
        assert_eq!(format_rupiah(100000.0), "Rp 100.000");
        assert_eq!(format_rupiah(18999000.0), "Rp 18.999.000");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(0.0), "Rp 0");
    }

    #[test]
    fn formatting_rounds_to_whole_units_first() {
        assert_eq!(format_rupiah(99999.6), "Rp 100.000");
        assert_eq!(format_rupiah(1234.49), "Rp 1.234");
    }

    #[test]
    fn discount_rounds_half_away_from_zero() {
        // 33.33... rounds down, not up
        assert_eq!(discount_percentage(100000.0, Some(150000.0)), Some(33));
        assert_eq!(discount_percentage(80000.0, Some(100000.0)), Some(20));
    }

    #[test]
    fn no_discount_without_a_higher_original_price() {
        assert_eq!(discount_percentage(100.0, Some(100.0)), None);
        assert_eq!(discount_percentage(100.0, Some(90.0)), None);
        assert_eq!(discount_percentage(100.0, None), None);
    }
}
