use sqlx::FromRow;
use sqlx::types::Json;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, FromRow)]
pub struct Product {
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
    pub is_active: bool,
    pub tags: Json<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
