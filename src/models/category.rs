use serde::Serialize;
use sqlx::FromRow;

// GROUP BY result for the home page category grid; never persisted
#[derive(Debug, Serialize, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub product_count: i64,
}
