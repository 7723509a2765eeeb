// src/dtos/pages.rs
//
// The three page payloads handed to the frontend. Key names are part of the
// contract with the page components, hence the camelCase renames.
use serde::Serialize;

use crate::dtos::pagination::Paginated;
use crate::dtos::product::ProductResponse;
use crate::models::category::CategoryCount;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePayload {
    pub featured_products: Vec<ProductResponse>,
    pub new_products: Vec<ProductResponse>,
    pub categories: Vec<CategoryCount>,
    pub discount_products: Vec<ProductResponse>,
    pub total_products: i64,
}

// Echo of the resolved listing parameters so the frontend can rebuild its
// filter UI state
#[derive(Debug, Serialize)]
pub struct ListingFilters {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: String,
    pub order: String,
}

#[derive(Debug, Serialize)]
pub struct ListingPayload {
    pub products: Paginated<ProductResponse>,
    pub categories: Vec<String>,
    pub filters: ListingFilters,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPayload {
    pub product: ProductResponse,
    pub related_products: Vec<ProductResponse>,
}
