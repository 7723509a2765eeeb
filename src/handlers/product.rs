// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::collections::HashMap;
use tracing::instrument;

use crate::dtos::pagination::Paginated;
use crate::dtos::pages::{DetailPayload, ListingFilters, ListingPayload};
use crate::dtos::product::ProductResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::store::products::{self as store, ProductFilter, SortField, SortOrder, PER_PAGE};

// GET /products - Listing page props
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListingPayload>, AppError> {
    // Empty params count as absent, bad sort/order/page values normalize to
    // defaults; none of these are request errors
    let filter = ProductFilter {
        category: params.get("category").filter(|s| !s.is_empty()).cloned(),
        search: params.get("search").filter(|s| !s.is_empty()).cloned(),
    };
    let sort = SortField::parse(params.get("sort").map(String::as_str));
    let order = SortOrder::parse(params.get("order").map(String::as_str));
    let page = params
        .get("page")
        .and_then(|p| p.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1);

    let (items, total) = store::list_active(&state.db_pool, &filter, sort, order, page).await?;
    let categories = store::distinct_categories(&state.db_pool).await?;

    let data: Vec<ProductResponse> = items.into_iter().map(ProductResponse::from).collect();

    Ok(Json(ListingPayload {
        products: Paginated::new(data, total, page, PER_PAGE),
        categories,
        filters: ListingFilters {
            category: filter.category,
            search: filter.search,
            sort: sort.column().to_string(),
            order: order.as_str().to_string(),
        },
    }))
}

// GET /products/{id} - Detail page props; unknown and inactive ids both 404
#[instrument(skip(state), fields(id))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DetailPayload>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::not_found("Product not found"))?;

    let product = store::find_active(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    let related = store::related(&state.db_pool, &product.category, product.id, 4).await?;

    Ok(Json(DetailPayload {
        product: ProductResponse::from(product),
        related_products: related.into_iter().map(ProductResponse::from).collect(),
    }))
}
