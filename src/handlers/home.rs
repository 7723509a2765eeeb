// src/handlers/home.rs
use axum::{extract::State, Json};
use tracing::instrument;

use crate::dtos::pages::HomePayload;
use crate::dtos::product::ProductResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::store::products as store;

// GET / - Home page props
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePayload>, AppError> {
    let pool = &state.db_pool;

    let featured = store::featured(pool, 8).await?;
    let newest = store::list_by_tag(pool, "new", 4).await?;
    let categories = store::category_counts(pool, 8).await?;
    let discounts = store::top_discounts(pool, 6).await?;
    let total_products = store::count_active(pool).await?;

    Ok(Json(HomePayload {
        featured_products: featured.into_iter().map(ProductResponse::from).collect(),
        new_products: newest.into_iter().map(ProductResponse::from).collect(),
        categories,
        discount_products: discounts.into_iter().map(ProductResponse::from).collect(),
        total_products,
    }))
}
