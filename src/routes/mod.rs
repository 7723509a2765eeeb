pub mod home;
pub mod products;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(home::routes())
        .merge(products::routes())
}
