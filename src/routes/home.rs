use axum::{routing::get, Router};
use crate::handlers::home::home;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}
