use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    models::{catalog, ProductList},
    AppState,
};

pub async fn list_products(State(state): State<AppState>) -> (StatusCode, Json<ProductList>) {
    let list = ProductList::new(catalog(), state.clock.now());

    info!(count = list.count, "Listed products");

    (StatusCode::OK, Json(list))
}
