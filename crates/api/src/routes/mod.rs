pub mod health;
pub mod marcas;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /marcas    trademark records (see routes::marcas)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(marcas::router())
}
