//! Route definitions for trademark records (`/marcas`, nested under `/api`).

use axum::routing::get;
use axum::Router;

use crate::handlers::marcas;
use crate::state::AppState;

/// Trademark record routes.
///
/// ```text
/// GET    /marcas          -> list_or_get      (?id= selects one record)
/// POST   /marcas          -> create_marca
/// PUT    /marcas?id=      -> update_by_query
/// DELETE /marcas?id=      -> delete_by_query
/// GET    /marcas/{id}     -> get_marca
/// PUT    /marcas/{id}     -> update_marca
/// DELETE /marcas/{id}     -> delete_marca
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/marcas",
            get(marcas::list_or_get)
                .post(marcas::create_marca)
                .put(marcas::update_by_query)
                .delete(marcas::delete_by_query),
        )
        .route(
            "/marcas/{id}",
            get(marcas::get_marca)
                .put(marcas::update_marca)
                .delete(marcas::delete_marca),
        )
}
