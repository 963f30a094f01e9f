//! Shared query parameter types for API handlers.

use serde::Deserialize;

use marcas_core::types::DbId;

/// Optional record selector (`?id=`).
///
/// The collection endpoints accept the target record either in the path
/// or through this query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<DbId>,
}
