//! Trademark record model and DTOs.
//!
//! Rust field names are English; the JSON wire names follow the public API
//! (`nombre`, `descripcion`, `fechaRegistro`, ...).

use marcas_core::error::CoreError;
use marcas_core::marca::{normalize_status, MarcaFields};
use marcas_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `marcas` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Marca {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "fechaRegistro")]
    pub registered_at: Timestamp,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "propietario")]
    pub owner: String,
    #[serde(rename = "numeroRegistro")]
    pub registration_number: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a record. Status is always `Pending` on creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMarca {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "propietario")]
    pub owner: Option<String>,
}

impl CreateMarca {
    /// Trim and validate the payload.
    pub fn into_fields(self) -> Result<MarcaFields, CoreError> {
        MarcaFields::normalize(self.name, self.description, self.category, self.owner)
    }
}

/// DTO for updating a record.
///
/// The four text fields are required and overwrite unconditionally;
/// `status` is optional and left untouched when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMarca {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "propietario")]
    pub owner: Option<String>,
    #[serde(rename = "estado")]
    pub status: Option<String>,
}

impl UpdateMarca {
    /// Trim and validate the payload, returning the fields and optional status.
    pub fn into_parts(self) -> Result<(MarcaFields, Option<String>), CoreError> {
        let fields =
            MarcaFields::normalize(self.name, self.description, self.category, self.owner)?;
        let status = normalize_status(self.status)?;
        Ok((fields, status))
    }
}
