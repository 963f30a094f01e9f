//! Field rules for trademark ("marca") records.
//!
//! Required text fields are trimmed before storage and must be non-empty
//! afterwards. No other content validation is applied.

use crate::error::CoreError;

/// Entity name used in `NotFound` errors.
pub const ENTITY_NAME: &str = "Marca";

/// Status assigned to every newly created record.
pub const STATUS_PENDING: &str = "Pending";

// Wire names of the record fields, used in validation messages.
pub const FIELD_NAME: &str = "nombre";
pub const FIELD_DESCRIPTION: &str = "descripcion";
pub const FIELD_CATEGORY: &str = "categoria";
pub const FIELD_OWNER: &str = "propietario";
pub const FIELD_STATUS: &str = "estado";

/// The four required, user-editable fields of a record, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarcaFields {
    pub name: String,
    pub description: String,
    pub category: String,
    pub owner: String,
}

impl MarcaFields {
    /// Trim and validate the raw field values of a create or update request.
    ///
    /// Fails on the first field that is missing or blank.
    pub fn normalize(
        name: Option<String>,
        description: Option<String>,
        category: Option<String>,
        owner: Option<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            name: require_field(FIELD_NAME, name)?,
            description: require_field(FIELD_DESCRIPTION, description)?,
            category: require_field(FIELD_CATEGORY, category)?,
            owner: require_field(FIELD_OWNER, owner)?,
        })
    }
}

/// Trim a required field, rejecting missing, empty, or whitespace-only values.
pub fn require_field(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Normalize an optional status supplied on update.
///
/// Omission is preserved as `None` so the stored status stays unchanged.
/// A supplied status is trimmed and must not be blank; any other string is
/// accepted.
pub fn normalize_status(status: Option<String>) -> Result<Option<String>, CoreError> {
    status
        .map(|s| require_field(FIELD_STATUS, Some(s)))
        .transpose()
}
