//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs whose fields are all optional, so missing
//!   fields surface as validation errors instead of extractor rejections

pub mod marca;
