//! Repository for the `marcas` table.
//!
//! Registration numbers are derived from the latest row at insert time.
//! The read of the latest row and the insert are separate statements with
//! no transaction around them, so two concurrent creates can derive the
//! same number. The `uq_marcas_registration_number` constraint rejects the
//! second insert with a unique-violation error; nothing here retries.

use marcas_core::marca::{MarcaFields, STATUS_PENDING};
use marcas_core::registration::{is_well_formed, next_registration_number};
use marcas_core::types::DbId;

use crate::models::marca::Marca;
use crate::DbPool;

/// Column list for `marcas` queries.
const COLUMNS: &str = "\
    id, name, description, category, registered_at, \
    status, owner, registration_number";

/// Provides data access for trademark records.
pub struct MarcaRepo;

impl MarcaRepo {
    /// List all records in storage (id) order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Marca>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marcas ORDER BY id");
        sqlx::query_as::<_, Marca>(&query).fetch_all(pool).await
    }

    /// Find a record by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Marca>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marcas WHERE id = ?1");
        sqlx::query_as::<_, Marca>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all records.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM marcas")
            .fetch_one(pool)
            .await
    }

    /// Find the record with the numerically highest ID.
    pub async fn find_latest(pool: &DbPool) -> Result<Option<Marca>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marcas ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, Marca>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create a new record with the next registration number.
    ///
    /// `status` defaults to `Pending` when `None`. Fails with a
    /// unique-violation database error (see [`crate::is_unique_violation`])
    /// if the derived number is already taken.
    pub async fn create(
        pool: &DbPool,
        fields: &MarcaFields,
        status: Option<&str>,
    ) -> Result<Marca, sqlx::Error> {
        let latest = Self::find_latest(pool).await?;
        let last_number = latest.as_ref().map(|m| m.registration_number.as_str());

        if let Some(last) = last_number.filter(|n| !is_well_formed(n)) {
            tracing::warn!(
                last_registration_number = %last,
                "Latest registration number is malformed, sequence may reset",
            );
        }

        let registration_number = next_registration_number(last_number);
        tracing::debug!(%registration_number, "Derived registration number");

        Self::insert(
            pool,
            fields,
            status.unwrap_or(STATUS_PENDING),
            &registration_number,
        )
        .await
    }

    /// Insert a record with an explicit status and registration number.
    ///
    /// `create` is the normal entry point; this is exposed for seeding and
    /// for exercising the uniqueness constraint directly.
    pub async fn insert(
        pool: &DbPool,
        fields: &MarcaFields,
        status: &str,
        registration_number: &str,
    ) -> Result<Marca, sqlx::Error> {
        let query = format!(
            "INSERT INTO marcas \
                 (name, description, category, registered_at, status, owner, registration_number) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Marca>(&query)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(&fields.category)
            .bind(chrono::Utc::now())
            .bind(status)
            .bind(&fields.owner)
            .bind(registration_number)
            .fetch_one(pool)
            .await
    }

    /// Overwrite the editable fields of a record.
    ///
    /// `status` is only changed when supplied. `id`, `registered_at`, and
    /// `registration_number` are never modified. Returns `None` if no record
    /// has the given ID.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        fields: &MarcaFields,
        status: Option<&str>,
    ) -> Result<Option<Marca>, sqlx::Error> {
        let query = format!(
            "UPDATE marcas SET \
                 name = ?2, \
                 description = ?3, \
                 category = ?4, \
                 owner = ?5, \
                 status = COALESCE(?6, status) \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Marca>(&query)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(&fields.category)
            .bind(&fields.owner)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a record by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM marcas WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
