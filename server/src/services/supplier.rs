//! Supplier profile service — the one-per-user business record.
//!
//! DESIGN
//! ======
//! `fetch_for_user` is the lookup the presence guard wraps: zero-or-one row
//! by owning principal, with a `UNIQUE(user_id)` constraint guaranteeing the
//! cardinality. Updates use COALESCE so each settings form can patch only
//! the fields it owns.

use model::{SupplierPatch, SupplierRecord};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[cfg(test)]
#[path = "supplier_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("no supplier profile for user {0}")]
    NotFound(Uuid),
    #[error("empty patch")]
    EmptyPatch,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn record_from_row(row: &PgRow) -> SupplierRecord {
    SupplierRecord {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        description: row.get("description"),
        address: row.get("address"),
        phone: row.get("phone"),
        contact_name: row.get("contact_name"),
        contact_email: row.get("contact_email"),
    }
}

/// Fetch the supplier row owned by `user_id`, if any.
///
/// # Errors
///
/// Returns a database error if the query fails. A failed query is distinct
/// from an absent row; callers must not conflate the two.
pub async fn fetch_for_user(pool: &PgPool, user_id: Uuid) -> Result<Option<SupplierRecord>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, user_id, name, description, address, phone, contact_name, contact_email
         FROM suppliers
         WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(record_from_row))
}

/// Create the supplier row for a user (onboarding completion).
///
/// # Errors
///
/// Returns a database error if the insert fails, including the unique
/// violation raised when the user already has a row.
pub async fn create(pool: &PgPool, user_id: Uuid, name: &str) -> Result<SupplierRecord, SupplierError> {
    let id = Uuid::new_v4();
    let row = sqlx::query(
        "INSERT INTO suppliers (id, user_id, name)
         VALUES ($1, $2, $3)
         RETURNING id, user_id, name, description, address, phone, contact_name, contact_email",
    )
    .bind(id)
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(record_from_row(&row))
}

/// Apply a partial update to the user's supplier row.
///
/// # Errors
///
/// Returns `EmptyPatch` when no field is set, `NotFound` when the user has
/// no supplier row, and a database error otherwise.
pub async fn update(pool: &PgPool, user_id: Uuid, patch: &SupplierPatch) -> Result<SupplierRecord, SupplierError> {
    if patch.is_empty() {
        return Err(SupplierError::EmptyPatch);
    }

    let row = sqlx::query(
        "UPDATE suppliers SET
             name          = COALESCE($2, name),
             description   = COALESCE($3, description),
             address       = COALESCE($4, address),
             phone         = COALESCE($5, phone),
             contact_name  = COALESCE($6, contact_name),
             contact_email = COALESCE($7, contact_email),
             updated_at    = now()
         WHERE user_id = $1
         RETURNING id, user_id, name, description, address, phone, contact_name, contact_email",
    )
    .bind(user_id)
    .bind(patch.name.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.address.as_deref())
    .bind(patch.phone.as_deref())
    .bind(patch.contact_name.as_deref())
    .bind(patch.contact_email.as_deref())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(record_from_row).ok_or(SupplierError::NotFound(user_id))
}
