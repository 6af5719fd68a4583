//! Shared domain types for the supplier portal.
//!
//! This crate owns the record shapes passed between `server` and `client`:
//! the authenticated principal, the one-per-principal supplier row, and the
//! patch applied by the settings forms. Everything here is plain serde data;
//! persistence and rendering live in the other crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

/// Authenticated identity resolved from the session store.
///
/// Created and destroyed by the external auth provider; this workspace only
/// reads it (guards) and deletes sessions on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Unique user identifier.
    pub id: Uuid,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// The one business-profile row owned by a principal.
///
/// Mirrors the `suppliers` table. The `user_id` UNIQUE constraint enforces
/// the at-most-one-row-per-principal invariant at the schema level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub id: Uuid,
    /// Owning principal.
    pub user_id: Uuid,
    /// Registered business name.
    pub name: String,
    /// Free-form description of the business.
    pub description: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Business phone number.
    pub phone: Option<String>,
    /// Primary contact person.
    pub contact_name: Option<String>,
    /// Primary contact email.
    pub contact_email: Option<String>,
}

/// Partial update submitted by the settings forms.
///
/// `None` fields are left untouched; the server applies the patch with
/// COALESCE semantics so the business and profile forms can each submit
/// only the fields they own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
}

impl SupplierPatch {
    /// True when no field is set; the server rejects empty patches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.contact_name.is_none()
            && self.contact_email.is_none()
    }

    /// Apply the patch to a record, returning the updated copy.
    /// Mirrors the COALESCE update the server runs against Postgres.
    #[must_use]
    pub fn apply(&self, record: &SupplierRecord) -> SupplierRecord {
        SupplierRecord {
            id: record.id,
            user_id: record.user_id,
            name: self.name.clone().unwrap_or_else(|| record.name.clone()),
            description: self.description.clone().or_else(|| record.description.clone()),
            address: self.address.clone().or_else(|| record.address.clone()),
            phone: self.phone.clone().or_else(|| record.phone.clone()),
            contact_name: self.contact_name.clone().or_else(|| record.contact_name.clone()),
            contact_email: self.contact_email.clone().or_else(|| record.contact_email.clone()),
        }
    }
}
