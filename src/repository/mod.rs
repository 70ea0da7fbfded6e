//! Capability traits over the form document store.
//!
//! The aggregation pipeline and the save services are generic over these
//! traits so they can run against the Diesel store in production and against
//! mocks in tests.

use serde_json::Value;

use crate::db::DbPool;
use crate::domain::forms::FormDocument;
use crate::domain::shared_fields::{SharedFields, SharedFieldsUpdate};
use crate::domain::types::{FormLetter, FormScope, UserId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod form;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod shared_fields;

/// Diesel-backed implementation of every store trait; cheap to clone, the
/// pool is internally reference counted.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(crate::db::get_connection(&self.pool)?)
    }
}

pub trait FormReader {
    /// Fetch one form document within the given scope. `Ok(None)` means the
    /// form has never been saved there.
    fn get_form(&self, scope: &FormScope, letter: FormLetter)
    -> RepositoryResult<Option<FormDocument>>;

    /// All documents saved within the scope, in letter order.
    fn list_forms(&self, scope: &FormScope) -> RepositoryResult<Vec<FormDocument>>;
}

pub trait FormWriter {
    /// Insert or replace the payload for `(scope, letter)`.
    fn save_form(
        &self,
        scope: &FormScope,
        letter: FormLetter,
        payload: &Value,
    ) -> RepositoryResult<FormDocument>;

    fn delete_form(&self, scope: &FormScope, letter: FormLetter) -> RepositoryResult<()>;
}

pub trait SharedFieldsReader {
    fn get_shared_fields(&self, user_id: &UserId) -> RepositoryResult<Option<SharedFields>>;
}

pub trait SharedFieldsWriter {
    /// Create or update the user's shared fields; `None` fields in the update
    /// keep their stored value, absent rows start from empty strings.
    fn upsert_shared_fields(
        &self,
        user_id: &UserId,
        update: &SharedFieldsUpdate,
    ) -> RepositoryResult<SharedFields>;
}
