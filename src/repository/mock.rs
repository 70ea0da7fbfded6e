//! Mock repository implementations for isolating services in tests.

use mockall::mock;
use serde_json::Value;

use crate::domain::forms::FormDocument;
use crate::domain::shared_fields::{SharedFields, SharedFieldsUpdate};
use crate::domain::types::{FormLetter, FormScope, UserId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{FormReader, FormWriter, SharedFieldsReader, SharedFieldsWriter};

mock! {
    pub Repository {}

    impl FormReader for Repository {
        fn get_form(
            &self,
            scope: &FormScope,
            letter: FormLetter,
        ) -> RepositoryResult<Option<FormDocument>>;
        fn list_forms(&self, scope: &FormScope) -> RepositoryResult<Vec<FormDocument>>;
    }

    impl FormWriter for Repository {
        fn save_form(
            &self,
            scope: &FormScope,
            letter: FormLetter,
            payload: &Value,
        ) -> RepositoryResult<FormDocument>;
        fn delete_form(&self, scope: &FormScope, letter: FormLetter) -> RepositoryResult<()>;
    }

    impl SharedFieldsReader for Repository {
        fn get_shared_fields(&self, user_id: &UserId) -> RepositoryResult<Option<SharedFields>>;
    }

    impl SharedFieldsWriter for Repository {
        fn upsert_shared_fields(
            &self,
            user_id: &UserId,
            update: &SharedFieldsUpdate,
        ) -> RepositoryResult<SharedFields>;
    }
}
