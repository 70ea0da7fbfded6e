//! Form intake: validate, sanitize, persist, refresh shared fields.

use crate::domain::forms::FormDocument;
use crate::domain::types::FormScope;
use crate::forms::payloads::FormPayload;
use crate::repository::{FormWriter, SharedFieldsWriter};
use crate::services::{ServiceError, ServiceResult};

/// Persists one submitted form and runs the shared-fields updater.
///
/// Validation failures never reach the store. The shared-fields upsert runs
/// after the document write so a save that fails midway leaves the previous
/// denormalized values intact rather than pointing at a missing document.
pub fn save_form<R>(
    repo: &R,
    scope: &FormScope,
    payload: &FormPayload,
) -> ServiceResult<FormDocument>
where
    R: FormWriter + SharedFieldsWriter + ?Sized,
{
    payload
        .validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let value = payload
        .to_stored_value()
        .map_err(|err| ServiceError::Validation(format!("Unserializable form payload: {err}")))?;

    let letter = payload.letter();
    let document = repo.save_form(scope, letter, &value).map_err(|err| {
        log::error!(
            "Failed to save form {letter} at {}: {err}",
            scope.storage_path(letter)
        );
        ServiceError::from(err)
    })?;

    let update = payload.shared_fields_update();
    if !update.is_empty() {
        repo.upsert_shared_fields(scope.user_id(), &update)
            .map_err(|err| {
                log::error!(
                    "Failed to update shared fields for {}: {err}",
                    scope.user_id()
                );
                ServiceError::from(err)
            })?;
    }

    Ok(document)
}
