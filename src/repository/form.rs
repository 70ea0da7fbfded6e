use chrono::Utc;
use diesel::prelude::*;
use serde_json::Value;

use crate::domain::forms::FormDocument;
use crate::domain::types::{FormLetter, FormScope};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, FormReader, FormWriter};

/// Column value used for the project dimension of the unique key; empty
/// string marks the user-scoped document.
fn project_key(scope: &FormScope) -> &str {
    scope.project_id().map(|p| p.as_str()).unwrap_or("")
}

fn into_domain(row: crate::models::form_document::FormDocument) -> RepositoryResult<FormDocument> {
    let letter: FormLetter = row.form_letter.parse().map_err(|_| {
        RepositoryError::ValidationError(format!(
            "Unknown form letter in store: {}",
            row.form_letter
        ))
    })?;
    let payload: Value = serde_json::from_str(&row.payload).map_err(|e| {
        RepositoryError::ValidationError(format!(
            "Malformed payload for form {} of user {}: {e}",
            row.form_letter, row.user_id
        ))
    })?;
    Ok(FormDocument {
        letter,
        payload,
        saved_at: row.saved_at,
    })
}

impl FormReader for DieselRepository {
    fn get_form(
        &self,
        scope: &FormScope,
        letter: FormLetter,
    ) -> RepositoryResult<Option<FormDocument>> {
        use crate::models::form_document::FormDocument as DbFormDocument;
        use crate::schema::form_documents;

        let mut conn = self.conn()?;
        let row = form_documents::table
            .filter(form_documents::user_id.eq(scope.user_id().as_str()))
            .filter(form_documents::project_id.eq(project_key(scope)))
            .filter(form_documents::form_letter.eq(letter.as_str()))
            .first::<DbFormDocument>(&mut conn)
            .optional()?;

        row.map(into_domain).transpose()
    }

    fn list_forms(&self, scope: &FormScope) -> RepositoryResult<Vec<FormDocument>> {
        use crate::models::form_document::FormDocument as DbFormDocument;
        use crate::schema::form_documents;

        let mut conn = self.conn()?;
        let rows = form_documents::table
            .filter(form_documents::user_id.eq(scope.user_id().as_str()))
            .filter(form_documents::project_id.eq(project_key(scope)))
            .order(form_documents::form_letter.asc())
            .load::<DbFormDocument>(&mut conn)?;

        rows.into_iter().map(into_domain).collect()
    }
}

impl FormWriter for DieselRepository {
    fn save_form(
        &self,
        scope: &FormScope,
        letter: FormLetter,
        payload: &Value,
    ) -> RepositoryResult<FormDocument> {
        use crate::models::form_document::{
            FormDocument as DbFormDocument, NewFormDocument as DbNewFormDocument,
        };
        use crate::schema::form_documents;

        let mut conn = self.conn()?;
        let serialized = serde_json::to_string(payload)
            .map_err(|e| RepositoryError::ValidationError(format!("Unserializable payload: {e}")))?;
        let now = Utc::now().naive_utc();

        let insertable = DbNewFormDocument {
            user_id: scope.user_id().as_str(),
            project_id: project_key(scope),
            form_letter: letter.as_str(),
            payload: &serialized,
            saved_at: now,
        };

        let saved = diesel::insert_into(form_documents::table)
            .values(&insertable)
            .on_conflict((
                form_documents::user_id,
                form_documents::project_id,
                form_documents::form_letter,
            ))
            .do_update()
            .set((
                form_documents::payload.eq(&serialized),
                form_documents::saved_at.eq(now),
            ))
            .get_result::<DbFormDocument>(&mut conn)?;

        into_domain(saved)
    }

    fn delete_form(&self, scope: &FormScope, letter: FormLetter) -> RepositoryResult<()> {
        use crate::schema::form_documents;

        let mut conn = self.conn()?;
        diesel::delete(
            form_documents::table
                .filter(form_documents::user_id.eq(scope.user_id().as_str()))
                .filter(form_documents::project_id.eq(project_key(scope)))
                .filter(form_documents::form_letter.eq(letter.as_str())),
        )
        .execute(&mut conn)?;
        Ok(())
    }
}
