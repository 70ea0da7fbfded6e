use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::form_documents)]
/// Diesel row for a stored form payload.
///
/// `payload` is the raw JSON text; parsing into
/// [`crate::domain::forms::FormDocument`] happens in the repository so that a
/// corrupt row surfaces as a store error rather than a panic.
pub struct FormDocument {
    pub id: i32,
    pub user_id: String,
    /// Empty string for user-scoped documents.
    pub project_id: String,
    pub form_letter: String,
    pub payload: String,
    pub saved_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::form_documents)]
/// Insertable form of [`FormDocument`].
pub struct NewFormDocument<'a> {
    pub user_id: &'a str,
    pub project_id: &'a str,
    pub form_letter: &'a str,
    pub payload: &'a str,
    pub saved_at: NaiveDateTime,
}
