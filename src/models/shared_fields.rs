use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::shared_fields::SharedFields as DomainSharedFields;

#[derive(Debug, Clone, Identifiable, Queryable, Insertable)]
#[diesel(table_name = crate::schema::shared_fields)]
#[diesel(primary_key(user_id))]
/// Diesel row for [`crate::domain::shared_fields::SharedFields`].
pub struct SharedFields {
    pub user_id: String,
    pub organization_name: String,
    pub contact_person: String,
    pub time_period: String,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::shared_fields)]
/// Data applied when updating an existing shared-fields row. `None` fields
/// keep their stored value.
pub struct UpdateSharedFields<'a> {
    pub organization_name: Option<&'a str>,
    pub contact_person: Option<&'a str>,
    pub time_period: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<SharedFields> for DomainSharedFields {
    fn from(row: SharedFields) -> Self {
        Self {
            organization_name: row.organization_name,
            contact_person: row.contact_person,
            time_period: row.time_period,
            updated_at: Some(row.updated_at),
        }
    }
}
