use chrono::Utc;
use diesel::prelude::*;

use crate::domain::shared_fields::{SharedFields, SharedFieldsUpdate};
use crate::domain::types::UserId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SharedFieldsReader, SharedFieldsWriter};

impl SharedFieldsReader for DieselRepository {
    fn get_shared_fields(&self, user_id: &UserId) -> RepositoryResult<Option<SharedFields>> {
        use crate::models::shared_fields::SharedFields as DbSharedFields;
        use crate::schema::shared_fields;

        let mut conn = self.conn()?;
        let row = shared_fields::table
            .find(user_id.as_str())
            .first::<DbSharedFields>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }
}

impl SharedFieldsWriter for DieselRepository {
    fn upsert_shared_fields(
        &self,
        user_id: &UserId,
        update: &SharedFieldsUpdate,
    ) -> RepositoryResult<SharedFields> {
        use crate::models::shared_fields::{
            SharedFields as DbSharedFields, UpdateSharedFields as DbUpdateSharedFields,
        };
        use crate::schema::shared_fields;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let existing = shared_fields::table
            .find(user_id.as_str())
            .first::<DbSharedFields>(&mut conn)
            .optional()?;

        let row = match existing {
            Some(_) => {
                let changes = DbUpdateSharedFields {
                    organization_name: update.organization_name.as_deref(),
                    contact_person: update.contact_person.as_deref(),
                    time_period: update.time_period.as_deref(),
                    updated_at: now,
                };
                diesel::update(shared_fields::table.find(user_id.as_str()))
                    .set(&changes)
                    .get_result::<DbSharedFields>(&mut conn)?
            }
            None => {
                let row = DbSharedFields {
                    user_id: user_id.as_str().to_string(),
                    organization_name: update.organization_name.clone().unwrap_or_default(),
                    contact_person: update.contact_person.clone().unwrap_or_default(),
                    time_period: update.time_period.clone().unwrap_or_default(),
                    updated_at: now,
                };
                diesel::insert_into(shared_fields::table)
                    .values(&row)
                    .get_result::<DbSharedFields>(&mut conn)?
            }
        };

        Ok(row.into())
    }
}
