use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Organization-level identity denormalized across all forms.
///
/// Maintained by the shared-fields updater whenever a form saves; the report
/// pipeline only ever reads it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SharedFields {
    pub organization_name: String,
    pub contact_person: String,
    /// Free-form period, typically `"YYYY-MM-DD - YYYY-MM-DD"`.
    pub time_period: String,
    pub updated_at: Option<NaiveDateTime>,
}

/// Upsert payload for [`SharedFields`].
///
/// `None` fields leave the stored value untouched so that a form that only
/// knows the time period does not blank the organization name.
#[derive(Clone, Debug, Default)]
pub struct SharedFieldsUpdate {
    pub organization_name: Option<String>,
    pub contact_person: Option<String>,
    pub time_period: Option<String>,
}

impl SharedFieldsUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organization_name(mut self, name: impl Into<String>) -> Self {
        self.organization_name = Some(name.into());
        self
    }

    pub fn contact_person(mut self, person: impl Into<String>) -> Self {
        self.contact_person = Some(person.into());
        self
    }

    pub fn time_period(mut self, period: impl Into<String>) -> Self {
        self.time_period = Some(period.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.organization_name.is_none()
            && self.contact_person.is_none()
            && self.time_period.is_none()
    }
}
