//! Validated inbound payloads, one per survey form.
//!
//! These are the shapes the web layer submits. They serialize into the exact
//! camelCase keys the store contract fixes (see `domain::forms`), with absent
//! numerics staying absent rather than becoming zero. Narrative free text is
//! sanitized before storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::shared_fields::SharedFieldsUpdate;
use crate::domain::types::FormLetter;

fn sanitize(raw: &str) -> String {
    ammonia::clean(raw)
}

/// One priced line item as submitted.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct MoneyEntryPayload {
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form A — current situation survey.
pub struct FormAPayload {
    #[serde(default)]
    pub current_situation: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub cause_analysis: String,
    #[serde(default)]
    pub recommendation: String,
    /// Share of employees reporting harmful stress, in percent.
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_loss: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick_leave_cost: Option<f64>,
    #[serde(default)]
    pub interventions: Vec<String>,
}

impl FormAPayload {
    fn sanitized(&self) -> Self {
        Self {
            current_situation: sanitize(&self.current_situation),
            goals: sanitize(&self.goals),
            cause_analysis: sanitize(&self.cause_analysis),
            recommendation: sanitize(&self.recommendation),
            interventions: self.interventions.iter().map(|s| sanitize(s)).collect(),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form B — intervention plan.
pub struct FormBPayload {
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub target_group: String,
    #[serde(default)]
    pub implementation_plan: Vec<String>,
    #[serde(default)]
    pub intervention_description: String,
    #[validate(nested)]
    #[serde(default)]
    pub costs: Vec<MoneyEntryPayload>,
}

impl FormBPayload {
    fn sanitized(&self) -> Self {
        Self {
            purpose: sanitize(&self.purpose),
            target_group: sanitize(&self.target_group),
            implementation_plan: self.implementation_plan.iter().map(|s| sanitize(s)).collect(),
            intervention_description: sanitize(&self.intervention_description),
            costs: self.costs.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form C — evaluation time period.
pub struct FormCPayload {
    #[serde(default)]
    pub time_period: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form D — organization profile and sick-leave baseline.
pub struct FormDPayload {
    #[validate(length(min = 1))]
    pub organization_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_employees: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_monthly_salary: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_sick_leave_percentage: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_sick_leave_percentage: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_short_sick_leave_costs: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_long_sick_leave_costs: Option<f64>,
}

impl FormDPayload {
    fn time_period(&self) -> Option<String> {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return None;
        }
        Some(format!("{} - {}", self.start_date, self.end_date))
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form E — expected benefit areas.
pub struct FormEPayload {
    #[validate(nested)]
    #[serde(default)]
    pub benefits: Vec<MoneyEntryPayload>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form J — the computed ROI figures, three variants.
///
/// A field left `None` stays absent in the store; the report pipeline treats
/// absent and zero differently, so this must not default.
pub struct FormJPayload {
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_intervention_cost_alt1: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_benefit_alt1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi_percentage_alt1: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_mental_health_alt1: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_stress_percentage_alt1: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_mental_health_alt2: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_stress_percentage_alt2: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_intervention_cost_alt2: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_intervention_cost_alt3: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_mental_health_alt3: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_effect_for_break_even_alt3: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time_period: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intervention_description: String,
}

/// One submitted form of any letter.
#[derive(Clone, Debug)]
pub enum FormPayload {
    A(FormAPayload),
    B(FormBPayload),
    C(FormCPayload),
    D(FormDPayload),
    E(FormEPayload),
    J(FormJPayload),
}

impl FormPayload {
    pub fn letter(&self) -> FormLetter {
        match self {
            FormPayload::A(_) => FormLetter::A,
            FormPayload::B(_) => FormLetter::B,
            FormPayload::C(_) => FormLetter::C,
            FormPayload::D(_) => FormLetter::D,
            FormPayload::E(_) => FormLetter::E,
            FormPayload::J(_) => FormLetter::J,
        }
    }

    pub fn validate(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            FormPayload::A(form) => form.validate(),
            FormPayload::B(form) => form.validate(),
            FormPayload::C(form) => form.validate(),
            FormPayload::D(form) => form.validate(),
            FormPayload::E(form) => form.validate(),
            FormPayload::J(form) => form.validate(),
        }
    }

    /// Sanitized JSON shape as it goes into the store.
    pub fn to_stored_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            FormPayload::A(form) => serde_json::to_value(form.sanitized()),
            FormPayload::B(form) => serde_json::to_value(form.sanitized()),
            FormPayload::C(form) => serde_json::to_value(form),
            FormPayload::D(form) => serde_json::to_value(form),
            FormPayload::E(form) => serde_json::to_value(form),
            FormPayload::J(form) => serde_json::to_value(form),
        }
    }

    /// The denormalized shared fields this form refreshes on save.
    pub fn shared_fields_update(&self) -> SharedFieldsUpdate {
        match self {
            FormPayload::C(form) if !form.time_period.is_empty() => {
                SharedFieldsUpdate::new().time_period(form.time_period.clone())
            }
            FormPayload::D(form) => {
                let mut update = SharedFieldsUpdate::new()
                    .organization_name(form.organization_name.clone())
                    .contact_person(form.contact_person.clone());
                if let Some(period) = form.time_period() {
                    update = update.time_period(period);
                }
                update
            }
            _ => SharedFieldsUpdate::new(),
        }
    }
}
