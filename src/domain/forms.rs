//! Typed read-side projections of the stored form documents.
//!
//! The store holds free-form JSON per form; each projection pulls out exactly
//! the keys the report pipeline depends on (the field names are a contract,
//! see the per-form structs) and treats anything missing or of the wrong
//! shape as absent rather than failing the whole document.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::domain::types::FormLetter;

/// A stored form snapshot as the repository returns it.
#[derive(Clone, Debug, PartialEq)]
pub struct FormDocument {
    pub letter: FormLetter,
    pub payload: Value,
    pub saved_at: NaiveDateTime,
}

/// One priced line item from a `costs[]` or `benefits[]` array.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MoneyEntry {
    pub description: String,
    pub amount: f64,
}

impl MoneyEntry {
    /// Validating parse of a raw JSON array: entries lacking a string
    /// `description` or a numeric `amount` are dropped.
    pub fn parse_list(raw: Option<&Value>) -> Vec<MoneyEntry> {
        raw.and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        let description = item.get("description")?.as_str()?;
                        let amount = item.get("amount")?.as_f64()?;
                        Some(MoneyEntry {
                            description: description.to_string(),
                            amount,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn sum(entries: &[MoneyEntry]) -> f64 {
        entries.iter().map(|entry| entry.amount).sum()
    }
}

fn str_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

fn num_field(payload: &Value, key: &str) -> Option<f64> {
    payload.get(key).and_then(Value::as_f64)
}

fn str_items(payload: &Value, key: &str) -> Vec<String> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Form A — current situation survey.
///
/// Contract keys: `currentSituation, goals, causeAnalysis, recommendation,
/// stressLevel, productionLoss, sickLeaveCost, interventions[]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormA {
    pub current_situation: Option<String>,
    pub goals: Option<String>,
    pub cause_analysis: Option<String>,
    pub recommendation: Option<String>,
    pub stress_level: Option<f64>,
    pub production_loss: Option<f64>,
    pub sick_leave_cost: Option<f64>,
    pub interventions: Vec<String>,
}

impl FormA {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            current_situation: str_field(payload, "currentSituation"),
            goals: str_field(payload, "goals"),
            cause_analysis: str_field(payload, "causeAnalysis"),
            recommendation: str_field(payload, "recommendation"),
            stress_level: num_field(payload, "stressLevel"),
            production_loss: num_field(payload, "productionLoss"),
            sick_leave_cost: num_field(payload, "sickLeaveCost"),
            interventions: str_items(payload, "interventions"),
        }
    }

    /// Non-empty intervention names joined for display, `None` when nothing
    /// usable was entered.
    pub fn intervention_description(&self) -> Option<String> {
        let joined = self
            .interventions
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() { None } else { Some(joined) }
    }
}

/// Form B — intervention plan.
///
/// Contract keys: `purpose, targetGroup, implementationPlan[],
/// interventionDescription, costs[].{description,amount}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormB {
    pub purpose: Option<String>,
    pub target_group: Option<String>,
    pub implementation_plan: Vec<String>,
    pub intervention_description: Option<String>,
    pub costs: Vec<MoneyEntry>,
}

impl FormB {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            purpose: str_field(payload, "purpose"),
            target_group: str_field(payload, "targetGroup"),
            implementation_plan: str_items(payload, "implementationPlan"),
            intervention_description: str_field(payload, "interventionDescription"),
            costs: MoneyEntry::parse_list(payload.get("costs")),
        }
    }
}

/// Form C — time period. Contract key: `timePeriod`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormC {
    pub time_period: Option<String>,
}

impl FormC {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            time_period: str_field(payload, "timePeriod"),
        }
    }
}

/// Form D — organization profile and sick-leave baseline.
///
/// Contract keys: `organizationName, contactPerson, startDate, endDate,
/// numberOfEmployees, averageMonthlySalary, shortSickLeavePercentage,
/// longSickLeavePercentage, totalShortSickLeaveCosts, totalLongSickLeaveCosts`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormD {
    pub organization_name: Option<String>,
    pub contact_person: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub number_of_employees: Option<f64>,
    pub average_monthly_salary: Option<f64>,
    pub short_sick_leave_percentage: Option<f64>,
    pub long_sick_leave_percentage: Option<f64>,
    pub total_short_sick_leave_costs: Option<f64>,
    pub total_long_sick_leave_costs: Option<f64>,
}

impl FormD {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            organization_name: str_field(payload, "organizationName"),
            contact_person: str_field(payload, "contactPerson"),
            start_date: str_field(payload, "startDate"),
            end_date: str_field(payload, "endDate"),
            number_of_employees: num_field(payload, "numberOfEmployees"),
            average_monthly_salary: num_field(payload, "averageMonthlySalary"),
            short_sick_leave_percentage: num_field(payload, "shortSickLeavePercentage"),
            long_sick_leave_percentage: num_field(payload, "longSickLeavePercentage"),
            total_short_sick_leave_costs: num_field(payload, "totalShortSickLeaveCosts"),
            total_long_sick_leave_costs: num_field(payload, "totalLongSickLeaveCosts"),
        }
    }

    /// `"start - end"` when both dates are present.
    pub fn time_period(&self) -> Option<String> {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some(format!("{start} - {end}"))
            }
            _ => None,
        }
    }
}

/// Form E — expected benefit areas. Contract key: `benefits[].{description,amount}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormE {
    pub benefits: Vec<MoneyEntry>,
}

impl FormE {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            benefits: MoneyEntry::parse_list(payload.get("benefits")),
        }
    }
}

/// Form J — the authoritative ROI computation store, three result variants.
///
/// Contract keys: `totalInterventionCostAlt{1,3}, economicBenefitAlt1,
/// roiPercentageAlt1, totalCostMentalHealthAlt{1,2,3},
/// reducedStressPercentageAlt{1,2}, maxInterventionCostAlt2,
/// minEffectForBreakEvenAlt3, timePeriod, interventionDescription`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormJ {
    pub total_intervention_cost_alt1: Option<f64>,
    pub economic_benefit_alt1: Option<f64>,
    pub roi_percentage_alt1: Option<f64>,
    pub total_cost_mental_health_alt1: Option<f64>,
    pub reduced_stress_percentage_alt1: Option<f64>,
    pub total_cost_mental_health_alt2: Option<f64>,
    pub reduced_stress_percentage_alt2: Option<f64>,
    pub max_intervention_cost_alt2: Option<f64>,
    pub total_intervention_cost_alt3: Option<f64>,
    pub total_cost_mental_health_alt3: Option<f64>,
    pub min_effect_for_break_even_alt3: Option<f64>,
    pub time_period: Option<String>,
    pub intervention_description: Option<String>,
}

impl FormJ {
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            total_intervention_cost_alt1: num_field(payload, "totalInterventionCostAlt1"),
            economic_benefit_alt1: num_field(payload, "economicBenefitAlt1"),
            roi_percentage_alt1: num_field(payload, "roiPercentageAlt1"),
            total_cost_mental_health_alt1: num_field(payload, "totalCostMentalHealthAlt1"),
            reduced_stress_percentage_alt1: num_field(payload, "reducedStressPercentageAlt1"),
            total_cost_mental_health_alt2: num_field(payload, "totalCostMentalHealthAlt2"),
            reduced_stress_percentage_alt2: num_field(payload, "reducedStressPercentageAlt2"),
            max_intervention_cost_alt2: num_field(payload, "maxInterventionCostAlt2"),
            total_intervention_cost_alt3: num_field(payload, "totalInterventionCostAlt3"),
            total_cost_mental_health_alt3: num_field(payload, "totalCostMentalHealthAlt3"),
            min_effect_for_break_even_alt3: num_field(payload, "minEffectForBreakEvenAlt3"),
            time_period: str_field(payload, "timePeriod"),
            intervention_description: str_field(payload, "interventionDescription"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_money_entry_parse_drops_invalid_entries() {
        let raw = json!([
            {"description": "Coaching", "amount": 50000},
            {"description": "No amount"},
            {"amount": 100},
            {"description": 42, "amount": 100},
            {"description": "String amount", "amount": "100"},
        ]);
        let entries = MoneyEntry::parse_list(Some(&raw));
        assert_eq!(
            entries,
            vec![MoneyEntry {
                description: "Coaching".to_string(),
                amount: 50000.0,
            }]
        );
        assert_eq!(MoneyEntry::sum(&entries), 50000.0);
    }

    #[test]
    fn test_money_entry_parse_tolerates_non_array() {
        assert!(MoneyEntry::parse_list(None).is_empty());
        assert!(MoneyEntry::parse_list(Some(&json!("oops"))).is_empty());
    }

    #[test]
    fn test_form_a_wrong_types_read_as_absent() {
        let payload = json!({
            "currentSituation": "High stress in support team",
            "stressLevel": "not a number",
            "interventions": ["Coaching", "", "  ", "Workshops"],
        });
        let form = FormA::from_payload(&payload);
        assert_eq!(
            form.current_situation.as_deref(),
            Some("High stress in support team")
        );
        assert_eq!(form.stress_level, None);
        assert_eq!(
            form.intervention_description().as_deref(),
            Some("Coaching, Workshops")
        );
    }

    #[test]
    fn test_form_a_no_usable_interventions() {
        let form = FormA::from_payload(&json!({"interventions": ["", "   "]}));
        assert_eq!(form.intervention_description(), None);
        let form = FormA::from_payload(&json!({}));
        assert_eq!(form.intervention_description(), None);
    }

    #[test]
    fn test_form_d_time_period_needs_both_dates() {
        let form = FormD::from_payload(&json!({
            "startDate": "2025-01-01",
            "endDate": "2025-06-30",
        }));
        assert_eq!(form.time_period().as_deref(), Some("2025-01-01 - 2025-06-30"));

        let form = FormD::from_payload(&json!({"startDate": "2025-01-01"}));
        assert_eq!(form.time_period(), None);
    }

    #[test]
    fn test_form_j_partial_payload() {
        let form = FormJ::from_payload(&json!({
            "totalInterventionCostAlt1": 100000,
            "economicBenefitAlt1": 250000,
        }));
        assert_eq!(form.total_intervention_cost_alt1, Some(100000.0));
        assert_eq!(form.economic_benefit_alt1, Some(250000.0));
        assert_eq!(form.roi_percentage_alt1, None);
        assert_eq!(form.max_intervention_cost_alt2, None);
    }
}
