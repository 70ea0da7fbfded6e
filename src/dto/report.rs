//! Zero-safe presentation view of the aggregated report.
//!
//! Consumers (report tabs, the PDF exporter) do arithmetic on these fields
//! without defensive checks, so every numeric is a finite `f64` and every
//! string is present. Field names serialize in the camelCase shape the web
//! layer expects.

use serde::Serialize;

use crate::domain::forms::MoneyEntry;
use crate::domain::report::RoiReportData;

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SharedFieldsView {
    pub organization_name: String,
    pub contact_person: String,
    pub time_period: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoiReportView {
    pub shared_fields: SharedFieldsView,

    // Variant 1 — actual ROI.
    pub total_cost: f64,
    pub total_benefit: f64,
    pub roi: f64,
    pub payback_period: f64,
    pub total_mental_health_cost: f64,
    pub reduced_stress_percentage: f64,

    // Variant 2 — max cost for break-even. ROI is 0 by definition.
    pub total_cost_alt2: f64,
    pub total_benefit_alt2: f64,
    pub roi_alt2: f64,
    pub total_mental_health_cost_alt2: f64,
    pub reduced_stress_percentage_alt2: f64,

    // Variant 3 — min effect for break-even. ROI is 0, benefit equals cost.
    pub total_cost_alt3: f64,
    pub total_benefit_alt3: f64,
    pub roi_alt3: f64,
    pub total_mental_health_cost_alt3: f64,
    pub min_effect_for_break_even_alt3: f64,

    pub current_situation: String,
    pub cause_analysis: String,
    pub intervention_purpose: String,
    pub goals_description: String,
    pub target_group: String,
    pub intervention_description: String,
    pub implementation_plan: String,
    pub recommendation: String,

    pub intervention_costs: Vec<MoneyEntry>,
    pub benefit_areas: Vec<MoneyEntry>,
    pub interventions_array: Vec<String>,
    pub implementation_plan_array: Vec<String>,

    pub stress_percentage: f64,
    pub production_loss_value: f64,
    pub sick_leave_value: f64,
}

fn zero_safe(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl From<&RoiReportData> for RoiReportView {
    fn from(data: &RoiReportData) -> Self {
        let shared = &data.shared_fields;
        let time_period = data
            .time_period
            .clone()
            .unwrap_or_else(|| shared.time_period.clone());

        let cost_alt3 = zero_safe(data.min_effect_break_even.cost);

        Self {
            shared_fields: SharedFieldsView {
                organization_name: shared.organization_name.clone(),
                contact_person: shared.contact_person.clone(),
                time_period,
            },

            total_cost: zero_safe(data.actual.total_cost),
            total_benefit: zero_safe(data.actual.total_benefit),
            roi: zero_safe(data.actual.roi),
            payback_period: zero_safe(data.actual.payback_months),
            total_mental_health_cost: zero_safe(data.actual.mental_health_cost),
            reduced_stress_percentage: zero_safe(data.actual.reduced_stress_percentage),

            total_cost_alt2: zero_safe(data.max_cost_break_even.max_cost),
            total_benefit_alt2: zero_safe(data.max_cost_break_even.benefit),
            roi_alt2: 0.0,
            total_mental_health_cost_alt2: zero_safe(data.max_cost_break_even.mental_health_cost),
            reduced_stress_percentage_alt2: zero_safe(
                data.max_cost_break_even.reduced_stress_percentage,
            ),

            total_cost_alt3: cost_alt3,
            // Break-even: the benefit is defined as equal to the cost.
            total_benefit_alt3: cost_alt3,
            roi_alt3: 0.0,
            total_mental_health_cost_alt3: zero_safe(data.min_effect_break_even.mental_health_cost),
            min_effect_for_break_even_alt3: zero_safe(data.min_effect_break_even.min_effect),

            current_situation: data.current_situation.clone().unwrap_or_default(),
            cause_analysis: data.cause_analysis.clone().unwrap_or_default(),
            intervention_purpose: data.intervention_purpose.clone().unwrap_or_default(),
            goals_description: data.goals_description.clone().unwrap_or_default(),
            target_group: data.target_group.clone().unwrap_or_default(),
            intervention_description: data.intervention_description.clone().unwrap_or_default(),
            implementation_plan: data.implementation_plan.clone().unwrap_or_default(),
            recommendation: data.recommendation.clone().unwrap_or_default(),

            intervention_costs: data.intervention_costs.clone(),
            benefit_areas: data.benefit_areas.clone(),
            interventions_array: data.interventions.clone(),
            implementation_plan_array: data.implementation_plan_steps.clone(),

            stress_percentage: zero_safe(data.stress_percentage),
            production_loss_value: zero_safe(data.production_loss_value),
            sick_leave_value: zero_safe(data.sick_leave_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{ActualRoi, MinEffectBreakEven};
    use crate::domain::shared_fields::SharedFields;

    #[test]
    fn test_view_defaults_are_zero_safe() {
        let data = RoiReportData::new(SharedFields::default());
        let view = RoiReportView::from(&data);
        assert_eq!(view.total_cost, 0.0);
        assert_eq!(view.roi, 0.0);
        assert_eq!(view.payback_period, 0.0);
        assert_eq!(view.roi_alt2, 0.0);
        assert_eq!(view.roi_alt3, 0.0);
        assert_eq!(view.current_situation, "");
        assert!(view.intervention_costs.is_empty());
    }

    #[test]
    fn test_view_filters_non_finite_numbers() {
        let mut data = RoiReportData::new(SharedFields::default());
        data.actual = ActualRoi {
            roi: Some(f64::NAN),
            payback_months: Some(f64::INFINITY),
            ..ActualRoi::default()
        };
        let view = RoiReportView::from(&data);
        assert_eq!(view.roi, 0.0);
        assert_eq!(view.payback_period, 0.0);
    }

    #[test]
    fn test_alt3_benefit_equals_cost() {
        let mut data = RoiReportData::new(SharedFields::default());
        data.min_effect_break_even = MinEffectBreakEven {
            cost: Some(90000.0),
            mental_health_cost: None,
            min_effect: Some(12.5),
        };
        let view = RoiReportView::from(&data);
        assert_eq!(view.total_cost_alt3, 90000.0);
        assert_eq!(view.total_benefit_alt3, 90000.0);
        assert_eq!(view.roi_alt3, 0.0);
    }

    #[test]
    fn test_time_period_prefers_resolved_over_shared() {
        let mut data = RoiReportData::new(SharedFields {
            time_period: "2024-01-01 - 2024-12-31".to_string(),
            ..SharedFields::default()
        });
        data.time_period = Some("2025-01-01 - 2025-06-30".to_string());
        let view = RoiReportView::from(&data);
        assert_eq!(view.shared_fields.time_period, "2025-01-01 - 2025-06-30");
    }
}
