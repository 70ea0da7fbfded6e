//! Internal report model produced by the aggregation pipeline.
//!
//! Numeric fields stay `Option<f64>` all the way through so that "not yet
//! filled" and "filled with zero" remain distinguishable; the presentation
//! boundary (`dto::report`) collapses them to zero-safe defaults once.

use crate::domain::forms::MoneyEntry;
use crate::domain::shared_fields::SharedFields;

/// Variant 1 — the actual ROI of the intervention.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActualRoi {
    pub total_cost: Option<f64>,
    pub total_benefit: Option<f64>,
    /// Percentage, not a fraction: `150.0` means 150 %.
    pub roi: Option<f64>,
    pub mental_health_cost: Option<f64>,
    pub reduced_stress_percentage: Option<f64>,
    /// Months until the intervention pays for itself, assuming the benefit
    /// figure is annual.
    pub payback_months: Option<f64>,
}

/// Variant 2 — the maximum intervention cost that still breaks even.
///
/// ROI is 0 by construction and therefore not stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaxCostBreakEven {
    pub max_cost: Option<f64>,
    /// Shares variant 1's benefit figure; set only when `max_cost` is known.
    pub benefit: Option<f64>,
    pub mental_health_cost: Option<f64>,
    pub reduced_stress_percentage: Option<f64>,
}

/// Variant 3 — the minimum effect that still breaks even.
///
/// ROI is 0 and the benefit equals the cost by construction; neither is
/// stored separately.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MinEffectBreakEven {
    pub cost: Option<f64>,
    pub mental_health_cost: Option<f64>,
    pub min_effect: Option<f64>,
}

/// Everything the report views and the PDF exporter consume, straight out of
/// the aggregation pipeline. Ephemeral: rebuilt on every load, never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoiReportData {
    pub shared_fields: SharedFields,

    pub actual: ActualRoi,
    pub max_cost_break_even: MaxCostBreakEven,
    pub min_effect_break_even: MinEffectBreakEven,

    pub current_situation: Option<String>,
    pub cause_analysis: Option<String>,
    pub intervention_purpose: Option<String>,
    pub goals_description: Option<String>,
    pub target_group: Option<String>,
    pub intervention_description: Option<String>,
    pub implementation_plan: Option<String>,
    pub recommendation: Option<String>,
    pub time_period: Option<String>,

    pub intervention_costs: Vec<MoneyEntry>,
    pub benefit_areas: Vec<MoneyEntry>,
    pub interventions: Vec<String>,
    pub implementation_plan_steps: Vec<String>,

    pub stress_percentage: Option<f64>,
    pub production_loss_value: Option<f64>,
    pub sick_leave_value: Option<f64>,
}

impl RoiReportData {
    #[must_use]
    pub fn new(shared_fields: SharedFields) -> Self {
        Self {
            shared_fields,
            ..Self::default()
        }
    }
}
