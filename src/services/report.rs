//! The ROI aggregation pipeline.
//!
//! Reads the scattered per-form fields out of the store, applies the
//! precedence rules between them and produces one [`RoiReportData`] that
//! every report view and the PDF exporter consume. The pipeline is a pure
//! projection of store state: no caching, no writes, identical output for
//! identical store contents.

use crate::domain::forms::{FormA, FormB, FormC, FormE, FormJ, MoneyEntry};
use crate::domain::report::RoiReportData;
use crate::domain::types::{FormLetter, FormScope};
use crate::dto::report::RoiReportView;
use crate::repository::{FormReader, SharedFieldsReader};
use crate::services::{ServiceError, ServiceResult};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Loads and aggregates the report data for one scope.
///
/// `Ok(None)` means the user has no shared-fields record yet, i.e. has not
/// started any form; callers render a "no data" state. Store failures come
/// back as `Err`, they are not collapsed into the no-data case.
pub fn load_roi_report_data<R>(repo: &R, scope: &FormScope) -> ServiceResult<Option<RoiReportData>>
where
    R: FormReader + SharedFieldsReader + ?Sized,
{
    let Some(shared) = repo.get_shared_fields(scope.user_id()).map_err(|err| {
        log::error!("Failed to load shared fields for {}: {err}", scope.user_id());
        ServiceError::from(err)
    })?
    else {
        return Ok(None);
    };

    let mut data = RoiReportData::new(shared);

    let read = |letter: FormLetter| {
        repo.get_form(scope, letter).map_err(|err| {
            log::error!(
                "Failed to read form {letter} at {}: {err}",
                scope.storage_path(letter)
            );
            ServiceError::from(err)
        })
    };

    // Form A: situation narrative, stress statistics, intervention list.
    if let Some(doc) = read(FormLetter::A)? {
        let form = FormA::from_payload(&doc.payload);
        data.intervention_description = form.intervention_description();
        data.current_situation = form.current_situation;
        data.goals_description = form.goals;
        data.cause_analysis = form.cause_analysis;
        data.recommendation = form.recommendation;
        data.stress_percentage = form.stress_level;
        data.production_loss_value = form.production_loss;
        data.sick_leave_value = form.sick_leave_cost;
        data.interventions = form.interventions;
    }

    // Form B: plan and costs. The intervention description is only a
    // fallback; Form A's joined list wins when it produced anything.
    if let Some(doc) = read(FormLetter::B)? {
        let form = FormB::from_payload(&doc.payload);
        data.intervention_purpose = form.purpose;
        data.target_group = form.target_group;
        if !form.implementation_plan.is_empty() {
            data.implementation_plan = Some(form.implementation_plan.join(", "));
        }
        data.implementation_plan_steps = form.implementation_plan;
        if is_blank(&data.intervention_description) {
            data.intervention_description = non_blank(form.intervention_description);
        }
        data.intervention_costs = form.costs;
    }

    // Form C: time period; Form J may still override it below.
    if let Some(doc) = read(FormLetter::C)? {
        let form = FormC::from_payload(&doc.payload);
        if let Some(period) = non_blank(form.time_period) {
            data.time_period = Some(period);
        }
    }

    // Form E: expected benefit areas.
    if let Some(doc) = read(FormLetter::E)? {
        let form = FormE::from_payload(&doc.payload);
        data.benefit_areas = form.benefits;
    }

    // Form J: the authoritative ROI computation, three variants. Each field
    // is copied only when the store actually has it; absent fields leave the
    // earlier state untouched.
    let form_j = read(FormLetter::J)?.map(|doc| FormJ::from_payload(&doc.payload));

    if let Some(form) = form_j {
        // Variant 1 — actual ROI.
        if let Some(cost) = form.total_intervention_cost_alt1 {
            data.actual.total_cost = Some(cost);
        }
        if let Some(benefit) = form.economic_benefit_alt1 {
            data.actual.total_benefit = Some(benefit);
        }
        if let Some(roi) = form.roi_percentage_alt1 {
            data.actual.roi = Some(roi);
        }
        if let Some(cost) = form.total_cost_mental_health_alt1 {
            data.actual.mental_health_cost = Some(cost);
        }
        if let Some(reduction) = form.reduced_stress_percentage_alt1 {
            data.actual.reduced_stress_percentage = Some(reduction);
        }

        // Variant 2 — max cost for break-even. Shares variant 1's benefit
        // figure; its ROI is zero by construction and never stored.
        if let Some(cost) = form.total_cost_mental_health_alt2 {
            data.max_cost_break_even.mental_health_cost = Some(cost);
        }
        if let Some(reduction) = form.reduced_stress_percentage_alt2 {
            data.max_cost_break_even.reduced_stress_percentage = Some(reduction);
        }
        if let Some(max_cost) = form.max_intervention_cost_alt2 {
            data.max_cost_break_even.max_cost = Some(max_cost);
            data.max_cost_break_even.benefit = form.economic_benefit_alt1;
        }

        // Variant 3 — min effect for break-even. Benefit equals cost by
        // construction.
        if let Some(cost) = form.total_intervention_cost_alt3 {
            data.min_effect_break_even.cost = Some(cost);
        }
        if let Some(cost) = form.total_cost_mental_health_alt3 {
            data.min_effect_break_even.mental_health_cost = Some(cost);
        }
        if let Some(effect) = form.min_effect_for_break_even_alt3 {
            data.min_effect_break_even.min_effect = Some(effect);
        }

        if let Some(period) = non_blank(form.time_period) {
            data.time_period = Some(period);
        }
        if is_blank(&data.intervention_description) {
            data.intervention_description = non_blank(form.intervention_description);
        }
    } else {
        // Fallback path, only when Form J does not exist at all: derive the
        // totals from the itemized costs and benefits.
        if !data.intervention_costs.is_empty() {
            data.actual.total_cost = Some(MoneyEntry::sum(&data.intervention_costs));
        }
        if !data.benefit_areas.is_empty() {
            data.actual.total_benefit = Some(MoneyEntry::sum(&data.benefit_areas));
        }
        if let (Some(cost), Some(benefit)) = (data.actual.total_cost, data.actual.total_benefit)
            && cost > 0.0
            && benefit > 0.0
        {
            data.actual.roi = Some((benefit - cost) / cost * 100.0);
        }
    }

    // Payback period: months until the intervention pays for itself, on an
    // annual benefit figure. Guarded so a zero cost or benefit leaves it
    // unset instead of producing infinities.
    if let (Some(cost), Some(benefit)) = (data.actual.total_cost, data.actual.total_benefit)
        && cost > 0.0
        && benefit > 0.0
    {
        data.actual.payback_months = Some(cost / (benefit / 12.0));
    }

    Ok(Some(data))
}

/// Zero-safe boundary for presentation and PDF consumers.
pub fn load_roi_report_view<R>(repo: &R, scope: &FormScope) -> ServiceResult<Option<RoiReportView>>
where
    R: FormReader + SharedFieldsReader + ?Sized,
{
    Ok(load_roi_report_data(repo, scope)?
        .map(|data| RoiReportView::from(&data)))
}
