//! End-to-end: submit forms through the intake service against a real sqlite
//! store, then aggregate and export the report.

use chrono::NaiveDate;
use roi_report::domain::types::{FormScope, UserId};
use roi_report::dto::report::RoiReportView;
use roi_report::format::{format_currency, format_months, format_percent};
use roi_report::forms::payloads::{
    FormAPayload, FormBPayload, FormDPayload, FormEPayload, FormJPayload, FormPayload,
    MoneyEntryPayload,
};
use roi_report::repository::DieselRepository;
use roi_report::services::export::{
    ReportHeader, ReportRenderer, RenderError, export_report, report_file_name,
};
use roi_report::services::forms::save_form;
use roi_report::services::report::{load_roi_report_data, load_roi_report_view};

mod common;

fn scope() -> FormScope {
    FormScope::User(UserId::new("u1").unwrap())
}

fn form_d() -> FormPayload {
    FormPayload::D(FormDPayload {
        organization_name: "Acme AB".to_string(),
        contact_person: "Eva Lind".to_string(),
        start_date: "2025-01-01".to_string(),
        end_date: "2025-06-30".to_string(),
        number_of_employees: Some(120.0),
        average_monthly_salary: Some(38000.0),
        short_sick_leave_percentage: Some(3.2),
        long_sick_leave_percentage: Some(2.1),
        total_short_sick_leave_costs: Some(450000.0),
        total_long_sick_leave_costs: Some(380000.0),
    })
}

fn form_a() -> FormPayload {
    FormPayload::A(FormAPayload {
        current_situation: "Hög stress i kundtjänst".to_string(),
        goals: "Halverad stressnivå".to_string(),
        cause_analysis: "Underbemanning under toppar".to_string(),
        recommendation: "Inför coaching och bemanningsplanering".to_string(),
        stress_level: Some(42.0),
        production_loss: Some(300000.0),
        sick_leave_cost: Some(150000.0),
        interventions: vec!["Coaching".to_string(), "Workshops".to_string()],
    })
}

fn form_b() -> FormPayload {
    FormPayload::B(FormBPayload {
        purpose: "Minska stressrelaterad frånvaro".to_string(),
        target_group: "Kundtjänst".to_string(),
        implementation_plan: vec!["Kartläggning".to_string(), "Pilot".to_string()],
        intervention_description: String::new(),
        costs: vec![MoneyEntryPayload {
            description: "Coaching".to_string(),
            amount: 50000.0,
        }],
    })
}

fn form_e() -> FormPayload {
    FormPayload::E(FormEPayload {
        benefits: vec![MoneyEntryPayload {
            description: "Reduced absence".to_string(),
            amount: 120000.0,
        }],
    })
}

fn form_j() -> FormPayload {
    FormPayload::J(FormJPayload {
        total_intervention_cost_alt1: Some(100000.0),
        economic_benefit_alt1: Some(250000.0),
        roi_percentage_alt1: Some(150.0),
        max_intervention_cost_alt2: Some(80000.0),
        total_intervention_cost_alt3: Some(90000.0),
        min_effect_for_break_even_alt3: Some(12.5),
        ..FormJPayload::default()
    })
}

#[test]
fn test_report_before_any_form_is_none() {
    let test_db = common::TestDb::new("test_report_before_any_form_is_none.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(load_roi_report_data(&repo, &scope()).unwrap().is_none());
}

#[test]
fn test_full_report_with_form_j() {
    let test_db = common::TestDb::new("test_full_report_with_form_j.db");
    let repo = DieselRepository::new(test_db.pool());

    for payload in [form_d(), form_a(), form_b(), form_e(), form_j()] {
        save_form(&repo, &scope(), &payload).unwrap();
    }

    let view: RoiReportView = load_roi_report_view(&repo, &scope()).unwrap().unwrap();

    // Shared fields came out of the Form D save.
    assert_eq!(view.shared_fields.organization_name, "Acme AB");
    assert_eq!(view.shared_fields.contact_person, "Eva Lind");
    assert_eq!(view.shared_fields.time_period, "2025-01-01 - 2025-06-30");

    // Form J wins over the itemized sums.
    assert_eq!(view.total_cost, 100000.0);
    assert_eq!(view.total_benefit, 250000.0);
    assert_eq!(view.roi, 150.0);
    assert!((view.payback_period - 4.8).abs() < 1e-9);

    assert_eq!(view.total_cost_alt2, 80000.0);
    assert_eq!(view.total_benefit_alt2, 250000.0);
    assert_eq!(view.roi_alt2, 0.0);
    assert_eq!(view.total_cost_alt3, 90000.0);
    assert_eq!(view.total_benefit_alt3, 90000.0);
    assert_eq!(view.roi_alt3, 0.0);

    assert_eq!(view.intervention_description, "Coaching, Workshops");
    assert_eq!(view.intervention_costs.len(), 1);
    assert_eq!(view.benefit_areas.len(), 1);
    assert_eq!(view.stress_percentage, 42.0);

    // The strings every consumer renders.
    assert_eq!(format_currency(view.total_cost), "100 000 kr");
    assert_eq!(format_percent(view.roi), "150%");
    assert_eq!(format_months(view.payback_period), "4,8 månader");
}

#[test]
fn test_fallback_report_without_form_j() {
    let test_db = common::TestDb::new("test_fallback_report_without_form_j.db");
    let repo = DieselRepository::new(test_db.pool());

    for payload in [form_d(), form_b(), form_e()] {
        save_form(&repo, &scope(), &payload).unwrap();
    }

    let view = load_roi_report_view(&repo, &scope()).unwrap().unwrap();
    assert_eq!(view.total_cost, 50000.0);
    assert_eq!(view.total_benefit, 120000.0);
    assert!((view.roi - 140.0).abs() < 1e-9);
    assert!((view.payback_period - 5.0).abs() < 1e-9);
}

struct ByteRenderer;

impl ReportRenderer for ByteRenderer {
    fn render(&self, view: &RoiReportView, header: &ReportHeader) -> Result<Vec<u8>, RenderError> {
        Ok(format!("{} / {}", header.organization_name, view.roi).into_bytes())
    }
}

#[test]
fn test_export_uses_fresh_header_and_filename() {
    let test_db = common::TestDb::new("test_export_uses_fresh_header_and_filename.db");
    let repo = DieselRepository::new(test_db.pool());

    for payload in [form_d(), form_j()] {
        save_form(&repo, &scope(), &payload).unwrap();
    }

    let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let export = export_report(&repo, &ByteRenderer, &scope(), date)
        .unwrap()
        .unwrap();

    assert_eq!(export.file_name, report_file_name("Acme AB", date));
    assert_eq!(export.file_name, "ROI-rapport-Acme AB-01-07-2025.pdf");
    assert_eq!(export.bytes, b"Acme AB / 150".to_vec());
}
