//! Export surface toward the PDF renderer.
//!
//! The drawing itself lives outside this crate; this module owns the
//! contract: a fully aggregated, zero-safe view plus a freshly fetched
//! header, and the output filename convention.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::forms::FormD;
use crate::domain::types::{FormLetter, FormScope};
use crate::dto::report::RoiReportView;
use crate::repository::{FormReader, SharedFieldsReader};
use crate::services::report::load_roi_report_view;
use crate::services::{ServiceError, ServiceResult};

/// Freshness-critical header subset, re-read from Form D at export time since
/// it may have changed after the report snapshot was built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportHeader {
    pub organization_name: String,
    pub contact_person: String,
    pub time_period: String,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Failed(String),
}

/// A fixed-layout document producer consuming the aggregated report.
pub trait ReportRenderer {
    fn render(&self, view: &RoiReportView, header: &ReportHeader) -> Result<Vec<u8>, RenderError>;
}

/// A rendered report ready to hand to the user.
#[derive(Clone, Debug)]
pub struct ReportExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `ROI-rapport-{organizationName}-{DD-MM-YYYY}.pdf`
pub fn report_file_name(organization_name: &str, date: NaiveDate) -> String {
    format!(
        "ROI-rapport-{organization_name}-{}.pdf",
        date.format("%d-%m-%Y")
    )
}

/// Reads the header from Form D, falling back to the shared-fields snapshot
/// for anything Form D does not carry.
pub fn load_report_header<R>(repo: &R, scope: &FormScope) -> ServiceResult<ReportHeader>
where
    R: FormReader + SharedFieldsReader + ?Sized,
{
    let shared = repo
        .get_shared_fields(scope.user_id())
        .map_err(|err| {
            log::error!("Failed to load shared fields for {}: {err}", scope.user_id());
            ServiceError::from(err)
        })?
        .unwrap_or_default();

    let mut header = ReportHeader {
        organization_name: shared.organization_name,
        contact_person: shared.contact_person,
        time_period: shared.time_period,
    };

    if let Some(doc) = repo.get_form(scope, FormLetter::D)? {
        let form = FormD::from_payload(&doc.payload);
        if let Some(name) = form.organization_name.clone().filter(|s| !s.is_empty()) {
            header.organization_name = name;
        }
        if let Some(person) = form.contact_person.clone().filter(|s| !s.is_empty()) {
            header.contact_person = person;
        }
        if let Some(period) = form.time_period() {
            header.time_period = period;
        }
    }

    Ok(header)
}

/// Loads the report, re-fetches the header and renders the document.
///
/// `Ok(None)` mirrors the loader: nothing to export because the user has not
/// started any form. Renderer failures map to [`ServiceError::Export`].
pub fn export_report<R, P>(
    repo: &R,
    renderer: &P,
    scope: &FormScope,
    date: NaiveDate,
) -> ServiceResult<Option<ReportExport>>
where
    R: FormReader + SharedFieldsReader + ?Sized,
    P: ReportRenderer + ?Sized,
{
    let Some(view) = load_roi_report_view(repo, scope)? else {
        return Ok(None);
    };

    let header = load_report_header(repo, scope)?;
    let bytes = renderer.render(&view, &header).map_err(|err| {
        log::error!("Report rendering failed for {}: {err}", scope.user_id());
        ServiceError::from(err)
    })?;

    Ok(Some(ReportExport {
        file_name: report_file_name(&header.organization_name, date),
        bytes,
    }))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::domain::forms::FormDocument;
    use crate::domain::shared_fields::SharedFields;
    use crate::domain::types::UserId;
    use crate::repository::mock::MockRepository;

    struct StubRenderer {
        fail: bool,
    }

    impl ReportRenderer for StubRenderer {
        fn render(
            &self,
            _view: &RoiReportView,
            _header: &ReportHeader,
        ) -> Result<Vec<u8>, RenderError> {
            if self.fail {
                Err(RenderError::Failed("out of paper".to_string()))
            } else {
                Ok(b"%PDF-1.7".to_vec())
            }
        }
    }

    fn scope() -> FormScope {
        FormScope::User(UserId::new("u1").unwrap())
    }

    fn doc(letter: FormLetter, payload: serde_json::Value) -> FormDocument {
        FormDocument {
            letter,
            payload,
            saved_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_file_name_pattern() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            report_file_name("Acme", date),
            "ROI-rapport-Acme-07-03-2025.pdf"
        );
    }

    #[test]
    fn test_header_prefers_fresh_form_d() {
        let mut repo = MockRepository::new();
        repo.expect_get_shared_fields().returning(|_| {
            Ok(Some(SharedFields {
                organization_name: "Stale AB".to_string(),
                contact_person: "Old contact".to_string(),
                time_period: "2024".to_string(),
                updated_at: None,
            }))
        });
        repo.expect_get_form().returning(|_, _| {
            Ok(Some(doc(
                FormLetter::D,
                json!({
                    "organizationName": "Fresh AB",
                    "startDate": "2025-01-01",
                    "endDate": "2025-06-30",
                }),
            )))
        });

        let header = load_report_header(&repo, &scope()).unwrap();
        assert_eq!(header.organization_name, "Fresh AB");
        // Form D had no contact person, the snapshot value survives.
        assert_eq!(header.contact_person, "Old contact");
        assert_eq!(header.time_period, "2025-01-01 - 2025-06-30");
    }

    #[test]
    fn test_export_without_data_is_none() {
        let mut repo = MockRepository::new();
        repo.expect_get_shared_fields().returning(|_| Ok(None));

        let renderer = StubRenderer { fail: false };
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let export = export_report(&repo, &renderer, &scope(), date).unwrap();
        assert!(export.is_none());
    }

    #[test]
    fn test_render_failure_maps_to_export_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_shared_fields()
            .returning(|_| Ok(Some(SharedFields::default())));
        repo.expect_get_form().returning(|_, _| Ok(None));

        let renderer = StubRenderer { fail: true };
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let err = export_report(&repo, &renderer, &scope(), date).unwrap_err();
        assert!(matches!(err, ServiceError::Export(_)));
    }
}
