//! CRS report resources.

use chrono::{DateTime, Utc};

use super::PageParams;
use crate::congress::request::ApiRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrsReportsParams {
    pub page: PageParams,
    /// Sent as `fromDateTime`
    pub updated_after: Option<DateTime<Utc>>,
}

#[must_use]
pub fn crs_reports(params: &CrsReportsParams) -> ApiRequest {
    params
        .page
        .apply(ApiRequest::new("crsreport"))
        .param_opt("fromDateTime", params.updated_after)
}

/// One report by number, e.g. "R47175".
#[must_use]
pub fn crs_report(report_number: &str) -> ApiRequest {
    ApiRequest::new(format!("crsreport/{report_number}"))
}
