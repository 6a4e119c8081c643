//! Committee, committee meeting, print and report resources.

use std::fmt;

use super::{Chamber, ChamberItemId, ChamberListParams, PageParams};
use crate::congress::request::ApiRequest;

/// One committee by chamber and system code, e.g. `house/hsag00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeId {
    pub chamber: Chamber,
    pub system_code: String,
}

impl CommitteeId {
    pub fn new(chamber: Chamber, system_code: impl Into<String>) -> Self {
        Self {
            chamber,
            system_code: system_code.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitteeReportType {
    /// House report
    Hrpt,
    /// Senate report
    Srpt,
    /// Executive report
    Erpt,
}

impl CommitteeReportType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hrpt => "hrpt",
            Self::Srpt => "srpt",
            Self::Erpt => "erpt",
        }
    }
}

impl fmt::Display for CommitteeReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for the report list: `committee-report[/{congress}[/{type}]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitteeReportsParams {
    pub congress: Option<u32>,
    /// Ignored unless `congress` is set
    pub report_type: Option<CommitteeReportType>,
    pub page: PageParams,
}

/// One committee report, optionally a single part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeReportId {
    pub congress: u32,
    pub report_type: CommitteeReportType,
    pub report_number: String,
    /// Appended as an extra path segment when non-zero
    pub part: Option<u32>,
}

impl CommitteeReportId {
    pub fn new(congress: u32, report_type: CommitteeReportType, report_number: impl Into<String>) -> Self {
        Self {
            congress,
            report_type,
            report_number: report_number.into(),
            part: None,
        }
    }

    #[must_use]
    pub const fn with_part(mut self, part: u32) -> Self {
        self.part = Some(part);
        self
    }

    fn path(&self) -> String {
        let base = format!(
            "committee-report/{}/{}/{}",
            self.congress, self.report_type, self.report_number
        );
        match self.part {
            Some(part) if part != 0 => format!("{base}/{part}"),
            _ => base,
        }
    }
}

#[must_use]
pub fn committees(params: &ChamberListParams) -> ApiRequest {
    params.request("committee")
}

#[must_use]
pub fn committee(id: &CommitteeId) -> ApiRequest {
    ApiRequest::new(format!("committee/{}/{}", id.chamber, id.system_code))
}

/// Nominations referred to a Senate committee.
#[must_use]
pub fn committee_nominations(system_code: &str, page: PageParams) -> ApiRequest {
    page.apply(ApiRequest::new(format!(
        "committee/senate/{system_code}/nominations"
    )))
}

/// House communications referred to a House committee.
#[must_use]
pub fn committee_house_communications(system_code: &str, page: PageParams) -> ApiRequest {
    page.apply(ApiRequest::new(format!(
        "committee/house/{system_code}/house-communication"
    )))
}

/// Senate communications referred to a Senate committee.
#[must_use]
pub fn committee_senate_communications(system_code: &str, page: PageParams) -> ApiRequest {
    page.apply(ApiRequest::new(format!(
        "committee/senate/{system_code}/senate-communication"
    )))
}

#[must_use]
pub fn committee_meetings(params: &ChamberListParams) -> ApiRequest {
    params.request("committee-meeting")
}

/// One meeting; `number` is the event id.
#[must_use]
pub fn committee_meeting(id: &ChamberItemId) -> ApiRequest {
    ApiRequest::new(id.path("committee-meeting"))
}

#[must_use]
pub fn committee_prints(params: &ChamberListParams) -> ApiRequest {
    params.request("committee-print")
}

/// One print; `number` is the jacket number.
#[must_use]
pub fn committee_print(id: &ChamberItemId) -> ApiRequest {
    ApiRequest::new(id.path("committee-print"))
}

#[must_use]
pub fn committee_print_text(id: &ChamberItemId) -> ApiRequest {
    ApiRequest::new(format!("{}/text", id.path("committee-print")))
}

#[must_use]
pub fn committee_reports(params: &CommitteeReportsParams) -> ApiRequest {
    let path = match (params.congress, params.report_type) {
        (Some(congress), Some(kind)) => format!("committee-report/{congress}/{kind}"),
        (Some(congress), None) => format!("committee-report/{congress}"),
        (None, _) => "committee-report".to_string(),
    };
    params.page.apply(ApiRequest::new(path))
}

#[must_use]
pub fn committee_report(id: &CommitteeReportId) -> ApiRequest {
    ApiRequest::new(id.path())
}

#[must_use]
pub fn committee_report_text(id: &CommitteeReportId) -> ApiRequest {
    ApiRequest::new(format!("{}/text", id.path()))
}
