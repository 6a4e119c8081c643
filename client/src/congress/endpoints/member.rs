//! `member` resources.

use chrono::{DateTime, Utc};

use super::{congress_or_active, PageParams, ACTIVE_CONGRESS};
use crate::congress::request::ApiRequest;

/// Filters for the member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembersParams {
    pub page: PageParams,
    /// Sent as `fromDateTime`
    pub updated_after: Option<DateTime<Utc>>,
    /// Sent as `toDateTime`
    pub updated_before: Option<DateTime<Utc>>,
    pub current_member: bool,
}

impl Default for MembersParams {
    fn default() -> Self {
        Self {
            page: PageParams::default(),
            updated_after: None,
            updated_before: None,
            current_member: true,
        }
    }
}

/// Members serving in one congress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembersByCongressParams {
    pub congress: u32,
    pub page: PageParams,
    pub current_member: bool,
}

impl Default for MembersByCongressParams {
    fn default() -> Self {
        Self {
            congress: ACTIVE_CONGRESS,
            page: PageParams::default(),
            current_member: true,
        }
    }
}

/// Members for a state, optionally narrowed to one district.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembersByStateParams {
    /// Defaults to the active congress
    pub congress: Option<u32>,
    /// Two-letter state code, e.g. "CA"
    pub state: String,
    pub current_member: bool,
}

impl MembersByStateParams {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            congress: None,
            state: state.into(),
            current_member: true,
        }
    }

    fn path(&self) -> String {
        format!(
            "member/congress/{}/{}",
            congress_or_active(self.congress),
            self.state
        )
    }
}

/// Member list, filtered by update time.
#[must_use]
pub fn members(params: &MembersParams) -> ApiRequest {
    params
        .page
        .apply(ApiRequest::new("member"))
        .param("currentMember", params.current_member)
        .param_opt("fromDateTime", params.updated_after)
        .param_opt("toDateTime", params.updated_before)
}

/// Members of one congress. The congress number is also sent as a query pair.
#[must_use]
pub fn members_by_congress(params: &MembersByCongressParams) -> ApiRequest {
    params
        .page
        .apply(ApiRequest::new(format!("member/congress/{}", params.congress)))
        .param("congress", params.congress)
        .param("currentMember", params.current_member)
}

/// One member by Bioguide ID.
#[must_use]
pub fn member(bioguide_id: &str) -> ApiRequest {
    ApiRequest::new(format!("member/{bioguide_id}"))
}

#[must_use]
pub fn members_by_state(params: &MembersByStateParams) -> ApiRequest {
    ApiRequest::new(params.path()).param("currentMember", params.current_member)
}

#[must_use]
pub fn members_by_state_and_district(params: &MembersByStateParams, district: &str) -> ApiRequest {
    ApiRequest::new(format!("{}/{district}", params.path()))
        .param("currentMember", params.current_member)
}

#[must_use]
pub fn sponsored_legislation(bioguide_id: &str, page: PageParams) -> ApiRequest {
    page.apply(ApiRequest::new(format!(
        "member/{bioguide_id}/sponsored-legislation"
    )))
}

#[must_use]
pub fn cosponsored_legislation(bioguide_id: &str, page: PageParams) -> ApiRequest {
    page.apply(ApiRequest::new(format!(
        "member/{bioguide_id}/cosponsored-legislation"
    )))
}
