//! `amendment` resources.

use std::fmt;

use chrono::{DateTime, Utc};

use super::PageParams;
use crate::congress::request::ApiRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmendmentType {
    /// Senate amendment
    Samdt,
    /// House amendment
    Hamdt,
    /// Senate unprinted amendment
    Suamdt,
}

impl AmendmentType {
    /// Upper-case code, e.g. `HAMDT`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Samdt => "SAMDT",
            Self::Hamdt => "HAMDT",
            Self::Suamdt => "SUAMDT",
        }
    }

    /// Lower-case path segment used by item-level routes, e.g. `hamdt`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Samdt => "samdt",
            Self::Hamdt => "hamdt",
            Self::Suamdt => "suamdt",
        }
    }
}

impl fmt::Display for AmendmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for the amendment list: `amendment[/{congress}[/{TYPE}]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmendmentsParams {
    pub congress: Option<u32>,
    /// Ignored unless `congress` is set; inserted as the upper-case code
    pub amendment_type: Option<AmendmentType>,
    pub page: PageParams,
    /// Sent as `fromDateTime`
    pub updated_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmendmentId {
    pub congress: u32,
    pub amendment_type: AmendmentType,
    pub amendment_number: String,
}

impl AmendmentId {
    pub fn new(congress: u32, amendment_type: AmendmentType, amendment_number: impl Into<String>) -> Self {
        Self {
            congress,
            amendment_type,
            amendment_number: amendment_number.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "amendment/{}/{}/{}",
            self.congress,
            self.amendment_type.path_segment(),
            self.amendment_number
        )
    }
}

/// Sub-resources of a single amendment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmendmentResource {
    Amendments,
    Cosponsors,
    Text,
    Actions,
}

impl AmendmentResource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amendments => "amendments",
            Self::Cosponsors => "cosponsors",
            Self::Text => "text",
            Self::Actions => "actions",
        }
    }
}

#[must_use]
pub fn amendments(params: &AmendmentsParams) -> ApiRequest {
    let path = match (params.congress, params.amendment_type) {
        (Some(congress), Some(kind)) => format!("amendment/{congress}/{kind}"),
        (Some(congress), None) => format!("amendment/{congress}"),
        (None, _) => "amendment".to_string(),
    };

    params
        .page
        .apply(ApiRequest::new(path))
        .param_opt("fromDateTime", params.updated_after)
}

#[must_use]
pub fn amendment(id: &AmendmentId) -> ApiRequest {
    ApiRequest::new(id.path())
}

#[must_use]
pub fn amendment_resource(id: &AmendmentId, resource: AmendmentResource) -> ApiRequest {
    ApiRequest::new(format!("{}/{}", id.path(), resource.as_str()))
}
