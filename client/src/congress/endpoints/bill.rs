//! `bill`, `summaries` and `law` resources.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{congress_or_active, PageParams};
use crate::congress::request::ApiRequest;

/// Sort order for the bill list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillSort {
    #[default]
    UpdateDateDesc,
    UpdateDateAsc,
}

impl BillSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpdateDateDesc => "updateDate+desc",
            Self::UpdateDateAsc => "updateDate+asc",
        }
    }
}

impl fmt::Display for BillSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for the bill list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillsParams {
    /// Path-only: `bill/{congress}`
    pub congress: Option<u32>,
    pub page: PageParams,
    pub updated_after: Option<DateTime<Utc>>,
    pub updated_before: Option<DateTime<Utc>>,
    pub sort: BillSort,
}

/// Identifies one bill. `congress` falls back to the active congress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillId {
    pub congress: Option<u32>,
    /// "hr", "s", "hjres", ... inserted verbatim
    pub bill_type: String,
    pub bill_number: u32,
}

impl BillId {
    pub fn new(congress: u32, bill_type: impl Into<String>, bill_number: u32) -> Self {
        Self {
            congress: Some(congress),
            bill_type: bill_type.into(),
            bill_number,
        }
    }

    fn path(&self) -> String {
        format!(
            "bill/{}/{}/{}",
            congress_or_active(self.congress),
            self.bill_type,
            self.bill_number
        )
    }
}

/// Sub-resources of a single bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillResource {
    Subjects,
    Summaries,
    Titles,
    Text,
    Cosponsors,
    Actions,
    RelatedBills,
    Committees,
    Amendments,
}

impl BillResource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Summaries => "summaries",
            Self::Titles => "titles",
            Self::Text => "text",
            Self::Cosponsors => "cosponsors",
            Self::Actions => "actions",
            Self::RelatedBills => "relatedbills",
            Self::Committees => "committees",
            Self::Amendments => "amendments",
        }
    }
}

/// Filters for the summaries list: `summaries[/{congress}[/{billType}]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummariesParams {
    pub congress: Option<u32>,
    /// Ignored unless `congress` is set
    pub bill_type: Option<String>,
    pub from_date_time: Option<DateTime<Utc>>,
    pub to_date_time: Option<DateTime<Utc>>,
    pub page: PageParams,
}

/// Bill list. `congress` goes into the path, never the query.
#[must_use]
pub fn bills(params: &BillsParams) -> ApiRequest {
    let path = params
        .congress
        .map_or_else(|| "bill".to_string(), |congress| format!("bill/{congress}"));

    params
        .page
        .apply(ApiRequest::new(path))
        .param("sort", params.sort.as_str())
        .param_opt("fromDateTime", params.updated_after)
        .param_opt("toDateTime", params.updated_before)
}

#[must_use]
pub fn bill(id: &BillId) -> ApiRequest {
    ApiRequest::new(id.path())
}

#[must_use]
pub fn bill_resource(id: &BillId, resource: BillResource) -> ApiRequest {
    ApiRequest::new(format!("{}/{}", id.path(), resource.as_str()))
}

#[must_use]
pub fn summaries(params: &SummariesParams) -> ApiRequest {
    let path = match (params.congress, params.bill_type.as_deref()) {
        (Some(congress), Some(bill_type)) => format!("summaries/{congress}/{bill_type}"),
        (Some(congress), None) => format!("summaries/{congress}"),
        (None, _) => "summaries".to_string(),
    };

    params
        .page
        .apply(ApiRequest::new(path))
        .param_opt("fromDateTime", params.from_date_time)
        .param_opt("toDateTime", params.to_date_time)
}

/// Laws enacted by a congress, defaulting to the active one.
#[must_use]
pub fn laws(congress: Option<u32>) -> ApiRequest {
    ApiRequest::new(format!("law/{}", congress_or_active(congress)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::congress::endpoints::ACTIVE_CONGRESS;
    use chrono::TimeZone;

    #[test]
    fn test_bills_for_congress() {
        let request = bills(&BillsParams {
            congress: Some(118),
            ..BillsParams::default()
        });
        assert_eq!(request.path(), "bill/118");
        assert_eq!(request.query_value("sort").as_deref(), Some("updateDate+desc"));
        assert_eq!(request.query_value("congress"), None);
        assert_eq!(request.query_value("fromDateTime"), None);
    }

    #[test]
    fn test_bills_without_congress() {
        let request = bills(&BillsParams {
            sort: BillSort::UpdateDateAsc,
            updated_before: Some(Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap()),
            ..BillsParams::default()
        });
        assert_eq!(request.path(), "bill");
        assert_eq!(request.query_value("sort").as_deref(), Some("updateDate+asc"));
        assert_eq!(
            request.query_value("toDateTime").as_deref(),
            Some("2023-06-01T12:00:00.000Z")
        );
    }

    #[test]
    fn test_bill_resource_paths() {
        let id = BillId::new(117, "hr", 3076);
        assert_eq!(bill(&id).path(), "bill/117/hr/3076");

        let cases = [
            (BillResource::Subjects, "bill/117/hr/3076/subjects"),
            (BillResource::Summaries, "bill/117/hr/3076/summaries"),
            (BillResource::Titles, "bill/117/hr/3076/titles"),
            (BillResource::Text, "bill/117/hr/3076/text"),
            (BillResource::Cosponsors, "bill/117/hr/3076/cosponsors"),
            (BillResource::Actions, "bill/117/hr/3076/actions"),
            (BillResource::RelatedBills, "bill/117/hr/3076/relatedbills"),
            (BillResource::Committees, "bill/117/hr/3076/committees"),
            (BillResource::Amendments, "bill/117/hr/3076/amendments"),
        ];

        for (resource, expected) in cases {
            let request = bill_resource(&id, resource);
            assert_eq!(request.path(), expected);
            assert!(request.params().is_empty());
        }
    }

    #[test]
    fn test_bill_defaults_to_active_congress() {
        let id = BillId {
            congress: None,
            bill_type: "s".into(),
            bill_number: 5,
        };
        assert_eq!(bill(&id).path(), format!("bill/{ACTIVE_CONGRESS}/s/5"));
    }

    #[test]
    fn test_summaries_paths() {
        let cases = [
            (None, None, "summaries"),
            (None, Some("hr"), "summaries"),
            (Some(118), None, "summaries/118"),
            (Some(118), Some("hr"), "summaries/118/hr"),
        ];

        for (congress, bill_type, expected) in cases {
            let params = SummariesParams {
                congress,
                bill_type: bill_type.map(String::from),
                ..SummariesParams::default()
            };
            assert_eq!(summaries(&params).path(), expected);
        }
    }

    #[test]
    fn test_laws_path() {
        assert_eq!(laws(Some(118)).path(), "law/118");
        assert_eq!(laws(None).path(), format!("law/{ACTIVE_CONGRESS}"));
    }
}
