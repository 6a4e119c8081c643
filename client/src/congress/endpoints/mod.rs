//! Endpoint table.
//!
//! One module per resource family. Each module holds the parameter structs
//! for its operations and pure builders that turn them into an
//! [`ApiRequest`]: defaults applied, path template filled in, query pairs
//! declared. Builders never touch the network; the only one that can fail
//! is [`record::bound_congressional_record`].

pub mod amendment;
pub mod bill;
pub mod committee;
pub mod communication;
pub mod congress;
pub mod crs;
pub mod member;
pub mod nomination;
pub mod record;
pub mod treaty;
pub mod vote;

use std::fmt;

use super::request::ApiRequest;

/// Congress used when an operation requires one and the caller omits it.
pub const ACTIVE_CONGRESS: u32 = 119;

/// Default page size for list operations.
pub const DEFAULT_LIMIT: u32 = 20;

pub(crate) fn congress_or_active(congress: Option<u32>) -> u32 {
    congress.unwrap_or(ACTIVE_CONGRESS)
}

/// `limit` / `offset` pair sent with every list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub limit: u32,
    pub offset: u32,
}

impl PageParams {
    #[must_use]
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    pub(crate) fn apply(self, request: ApiRequest) -> ApiRequest {
        request
            .param("limit", self.limit)
            .param("offset", self.offset)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}

/// Chamber segment used by committee, hearing and meeting paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Senate => "senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List filter shared by committees, meetings, prints and hearings:
/// `{root}[/{congress}[/{chamber}]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChamberListParams {
    pub congress: Option<u32>,
    /// Ignored unless `congress` is set
    pub chamber: Option<Chamber>,
    pub page: PageParams,
}

impl ChamberListParams {
    pub(crate) fn request(&self, root: &str) -> ApiRequest {
        let path = match (self.congress, self.chamber) {
            (Some(congress), Some(chamber)) => format!("{root}/{congress}/{chamber}"),
            (Some(congress), None) => format!("{root}/{congress}"),
            (None, _) => root.to_string(),
        };
        self.page.apply(ApiRequest::new(path))
    }
}

/// Item addressed by congress, chamber and a document number:
/// meetings (event id), prints and hearings (jacket number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChamberItemId {
    pub congress: u32,
    pub chamber: Chamber,
    pub number: String,
}

impl ChamberItemId {
    pub fn new(congress: u32, chamber: Chamber, number: impl Into<String>) -> Self {
        Self {
            congress,
            chamber,
            number: number.into(),
        }
    }

    pub(crate) fn path(&self, root: &str) -> String {
        format!("{root}/{}/{}/{}", self.congress, self.chamber, self.number)
    }
}

/// Hearings: `hearing[/{congress}[/{chamber}]]`.
#[must_use]
pub fn hearings(params: &ChamberListParams) -> ApiRequest {
    params.request("hearing")
}

/// One hearing by jacket number.
#[must_use]
pub fn hearing(id: &ChamberItemId) -> ApiRequest {
    ApiRequest::new(id.path("hearing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        let page = PageParams::default();
        assert_eq!(page.limit, 20);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_chamber_list_paths() {
        let cases = [
            (None, None, "hearing"),
            (None, Some(Chamber::House), "hearing"),
            (Some(118), None, "hearing/118"),
            (Some(118), Some(Chamber::Senate), "hearing/118/senate"),
        ];

        for (congress, chamber, expected) in cases {
            let params = ChamberListParams {
                congress,
                chamber,
                page: PageParams::default(),
            };
            let request = hearings(&params);
            assert_eq!(request.path(), expected);
            assert_eq!(request.query_value("limit").as_deref(), Some("20"));
            assert_eq!(request.query_value("offset").as_deref(), Some("0"));
        }
    }

    #[test]
    fn test_hearing_path() {
        let request = hearing(&ChamberItemId::new(116, Chamber::House, "41365"));
        assert_eq!(request.path(), "hearing/116/house/41365");
        assert!(request.params().is_empty());
    }

    #[test]
    fn test_congress_or_active() {
        assert_eq!(congress_or_active(None), ACTIVE_CONGRESS);
        assert_eq!(congress_or_active(Some(117)), 117);
    }
}
