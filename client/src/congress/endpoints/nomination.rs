//! `nomination` resources.

use super::PageParams;
use crate::congress::request::ApiRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NominationsParams {
    pub congress: Option<u32>,
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominationId {
    pub congress: u32,
    /// e.g. "2467" or a partitioned "2467-1"
    pub nomination_number: String,
}

impl NominationId {
    pub fn new(congress: u32, nomination_number: impl Into<String>) -> Self {
        Self {
            congress,
            nomination_number: nomination_number.into(),
        }
    }

    fn path(&self) -> String {
        format!("nomination/{}/{}", self.congress, self.nomination_number)
    }
}

/// Sub-resources of a single nomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NominationResource {
    Committees,
    Actions,
    Hearings,
}

impl NominationResource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Committees => "committees",
            Self::Actions => "actions",
            Self::Hearings => "hearings",
        }
    }
}

#[must_use]
pub fn nominations(params: &NominationsParams) -> ApiRequest {
    let path = params
        .congress
        .map_or_else(|| "nomination".to_string(), |c| format!("nomination/{c}"));
    params.page.apply(ApiRequest::new(path))
}

#[must_use]
pub fn nomination(id: &NominationId) -> ApiRequest {
    ApiRequest::new(id.path())
}

/// Nominees for one position (part) of a partitioned nomination.
#[must_use]
pub fn nominees(id: &NominationId, ordinal: &str) -> ApiRequest {
    ApiRequest::new(format!("{}/{ordinal}", id.path()))
}

#[must_use]
pub fn nomination_resource(id: &NominationId, resource: NominationResource) -> ApiRequest {
    ApiRequest::new(format!("{}/{}", id.path(), resource.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nomination_paths() {
        assert_eq!(nominations(&NominationsParams::default()).path(), "nomination");
        let params = NominationsParams {
            congress: Some(117),
            ..NominationsParams::default()
        };
        assert_eq!(nominations(&params).path(), "nomination/117");

        let id = NominationId::new(117, "2467");
        assert_eq!(nomination(&id).path(), "nomination/117/2467");
        assert_eq!(nominees(&id, "1").path(), "nomination/117/2467/1");

        let cases = [
            (NominationResource::Committees, "nomination/117/2467/committees"),
            (NominationResource::Actions, "nomination/117/2467/actions"),
            (NominationResource::Hearings, "nomination/117/2467/hearings"),
        ];
        for (resource, expected) in cases {
            assert_eq!(nomination_resource(&id, resource).path(), expected);
        }
    }
}
