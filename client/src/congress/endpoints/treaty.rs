//! `treaty` resources.

use super::PageParams;
use crate::congress::request::ApiRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreatiesParams {
    pub congress: Option<u32>,
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatyId {
    pub congress: u32,
    pub treaty_number: String,
    /// Partition letter, e.g. "A"; appended only when non-empty
    pub treaty_suffix: Option<String>,
}

impl TreatyId {
    pub fn new(congress: u32, treaty_number: impl Into<String>) -> Self {
        Self {
            congress,
            treaty_number: treaty_number.into(),
            treaty_suffix: None,
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.treaty_suffix = Some(suffix.into());
        self
    }

    fn path(&self) -> String {
        let base = format!("treaty/{}/{}", self.congress, self.treaty_number);
        match self.treaty_suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => format!("{base}/{suffix}"),
            _ => base,
        }
    }
}

#[must_use]
pub fn treaties(params: &TreatiesParams) -> ApiRequest {
    let path = params
        .congress
        .map_or_else(|| "treaty".to_string(), |c| format!("treaty/{c}"));
    params.page.apply(ApiRequest::new(path))
}

#[must_use]
pub fn treaty(id: &TreatyId) -> ApiRequest {
    ApiRequest::new(id.path())
}

#[must_use]
pub fn treaty_actions(id: &TreatyId) -> ApiRequest {
    ApiRequest::new(format!("{}/actions", id.path()))
}

#[must_use]
pub fn treaty_committees(id: &TreatyId) -> ApiRequest {
    ApiRequest::new(format!("{}/committees", id.path()))
}
