//! House and Senate communications, and House requirements.

use std::fmt;

use super::PageParams;
use crate::congress::request::ApiRequest;

/// A communication type enum together with the collection it lives under.
pub trait CommunicationKind: Copy + fmt::Debug {
    /// Collection path, e.g. `house-communication`.
    const ROOT: &'static str;

    fn as_str(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseCommunicationType {
    /// Executive communication
    Ec,
    /// Presidential message
    Pm,
    /// Petition
    Pt,
    /// Memorial
    Ml,
}

impl CommunicationKind for HouseCommunicationType {
    const ROOT: &'static str = "house-communication";

    fn as_str(self) -> &'static str {
        match self {
            Self::Ec => "ec",
            Self::Pm => "pm",
            Self::Pt => "pt",
            Self::Ml => "ml",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenateCommunicationType {
    /// Executive communication
    Ec,
    /// Petition or memorial
    Pom,
    /// Presidential message
    Pm,
}

impl CommunicationKind for SenateCommunicationType {
    const ROOT: &'static str = "senate-communication";

    fn as_str(self) -> &'static str {
        match self {
            Self::Ec => "ec",
            Self::Pom => "pom",
            Self::Pm => "pm",
        }
    }
}

/// Filters for a communication list: `{root}[/{congress}[/{type}]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationsParams<K> {
    pub congress: Option<u32>,
    /// Ignored unless `congress` is set
    pub communication_type: Option<K>,
    pub page: PageParams,
}

impl<K> Default for CommunicationsParams<K> {
    fn default() -> Self {
        Self {
            congress: None,
            communication_type: None,
            page: PageParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunicationId<K> {
    pub congress: u32,
    pub communication_type: K,
    pub number: String,
}

impl<K> CommunicationId<K> {
    pub fn new(congress: u32, communication_type: K, number: impl Into<String>) -> Self {
        Self {
            congress,
            communication_type,
            number: number.into(),
        }
    }
}

#[must_use]
pub fn communications<K: CommunicationKind>(params: &CommunicationsParams<K>) -> ApiRequest {
    let path = match (params.congress, params.communication_type) {
        (Some(congress), Some(kind)) => format!("{}/{congress}/{}", K::ROOT, kind.as_str()),
        (Some(congress), None) => format!("{}/{congress}", K::ROOT),
        (None, _) => K::ROOT.to_string(),
    };
    params.page.apply(ApiRequest::new(path))
}

#[must_use]
pub fn communication<K: CommunicationKind>(id: &CommunicationId<K>) -> ApiRequest {
    ApiRequest::new(format!(
        "{}/{}/{}/{}",
        K::ROOT,
        id.congress,
        id.communication_type.as_str(),
        id.number
    ))
}

#[must_use]
pub fn house_requirements(page: PageParams) -> ApiRequest {
    page.apply(ApiRequest::new("house-requirement"))
}

#[must_use]
pub fn house_requirement(requirement_number: &str) -> ApiRequest {
    ApiRequest::new(format!("house-requirement/{requirement_number}"))
}

/// Communications matching one House requirement.
#[must_use]
pub fn house_requirement_matching_communications(
    requirement_number: &str,
    page: PageParams,
) -> ApiRequest {
    page.apply(ApiRequest::new(format!(
        "house-requirement/{requirement_number}/matching-communications"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_communication_paths() {
        let params = CommunicationsParams {
            congress: Some(117),
            communication_type: Some(HouseCommunicationType::Ec),
            page: PageParams::default(),
        };
        assert_eq!(communications(&params).path(), "house-communication/117/ec");

        let all = CommunicationsParams::<HouseCommunicationType>::default();
        assert_eq!(communications(&all).path(), "house-communication");

        let id = CommunicationId::new(117, HouseCommunicationType::Ml, "3324");
        assert_eq!(communication(&id).path(), "house-communication/117/ml/3324");
    }

    #[test]
    fn test_senate_communication_paths() {
        let params = CommunicationsParams::<SenateCommunicationType> {
            congress: Some(117),
            ..CommunicationsParams::default()
        };
        assert_eq!(communications(&params).path(), "senate-communication/117");

        let id = CommunicationId::new(117, SenateCommunicationType::Pom, "2561");
        assert_eq!(communication(&id).path(), "senate-communication/117/pom/2561");
    }

    #[test]
    fn test_house_requirement_paths() {
        let page = PageParams::default();
        assert_eq!(house_requirements(page).path(), "house-requirement");
        assert_eq!(house_requirement("8070").path(), "house-requirement/8070");
        assert_eq!(
            house_requirement_matching_communications("8070", page).path(),
            "house-requirement/8070/matching-communications"
        );
    }
}
