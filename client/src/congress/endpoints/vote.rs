//! House roll-call votes. Upstream marks these routes as beta.

use super::PageParams;
use crate::congress::request::ApiRequest;

/// Filters for the vote list: `house-vote/[{congress}/[{session}/]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseVotesParams {
    pub congress: Option<u32>,
    /// Ignored unless `congress` is set
    pub session: Option<u32>,
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseVoteId {
    pub congress: u32,
    pub session: u32,
    pub vote_number: String,
}

impl HouseVoteId {
    pub fn new(congress: u32, session: u32, vote_number: impl Into<String>) -> Self {
        Self {
            congress,
            session,
            vote_number: vote_number.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "house-vote/{}/{}/{}",
            self.congress, self.session, self.vote_number
        )
    }
}

/// Vote list. Paths keep their trailing slash.
#[must_use]
pub fn house_votes(params: &HouseVotesParams) -> ApiRequest {
    let path = match (params.congress, params.session) {
        (Some(congress), Some(session)) => format!("house-vote/{congress}/{session}/"),
        (Some(congress), None) => format!("house-vote/{congress}/"),
        (None, _) => "house-vote/".to_string(),
    };
    params.page.apply(ApiRequest::new(path))
}

#[must_use]
pub fn house_vote(id: &HouseVoteId) -> ApiRequest {
    ApiRequest::new(id.path())
}

/// How each member voted.
#[must_use]
pub fn house_vote_members(id: &HouseVoteId) -> ApiRequest {
    ApiRequest::new(format!("{}/members", id.path()))
}
