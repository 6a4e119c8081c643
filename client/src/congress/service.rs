//! Named Congress.gov operations.
//!
//! [`CongressService`] wraps one [`CongressApiClient`] transport and
//! exposes every endpoint as an async method. The methods are generated
//! from the `operations!` table: each row names the method, its
//! arguments, the response envelope and the builder from
//! [`endpoints`](super::endpoints) that produces its request.

use serde::de::DeserializeOwned;

use super::client::{CongressApiClient, CongressApiError, HttpCongressClient, DEFAULT_BASE_URL};
use super::endpoints::{
    amendment::{self, AmendmentId, AmendmentResource, AmendmentsParams},
    bill::{self, BillId, BillResource, BillsParams, SummariesParams},
    committee::{self, CommitteeId, CommitteeReportId, CommitteeReportsParams},
    communication::{
        self, CommunicationId, CommunicationsParams, HouseCommunicationType,
        SenateCommunicationType,
    },
    congress,
    crs::{self, CrsReportsParams},
    hearing, hearings,
    member::{self, MembersByCongressParams, MembersByStateParams, MembersParams},
    nomination::{self, NominationId, NominationResource, NominationsParams},
    record::{self, BoundRecordDate, DailyIssueId},
    treaty::{self, TreatiesParams, TreatyId},
    vote::{self, HouseVoteId, HouseVotesParams},
    ChamberItemId, ChamberListParams, PageParams,
};
use super::request::ApiRequest;
use super::types::{
    ActionsResponse, AmendmentResponse, AmendmentsResponse, BillCommitteesResponse, BillResponse,
    BillTextResponse, BillsResponse, BoundCongressionalRecordResponse, CommitteeMeetingResponse,
    CommitteeMeetingsResponse, CommitteeNominationsResponse, CommitteePrintResponse,
    CommitteePrintTextResponse, CommitteePrintsResponse, CommitteeReportResponse,
    CommitteeReportTextResponse, CommitteeReportsResponse, CommitteeResponse, CommitteesResponse,
    CongressResponse, CongressesResponse, CosponsoredLegislationResponse, CosponsorsResponse,
    CrsReportResponse, CrsReportsResponse, DailyCongressionalRecordArticlesResponse,
    DailyCongressionalRecordIssueResponse, DailyCongressionalRecordListResponse, HearingResponse,
    HearingsResponse, HouseCommunicationResponse, HouseCommunicationsResponse,
    HouseRequirementMatchingCommunicationsResponse, HouseRequirementResponse,
    HouseRequirementsResponse, HouseRollCallVoteMemberVotesResponse, HouseRollCallVoteResponse,
    HouseRollCallVotesResponse, LawsResponse, MemberResponse, MembersResponse,
    NominationActionsResponse, NominationCommitteesResponse, NominationHearingsResponse,
    NominationResponse, NominationsResponse, NomineesResponse, RelatedBillsResponse,
    SenateCommunicationResponse, SenateCommunicationsResponse, SponsoredLegislationResponse,
    SubjectsResponse, SummariesListResponse, SummariesResponse, TitlesResponse,
    TreatiesResponse, TreatyActionsResponse, TreatyCommitteesResponse, TreatyResponse,
};
use crate::config::ClientConfig;

/// Builders either always succeed or reject caller input up front.
trait IntoApiRequest {
    fn into_api_request(self) -> Result<ApiRequest, CongressApiError>;
}

impl IntoApiRequest for ApiRequest {
    fn into_api_request(self) -> Result<ApiRequest, CongressApiError> {
        Ok(self)
    }
}

impl IntoApiRequest for Result<ApiRequest, CongressApiError> {
    fn into_api_request(self) -> Result<ApiRequest, CongressApiError> {
        self
    }
}

/// Expands each table row into an `async fn` that builds the request and
/// hands it to [`CongressService::call`].
macro_rules! operations {
    (
        $(
            $(#[$meta:meta])*
            fn $name:ident($($arg:ident: $argty:ty),* $(,)?) -> $resp:ty = $build:expr;
        )*
    ) => {
        $(
            $(#[$meta])*
            ///
            /// # Errors
            /// Returns [`CongressApiError`] when the request is rejected, fails,
            /// or the body does not fit the response envelope.
            pub async fn $name(&self, $($arg: $argty),*) -> Result<$resp, CongressApiError> {
                let request = IntoApiRequest::into_api_request($build)?;
                self.call(&request).await
            }
        )*
    };
}

/// Typed facade over a Congress.gov transport.
///
/// Cheap to share: holds only the transport, which holds the read-only
/// API key. Calls are independent and may run concurrently.
#[derive(Debug)]
pub struct CongressService<C = HttpCongressClient> {
    client: C,
}

impl CongressService<HttpCongressClient> {
    /// Client for the public API authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(HttpCongressClient::new(DEFAULT_BASE_URL, api_key))
    }

    /// Client built from loaded configuration.
    ///
    /// # Errors
    /// Returns `CongressApiError::Request` if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CongressApiError> {
        Ok(Self::with_client(HttpCongressClient::from_config(config)?))
    }
}

impl<C: CongressApiClient> CongressService<C> {
    /// Wrap any transport, e.g. `mock::MockCongressClient` in tests.
    pub const fn with_client(client: C) -> Self {
        Self { client }
    }

    /// The underlying transport.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Execute `request` and deserialize the JSON body as `T`.
    ///
    /// # Errors
    /// Propagates transport and status errors unchanged; returns
    /// `CongressApiError::Decode` when the body does not fit `T`.
    pub async fn call<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, CongressApiError> {
        let value = self.client.fetch(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    operations! {
        // Congress

        /// All past and present congresses and their sessions.
        fn get_congresses(page: PageParams) -> CongressesResponse = congress::congresses(page);

        /// One congress by number.
        fn get_congress(number: u32) -> CongressResponse = congress::congress(number);

        /// The congress currently in session.
        fn get_current_congress() -> CongressResponse = congress::current_congress();

        // Member

        /// Members of Congress, current members only by default.
        fn get_members(params: &MembersParams) -> MembersResponse = member::members(params);

        /// Members serving in one congress.
        fn get_members_by_congress(params: &MembersByCongressParams) -> MembersResponse =
            member::members_by_congress(params);

        /// One member by Bioguide ID.
        fn get_member(bioguide_id: &str) -> MemberResponse = member::member(bioguide_id);

        /// Members representing a state.
        fn get_members_by_state(params: &MembersByStateParams) -> MembersResponse =
            member::members_by_state(params);

        /// Members representing one district of a state.
        fn get_members_by_state_and_district(params: &MembersByStateParams, district: &str) -> MembersResponse =
            member::members_by_state_and_district(params, district);

        /// Legislation sponsored by a member.
        fn get_member_sponsored_legislation(bioguide_id: &str, page: PageParams) -> SponsoredLegislationResponse =
            member::sponsored_legislation(bioguide_id, page);

        /// Legislation cosponsored by a member.
        fn get_member_cosponsored_legislation(bioguide_id: &str, page: PageParams) -> CosponsoredLegislationResponse =
            member::cosponsored_legislation(bioguide_id, page);

        // Bill

        /// Bills, most recently updated first by default.
        fn get_bills(params: &BillsParams) -> BillsResponse = bill::bills(params);

        fn get_bill_details(id: &BillId) -> BillResponse = bill::bill(id);

        fn get_subjects_for_bill(id: &BillId) -> SubjectsResponse =
            bill::bill_resource(id, BillResource::Subjects);

        fn get_summaries_for_bill(id: &BillId) -> SummariesResponse =
            bill::bill_resource(id, BillResource::Summaries);

        fn get_titles_for_bill(id: &BillId) -> TitlesResponse =
            bill::bill_resource(id, BillResource::Titles);

        fn get_texts_for_bill(id: &BillId) -> BillTextResponse =
            bill::bill_resource(id, BillResource::Text);

        fn get_cosponsors_for_bill(id: &BillId) -> CosponsorsResponse =
            bill::bill_resource(id, BillResource::Cosponsors);

        fn get_actions_for_bill(id: &BillId) -> ActionsResponse =
            bill::bill_resource(id, BillResource::Actions);

        fn get_related_bills(id: &BillId) -> RelatedBillsResponse =
            bill::bill_resource(id, BillResource::RelatedBills);

        fn get_committees_for_bill(id: &BillId) -> BillCommitteesResponse =
            bill::bill_resource(id, BillResource::Committees);

        fn get_amendments_for_bill(id: &BillId) -> AmendmentsResponse =
            bill::bill_resource(id, BillResource::Amendments);

        /// Bill summaries across all bills.
        fn get_summaries(params: &SummariesParams) -> SummariesListResponse = bill::summaries(params);

        /// Laws enacted by a congress, the active one by default.
        fn get_laws(congress: Option<u32>) -> LawsResponse = bill::laws(congress);

        // Amendment

        fn get_amendments(params: &AmendmentsParams) -> AmendmentsResponse = amendment::amendments(params);

        fn get_amendment_details(id: &AmendmentId) -> AmendmentResponse = amendment::amendment(id);

        fn get_amendments_to_amendment(id: &AmendmentId) -> AmendmentsResponse =
            amendment::amendment_resource(id, AmendmentResource::Amendments);

        fn get_cosponsors_for_amendment(id: &AmendmentId) -> CosponsorsResponse =
            amendment::amendment_resource(id, AmendmentResource::Cosponsors);

        fn get_text_for_amendment(id: &AmendmentId) -> BillTextResponse =
            amendment::amendment_resource(id, AmendmentResource::Text);

        fn get_actions_for_amendment(id: &AmendmentId) -> ActionsResponse =
            amendment::amendment_resource(id, AmendmentResource::Actions);

        // Congressional Record

        /// Bound record for a year, month or day. Fails without a network
        /// call when `day` is given without `month`.
        fn get_bound_congressional_record(date: &BoundRecordDate) -> BoundCongressionalRecordResponse =
            record::bound_congressional_record(date);

        fn get_daily_congressional_records(volume_number: Option<&str>) -> DailyCongressionalRecordListResponse =
            record::daily_congressional_records(volume_number);

        fn get_daily_congressional_record_issue(id: &DailyIssueId) -> DailyCongressionalRecordIssueResponse =
            record::daily_congressional_record_issue(id);

        fn get_daily_congressional_record_articles(id: &DailyIssueId) -> DailyCongressionalRecordArticlesResponse =
            record::daily_congressional_record_articles(id);

        // CRS reports

        fn get_crs_reports(params: &CrsReportsParams) -> CrsReportsResponse = crs::crs_reports(params);

        fn get_crs_report(report_number: &str) -> CrsReportResponse = crs::crs_report(report_number);

        // Committee

        fn get_committees(params: &ChamberListParams) -> CommitteesResponse = committee::committees(params);

        fn get_committee(id: &CommitteeId) -> CommitteeResponse = committee::committee(id);

        fn get_committee_nominations(system_code: &str, page: PageParams) -> CommitteeNominationsResponse =
            committee::committee_nominations(system_code, page);

        fn get_committee_house_communications(system_code: &str, page: PageParams) -> HouseCommunicationsResponse =
            committee::committee_house_communications(system_code, page);

        fn get_committee_senate_communications(system_code: &str, page: PageParams) -> SenateCommunicationsResponse =
            committee::committee_senate_communications(system_code, page);

        fn get_committee_meetings(params: &ChamberListParams) -> CommitteeMeetingsResponse =
            committee::committee_meetings(params);

        fn get_committee_meeting(id: &ChamberItemId) -> CommitteeMeetingResponse =
            committee::committee_meeting(id);

        fn get_committee_prints(params: &ChamberListParams) -> CommitteePrintsResponse =
            committee::committee_prints(params);

        fn get_committee_print(id: &ChamberItemId) -> CommitteePrintResponse = committee::committee_print(id);

        fn get_committee_print_text(id: &ChamberItemId) -> CommitteePrintTextResponse =
            committee::committee_print_text(id);

        fn get_committee_reports(params: &CommitteeReportsParams) -> CommitteeReportsResponse =
            committee::committee_reports(params);

        fn get_committee_report(id: &CommitteeReportId) -> CommitteeReportResponse =
            committee::committee_report(id);

        fn get_committee_report_text(id: &CommitteeReportId) -> CommitteeReportTextResponse =
            committee::committee_report_text(id);

        // Hearing

        fn get_hearings(params: &ChamberListParams) -> HearingsResponse = hearings(params);

        fn get_hearing(id: &ChamberItemId) -> HearingResponse = hearing(id);

        // Communications

        fn get_house_communications(params: &CommunicationsParams<HouseCommunicationType>) -> HouseCommunicationsResponse =
            communication::communications(params);

        fn get_house_communication(id: &CommunicationId<HouseCommunicationType>) -> HouseCommunicationResponse =
            communication::communication(id);

        fn get_senate_communications(params: &CommunicationsParams<SenateCommunicationType>) -> SenateCommunicationsResponse =
            communication::communications(params);

        fn get_senate_communication(id: &CommunicationId<SenateCommunicationType>) -> SenateCommunicationResponse =
            communication::communication(id);

        fn get_house_requirements(page: PageParams) -> HouseRequirementsResponse =
            communication::house_requirements(page);

        fn get_house_requirement(requirement_number: &str) -> HouseRequirementResponse =
            communication::house_requirement(requirement_number);

        fn get_house_requirement_matching_communications(requirement_number: &str, page: PageParams) -> HouseRequirementMatchingCommunicationsResponse =
            communication::house_requirement_matching_communications(requirement_number, page);

        // Nomination

        fn get_nominations(params: &NominationsParams) -> NominationsResponse = nomination::nominations(params);

        fn get_nomination(id: &NominationId) -> NominationResponse = nomination::nomination(id);

        /// Nominees for one position of a partitioned nomination.
        fn get_nominees(id: &NominationId, ordinal: &str) -> NomineesResponse = nomination::nominees(id, ordinal);

        fn get_nomination_committees(id: &NominationId) -> NominationCommitteesResponse =
            nomination::nomination_resource(id, NominationResource::Committees);

        fn get_nomination_actions(id: &NominationId) -> NominationActionsResponse =
            nomination::nomination_resource(id, NominationResource::Actions);

        fn get_nomination_hearings(id: &NominationId) -> NominationHearingsResponse =
            nomination::nomination_resource(id, NominationResource::Hearings);

        // Treaty

        fn get_treaties(params: &TreatiesParams) -> TreatiesResponse = treaty::treaties(params);

        fn get_treaty(id: &TreatyId) -> TreatyResponse = treaty::treaty(id);

        fn get_treaty_actions(id: &TreatyId) -> TreatyActionsResponse = treaty::treaty_actions(id);

        fn get_treaty_committees(id: &TreatyId) -> TreatyCommitteesResponse = treaty::treaty_committees(id);

        // House roll-call votes (beta upstream)

        fn get_house_roll_call_votes(params: &HouseVotesParams) -> HouseRollCallVotesResponse =
            vote::house_votes(params);

        fn get_house_roll_call_vote(id: &HouseVoteId) -> HouseRollCallVoteResponse = vote::house_vote(id);

        fn get_house_roll_call_vote_member_votes(id: &HouseVoteId) -> HouseRollCallVoteMemberVotesResponse =
            vote::house_vote_members(id);
    }
}
