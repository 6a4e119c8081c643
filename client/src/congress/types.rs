//! Data types for Congress API responses.
//!
//! Envelopes name the top-level keys each endpoint documents and keep every
//! other key verbatim in `extra`, so a round trip through these types loses
//! nothing. Only the most common records are typed field by field; the rest
//! stay as [`serde_json::Value`]. Nothing here validates payloads beyond
//! what deserialization needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Declares a response envelope with camelCase keys and a lossless `extra` map.
macro_rules! envelope {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
            /// Keys not named above, kept verbatim.
            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }
    };
}

// ---------------------------------------------------------------------------
// Shared records
// ---------------------------------------------------------------------------

envelope! {
    /// Pagination block returned with list responses.
    Pagination {
        /// Total results available for the route
        count: Option<u64>,
        /// URL of the next page
        next: Option<String>,
        /// URL of the previous page
        prev: Option<String>,
    }
}

envelope! {
    /// Most recent action on a bill or amendment.
    LatestAction {
        action_date: Option<String>,
        text: Option<String>,
        /// Only present for some House actions
        action_time: Option<String>,
    }
}

// ---------------------------------------------------------------------------
// Congress
// ---------------------------------------------------------------------------

envelope! {
    /// One session of a congress.
    CongressSession {
        /// "House of Representatives" or "Senate"
        chamber: Option<String>,
        /// "R" (regular) or "S" (special)
        #[serde(rename = "type")]
        session_type: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
        /// Absent for special sessions
        number: Option<Value>,
    }
}

envelope! {
    /// A congress, as listed or in detail.
    Congress {
        /// e.g. "118th Congress"
        name: String,
        start_year: Option<String>,
        end_year: Option<String>,
        #[serde(default)]
        sessions: Vec<CongressSession>,
        number: Option<Value>,
        update_date: Option<String>,
        url: Option<String>,
    }
}

envelope! {
    CongressesResponse {
        #[serde(default)]
        congresses: Vec<Congress>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    CongressResponse {
        congress: Congress,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

envelope! {
    /// A member of Congress as returned by list endpoints.
    Member {
        /// Bioguide ID (e.g., "A000360")
        bioguide_id: String,
        name: Option<String>,
        party_name: Option<String>,
        /// State name or abbreviation
        state: Option<String>,
        district: Option<Value>,
        depiction: Option<Value>,
        terms: Option<Value>,
        update_date: Option<String>,
        url: Option<String>,
    }
}

envelope! {
    /// A member of Congress in detail.
    MemberDetails {
        bioguide_id: String,
        direct_order_name: Option<String>,
        inverted_order_name: Option<String>,
        first_name: Option<String>,
        middle_name: Option<String>,
        last_name: Option<String>,
        current_member: Option<bool>,
        birth_year: Option<String>,
        official_website_url: Option<String>,
        terms: Option<Value>,
        party_history: Option<Value>,
        sponsored_legislation: Option<Value>,
        cosponsored_legislation: Option<Value>,
    }
}

envelope! {
    MembersResponse {
        #[serde(default)]
        members: Vec<Member>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    MemberResponse {
        member: MemberDetails,
    }
}

envelope! {
    /// Bills and amendments sponsored by a member.
    SponsoredLegislationResponse {
        #[serde(default)]
        sponsored_legislation: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    /// Bills and amendments cosponsored by a member.
    CosponsoredLegislationResponse {
        #[serde(default)]
        cosponsored_legislation: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// Bill
// ---------------------------------------------------------------------------

envelope! {
    /// A bill as returned by list endpoints.
    Bill {
        congress: Option<u32>,
        /// "HR", "S", "HJRES", ...
        #[serde(rename = "type")]
        bill_type: Option<String>,
        number: String,
        title: Option<String>,
        origin_chamber: Option<String>,
        origin_chamber_code: Option<String>,
        latest_action: Option<LatestAction>,
        policy_area: Option<Value>,
        update_date: Option<String>,
        update_date_including_text: Option<String>,
        url: Option<String>,
    }
}

envelope! {
    /// A bill in detail.
    BillDetails {
        congress: Option<u32>,
        #[serde(rename = "type")]
        bill_type: Option<String>,
        number: String,
        title: Option<String>,
        introduced_date: Option<String>,
        origin_chamber: Option<String>,
        latest_action: Option<LatestAction>,
        sponsors: Option<Vec<Value>>,
        cosponsors: Option<Value>,
        policy_area: Option<Value>,
        laws: Option<Vec<Value>>,
        update_date: Option<String>,
    }
}

envelope! {
    BillsResponse {
        #[serde(default)]
        bills: Vec<Bill>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    BillResponse {
        bill: BillDetails,
    }
}

envelope! {
    /// Enacted laws; upstream lists them under `bills`.
    LawsResponse {
        #[serde(default)]
        bills: Vec<Bill>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    BillCommitteesResponse {
        #[serde(default)]
        committees: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    RelatedBillsResponse {
        #[serde(default)]
        related_bills: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    ActionsResponse {
        #[serde(default)]
        actions: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    /// Cosponsors; pagination here also carries `countIncludingWithdrawnCosponsors`.
    CosponsorsResponse {
        #[serde(default)]
        cosponsors: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    /// Legislative subjects and policy area.
    SubjectsResponse {
        subjects: Value,
        pagination: Option<Pagination>,
    }
}

envelope! {
    SummariesResponse {
        #[serde(default)]
        summaries: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    /// Summaries across all bills.
    SummariesListResponse {
        #[serde(default)]
        summaries: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    TitlesResponse {
        #[serde(default)]
        titles: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    /// Text versions of a bill or amendment.
    BillTextResponse {
        #[serde(default)]
        text_versions: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// Amendment
// ---------------------------------------------------------------------------

envelope! {
    Amendment {
        congress: Option<u32>,
        number: String,
        /// "HAMDT", "SAMDT" or "SUAMDT"
        #[serde(rename = "type")]
        amendment_type: Option<String>,
        /// Only for House amendments
        description: Option<String>,
        purpose: Option<String>,
        latest_action: Option<LatestAction>,
        update_date: Option<String>,
        url: Option<String>,
    }
}

envelope! {
    AmendmentsResponse {
        #[serde(default)]
        amendments: Vec<Amendment>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    AmendmentResponse {
        amendment: Value,
    }
}

// ---------------------------------------------------------------------------
// Congressional Record
// ---------------------------------------------------------------------------

envelope! {
    BoundCongressionalRecordResponse {
        #[serde(default)]
        bound_congressional_record: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    DailyCongressionalRecordListResponse {
        #[serde(default)]
        daily_congressional_record: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    DailyCongressionalRecordIssueResponse {
        issue: Value,
    }
}

envelope! {
    /// Articles grouped by section.
    DailyCongressionalRecordArticlesResponse {
        articles: Value,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// CRS reports
// ---------------------------------------------------------------------------

envelope! {
    CrsReportsResponse {
        #[serde(rename = "CRSReports", default)]
        crs_reports: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    /// Upstream uses the singular key `CRSReport`.
    CrsReportResponse {
        #[serde(rename = "CRSReport")]
        crs_report: Value,
    }
}

// ---------------------------------------------------------------------------
// Committees
// ---------------------------------------------------------------------------

envelope! {
    CommitteesResponse {
        #[serde(default)]
        committees: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    CommitteeResponse {
        committee: Value,
    }
}

envelope! {
    CommitteeNominationsResponse {
        #[serde(default)]
        nominations: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    CommitteeMeetingsResponse {
        #[serde(default)]
        committee_meetings: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    CommitteeMeetingResponse {
        committee_meeting: Value,
    }
}

envelope! {
    CommitteePrintsResponse {
        #[serde(default)]
        committee_prints: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    /// `committeePrint` is an array of length one upstream.
    CommitteePrintResponse {
        #[serde(default)]
        committee_print: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    CommitteePrintTextResponse {
        #[serde(default)]
        text: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    CommitteeReportsResponse {
        #[serde(default)]
        reports: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    CommitteeReportResponse {
        committee_report: Value,
    }
}

envelope! {
    CommitteeReportTextResponse {
        #[serde(default)]
        text: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// Hearings
// ---------------------------------------------------------------------------

envelope! {
    HearingsResponse {
        #[serde(default)]
        hearings: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    HearingResponse {
        hearing: Value,
    }
}

// ---------------------------------------------------------------------------
// Communications and requirements
// ---------------------------------------------------------------------------

envelope! {
    HouseCommunicationsResponse {
        #[serde(default)]
        house_communications: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    HouseCommunicationResponse {
        house_communication: Value,
    }
}

envelope! {
    SenateCommunicationsResponse {
        #[serde(default)]
        senate_communications: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    SenateCommunicationResponse {
        senate_communication: Value,
    }
}

envelope! {
    HouseRequirementsResponse {
        #[serde(default)]
        house_requirements: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    HouseRequirementResponse {
        house_requirement: Value,
    }
}

envelope! {
    HouseRequirementMatchingCommunicationsResponse {
        #[serde(default)]
        matching_communications: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// Nominations
// ---------------------------------------------------------------------------

envelope! {
    NominationsResponse {
        #[serde(default)]
        nominations: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    NominationResponse {
        nomination: Value,
    }
}

envelope! {
    NomineesResponse {
        #[serde(default)]
        nominees: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    NominationCommitteesResponse {
        #[serde(default)]
        committees: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    NominationActionsResponse {
        #[serde(default)]
        actions: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    NominationHearingsResponse {
        #[serde(default)]
        hearings: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// Treaties
// ---------------------------------------------------------------------------

envelope! {
    TreatiesResponse {
        #[serde(default)]
        treaties: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    TreatyResponse {
        treaty: Value,
    }
}

envelope! {
    TreatyActionsResponse {
        #[serde(default)]
        actions: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    TreatyCommitteesResponse {
        #[serde(default)]
        treaty_committees: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

// ---------------------------------------------------------------------------
// House roll-call votes (beta upstream)
// ---------------------------------------------------------------------------

envelope! {
    HouseRollCallVotesResponse {
        #[serde(default)]
        house_roll_call_votes: Vec<Value>,
        pagination: Option<Pagination>,
    }
}

envelope! {
    HouseRollCallVoteResponse {
        house_roll_call_vote: Value,
    }
}

envelope! {
    HouseRollCallVoteMemberVotesResponse {
        house_roll_call_vote_member_votes: Value,
    }
}
