//! Bound and daily Congressional Record resources.

use crate::congress::client::CongressApiError;
use crate::congress::request::ApiRequest;

/// Bound record date: `{year}[/{month}[/{day}]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundRecordDate {
    pub year: u32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl BoundRecordDate {
    #[must_use]
    pub const fn year(year: u32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    #[must_use]
    pub const fn month(year: u32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
        }
    }

    #[must_use]
    pub const fn day(year: u32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
        }
    }
}

/// Daily record issue within a volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyIssueId {
    pub volume_number: String,
    pub issue_number: String,
}

impl DailyIssueId {
    pub fn new(volume_number: impl Into<String>, issue_number: impl Into<String>) -> Self {
        Self {
            volume_number: volume_number.into(),
            issue_number: issue_number.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "daily-congressional-record/{}/{}",
            self.volume_number, self.issue_number
        )
    }
}

/// Bound Congressional Record for a year, month or day.
///
/// # Errors
/// Returns `InvalidRequest` when `day` is set without `month`.
pub fn bound_congressional_record(date: &BoundRecordDate) -> Result<ApiRequest, CongressApiError> {
    let path = match (date.month, date.day) {
        (Some(month), Some(day)) => format!("bound-congressional-record/{}/{month}/{day}", date.year),
        (Some(month), None) => format!("bound-congressional-record/{}/{month}", date.year),
        (None, None) => format!("bound-congressional-record/{}", date.year),
        (None, Some(_)) => {
            return Err(CongressApiError::InvalidRequest(
                "Cannot specify day without month".into(),
            ))
        }
    };

    Ok(ApiRequest::new(path))
}

/// Daily record volumes, or the issues of one volume.
#[must_use]
pub fn daily_congressional_records(volume_number: Option<&str>) -> ApiRequest {
    ApiRequest::new(volume_number.map_or_else(
        || "daily-congressional-record".to_string(),
        |volume| format!("daily-congressional-record/{volume}"),
    ))
}

#[must_use]
pub fn daily_congressional_record_issue(id: &DailyIssueId) -> ApiRequest {
    ApiRequest::new(id.path())
}

#[must_use]
pub fn daily_congressional_record_articles(id: &DailyIssueId) -> ApiRequest {
    ApiRequest::new(format!("{}/articles", id.path()))
}
