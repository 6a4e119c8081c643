//! Request descriptors built by endpoint wrappers and consumed by the dispatcher.
//!
//! An [`ApiRequest`] is a relative resource path plus an ordered list of
//! query pairs. A pair whose value is `None` is "absent": it stays in the
//! descriptor but is never written to the query string.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// Query parameter name reserved for the response format.
pub const FORMAT_PARAM: &str = "format";

/// Response format forced on every request.
pub const FORMAT_JSON: &str = "json";

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Int(i64),
    Text(String),
    Bool(bool),
    DateTime(DateTime<Utc>),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Bool(value) => write!(f, "{value}"),
            Self::DateTime(value) => f.write_str(&iso8601(value)),
        }
    }
}

/// Format a timestamp as ISO-8601 UTC with millisecond precision.
///
/// `2024-01-02T03:04:05.000Z`
#[must_use]
pub fn iso8601(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

/// A single API call: relative path and query pairs in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    params: Vec<(String, Option<QueryValue>)>,
}

impl ApiRequest {
    /// Create a request for `path`, relative to the API base URL.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Append a present query pair.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.push((key.into(), Some(value.into())));
        self
    }

    /// Append a query pair that is omitted from the URL when `value` is `None`.
    #[must_use]
    pub fn param_opt<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.params.push((key.into(), value.map(Into::into)));
        self
    }

    /// Relative resource path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All pairs, absent ones included.
    #[must_use]
    pub fn params(&self) -> &[(String, Option<QueryValue>)] {
        &self.params
    }

    /// Stringified value of the first present pair named `key`.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(name, value)| name == key && value.is_some())
            .and_then(|(_, value)| value.as_ref().map(ToString::to_string))
    }

    /// The pairs written to the query string: present caller pairs in order,
    /// then `format=json`. A caller-supplied `format` pair never survives.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter(|(name, _)| name != FORMAT_PARAM)
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.clone(), v.to_string())))
            .chain(std::iter::once((
                FORMAT_PARAM.to_string(),
                FORMAT_JSON.to_string(),
            )))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_appended_last() {
        let request = ApiRequest::new("bill").param("limit", 20u32).param("offset", 0u32);
        let pairs = request.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "20".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("format".to_string(), "json".to_string()),
            ]
        );
    }

    #[test]
    fn test_absent_values_omitted() {
        let request = ApiRequest::new("member")
            .param("limit", 20u32)
            .param_opt("fromDateTime", None::<DateTime<Utc>>)
            .param("currentMember", true);

        let names: Vec<String> = request.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["limit", "currentMember", "format"]);
        assert_eq!(request.params().len(), 3);
    }

    #[test]
    fn test_caller_format_is_overridden() {
        let request = ApiRequest::new("congress")
            .param("format", "xml")
            .param("limit", 5u32);
        let pairs = request.query_pairs();
        let formats: Vec<&(String, String)> = pairs.iter().filter(|(k, _)| k == "format").collect();
        assert_eq!(formats.len(), 1);
        assert_eq!(formats[0].1, "json");
        assert_eq!(pairs.last().map(|(k, _)| k.as_str()), Some("format"));
    }

    #[test]
    fn test_datetime_serializes_with_millis_and_z() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(QueryValue::from(at).to_string(), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_scalar_display() {
        let cases = [
            (QueryValue::Int(-3), "-3"),
            (QueryValue::Bool(true), "true"),
            (QueryValue::Bool(false), "false"),
            (QueryValue::from("updateDate+desc"), "updateDate+desc"),
        ];

        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected);
        }
    }

    #[test]
    fn test_query_value_skips_absent() {
        let request = ApiRequest::new("bill")
            .param_opt("sort", None::<&str>)
            .param("sort", "updateDate+asc");
        assert_eq!(request.query_value("sort").as_deref(), Some("updateDate+asc"));
        assert_eq!(request.query_value("missing"), None);
    }
}
