//! `congress` resources.

use super::PageParams;
use crate::congress::request::ApiRequest;

/// All past and present congresses.
#[must_use]
pub fn congresses(page: PageParams) -> ApiRequest {
    page.apply(ApiRequest::new("congress"))
}

/// One congress by number.
#[must_use]
pub fn congress(congress: u32) -> ApiRequest {
    ApiRequest::new(format!("congress/{congress}"))
}

/// The congress currently in session.
#[must_use]
pub fn current_congress() -> ApiRequest {
    ApiRequest::new("congress/current")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_congress_paths() {
        assert_eq!(congresses(PageParams::default()).path(), "congress");
        assert_eq!(congress(117).path(), "congress/117");
        assert_eq!(current_congress().path(), "congress/current");
    }

    #[test]
    fn test_congresses_pagination() {
        let request = congresses(PageParams::new(5, 10));
        assert_eq!(
            request.query_pairs(),
            vec![
                ("limit".to_string(), "5".to_string()),
                ("offset".to_string(), "10".to_string()),
                ("format".to_string(), "json".to_string()),
            ]
        );
    }
}
