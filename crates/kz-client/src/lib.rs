//! # kz-client
//!
//! HTTP client for the Kambaz quiz backend.
//!
//! Every endpoint lives under `{server}/api`:
//! - [`quizzes`]: course quiz CRUD plus publish/unpublish
//! - [`questions`]: question CRUD scoped to a quiz
//! - [`attempts`]: submission, history, latest attempt, incomplete updates
//! - [`account`]: signin, signup, profile, signout
//!
//! Requests carry the backend session cookie captured at signin. The backend
//! is authoritative for authorization, grading and attempt limits.

pub mod account;
pub mod attempts;
pub mod questions;
pub mod quizzes;

mod error;
mod http;

pub use account::SignedIn;
pub use error::ClientError;

use std::time::Duration;

use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

/// HTTP client bound to one backend and, optionally, one session.
#[derive(Debug, Clone)]
pub struct KambazClient {
    http: reqwest::Client,
    api_base: String,
}

impl KambazClient {
    /// Build a client for `api_base` (e.g. `http://localhost:4000/api`).
    ///
    /// `cookie` is sent on every request when present.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] for a cookie that is not a valid header
    /// value, or [`ClientError::Http`] if the underlying client fails to build.
    pub fn new(
        api_base: &str,
        timeout: Duration,
        cookie: Option<&str>,
    ) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::Parse(format!("invalid session cookie: {e}")))?;
            headers.insert(COOKIE, value);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("kambaz/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `{api_base}/seg/seg/...` with every segment percent-encoded.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.api_base.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// `{api_base}/courses/{cid}/quizzes/{qid}/rest...`
    fn quiz_url(&self, course_id: &str, quiz_id: &str, rest: &[&str]) -> String {
        let mut segments = vec!["courses", course_id, "quizzes", quiz_id];
        segments.extend_from_slice(rest);
        self.url(&segments)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> KambazClient {
        KambazClient::new("http://localhost:4000/api/", Duration::from_secs(5), None).unwrap()
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(client().api_base(), "http://localhost:4000/api");
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(
            client().quiz_url("CS 5610", "q/1", &["questions"]),
            "http://localhost:4000/api/courses/CS%205610/quizzes/q%2F1/questions"
        );
    }

    #[test]
    fn course_listing_url() {
        assert_eq!(
            client().url(&["courses", "RS101", "quizzes"]),
            "http://localhost:4000/api/courses/RS101/quizzes"
        );
    }

    #[test]
    fn rejects_unprintable_cookie() {
        let err =
            KambazClient::new("http://x/api", Duration::from_secs(1), Some("a\nb")).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn accepts_session_cookie() {
        assert!(
            KambazClient::new("http://x/api", Duration::from_secs(1), Some("connect.sid=abc"))
                .is_ok()
        );
    }
}
