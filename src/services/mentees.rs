use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mentee as returned by the mentoring backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mentee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "registrationNumber", default)]
    pub registration_number: String,
    #[serde(rename = "class1", default)]
    pub class_label: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "photoLink", default)]
    pub photo_link: String,
}

/// Errors surfaced by the mentee API client
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be built or the network call failed
    Transport(String),
    /// Backend answered with a non-success status
    Status { status: u16, text: String },
    /// Response body was not the expected JSON
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "request failed: {}", msg),
            ApiError::Status { status, text } => write!(f, "server returned {} {}", status, text),
            ApiError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Source of mentee records
///
/// The browser build talks to the backend through [`MenteeApi`]; tests plug
/// in an in-memory directory.
#[async_trait(?Send)]
pub trait MenteeDirectory {
    /// Mentees assigned to `mentor_id` for the academic `year`, in backend order
    async fn mentees_for(&self, mentor_id: &str, year: &str) -> Result<Vec<Mentee>, ApiError>;

    /// A single mentee by identifier
    async fn mentee(&self, mentee_id: &str) -> Result<Mentee, ApiError>;
}

/// HTTP client for the mentoring backend
#[derive(Debug, Clone, PartialEq)]
pub struct MenteeApi {
    base_url: String,
    token: Option<String>,
}

impl MenteeApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Build a client from the current settings and signed-in session
    pub fn from_session() -> Self {
        let base_url = crate::stores::settings_store::peek_settings().api_base_url;
        let token = crate::stores::auth_store::get_token();
        Self::new(base_url, token)
    }

    pub fn mentees_url(&self, mentor_id: &str, year: &str) -> String {
        format!(
            "{}/mentees/mentor/{}/year/{}",
            self.base_url,
            urlencoding::encode(mentor_id),
            urlencoding::encode(year)
        )
    }

    pub fn mentee_url(&self, mentee_id: &str) -> String {
        format!("{}/mentees/{}", self.base_url, urlencoding::encode(mentee_id))
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, ApiError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut request = Request::get(url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl MenteeDirectory for MenteeApi {
    async fn mentees_for(&self, mentor_id: &str, year: &str) -> Result<Vec<Mentee>, ApiError> {
        let url = self.mentees_url(mentor_id, year);
        log::debug!("Fetching mentees from {}", url);
        self.get_json(&url).await
    }

    async fn mentee(&self, mentee_id: &str) -> Result<Mentee, ApiError> {
        let url = self.mentee_url(mentee_id);
        log::debug!("Fetching mentee from {}", url);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_record() {
        let json = r#"[{"_id":"A1","name":"Asha","registrationNumber":"R1","class1":"10A","phone":"555","photoLink":"a.jpg","mentor":"M1","__v":0}]"#;
        let mentees: Vec<Mentee> = serde_json::from_str(json).unwrap();

        assert_eq!(mentees.len(), 1);
        assert_eq!(mentees[0].id, "A1");
        assert_eq!(mentees[0].name, "Asha");
        assert_eq!(mentees[0].registration_number, "R1");
        assert_eq!(mentees[0].class_label, "10A");
        assert_eq!(mentees[0].phone, "555");
        assert_eq!(mentees[0].photo_link, "a.jpg");
    }

    #[test]
    fn test_decode_missing_optional_fields() {
        let mentee: Mentee = serde_json::from_str(r#"{"_id":"B2","name":"Ben"}"#).unwrap();
        assert_eq!(mentee.registration_number, "");
        assert_eq!(mentee.photo_link, "");

        let missing_id = serde_json::from_str::<Mentee>(r#"{"name":"Ben"}"#);
        assert!(missing_id.is_err());
    }

    #[test]
    fn test_urls() {
        let api = MenteeApi::new("http://localhost:5000/api/", None);
        assert_eq!(
            api.mentees_url("M1", "2024"),
            "http://localhost:5000/api/mentees/mentor/M1/year/2024"
        );
        assert_eq!(api.mentee_url("A1"), "http://localhost:5000/api/mentees/A1");
    }

    #[test]
    fn test_url_segments_are_encoded() {
        let api = MenteeApi::new("https://example.org", None);
        assert_eq!(
            api.mentees_url("a/b", "20 24"),
            "https://example.org/mentees/mentor/a%2Fb/year/20%2024"
        );
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let api = MenteeApi::new("https://example.org", Some("  ".to_string()));
        assert_eq!(api, MenteeApi::new("https://example.org", None));
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status { status: 404, text: "Not Found".to_string() };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "server returned 404 Not Found");
        assert!(!ApiError::Transport("offline".to_string()).is_not_found());
    }
}
