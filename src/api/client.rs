// Analysis service HTTP client.
// Builds the multipart upload and converts failure responses into errors.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderValue, USER_AGENT},
    multipart::{Form, Part},
};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::error::{MatchError, Result};
use crate::intake::{MAX_UPLOAD_BYTES, ResumeFile, validate_file_size};

use super::types::AnalysisResult;

const ANALYZE_PATH: &str = "api/analyze";

/// Shown when a failure response carries no usable `error` field.
pub const ANALYSIS_FAILED: &str = "Analysis failed";
/// Shown when a failure response is not JSON (e.g. an HTML error page).
pub const OPAQUE_SERVER_ERROR: &str = "Server error - check log for details";

/// Client for the resume analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    client: Client,
    endpoint: Url,
    max_upload_bytes: u64,
}

impl AnalyzeClient {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = analyze_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("resume-match/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(MatchError::Network)?;

        Ok(Self {
            client,
            endpoint,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        })
    }

    /// Override the largest resume this client will upload.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: u64) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Full URL of the analyze endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload the resume and job description and return the parsed result.
    ///
    /// The file may have changed since it was selected, so its size is checked
    /// again against the upload limit before anything is sent.
    pub async fn analyze(&self, job_desc: &str, file: &ResumeFile) -> Result<AnalysisResult> {
        let size = tokio::fs::metadata(&file.path).await?.len();
        validate_file_size(size, self.max_upload_bytes)?;
        let bytes = tokio::fs::read(&file.path).await?;
        validate_file_size(bytes.len() as u64, self.max_upload_bytes)?;
        info!(file = %file.name, size = file.size, endpoint = %self.endpoint, "Submitting resume for analysis");

        let resume = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str("application/pdf")?;
        let form = Form::new()
            .text("jobDesc", job_desc.to_string())
            .part("resume", resume);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(MatchError::Network)?;

        let response = check_response(response).await?;
        let body = response.text().await.map_err(MatchError::Network)?;
        let result: AnalysisResult =
            serde_json::from_str(&body).map_err(|e| MatchError::Decode(e.to_string()))?;

        info!(score = result.score, matched = result.matched.len(), missing = result.missing.len(), "Analysis complete");
        Ok(result)
    }
}

/// Resolve the analyze endpoint against a base URL, keeping any path prefix.
fn analyze_url(base_url: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)
        .map_err(|e| MatchError::Config(format!("invalid server URL '{}': {}", base_url, e)))?;

    if base.cannot_be_a_base() {
        return Err(MatchError::Config(format!(
            "invalid server URL '{}'",
            base_url
        )));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(ANALYZE_PATH)
        .map_err(|e| MatchError::Config(e.to_string()))
}

/// Check response status and convert failures.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    debug!(%status, "Analysis response received");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(MatchError::Server {
        status: status.as_u16(),
        message: server_error_message(status.as_u16(), &body),
    })
}

/// Extract the user-facing message from a failure body.
///
/// Any JSON body counts as a service reply: its `error` field is shown when it
/// is a non-empty string, and non-string values are shown in their JSON form.
/// Only a body that is not JSON at all becomes the opaque message.
pub fn server_error_message(status: u16, body: &str) -> String {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(_) => {
            error!(status, body, "Server returned a non-JSON error response");
            return OPAQUE_SERVER_ERROR.to_string();
        }
    };

    match value.get("error") {
        Some(Value::String(message)) if !message.trim().is_empty() => message.clone(),
        Some(Value::Null | Value::Bool(false) | Value::String(_)) | None => {
            ANALYSIS_FAILED.to_string()
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => ANALYSIS_FAILED.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_is_used() {
        assert_eq!(
            server_error_message(400, r#"{"error": "No text in PDF"}"#),
            "No text in PDF"
        );
    }

    #[test]
    fn test_json_without_error_field() {
        assert_eq!(server_error_message(500, "{}"), ANALYSIS_FAILED);
        assert_eq!(server_error_message(500, r#"{"error": ""}"#), ANALYSIS_FAILED);
        assert_eq!(server_error_message(500, r#"{"error": null}"#), ANALYSIS_FAILED);
    }

    #[test]
    fn test_json_that_is_not_an_error_object() {
        assert_eq!(server_error_message(500, r#"["bad"]"#), ANALYSIS_FAILED);
        assert_eq!(server_error_message(500, r#""oops""#), ANALYSIS_FAILED);
        assert_eq!(server_error_message(500, "null"), ANALYSIS_FAILED);
        assert_eq!(server_error_message(400, r#"{"error": 42}"#), "42");
        assert_eq!(server_error_message(400, r#"{"error": false}"#), ANALYSIS_FAILED);
        assert_eq!(
            server_error_message(400, r#"{"error": {"code": 7}}"#),
            r#"{"code":7}"#
        );
    }

    #[test]
    fn test_non_json_body_is_opaque() {
        let html = "<html><body><h1>Internal Server Error</h1></body></html>";
        assert_eq!(server_error_message(500, html), OPAQUE_SERVER_ERROR);
        assert_eq!(server_error_message(502, ""), OPAQUE_SERVER_ERROR);
    }

    #[test]
    fn test_analyze_url_keeps_prefix() {
        assert_eq!(
            analyze_url("http://localhost:5000").unwrap().as_str(),
            "http://localhost:5000/api/analyze"
        );
        assert_eq!(
            analyze_url("https://example.com/scan").unwrap().as_str(),
            "https://example.com/scan/api/analyze"
        );
        assert_eq!(
            analyze_url("https://example.com/scan/").unwrap().as_str(),
            "https://example.com/scan/api/analyze"
        );
    }

    #[test]
    fn test_analyze_url_rejects_garbage() {
        assert!(matches!(
            analyze_url("not a url"),
            Err(MatchError::Config(_))
        ));
        assert!(matches!(
            analyze_url("mailto:someone@example.com"),
            Err(MatchError::Config(_))
        ));
    }
}
