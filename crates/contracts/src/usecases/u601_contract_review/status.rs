use serde::{Deserialize, Serialize};

use super::StartAnalysisResponse;

/// Shown when the analysis service accepts the job without a message of its own
pub const DEFAULT_SUCCESS_MESSAGE: &str = "uploaded";

/// Outcome of the most recent upload, as reported to the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadStatus {
    /// Analysis job id, present once the job was created
    pub key: Option<String>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl UploadStatus {
    pub fn succeeded(response: StartAnalysisResponse) -> Self {
        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
        Self {
            key: Some(response.key).filter(|k| !k.is_empty()),
            error: None,
            message: Some(message),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            key: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Status after the upload chain finished, successfully or not
    pub fn from_result(result: Result<StartAnalysisResponse, String>) -> Self {
        match result {
            Ok(response) => Self::succeeded(response),
            Err(error) => Self::failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeded_defaults_message() {
        let status = UploadStatus::succeeded(StartAnalysisResponse {
            key: "abc123".to_string(),
            message: None,
        });
        assert_eq!(status.key.as_deref(), Some("abc123"));
        assert_eq!(status.message.as_deref(), Some("uploaded"));
        assert_eq!(status.error, None);
    }

    #[test]
    fn test_succeeded_keeps_service_message() {
        let status = UploadStatus::succeeded(StartAnalysisResponse {
            key: "abc123".to_string(),
            message: Some("queued for analysis".to_string()),
        });
        assert_eq!(status.message.as_deref(), Some("queued for analysis"));
    }

    #[test]
    fn test_empty_key_is_not_a_key() {
        let status = UploadStatus::succeeded(StartAnalysisResponse {
            key: String::new(),
            message: None,
        });
        assert_eq!(status.key, None);
    }

    #[test]
    fn test_failed() {
        let status = UploadStatus::failed("HTTP error: 502");
        assert_eq!(status.error.as_deref(), Some("HTTP error: 502"));
        assert_eq!(status.key, None);
        assert_eq!(status.message, None);
    }

    #[test]
    fn test_from_result() {
        let ok = UploadStatus::from_result(Ok(StartAnalysisResponse {
            key: "abc123".to_string(),
            message: None,
        }));
        assert_eq!(ok.key.as_deref(), Some("abc123"));
        assert_eq!(ok.message.as_deref(), Some("uploaded"));

        let err = UploadStatus::from_result(Err("Failed to send request".to_string()));
        assert_eq!(err, UploadStatus::failed("Failed to send request"));
    }
}
