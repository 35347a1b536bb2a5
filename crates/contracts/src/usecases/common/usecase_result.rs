use serde::{Deserialize, Serialize};

/// Error body returned by the signing and analysis services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_details() {
        let err = UseCaseError {
            code: "EXTERNAL_ERROR".to_string(),
            message: "signing failed".to_string(),
            details: Some("bucket unavailable".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "[EXTERNAL_ERROR] signing failed: bucket unavailable"
        );
    }

    #[test]
    fn test_details_default_when_missing() {
        let err: UseCaseError =
            serde_json::from_str(r#"{"code":"VALIDATION_ERROR","message":"empty file"}"#).unwrap();
        assert_eq!(err.details, None);
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] empty file");
    }
}
