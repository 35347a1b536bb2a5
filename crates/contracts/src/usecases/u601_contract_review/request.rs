use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which page variant submitted the documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    /// One document, analysed on its own
    Single,
    /// Two versions of the same contract, compared against each other
    #[default]
    Compare,
}

impl ReviewMode {
    /// Number of file slots that must be filled before submitting
    pub fn slot_count(self) -> usize {
        match self {
            ReviewMode::Single => 1,
            ReviewMode::Compare => 2,
        }
    }
}

/// Request for a signed direct-upload URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Starts an analysis job over files already uploaded through signed URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartAnalysisRequest {
    /// Client-generated id, lets the service drop duplicate submissions
    pub request_id: Uuid,
    pub mode: ReviewMode,
    /// Object keys in slot order
    pub object_keys: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl StartAnalysisRequest {
    pub fn new(mode: ReviewMode, object_keys: Vec<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            mode,
            object_keys,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_count() {
        assert_eq!(ReviewMode::Single.slot_count(), 1);
        assert_eq!(ReviewMode::Compare.slot_count(), 2);
        assert_eq!(ReviewMode::default(), ReviewMode::Compare);
    }

    #[test]
    fn test_mode_serializes_snake_case() {
        let request = StartAnalysisRequest::new(
            ReviewMode::Compare,
            vec!["uploads/a.pdf".to_string(), "uploads/b.pdf".to_string()],
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["mode"], "compare");
        assert_eq!(json["object_keys"][1], "uploads/b.pdf");
        assert!(json["request_id"].is_string());
    }
}
