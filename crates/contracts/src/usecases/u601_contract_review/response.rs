use serde::{Deserialize, Serialize};

/// Signed URL the browser PUTs the file body to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUploadResponse {
    pub upload_url: String,
    /// Storage key the analysis request refers to
    pub object_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAnalysisResponse {
    /// Analysis job id, addresses the results page
    pub key: String,
    #[serde(default)]
    pub message: Option<String>,
}
