pub mod request;
pub mod response;
pub mod status;
pub mod validation;

pub use request::{ReviewMode, SignUploadRequest, StartAnalysisRequest};
pub use response::{SignUploadResponse, StartAnalysisResponse};
pub use status::UploadStatus;
pub use validation::{validate_declared_type, FileValidationError, PDF_MIME_TYPE};

use crate::usecases::common::UseCaseMetadata;

/// Two versions of a contract, compared against each other
pub struct ContractReview;

impl UseCaseMetadata for ContractReview {
    fn display_name() -> &'static str {
        "Version Difference Checker"
    }

    fn description() -> &'static str {
        "Upload two PDF files to compare them for differences."
    }
}

/// One contract, analysed on its own
pub struct SingleContractReview;

impl UseCaseMetadata for SingleContractReview {
    fn display_name() -> &'static str {
        "Contract Analyzer"
    }

    fn description() -> &'static str {
        "Upload a PDF file to analyze it."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_texts() {
        assert_eq!(ContractReview::display_name(), "Version Difference Checker");
        assert_eq!(
            ContractReview::description(),
            "Upload two PDF files to compare them for differences."
        );
        assert_eq!(SingleContractReview::display_name(), "Contract Analyzer");
    }
}
