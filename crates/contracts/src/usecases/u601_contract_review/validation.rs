use thiserror::Error;

pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileValidationError {
    #[error("Invalid file type. Please upload a PDF.")]
    InvalidType { declared: String },
}

/// Checks the MIME type the browser declared for a selected file.
///
/// Only the declared type is looked at, the file content is never sniffed.
pub fn validate_declared_type(declared: &str) -> Result<(), FileValidationError> {
    if declared == PDF_MIME_TYPE {
        Ok(())
    } else {
        Err(FileValidationError::InvalidType {
            declared: declared.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_accepted() {
        assert_eq!(validate_declared_type("application/pdf"), Ok(()));
    }

    #[test]
    fn test_other_types_rejected() {
        for declared in ["image/png", "", "application/PDF", "text/plain", "application/pdf "] {
            let err = validate_declared_type(declared).unwrap_err();
            assert_eq!(err.to_string(), "Invalid file type. Please upload a PDF.");
            assert_eq!(
                err,
                FileValidationError::InvalidType {
                    declared: declared.to_string()
                }
            );
        }
    }
}
