//! Helpers shared by the API clients.

use contracts::usecases::common::UseCaseError;
use gloo_net::http::Response;

/// Turns a non-2xx response into a user-readable message.
///
/// Services answer with a `UseCaseError` body where they can; anything else
/// falls back to the bare HTTP status.
pub async fn error_from_response(response: Response) -> String {
    let status = response.status();
    match response.json::<UseCaseError>().await {
        Ok(err) => describe_service_error(&err),
        Err(_) => format!("HTTP error: {}", status),
    }
}

/// Message shown to the user for a structured service error
pub fn describe_service_error(err: &UseCaseError) -> String {
    match &err.details {
        Some(details) if !details.is_empty() => format!("{} ({})", err.message, details),
        _ => err.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_service_error() {
        let mut err = UseCaseError {
            code: "VALIDATION_ERROR".to_string(),
            message: "File too large".to_string(),
            details: None,
        };
        assert_eq!(describe_service_error(&err), "File too large");

        err.details = Some(String::new());
        assert_eq!(describe_service_error(&err), "File too large");

        err.details = Some("limit is 20 MB".to_string());
        assert_eq!(describe_service_error(&err), "File too large (limit is 20 MB)");
    }
}
