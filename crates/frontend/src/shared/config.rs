//! Runtime configuration of the front end.
//!
//! The page can pin the API location with
//! `<meta name="api-base" content="https://api.example.com">`; without it the
//! API is expected on port 3000 of the host serving the page.

use leptos::prelude::*;

const API_BASE_META: &str = "api-base";
const DEFAULT_API_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL without trailing slash, e.g. "http://localhost:3000"
    pub api_base: String,
}

impl AppConfig {
    /// Resolves the configuration from the current document
    pub fn from_document() -> Self {
        let api_base = read_meta(API_BASE_META)
            .and_then(|value| normalize_base(&value))
            .unwrap_or_else(location_api_base);
        log::debug!("API base resolved to {}", api_base);
        Self { api_base }
    }

    /// Build a full API URL from a path starting with "/api/"
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

/// Access the configuration provided by `App`
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found")
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content")
}

fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Trims whitespace and trailing slashes; an empty value means "not configured"
fn normalize_base(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base(" https://api.example.com/ "),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(normalize_base("   "), None);
        assert_eq!(normalize_base("/"), None);
    }

    #[test]
    fn test_api_url() {
        let config = AppConfig {
            api_base: "http://localhost:3000".to_string(),
        };
        assert_eq!(
            config.api_url("/api/uploads/sign"),
            "http://localhost:3000/api/uploads/sign"
        );
    }
}
