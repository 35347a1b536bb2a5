//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"u601_contract_review--usecase"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! matching `usecases/` directory.

/// Use-case action page (uploads, submissions).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Detail view of a single record, e.g. a submitted analysis.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Fallback pages such as "not found".
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("u601_contract_review--usecase"));
        assert!(!is_valid_page_id("u601_contract_review"));
        assert!(!is_valid_page_id("--usecase"));
        assert!(!is_valid_page_id("u601--"));
    }
}
