//! Browser-independent rules of the upload page.
//!
//! Everything here is generic over the file handle, the object URL
//! registry and the upload future so the rules run in plain `cargo test`
//! without a DOM.

use std::future::Future;

use contracts::usecases::u601_contract_review::{
    validate_declared_type, FileValidationError, ReviewMode, UploadStatus,
};

/// Preview state of one file slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewFile {
    /// Object URL of the selected PDF
    pub url: Option<String>,
    /// Validation message shown under the form
    pub error: Option<String>,
}

/// A selected file that knows the MIME type the browser declared for it
pub trait DeclaredType {
    fn declared_type(&self) -> String;
}

/// Creates and releases browser-local object URLs
pub trait ObjectUrls<F> {
    fn create(&mut self, file: &F) -> Option<String>;
    fn revoke(&mut self, url: &str);
}

/// What to do with the raw `<input type=file>` after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputReset {
    Keep,
    /// Clear the control so the rejected file is no longer shown as chosen
    Clear,
}

/// Applies a file input change to one slot.
///
/// The previous object URL is always revoked first, so a slot never holds
/// more than one live URL.
pub fn handle_file_change<F, U>(
    chosen: Option<F>,
    file: &mut Option<F>,
    preview: &mut PreviewFile,
    urls: &mut U,
) -> InputReset
where
    F: DeclaredType,
    U: ObjectUrls<F>,
{
    release_preview::<F, U>(preview, urls);

    let Some(chosen) = chosen else {
        *file = None;
        *preview = PreviewFile::default();
        return InputReset::Keep;
    };

    match validate_declared_type(&chosen.declared_type()) {
        Err(err) => {
            let FileValidationError::InvalidType { declared } = &err;
            log::debug!("Rejected file with declared type {:?}", declared);
            *file = None;
            *preview = PreviewFile {
                url: None,
                error: Some(err.to_string()),
            };
            InputReset::Clear
        }
        Ok(()) => {
            let url = urls.create(&chosen);
            *file = Some(chosen);
            *preview = PreviewFile { url, error: None };
            InputReset::Keep
        }
    }
}

/// Revokes the slot's object URL, if any, and forgets it
pub fn release_preview<F, U: ObjectUrls<F>>(preview: &mut PreviewFile, urls: &mut U) {
    if let Some(url) = preview.url.take() {
        urls.revoke(&url);
    }
}

/// Submit is allowed only when every slot of the mode is filled and nothing is in flight
pub fn can_submit(loading: bool, filled_slots: usize, mode: ReviewMode) -> bool {
    !loading && filled_slots >= mode.slot_count()
}

/// The preview panel is shown while at least one slot has something to show
pub fn has_preview(previews: &[PreviewFile]) -> bool {
    previews.iter().any(|p| p.url.is_some())
}

/// Path of the results page for an analysis job.
///
/// Keys are opaque ids issued by the analysis service and used verbatim as
/// one path segment; a key that is not a plain segment is never navigated to.
pub fn analysis_path(key: &str) -> String {
    format!("/analysis/{}", key)
}

fn is_path_segment(key: &str) -> bool {
    !key.is_empty() && !key.contains(['/', '?', '#', '%'])
}

/// Decides whether a change of the status key should navigate.
///
/// Fires when a key appears or changes; re-observing the same key does not.
pub fn navigation_target(previous: Option<&str>, current: Option<&str>) -> Option<String> {
    match current {
        Some(key) if is_path_segment(key) && previous != Some(key) => Some(analysis_path(key)),
        _ => None,
    }
}

/// Takes the files of every slot the mode requires, or explains which are missing
pub fn collect_files<F: Clone>(slots: &[Option<F>], mode: ReviewMode) -> Result<Vec<F>, String> {
    let required = &slots[..mode.slot_count().min(slots.len())];
    let files: Vec<F> = required.iter().flatten().cloned().collect();
    if files.len() < mode.slot_count() {
        return Err(format!(
            "upload_file called with {} of {} files selected",
            files.len(),
            mode.slot_count()
        ));
    }
    Ok(files)
}

/// Runs one form submission.
///
/// Loading is raised before the upload and always lowered after it; an
/// upload error is logged and swallowed, the page learns about service
/// failures through the upload status instead.
pub async fn run_submit<Fut, L>(upload: Fut, mut set_loading: L)
where
    Fut: Future<Output = Result<(), String>>,
    L: FnMut(bool),
{
    set_loading(true);
    if let Err(e) = upload.await {
        log::error!("Submit failed: {}", e);
    }
    set_loading(false);
}

pub fn error_banner(status: &UploadStatus) -> Option<String> {
    status.error.as_ref().map(|e| format!("API Error: {}", e))
}

pub fn success_banner(status: &UploadStatus) -> Option<String> {
    status.message.as_ref().map(|m| format!("API Success: {}", m))
}

/// Human label of a zero-based slot index
pub fn slot_label(slot: usize) -> String {
    format!("File {}", slot + 1)
}
