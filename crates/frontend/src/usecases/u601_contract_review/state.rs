use contracts::usecases::u601_contract_review::{ReviewMode, UploadStatus};
use leptos::prelude::*;
use web_sys::{File, Url};

use super::api;
use super::model::{collect_files, DeclaredType, ObjectUrls};
use crate::shared::config::AppConfig;

/// Most slots any mode uses
pub const MAX_SLOTS: usize = 2;

/// Holds the selected files and the outcome of the last upload.
///
/// `web_sys::File` is not Send, so the slots live in local storage.
#[derive(Clone, Copy)]
pub struct UploadStore {
    pub mode: ReviewMode,
    files: [RwSignal<Option<File>, LocalStorage>; MAX_SLOTS],
    status: RwSignal<UploadStatus>,
    config: StoredValue<AppConfig>,
}

impl UploadStore {
    pub fn new(mode: ReviewMode, config: AppConfig) -> Self {
        Self {
            mode,
            files: [RwSignal::new_local(None), RwSignal::new_local(None)],
            status: RwSignal::new(UploadStatus::default()),
            config: StoredValue::new(config),
        }
    }

    /// Slot indices used by the current mode
    pub fn slots(&self) -> std::ops::Range<usize> {
        0..self.mode.slot_count()
    }

    pub fn file(&self, slot: usize) -> RwSignal<Option<File>, LocalStorage> {
        self.files[slot]
    }

    /// Number of filled slots, tracked
    pub fn filled_slots(&self) -> usize {
        self.slots()
            .filter(|&slot| self.files[slot].with(|f| f.is_some()))
            .count()
    }

    pub fn status(&self) -> ReadSignal<UploadStatus> {
        self.status.read_only()
    }

    /// Uploads the selected files and starts the analysis.
    ///
    /// Service failures end up in `status.error`; `Err` is returned only when
    /// called without every slot filled.
    pub async fn upload_file(self) -> Result<(), String> {
        let selected: Vec<Option<File>> = self
            .slots()
            .map(|slot| self.files[slot].get_untracked())
            .collect();
        let files = collect_files(&selected, self.mode)?;

        self.status.set(UploadStatus::default());
        let config = self.config.get_value();

        let result = api::submit_for_analysis(&config, self.mode, &files).await;
        match &result {
            Ok(response) => log::info!("Analysis {} created", response.key),
            Err(e) => log::error!("Contract upload failed: {}", e),
        }
        self.status.set(UploadStatus::from_result(result));
        Ok(())
    }
}

impl DeclaredType for File {
    fn declared_type(&self) -> String {
        self.type_()
    }
}

/// Object URLs backed by `URL.createObjectURL` / `URL.revokeObjectURL`
pub struct BrowserObjectUrls;

impl ObjectUrls<File> for BrowserObjectUrls {
    fn create(&mut self, file: &File) -> Option<String> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Failed to create preview URL for {}: {:?}", file.name(), e);
                None
            }
        }
    }

    fn revoke(&mut self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke preview URL {}: {:?}", url, e);
        }
    }
}
