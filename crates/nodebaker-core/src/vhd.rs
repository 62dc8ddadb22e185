//! Inventories of what is baked into the node VHD.
//!
//! Each inventory is populated once, before any resolution request is served,
//! and read-only afterwards. Snapshots share the inventories through `Arc`
//! instead of copying them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inventory {
    Manifest,
    ContainerImages,
    DownloadedFiles,
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Inventory::Manifest => "manifest",
            Inventory::ContainerImages => "component container images",
            Inventory::DownloadedFiles => "component downloaded files",
        })
    }
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cached versions from {0} are not available")]
    NotInitialized(Inventory),
    #[error("cached versions from {0} are already initialized")]
    AlreadyInitialized(Inventory),
    #[error("failed to parse VHD inventory: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentVersions {
    #[serde(default)]
    pub versions: Vec<String>,
}

/// Component name → versions recorded in the VHD build manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct VhdManifest {
    pub components: BTreeMap<String, ComponentVersions>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerImage {
    pub download_url: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadedFile {
    pub file_name: String,
    pub download_location: String,
    pub download_url: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

pub type ContainerImages = BTreeMap<String, ContainerImage>;
pub type DownloadedFiles = BTreeMap<String, DownloadedFile>;

#[derive(Debug, Deserialize)]
struct ComponentsFile {
    container_images: ContainerImages,
    download_files: DownloadedFiles,
}

/// Snapshot of all three VHD inventories.
#[derive(Debug, Clone)]
pub struct CachedOnVhd {
    pub from_manifest: Arc<VhdManifest>,
    pub from_component_container_images: Arc<ContainerImages>,
    pub from_component_downloaded_files: Arc<DownloadedFiles>,
}

#[derive(Debug, Default)]
pub struct VhdCache {
    manifest: OnceLock<Arc<VhdManifest>>,
    container_images: OnceLock<Arc<ContainerImages>>,
    downloaded_files: OnceLock<Arc<DownloadedFiles>>,
    // Serializes writers of the two component inventories.
    components: Mutex<()>,
}

impl VhdCache {
    /// Fresh, unpopulated inventories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide inventories.
    pub fn global() -> Arc<VhdCache> {
        static GLOBAL: OnceLock<Arc<VhdCache>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(VhdCache::new())))
    }

    pub fn set_manifest(&self, manifest: VhdManifest) -> Result<(), CacheError> {
        self.manifest
            .set(Arc::new(manifest))
            .map_err(|_| CacheError::AlreadyInitialized(Inventory::Manifest))
    }

    pub fn set_container_images(&self, images: ContainerImages) -> Result<(), CacheError> {
        let _guard = self.lock_components();
        self.store_container_images(images)
    }

    pub fn set_downloaded_files(&self, files: DownloadedFiles) -> Result<(), CacheError> {
        let _guard = self.lock_components();
        self.store_downloaded_files(files)
    }

    /// Populate the manifest inventory from the VHD build's `manifest.json`.
    pub fn load_manifest_json(&self, json: &str) -> Result<(), CacheError> {
        let manifest: VhdManifest = serde_json::from_str(json)?;
        debug!("loaded {} manifest components", manifest.components.len());
        self.set_manifest(manifest)
    }

    /// Populate both component inventories from `components.json`.
    ///
    /// Both sections must be present, and neither inventory may be set yet;
    /// on error the cache is left unchanged.
    pub fn load_components_json(&self, json: &str) -> Result<(), CacheError> {
        let components: ComponentsFile = serde_json::from_str(json)?;

        let _guard = self.lock_components();
        if self.container_images.get().is_some() {
            return Err(CacheError::AlreadyInitialized(Inventory::ContainerImages));
        }
        if self.downloaded_files.get().is_some() {
            return Err(CacheError::AlreadyInitialized(Inventory::DownloadedFiles));
        }

        debug!(
            "loaded {} container images and {} downloaded files",
            components.container_images.len(),
            components.download_files.len()
        );
        self.store_container_images(components.container_images)?;
        self.store_downloaded_files(components.download_files)
    }

    /// Snapshot all three inventories, failing on the first one never set.
    pub fn snapshot(&self) -> Result<CachedOnVhd, CacheError> {
        let from_manifest = self
            .manifest
            .get()
            .ok_or(CacheError::NotInitialized(Inventory::Manifest))?;
        let from_component_container_images = self
            .container_images
            .get()
            .ok_or(CacheError::NotInitialized(Inventory::ContainerImages))?;
        let from_component_downloaded_files = self
            .downloaded_files
            .get()
            .ok_or(CacheError::NotInitialized(Inventory::DownloadedFiles))?;

        Ok(CachedOnVhd {
            from_manifest: Arc::clone(from_manifest),
            from_component_container_images: Arc::clone(from_component_container_images),
            from_component_downloaded_files: Arc::clone(from_component_downloaded_files),
        })
    }

    fn lock_components(&self) -> MutexGuard<'_, ()> {
        self.components.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn store_container_images(&self, images: ContainerImages) -> Result<(), CacheError> {
        self.container_images
            .set(Arc::new(images))
            .map_err(|_| CacheError::AlreadyInitialized(Inventory::ContainerImages))
    }

    fn store_downloaded_files(&self, files: DownloadedFiles) -> Result<(), CacheError> {
        self.downloaded_files
            .set(Arc::new(files))
            .map_err(|_| CacheError::AlreadyInitialized(Inventory::DownloadedFiles))
    }
}
