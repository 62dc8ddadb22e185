//! Node image resolution and bootstrap assembly for nodebaker.
//!
//! This crate ties together the catalogs from `nodebaker-schema` and the
//! override rules from `nodebaker-toggles` into the [`Baker`]: the API that
//! resolves which image (and which version of it) a node boots, enumerates the
//! images of a region, and assembles the node bootstrapping artifact through a
//! pluggable [`TemplateGenerator`]. It also validates and snapshots the VHD
//! inventories ([`VhdCache`]).

pub mod baker;
pub mod config;
pub mod generator;
pub mod vhd;

pub use baker::Baker;
pub use config::BakerConfig;
pub use generator::TemplateGenerator;
pub use vhd::{
    CacheError, CachedOnVhd, ComponentVersions, ContainerImage, ContainerImages, DownloadedFile,
    DownloadedFiles, Inventory, VhdCache, VhdManifest,
};

use nodebaker_schema::CatalogError;
use nodebaker_toggles::ToggleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("don't have settings for cloud {cloud}")]
    UnknownCloud { cloud: String },
    #[error("SIG catalog resolution failed: {0}")]
    SigResolution(String),
    #[error("can't find image for distro {distro} in region {region}")]
    ImageNotFound { distro: String, region: String },
    #[error("cached versions from {0} are not available")]
    CacheNotInitialized(Inventory),
    #[error("catalog error: {0}")]
    Catalog(CatalogError),
    #[error("toggles error: {0}")]
    Toggle(#[from] ToggleError),
    #[error("VHD cache error: {0}")]
    Cache(CacheError),
    #[error("failed to parse baker config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownCloud(cloud) => CoreError::UnknownCloud { cloud },
            CatalogError::SigResolution(msg) => CoreError::SigResolution(msg),
            other => CoreError::Catalog(other),
        }
    }
}

impl From<CacheError> for CoreError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::NotInitialized(inventory) => CoreError::CacheNotInitialized(inventory),
            other => CoreError::Cache(other),
        }
    }
}
