//! Data model and image catalogs for nodebaker.
//!
//! This crate defines the schema layer: distro identifiers and their OS-family
//! classification (`Distro`, `OsFamily`), marketplace and Shared Image Gallery
//! image references (`OsImageConfig`, `SigImageConfig`), the per-cloud legacy
//! catalog (`LegacyCatalog`), per-region SIG catalogs
//! (`SigAzureEnvironmentSpecConfig`) with the `SigCatalogProvider` seam, node
//! bootstrapping request/response types, and the built-in catalog data.

pub mod builtin;
pub mod distro;
pub mod image;
pub mod legacy;
pub mod node;
pub mod sig;
pub mod types;

pub use builtin::{builtin_legacy_catalog, builtin_sig_templates};
pub use distro::{
    CustomizedKind, DistroKind, OsFamily, CUSTOMIZED_IMAGE, CUSTOMIZED_IMAGE_KATA,
    CUSTOMIZED_WINDOWS_OS_IMAGE,
};
pub use image::{OsImageConfig, SigImageConfig};
pub use legacy::{CloudImages, LegacyCatalog};
pub use node::{
    AgentPoolProfile, CloudSpecConfig, ContainerService, EnvironmentInfo, NodeBootstrapping,
    NodeBootstrappingConfiguration, OsType,
};
pub use sig::{
    GalleryCatalog, SigAzureEnvironmentSpecConfig, SigCatalogProvider, SigConfig,
    SigGalleryConfig, SigImageMap, SigImageTemplate, SigTemplates,
};
pub use types::{CloudName, Distro, AZURE_PUBLIC_CLOUD};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("don't have settings for cloud {0}")]
    UnknownCloud(String),
    #[error("SIG catalog resolution failed: {0}")]
    SigResolution(String),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}
