use crate::image::OsImageConfig;
use crate::types::{CloudName, Distro};
use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Per-cloud marketplace image table, keyed by distro.
pub type CloudImages = BTreeMap<Distro, OsImageConfig>;

/// Legacy (non-SIG) image catalog: cloud name → distro → image.
///
/// On disk this is a TOML table per cloud:
///
/// ```toml
/// [AzurePublicCloud."aks-ubuntu-containerd-18.04"]
/// image_offer = "UbuntuServer"
/// image_sku = "18.04-LTS"
/// image_publisher = "Canonical"
/// image_version = "latest"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LegacyCatalog {
    clouds: BTreeMap<CloudName, CloudImages>,
}

impl LegacyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Insert or replace a single entry.
    pub fn insert(
        &mut self,
        cloud: impl Into<CloudName>,
        distro: impl Into<Distro>,
        image: OsImageConfig,
    ) {
        self.clouds
            .entry(cloud.into())
            .or_default()
            .insert(distro.into(), image);
    }

    /// Image table for a cloud. A cloud missing from the catalog is fatal to
    /// the caller; a distro missing from the table is not.
    pub fn cloud(&self, cloud: &CloudName) -> Result<&CloudImages, CatalogError> {
        self.clouds
            .get(cloud)
            .ok_or_else(|| CatalogError::UnknownCloud(cloud.to_string()))
    }

    pub fn lookup(
        &self,
        cloud: &CloudName,
        distro: &Distro,
    ) -> Result<Option<&OsImageConfig>, CatalogError> {
        Ok(self.cloud(cloud)?.get(distro))
    }

    pub fn cloud_names(&self) -> Vec<&str> {
        self.clouds.keys().map(CloudName::as_str).collect()
    }
}
