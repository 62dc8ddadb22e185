//! Shared Image Gallery catalogs: per-region environment specs, the
//! templates they are built from, and the provider seam that resolves them.

use crate::distro::OsFamily;
use crate::image::SigImageConfig;
use crate::types::{CloudName, Distro};
use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Family sub-catalog: distro → SIG image.
pub type SigImageMap = BTreeMap<Distro, SigImageConfig>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigGalleryConfig {
    pub gallery_name: String,
    pub resource_group: String,
}

/// Selector for the galleries a deployment pulls images from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigConfig {
    pub tenant_id: String,
    pub subscription_id: String,
    #[serde(default)]
    pub galleries: BTreeMap<String, SigGalleryConfig>,
}

/// SIG catalog for one cloud and region, split by OS family.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigAzureEnvironmentSpecConfig {
    pub cloud_name: CloudName,
    #[serde(default)]
    pub sig_ubuntu_image_config: SigImageMap,
    #[serde(default)]
    pub sig_cbl_mariner_image_config: SigImageMap,
    #[serde(default)]
    pub sig_azure_linux_image_config: SigImageMap,
    #[serde(default)]
    pub sig_windows_image_config: SigImageMap,
    #[serde(default)]
    pub sig_ubuntu_edge_zone_image_config: SigImageMap,
}

impl SigAzureEnvironmentSpecConfig {
    pub fn sub_catalog(&self, family: OsFamily) -> &SigImageMap {
        match family {
            OsFamily::Ubuntu => &self.sig_ubuntu_image_config,
            OsFamily::Mariner => &self.sig_cbl_mariner_image_config,
            OsFamily::AzureLinux => &self.sig_azure_linux_image_config,
            OsFamily::Windows => &self.sig_windows_image_config,
            OsFamily::UbuntuEdgeZone => &self.sig_ubuntu_edge_zone_image_config,
        }
    }

    pub fn sub_catalog_mut(&mut self, family: OsFamily) -> &mut SigImageMap {
        match family {
            OsFamily::Ubuntu => &mut self.sig_ubuntu_image_config,
            OsFamily::Mariner => &mut self.sig_cbl_mariner_image_config,
            OsFamily::AzureLinux => &mut self.sig_azure_linux_image_config,
            OsFamily::Windows => &mut self.sig_windows_image_config,
            OsFamily::UbuntuEdgeZone => &mut self.sig_ubuntu_edge_zone_image_config,
        }
    }

    /// Find the image for `distro`, scanning families in
    /// [`OsFamily::PRECEDENCE`] order. Returns a copy along with the family it
    /// was found in.
    pub fn find(&self, distro: &Distro) -> Option<(OsFamily, SigImageConfig)> {
        OsFamily::PRECEDENCE.into_iter().find_map(|family| {
            self.sub_catalog(family)
                .get(distro)
                .map(|image| (family, image.clone()))
        })
    }

    pub fn len(&self) -> usize {
        OsFamily::PRECEDENCE
            .iter()
            .map(|family| self.sub_catalog(*family).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Region-independent description of one SIG image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SigImageTemplate {
    pub distro: Distro,
    /// Key into [`SigConfig::galleries`].
    pub gallery: String,
    pub definition: String,
    pub version: String,
    /// Regions the image is published to. Empty means every region.
    #[serde(default)]
    pub regions: Vec<String>,
}

impl SigImageTemplate {
    fn available_in(&self, region: &str) -> bool {
        self.regions.is_empty() || self.regions.iter().any(|r| r.eq_ignore_ascii_case(region))
    }
}

/// Templates for every family, as read from a SIG catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SigTemplates {
    #[serde(default)]
    pub cloud_name: Option<CloudName>,
    #[serde(default)]
    pub ubuntu: Vec<SigImageTemplate>,
    #[serde(default)]
    pub mariner: Vec<SigImageTemplate>,
    #[serde(default)]
    pub azure_linux: Vec<SigImageTemplate>,
    #[serde(default)]
    pub windows: Vec<SigImageTemplate>,
    #[serde(default)]
    pub ubuntu_edge_zone: Vec<SigImageTemplate>,
}

impl SigTemplates {
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn family(&self, family: OsFamily) -> &[SigImageTemplate] {
        match family {
            OsFamily::Ubuntu => &self.ubuntu,
            OsFamily::Mariner => &self.mariner,
            OsFamily::AzureLinux => &self.azure_linux,
            OsFamily::Windows => &self.windows,
            OsFamily::UbuntuEdgeZone => &self.ubuntu_edge_zone,
        }
    }
}

/// Resolves the SIG catalog for a gallery selector and region.
pub trait SigCatalogProvider: Send + Sync {
    fn resolve(
        &self,
        sig_config: &SigConfig,
        region: &str,
    ) -> Result<SigAzureEnvironmentSpecConfig, CatalogError>;
}

/// Builds SIG environments by binding [`SigTemplates`] to the galleries named
/// in a [`SigConfig`].
#[derive(Debug, Clone)]
pub struct GalleryCatalog {
    templates: SigTemplates,
}

impl GalleryCatalog {
    pub fn new(templates: SigTemplates) -> Self {
        Self { templates }
    }
}

impl SigCatalogProvider for GalleryCatalog {
    fn resolve(
        &self,
        sig_config: &SigConfig,
        region: &str,
    ) -> Result<SigAzureEnvironmentSpecConfig, CatalogError> {
        if sig_config.tenant_id.is_empty() {
            return Err(CatalogError::SigResolution(
                "sig_config.tenant_id is required".to_owned(),
            ));
        }
        if sig_config.subscription_id.is_empty() {
            return Err(CatalogError::SigResolution(
                "sig_config.subscription_id is required".to_owned(),
            ));
        }
        if region.is_empty() {
            return Err(CatalogError::SigResolution(
                "region is required to resolve SIG images".to_owned(),
            ));
        }

        let mut spec = SigAzureEnvironmentSpecConfig {
            cloud_name: self.templates.cloud_name.clone().unwrap_or_default(),
            ..SigAzureEnvironmentSpecConfig::default()
        };

        for family in OsFamily::PRECEDENCE {
            let images = spec.sub_catalog_mut(family);
            for template in self.templates.family(family) {
                if !template.available_in(region) {
                    continue;
                }
                let gallery = sig_config.galleries.get(&template.gallery).ok_or_else(|| {
                    CatalogError::SigResolution(format!(
                        "gallery '{}' for distro {} is not configured",
                        template.gallery, template.distro
                    ))
                })?;
                images.insert(
                    template.distro.clone(),
                    SigImageConfig {
                        resource_group: gallery.resource_group.clone(),
                        gallery: gallery.gallery_name.clone(),
                        definition: template.definition.clone(),
                        version: template.version.clone(),
                        subscription_id: sig_config.subscription_id.clone(),
                    },
                );
            }
        }

        debug!("resolved {} SIG images for region {region}", spec.len());
        Ok(spec)
    }
}
