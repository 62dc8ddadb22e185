use crate::config::BakerConfig;
use crate::generator::TemplateGenerator;
use crate::vhd::{CachedOnVhd, VhdCache};
use crate::CoreError;
use nodebaker_schema::{
    builtin_legacy_catalog, builtin_sig_templates, Distro, EnvironmentInfo, GalleryCatalog,
    LegacyCatalog, NodeBootstrapping, NodeBootstrappingConfiguration, OsFamily,
    SigCatalogProvider, SigConfig, SigImageConfig, SigTemplates,
};
use nodebaker_toggles::{Entity, OverrideStore, Toggles};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves node images and assembles node bootstrapping artifacts.
///
/// Catalogs, overrides and VHD inventories are read-only once the baker is
/// built, so a single instance can serve concurrent callers.
pub struct Baker {
    legacy: LegacyCatalog,
    sig_catalog: Box<dyn SigCatalogProvider>,
    generator: Box<dyn TemplateGenerator>,
    toggles: Box<dyn OverrideStore>,
    vhd_cache: Arc<VhdCache>,
}

impl Baker {
    /// Create a baker with no version overrides, reading VHD inventories from
    /// the process-wide [`VhdCache::global`].
    pub fn new(
        legacy: LegacyCatalog,
        sig_catalog: impl SigCatalogProvider + 'static,
        generator: impl TemplateGenerator + 'static,
    ) -> Self {
        Self {
            legacy,
            sig_catalog: Box::new(sig_catalog),
            generator: Box::new(generator),
            toggles: Box::new(Toggles::new()),
            vhd_cache: VhdCache::global(),
        }
    }

    /// Create a baker over the catalogs compiled into `nodebaker-schema`.
    pub fn with_builtin_catalogs(
        generator: impl TemplateGenerator + 'static,
    ) -> Result<Self, CoreError> {
        Ok(Self::new(
            builtin_legacy_catalog()?,
            GalleryCatalog::new(builtin_sig_templates()?),
            generator,
        ))
    }

    pub fn from_config(
        config: &BakerConfig,
        generator: impl TemplateGenerator + 'static,
    ) -> Result<Self, CoreError> {
        let legacy = match &config.legacy_catalog {
            Some(path) => {
                let legacy = LegacyCatalog::load(path)?;
                info!(
                    "loaded legacy catalog from {} for clouds [{}]",
                    path.display(),
                    legacy.cloud_names().join(", ")
                );
                legacy
            }
            None => builtin_legacy_catalog()?,
        };
        let templates = match &config.sig_catalog {
            Some(path) => {
                info!("loading SIG catalog from {}", path.display());
                SigTemplates::load(path)?
            }
            None => builtin_sig_templates()?,
        };

        let mut baker = Self::new(legacy, GalleryCatalog::new(templates), generator);
        if let Some(path) = &config.toggles {
            info!("loading image version toggles from {}", path.display());
            baker = baker.with_toggles(Toggles::load(path)?);
        }
        Ok(baker)
    }

    #[must_use]
    pub fn with_toggles(mut self, toggles: impl OverrideStore + 'static) -> Self {
        self.toggles = Box::new(toggles);
        self
    }

    #[must_use]
    pub fn with_vhd_cache(mut self, vhd_cache: Arc<VhdCache>) -> Self {
        self.vhd_cache = vhd_cache;
        self
    }

    /// Produce the boot payload, provisioning command and image references for
    /// one node.
    pub fn node_bootstrapping(
        &self,
        config: &NodeBootstrappingConfiguration,
    ) -> Result<NodeBootstrapping, CoreError> {
        let distro = &config.agent_pool_profile.distro;
        info!(
            "bootstrapping node pool '{}' with distro {distro}",
            config.agent_pool_profile.name
        );

        let mut node_bootstrapping = NodeBootstrapping {
            custom_data: self.generator.node_bootstrapping_payload(config),
            cse: self.generator.node_bootstrapping_cmd(config),
            ..NodeBootstrapping::default()
        };

        if distro.is_customized() {
            debug!("distro {distro} is a customized image; skipping catalog resolution");
            return Ok(node_bootstrapping);
        }

        node_bootstrapping.os_image_config = self
            .legacy
            .lookup(&config.cloud_spec_config.cloud_name, distro)?
            .cloned();

        let region = &config.container_service.location;
        let sig_spec = self.sig_catalog.resolve(&config.sig_config, region)?;
        node_bootstrapping.sig_image_config = sig_spec.find(distro).map(|(family, image)| {
            debug!(
                "found SIG image {} for {distro} in {family} catalog",
                image.resource_id()
            );
            image
        });

        if node_bootstrapping.sig_image_config.is_none()
            && node_bootstrapping.os_image_config.is_none()
        {
            return Err(CoreError::ImageNotFound {
                distro: distro.to_string(),
                region: region.clone(),
            });
        }

        if !config.agent_pool_profile.is_windows() && !distro.is_windows() {
            if let Some(image) = node_bootstrapping.sig_image_config.as_mut() {
                let overrides = self.image_version_overrides(Entity::FromConfiguration(config));
                apply_override(&overrides, distro, image);
            }
        }

        Ok(node_bootstrapping)
    }

    /// Latest SIG image for one distro in the environment's region.
    pub fn latest_sig_image_config(
        &self,
        sig_config: &SigConfig,
        distro: &Distro,
        env: &EnvironmentInfo,
    ) -> Result<SigImageConfig, CoreError> {
        info!("resolving latest SIG image for {distro} in {}", env.region);
        let sig_spec = self.sig_catalog.resolve(sig_config, &env.region)?;

        let (_, mut image) = sig_spec
            .find(distro)
            .ok_or_else(|| CoreError::ImageNotFound {
                distro: distro.to_string(),
                region: env.region.clone(),
            })?;

        if !distro.is_windows() {
            let overrides = self.image_version_overrides(Entity::FromEnvironment(env));
            apply_override(&overrides, distro, &mut image);
        }
        Ok(image)
    }

    /// Every distro's SIG image in the environment's region.
    ///
    /// Families merge in [`OsFamily::PRECEDENCE`] order, so a distro listed in
    /// two families keeps the later family's image. Windows images never take
    /// overrides.
    pub fn distro_sig_image_config(
        &self,
        sig_config: &SigConfig,
        env: &EnvironmentInfo,
    ) -> Result<BTreeMap<Distro, SigImageConfig>, CoreError> {
        info!("resolving SIG image catalog for region {}", env.region);
        let sig_spec = self.sig_catalog.resolve(sig_config, &env.region)?;
        let overrides = self.image_version_overrides(Entity::FromEnvironment(env));

        let mut all_distros = BTreeMap::new();
        for family in OsFamily::PRECEDENCE {
            for (distro, image) in sig_spec.sub_catalog(family) {
                let mut image = image.clone();
                if family != OsFamily::Windows {
                    apply_override(&overrides, distro, &mut image);
                }
                all_distros.insert(distro.clone(), image);
            }
        }
        Ok(all_distros)
    }

    pub fn cached_versions_on_vhd(&self) -> Result<CachedOnVhd, CoreError> {
        Ok(self.vhd_cache.snapshot()?)
    }

    fn image_version_overrides(&self, entity: Entity<'_>) -> BTreeMap<String, String> {
        self.toggles.linux_node_image_version(&entity)
    }
}

fn apply_override(
    overrides: &BTreeMap<String, String>,
    distro: &Distro,
    image: &mut SigImageConfig,
) {
    if let Some(version) = overrides.get(distro.as_str()) {
        debug!(
            "overriding {distro} image version {} -> {version}",
            image.version
        );
        image.version.clone_from(version);
    }
}
