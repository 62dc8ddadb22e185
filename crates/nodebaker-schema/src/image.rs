use serde::{Deserialize, Serialize};

/// Marketplace (non-SIG) image reference from the per-cloud legacy catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OsImageConfig {
    pub image_offer: String,
    pub image_sku: String,
    pub image_publisher: String,
    pub image_version: String,
}

/// Shared Image Gallery image reference.
///
/// Values handed to callers are always copies; overriding `version` never
/// touches the catalog the config came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SigImageConfig {
    pub resource_group: String,
    pub gallery: String,
    pub definition: String,
    pub version: String,
    pub subscription_id: String,
}

impl SigImageConfig {
    /// ARM resource path of the image version this config points at.
    pub fn resource_id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Compute/galleries/{}/images/{}/versions/{}",
            self.subscription_id, self.resource_group, self.gallery, self.definition, self.version
        )
    }
}
