//! Node bootstrapping request and response types.

use crate::image::{OsImageConfig, SigImageConfig};
use crate::sig::SigConfig;
use crate::types::{CloudName, Distro};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum OsType {
    #[default]
    Linux,
    Windows,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudSpecConfig {
    pub cloud_name: CloudName,
}

/// Region and identity of a deployment, without any node pool details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentInfo {
    pub region: String,
    #[serde(default)]
    pub subscription_id: String,
    #[serde(default)]
    pub tenant_id: String,
}

impl EnvironmentInfo {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_owned(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentPoolProfile {
    pub name: String,
    pub distro: Distro,
    #[serde(default)]
    pub os_type: OsType,
}

impl AgentPoolProfile {
    pub fn is_windows(&self) -> bool {
        self.os_type == OsType::Windows
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerService {
    pub location: String,
    #[serde(default)]
    pub subscription_id: String,
    #[serde(default)]
    pub tenant_id: String,
}

/// Everything needed to bootstrap one node.
///
/// `extra` carries settings only the template generator reads; resolution
/// never looks at it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeBootstrappingConfiguration {
    pub agent_pool_profile: AgentPoolProfile,
    pub cloud_spec_config: CloudSpecConfig,
    pub sig_config: SigConfig,
    pub container_service: ContainerService,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

/// Provisioning artifact for a node: boot payload, provisioning command, and
/// whichever image references resolution produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeBootstrapping {
    pub custom_data: String,
    pub cse: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_image_config: Option<OsImageConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sig_image_config: Option<SigImageConfig>,
}
