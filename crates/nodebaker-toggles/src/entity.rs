use nodebaker_schema::{EnvironmentInfo, NodeBootstrappingConfiguration};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute of an [`Entity`] that override rules can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Region,
    SubscriptionId,
    TenantId,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Region => "region",
            Field::SubscriptionId => "subscription_id",
            Field::TenantId => "tenant_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject of an override lookup: either a full node configuration or a bare
/// environment descriptor.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    FromConfiguration(&'a NodeBootstrappingConfiguration),
    FromEnvironment(&'a EnvironmentInfo),
}

impl<'a> Entity<'a> {
    pub fn field(&self, field: Field) -> &'a str {
        match (*self, field) {
            (Entity::FromConfiguration(c), Field::Region) => &c.container_service.location,
            (Entity::FromConfiguration(c), Field::SubscriptionId) => {
                &c.container_service.subscription_id
            }
            (Entity::FromConfiguration(c), Field::TenantId) => &c.container_service.tenant_id,
            (Entity::FromEnvironment(e), Field::Region) => &e.region,
            (Entity::FromEnvironment(e), Field::SubscriptionId) => &e.subscription_id,
            (Entity::FromEnvironment(e), Field::TenantId) => &e.tenant_id,
        }
    }
}

impl<'a> From<&'a NodeBootstrappingConfiguration> for Entity<'a> {
    fn from(config: &'a NodeBootstrappingConfiguration) -> Self {
        Entity::FromConfiguration(config)
    }
}

impl<'a> From<&'a EnvironmentInfo> for Entity<'a> {
    fn from(env: &'a EnvironmentInfo) -> Self {
        Entity::FromEnvironment(env)
    }
}
