//! Node image version overrides for nodebaker.
//!
//! An override lookup takes an [`Entity`] (built from either a full node
//! configuration or a bare environment descriptor) and returns a map from
//! distro name to the image version that should replace the catalog's.
//! [`Toggles`] is the rule-based store loaded from TOML or JSON.

pub mod entity;
pub mod toggles;

pub use entity::{Entity, Field};
pub use toggles::{OverrideRule, Toggles};

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("failed to read toggles file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse toggles TOML: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("failed to parse toggles JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("unsupported toggles file format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Source of per-entity image version overrides.
pub trait OverrideStore: Send + Sync {
    /// Distro name → overriding version. A missing key means no override.
    fn linux_node_image_version(&self, entity: &Entity<'_>) -> BTreeMap<String, String>;
}
