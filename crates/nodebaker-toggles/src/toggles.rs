use crate::entity::{Entity, Field};
use crate::{OverrideStore, ToggleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One override rule: when every `matches` field of an entity has one of the
/// listed values, `versions` replaces the image version for each listed distro.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OverrideRule {
    pub name: String,
    /// Empty means the rule applies to every entity.
    #[serde(default)]
    pub matches: BTreeMap<Field, Vec<String>>,
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
}

impl OverrideRule {
    pub fn applies_to(&self, entity: &Entity<'_>) -> bool {
        self.matches.iter().all(|(field, values)| {
            let actual = entity.field(*field);
            values.iter().any(|v| v.eq_ignore_ascii_case(actual))
        })
    }
}

/// Rule-based override store.
///
/// Rules are evaluated in file order and merged; a later matching rule wins
/// for a distro key set by an earlier one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Toggles {
    #[serde(default)]
    pub linux_node_image_version: Vec<OverrideRule>,
}

impl Toggles {
    /// Toggles with no rules: every lookup yields no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule(mut self, rule: OverrideRule) -> Self {
        self.linux_node_image_version.push(rule);
        self
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ToggleError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ToggleError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load rules from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ToggleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ToggleError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl OverrideStore for Toggles {
    fn linux_node_image_version(&self, entity: &Entity<'_>) -> BTreeMap<String, String> {
        let mut overrides = BTreeMap::new();
        for rule in &self.linux_node_image_version {
            if rule.applies_to(entity) {
                debug!("override rule '{}' matched", rule.name);
                overrides.extend(rule.versions.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        overrides
    }
}
