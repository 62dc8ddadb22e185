use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where a [`crate::Baker`] reads its catalogs and override rules from.
///
/// ```toml
/// legacy_catalog = "/etc/nodebaker/legacy.toml"
/// sig_catalog = "/etc/nodebaker/sig.toml"
/// toggles = "/etc/nodebaker/toggles.json"
/// ```
///
/// Unset catalog paths fall back to the built-in catalogs; an unset toggles
/// path means no overrides. Relative paths resolve against the config file's
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BakerConfig {
    #[serde(default)]
    pub legacy_catalog: Option<PathBuf>,
    #[serde(default)]
    pub sig_catalog: Option<PathBuf>,
    #[serde(default)]
    pub toggles: Option<PathBuf>,
}

impl BakerConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, CoreError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            for entry in [
                &mut config.legacy_catalog,
                &mut config.sig_catalog,
                &mut config.toggles,
            ]
            .into_iter()
            .flatten()
            {
                if entry.is_relative() {
                    *entry = base.join(&*entry);
                }
            }
        }
        Ok(config)
    }
}
