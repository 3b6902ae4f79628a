//! Preset store persisted at `~/.config/tfswap/presets.yml`.
//!
//! A preset bundles the arguments of one swap (provider, binary path, and an
//! optional pre-update shell command) under a name for repeat use.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A saved swap workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Provider to update.
    pub provider: String,
    /// Absolute path to the replacement binary.
    pub bin_path: PathBuf,
    /// Shell command to run before swapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_update: Option<String>,
}

/// On-disk store of presets, keyed by name.
///
/// The store carries its backing path, so commands receive it by reference
/// and tests can point it anywhere. Mutations are persisted explicitly via
/// [`PresetStore::save`].
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    presets: BTreeMap<String, Preset>,
}

impl PresetStore {
    /// Load the store from the default path, creating an empty store file on
    /// first access.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load the store backed by `path`. A missing file is created empty.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            let store = Self {
                path,
                presets: BTreeMap::new(),
            };
            store.save()?;
            return Ok(store);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        // A truncated store file deserializes as YAML null, not a mapping.
        let presets = if contents.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_yml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?
        };
        Ok(Self { path, presets })
    }

    /// Persist the store to its backing path.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = serde_yml::to_string(&self.presets)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// The preset named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Insert or replace the preset named `name`.
    pub fn add(&mut self, name: String, preset: Preset) {
        self.presets.insert(name, preset);
    }

    /// Remove and return the preset named `name`.
    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        self.presets.remove(name)
    }

    /// Iterate over `(name, preset)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Preset)> {
        self.presets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether the store holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Default path: `~/.config/tfswap/presets.yml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("tfswap")
            .join("presets.yml")
    }
}
