use crate::foundation::error::{HexshiftError, HexshiftResult};
use crate::preset::record::PresetRecord;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const CATALOG_VERSION: u32 = 1;
const CATALOG_FILE: &str = "presets.json";
const APP_DIR: &str = "hexshift";

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Catalog {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    presets: BTreeMap<String, PresetRecord>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: CATALOG_VERSION,
            presets: BTreeMap::new(),
        }
    }
}

/// File-backed preset catalog.
///
/// The catalog is a single JSON document; every operation reloads it, and
/// saves go through a sibling `.tmp` file plus rename, so a failed save
/// never corrupts the previous catalog.
#[derive(Clone, Debug)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    /// Open the per-user catalog under the platform config directory
    /// (`<config>/hexshift/presets.json`, or `~/.hexshift/presets.json`
    /// when no config directory exists), creating the directory if needed.
    pub fn open_default() -> HexshiftResult<Self> {
        let dir = dirs::config_dir()
            .map(|p| p.join(APP_DIR))
            .or_else(|| dirs::home_dir().map(|h| h.join(format!(".{APP_DIR}"))))
            .ok_or_else(|| HexshiftError::preset("no config or home directory available"))?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| HexshiftError::preset(format!("create '{}': {e}", dir.display())))?;
        Ok(Self {
            path: dir.join(CATALOG_FILE),
        })
    }

    /// Use an explicit catalog file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sorted names of all stored presets.
    pub fn list(&self) -> Vec<String> {
        self.load().presets.into_keys().collect()
    }

    /// Fetch one preset by name.
    pub fn get(&self, name: &str) -> Option<PresetRecord> {
        let mut catalog = self.load();
        catalog.presets.remove(name)
    }

    /// Store `record` under `name`, replacing any existing entry.
    pub fn put(&self, name: &str, record: PresetRecord) -> HexshiftResult<()> {
        let mut catalog = self.load();
        catalog.presets.insert(name.to_owned(), record);
        self.save(&catalog)
    }

    /// Remove the preset named `name`; reports whether anything was removed.
    pub fn delete(&self, name: &str) -> HexshiftResult<bool> {
        let mut catalog = self.load();
        if catalog.presets.remove(name).is_none() {
            return Ok(false);
        }
        self.save(&catalog)?;
        Ok(true)
    }

    // Missing and unreadable catalogs both load as empty; a bad file is
    // surfaced in the log, not as an error.
    fn load(&self) -> Catalog {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Catalog::default(),
        };
        match serde_json::from_slice(&bytes) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "unreadable preset catalog, starting empty"
                );
                Catalog::default()
            }
        }
    }

    fn save(&self, catalog: &Catalog) -> HexshiftResult<()> {
        let json = serde_json::to_string_pretty(catalog)
            .map_err(|e| HexshiftError::preset(format!("encode catalog: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| HexshiftError::preset(format!("write '{}': {e}", tmp.display())))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            HexshiftError::preset(format!("replace '{}': {e}", self.path.display()))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            count = catalog.presets.len(),
            "saved preset catalog"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preset/store.rs"]
mod tests;
