//! Fastener catalogs
//!
//! A catalog maps a fastener name to its kinds and each kind to a dimensional
//! record. Catalogs are built once through an explicit loading call and are
//! read-only afterwards.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{BOLTS_FILE, NUTS_FILE};
use crate::error::{FastenerError, FastenerResult};
use crate::record::{BoltRecord, FastenerRecord, NutRecord};
use crate::spec::{BoltSpec, FastenerSpec, NutSpec};

const BUILTIN_NUTS: &str = include_str!("../data/nuts.json");
const BUILTIN_BOLTS: &str = include_str!("../data/bolts.json");

/// Kind to record mapping for a single fastener name
pub type KindTable<R> = HashMap<String, R>;

/// Name to kind table mapping for a whole catalog
pub type CatalogTable<R> = HashMap<String, KindTable<R>>;

/// A table of fastener records indexed by name and kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog<R> {
    entries: CatalogTable<R>,
}

impl<R> Default for Catalog<R> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<R: FastenerRecord> Catalog<R> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON and validate every record
    pub fn from_json_str(json: &str) -> FastenerResult<Self>
    where
        R: DeserializeOwned,
    {
        let entries: CatalogTable<R> =
            serde_json::from_str(json).map_err(|e| FastenerError::Parse {
                catalog: R::CATALOG.to_string(),
                reason: e.to_string(),
            })?;
        let catalog = Self { entries };
        catalog.validate()?;

        tracing::debug!(
            "Loaded {} catalog: {} names, {} records",
            R::CATALOG,
            catalog.entries.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> FastenerResult<Self>
    where
        R: DeserializeOwned,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FastenerError::Io(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json_str(&content)?;
        if catalog.is_empty() {
            tracing::warn!("Catalog file {} contains no records", path.display());
        }
        Ok(catalog)
    }

    /// Return a catalog extended with one validated record
    pub fn with_record(
        mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        record: R,
    ) -> FastenerResult<Self> {
        record.validate()?;
        self.entries
            .entry(name.into())
            .or_default()
            .insert(kind.into(), record);
        Ok(self)
    }

    fn validate(&self) -> FastenerResult<()> {
        for (name, kinds) in &self.entries {
            for (kind, record) in kinds {
                record.validate().map_err(|e| match e {
                    FastenerError::InvalidDimension(reason) => FastenerError::InvalidDimension(
                        format!("{} {} ({}): {}", R::CATALOG, name, kind, reason),
                    ),
                    other => other,
                })?;
            }
        }
        Ok(())
    }

    /// Look up the record for `name` and `kind`
    pub fn get(&self, name: &str, kind: &str) -> FastenerResult<&R> {
        self.entries
            .get(name)
            .and_then(|kinds| kinds.get(kind))
            .ok_or_else(|| FastenerError::NotFound {
                name: name.to_string(),
                kind: kind.to_string(),
            })
    }

    /// Check whether a record exists
    pub fn contains(&self, name: &str, kind: &str) -> bool {
        self.get(name, kind).is_ok()
    }

    /// Resolve a fastener reference to a concrete, validated record
    ///
    /// Name references without a kind resolve with `default_kind`; explicit
    /// records pass through after validation.
    pub fn resolve(&self, spec: &FastenerSpec<R>, default_kind: &str) -> FastenerResult<R> {
        match spec {
            FastenerSpec::ByName { name, .. } => {
                self.get(name, spec.kind_or(default_kind)).cloned()
            }
            FastenerSpec::Explicit(record) => {
                record.validate()?;
                Ok(record.clone())
            }
        }
    }

    /// The whole table
    pub fn table(&self) -> &CatalogTable<R> {
        &self.entries
    }

    /// All kinds available for a name
    pub fn kinds_of(&self, name: &str) -> Option<&KindTable<R>> {
        self.entries.get(name)
    }

    /// Sorted fastener names
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted kinds available for a name (empty if the name is unknown)
    pub fn kinds(&self, name: &str) -> Vec<&str> {
        let mut kinds: Vec<&str> = self
            .entries
            .get(name)
            .map(|kinds| kinds.keys().map(String::as_str).collect())
            .unwrap_or_default();
        kinds.sort_unstable();
        kinds
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Check if the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The nut and bolt catalogs used by fastener operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FastenerCatalogs {
    /// Nut dimensions
    pub nuts: Catalog<NutRecord>,
    /// Bolt dimensions
    pub bolts: Catalog<BoltRecord>,
}

impl FastenerCatalogs {
    /// Create catalogs from already loaded tables
    pub fn new(nuts: Catalog<NutRecord>, bolts: Catalog<BoltRecord>) -> Self {
        Self { nuts, bolts }
    }

    /// The metric nut and bolt tables shipped with the crate
    pub fn builtin() -> FastenerResult<Self> {
        Self::from_json_str(BUILTIN_NUTS, BUILTIN_BOLTS)
    }

    /// Parse both catalogs from JSON strings
    pub fn from_json_str(nuts_json: &str, bolts_json: &str) -> FastenerResult<Self> {
        Ok(Self {
            nuts: Catalog::from_json_str(nuts_json)?,
            bolts: Catalog::from_json_str(bolts_json)?,
        })
    }

    /// Load `nuts.json` and `bolts.json` from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> FastenerResult<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            nuts: Catalog::load(dir.join(NUTS_FILE))?,
            bolts: Catalog::load(dir.join(BOLTS_FILE))?,
        })
    }

    /// Resolve a nut reference
    pub fn nut(&self, spec: &NutSpec, default_kind: &str) -> FastenerResult<NutRecord> {
        self.nuts.resolve(spec, default_kind)
    }

    /// Resolve a bolt reference
    pub fn bolt(&self, spec: &BoltSpec, default_kind: &str) -> FastenerResult<BoltRecord> {
        self.bolts.resolve(spec, default_kind)
    }
}
