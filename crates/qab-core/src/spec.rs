//! Fastener references accepted by catalog lookups

use crate::record::{BoltRecord, NutRecord};

/// Either a catalog reference or a fully custom record
#[derive(Debug, Clone, PartialEq)]
pub enum FastenerSpec<R> {
    /// Look the fastener up by name, with an optional kind override
    ByName {
        /// Catalog name (e.g. `"M3"`)
        name: String,
        /// Kind to resolve; `None` uses the caller's default kind
        kind: Option<String>,
    },
    /// Bypass the catalog with ad hoc dimensions
    Explicit(R),
}

/// A nut reference
pub type NutSpec = FastenerSpec<NutRecord>;

/// A bolt reference
pub type BoltSpec = FastenerSpec<BoltRecord>;

impl<R> FastenerSpec<R> {
    /// Reference a fastener by name with the default kind
    pub fn named(name: impl Into<String>) -> Self {
        FastenerSpec::ByName {
            name: name.into(),
            kind: None,
        }
    }

    /// Set the kind of a name reference (explicit records are left unchanged)
    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        match self {
            FastenerSpec::ByName { name, .. } => FastenerSpec::ByName {
                name,
                kind: Some(kind.into()),
            },
            explicit => explicit,
        }
    }

    /// Kind this reference resolves to, given the caller's default
    pub fn kind_or<'a>(&'a self, default_kind: &'a str) -> &'a str {
        match self {
            FastenerSpec::ByName {
                kind: Some(kind), ..
            } => kind,
            _ => default_kind,
        }
    }

    /// Human readable name for errors and logs
    pub fn name(&self) -> &str {
        match self {
            FastenerSpec::ByName { name, .. } => name,
            FastenerSpec::Explicit(_) => "<explicit>",
        }
    }
}

impl<R> From<&str> for FastenerSpec<R> {
    fn from(name: &str) -> Self {
        FastenerSpec::named(name)
    }
}

impl<R> From<String> for FastenerSpec<R> {
    fn from(name: String) -> Self {
        FastenerSpec::named(name)
    }
}

impl<R> From<(&str, &str)> for FastenerSpec<R> {
    fn from((name, kind): (&str, &str)) -> Self {
        FastenerSpec::named(name).with_kind(kind)
    }
}

impl From<NutRecord> for NutSpec {
    fn from(record: NutRecord) -> Self {
        FastenerSpec::Explicit(record)
    }
}

impl From<BoltRecord> for BoltSpec {
    fn from(record: BoltRecord) -> Self {
        FastenerSpec::Explicit(record)
    }
}
