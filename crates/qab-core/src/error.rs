//! Error types for catalog lookup and profile generation

use thiserror::Error;

/// Errors raised while resolving fasteners or building profiles
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FastenerError {
    #[error("Fastener not found: {name} ({kind})")]
    NotFound { name: String, kind: String },

    #[error("Fastener {name} ({kind}) has no {dimension}")]
    MissingDimension {
        name: String,
        kind: String,
        dimension: &'static str,
    },

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Failed to parse {catalog} catalog: {reason}")]
    Parse { catalog: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl FastenerError {
    /// Whether this error reports a fastener (or one of its dimensions) missing from a catalog
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FastenerError::NotFound { .. } | FastenerError::MissingDimension { .. }
        )
    }

    /// Whether this error reports degenerate geometry parameters
    pub fn is_invalid_dimension(&self) -> bool {
        matches!(self, FastenerError::InvalidDimension(_))
    }

    pub(crate) fn invalid(what: &str, value: f32) -> Self {
        FastenerError::InvalidDimension(format!("{what} must be positive and finite, got {value}"))
    }
}

/// Result type for fastener operations
pub type FastenerResult<T> = Result<T, FastenerError>;

/// Check that a dimension is finite and strictly positive
pub fn ensure_positive(what: &str, value: f32) -> FastenerResult<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FastenerError::invalid(what, value))
    }
}

/// Check that a clearance is finite and not negative
pub fn ensure_non_negative(what: &str, value: f32) -> FastenerResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FastenerError::InvalidDimension(format!(
            "{what} must be non-negative and finite, got {value}"
        )))
    }
}
