//! Field configuration - the static schema a form engine is built from.

use std::collections::HashMap;

use crate::types::FieldValue;

// =============================================================================
// Entity
// =============================================================================

/// The logical record being edited, keyed by field name.
///
/// Supplied by the caller to seed raw values at engine build time and
/// reconstructed on demand from the live controls afterwards. The engine
/// never mutates the input map.
pub type Entity = HashMap<String, FieldValue>;

// =============================================================================
// Field Config
// =============================================================================

/// Per-field schema: which formatter renders/parses the field and which
/// validators run against its raw value, in order.
///
/// Immutable once the engine is built. Every kind named here must exist in
/// the respective registry or engine construction panics.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Formatter kind identifier (e.g. `formatter::TEXT`).
    pub formatter: String,
    /// Validator kind identifiers, applied in this order.
    pub validators: Vec<String>,
}

impl FieldConfig {
    /// Create a config with no validators.
    pub fn new(formatter: impl Into<String>) -> Self {
        Self {
            formatter: formatter.into(),
            validators: Vec::new(),
        }
    }

    /// Create a config with an ordered validator list.
    pub fn with_validators<I, S>(formatter: impl Into<String>, validators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formatter: formatter.into(),
            validators: validators.into_iter().map(Into::into).collect(),
        }
    }
}

/// The full static schema: one [`FieldConfig`] per tracked field name.
pub type FieldConfigMap = HashMap<String, FieldConfig>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{formatter, validator};

    #[test]
    fn test_new_has_no_validators() {
        let config = FieldConfig::new(formatter::TEXT);
        assert_eq!(config.formatter, "text");
        assert!(config.validators.is_empty());
    }

    #[test]
    fn test_with_validators_preserves_order() {
        let config =
            FieldConfig::with_validators(formatter::NUMBER, [validator::REQUIRED, validator::NUMERIC]);
        assert_eq!(config.validators, vec!["required", "numeric"]);
    }
}
