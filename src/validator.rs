//! Validator Registry - Pure per-field value checks.
//!
//! A validator inspects a typed [`FieldValue`] and either accepts it or
//! produces a human-readable error message. Validation failures are data,
//! not exceptions: the engine collects every message into the field's error
//! list, in configured order, with no short-circuiting.
//!
//! Any `Fn(&FieldValue) -> Result<(), String>` closure is a validator, so
//! one-off checks can be registered without a named type:
//!
//! ```ignore
//! use spark_form::validator::ValidatorRegistry;
//! use spark_form::FieldValue;
//!
//! let mut registry = ValidatorRegistry::with_defaults();
//! registry.register("no-admin", |v: &FieldValue| match v.as_text() {
//!     Some("admin") => Err("That name is reserved".to_string()),
//!     _ => Ok(()),
//! });
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use crate::types::FieldValue;

// =============================================================================
// Built-in kind identifiers
// =============================================================================

/// Kind identifier for [`Required`].
pub const REQUIRED: &str = "required";
/// Kind identifier for [`Numeric`].
pub const NUMERIC: &str = "numeric";
/// Kind identifier for [`IsoDate`].
pub const ISO_DATE: &str = "iso-date";

// =============================================================================
// Validator trait
// =============================================================================

/// A named pure predicate producing either success or an error message for a
/// typed value. Must be total over every [`FieldValue`] variant.
pub trait Validator {
    /// Check a value. `Err` carries the user-facing message.
    fn check(&self, value: &FieldValue) -> Result<(), String>;
}

/// Plain closures are validators.
impl<F> Validator for F
where
    F: Fn(&FieldValue) -> Result<(), String>,
{
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        self(value)
    }
}

// =============================================================================
// Built-in validators
// =============================================================================

/// Rejects absent values and empty text.
pub struct Required;

impl Validator for Required {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        let missing = match value {
            FieldValue::Absent => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        };
        if missing {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    }
}

/// Rejects anything that is neither a number nor absent. Pairs with the
/// `number` formatter, whose unparseable input survives as text.
pub struct Numeric;

impl Validator for Numeric {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        match value {
            FieldValue::Absent | FieldValue::Number(_) => Ok(()),
            _ => Err("Must be a number".to_string()),
        }
    }
}

/// Rejects anything that is neither a date nor absent. Pairs with the
/// `date` formatter.
pub struct IsoDate;

impl Validator for IsoDate {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        match value {
            FieldValue::Absent | FieldValue::Date(_) => Ok(()),
            _ => Err("Must be a date (YYYY-MM-DD)".to_string()),
        }
    }
}

/// Rejects text shorter than a minimum character count. Parameterized, so it
/// is registered under a caller-chosen kind name rather than a built-in one.
/// Absent values pass; pair with [`Required`] when the field is mandatory.
pub struct MinLength {
    min: usize,
}

impl MinLength {
    /// Create a minimum-length check.
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator for MinLength {
    fn check(&self, value: &FieldValue) -> Result<(), String> {
        match value {
            FieldValue::Text(s) if s.chars().count() < self.min => {
                Err(format!("Must be at least {} characters", self.min))
            }
            _ => Ok(()),
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Lookup table from validator-kind identifier to a shared validator
/// instance. Read-only once configured; one registry can serve many form
/// engines concurrently.
pub struct ValidatorRegistry {
    entries: HashMap<String, Rc<dyn Validator>>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in kinds
    /// ([`REQUIRED`], [`NUMERIC`], [`ISO_DATE`]).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(REQUIRED, Required);
        registry.register(NUMERIC, Numeric);
        registry.register(ISO_DATE, IsoDate);
        registry
    }

    /// Register a validator under a kind identifier, replacing any previous
    /// entry for that kind.
    pub fn register(&mut self, kind: impl Into<String>, validator: impl Validator + 'static) {
        self.entries.insert(kind.into(), Rc::new(validator));
    }

    /// Get a validator by kind, if registered.
    pub fn get(&self, kind: &str) -> Option<Rc<dyn Validator>> {
        self.entries.get(kind).cloned()
    }

    /// Get a validator by kind.
    ///
    /// # Panics
    /// Panics if the kind is not registered. Referencing an unknown kind is a
    /// configuration error, not a per-field recoverable condition.
    pub fn lookup(&self, kind: &str) -> Rc<dyn Validator> {
        self.get(kind)
            .unwrap_or_else(|| panic!("unknown validator kind '{kind}'"))
    }

    /// Check whether a kind is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// Get all registered kind identifiers, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
