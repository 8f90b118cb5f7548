//! Formatter Registry - Display masking and unmasking.
//!
//! A formatter is a pair of pure functions converting between a typed
//! [`FieldValue`] and the string shown in a text input:
//! - `mask` renders a value for display (absent values render as `""`)
//! - `unmask` parses user input back into a typed value
//!
//! Both directions are total. `unmask` never fails: input a formatter cannot
//! parse round-trips as `Text` so a validator can flag it; malformed input
//! is reported through validation, not through formatter failure. What an
//! empty input collapses to is each formatter's own decision (the built-ins
//! all collapse to `Absent`).
//!
//! # Example
//!
//! ```ignore
//! use spark_form::formatter::{self, FormatterRegistry};
//! use spark_form::FieldValue;
//!
//! let registry = FormatterRegistry::with_defaults();
//! let text = registry.lookup(formatter::TEXT);
//!
//! assert_eq!(text.mask(&FieldValue::Absent), "");
//! assert_eq!(text.unmask("abc"), FieldValue::Text("abc".to_string()));
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::types::FieldValue;

// =============================================================================
// Built-in kind identifiers
// =============================================================================

/// Kind identifier for [`TextFormatter`].
pub const TEXT: &str = "text";
/// Kind identifier for [`NumberFormatter`].
pub const NUMBER: &str = "number";
/// Kind identifier for [`DateFormatter`].
pub const DATE: &str = "date";

// =============================================================================
// Formatter trait
// =============================================================================

/// A named pair of pure functions converting between a typed value and its
/// display string.
pub trait Formatter {
    /// Render a value for display. Total: must handle every [`FieldValue`]
    /// variant, and renders `Absent` as the empty string.
    fn mask(&self, value: &FieldValue) -> String;

    /// Parse display text back into a typed value. Total: never fails.
    /// Inverse of `mask` for well-formed display strings; permitted to be
    /// lossy for invalid or empty input.
    fn unmask(&self, text: &str) -> FieldValue;
}

/// Render a value with the default display conventions shared by the
/// built-in formatters.
fn render(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Absent => String::new(),
    }
}

// =============================================================================
// Built-in formatters
// =============================================================================

/// Plain text. Empty input collapses to `Absent`, anything else is `Text`.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn mask(&self, value: &FieldValue) -> String {
        render(value)
    }

    fn unmask(&self, text: &str) -> FieldValue {
        if text.is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::Text(text.to_string())
        }
    }
}

/// Numbers. Empty input collapses to `Absent`; unparseable input round-trips
/// as `Text` for the `numeric` validator to flag.
pub struct NumberFormatter;

impl Formatter for NumberFormatter {
    fn mask(&self, value: &FieldValue) -> String {
        render(value)
    }

    fn unmask(&self, text: &str) -> FieldValue {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return FieldValue::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => FieldValue::Number(n),
            Err(_) => FieldValue::Text(text.to_string()),
        }
    }
}

/// ISO dates (`YYYY-MM-DD`). Empty input collapses to `Absent`; unparseable
/// input round-trips as `Text` for the `iso-date` validator to flag.
pub struct DateFormatter;

impl Formatter for DateFormatter {
    fn mask(&self, value: &FieldValue) -> String {
        render(value)
    }

    fn unmask(&self, text: &str) -> FieldValue {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return FieldValue::Absent;
        }
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(d) => FieldValue::Date(d),
            Err(_) => FieldValue::Text(text.to_string()),
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Lookup table from formatter-kind identifier to a shared formatter
/// instance. Read-only once configured; one registry can serve many form
/// engines concurrently.
pub struct FormatterRegistry {
    entries: HashMap<String, Rc<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in kinds
    /// ([`TEXT`], [`NUMBER`], [`DATE`]).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TEXT, TextFormatter);
        registry.register(NUMBER, NumberFormatter);
        registry.register(DATE, DateFormatter);
        registry
    }

    /// Register a formatter under a kind identifier, replacing any previous
    /// entry for that kind.
    pub fn register(&mut self, kind: impl Into<String>, formatter: impl Formatter + 'static) {
        self.entries.insert(kind.into(), Rc::new(formatter));
    }

    /// Get a formatter by kind, if registered.
    pub fn get(&self, kind: &str) -> Option<Rc<dyn Formatter>> {
        self.entries.get(kind).cloned()
    }

    /// Get a formatter by kind.
    ///
    /// # Panics
    /// Panics if the kind is not registered. Referencing an unknown kind is a
    /// configuration error, not a per-field recoverable condition.
    pub fn lookup(&self, kind: &str) -> Rc<dyn Formatter> {
        self.get(kind)
            .unwrap_or_else(|| panic!("unknown formatter kind '{kind}'"))
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

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
