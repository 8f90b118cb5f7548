//! Form Factory - builds and drives per-form field state.
//!
//! A [`FormFactory`] owns the shared formatter/validator registries. Each
//! call to [`FormFactory::create`] produces an independent [`FormEngine`]
//! holding one reactive control slot per configured field.
//!
//! Per field the engine keeps a `Signal<Rc<FieldControl>>`: the record behind
//! the signal is immutable, and [`FormEngine::update_field`] swaps in a
//! freshly built one. Readers holding a previous `Rc` keep a fully consistent
//! old snapshot; readers inside a derived or effect re-run on the swap.
//!
//! Whole-form validity and the entity snapshot are recomputed from the
//! control slots on every read - nothing is cached, so nothing goes stale.
//!
//! # Example
//!
//! ```ignore
//! use spark_form::{FormFactory, FieldConfig, FieldValue, formatter, validator};
//! use std::collections::HashMap;
//!
//! let factory = FormFactory::with_defaults();
//! let config = HashMap::from([(
//!     "id".to_string(),
//!     FieldConfig::with_validators(formatter::TEXT, [validator::REQUIRED]),
//! )]);
//! let entity = HashMap::from([("id".to_string(), FieldValue::Absent)]);
//!
//! let form = factory.create(config, &entity);
//! assert!(!form.is_valid());
//!
//! form.update_field("id", "abc");
//! assert!(form.is_valid());
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace};
use spark_signals::{Derived, Signal, derived, signal};

use crate::formatter::FormatterRegistry;
use crate::types::FieldValue;
use crate::validator::ValidatorRegistry;

use super::config::{Entity, FieldConfig, FieldConfigMap};
use super::control::FieldControl;

// =============================================================================
// Validation helper
// =============================================================================

/// Run every configured validator against a value, in order, collecting each
/// error message. No short-circuiting: all validators run even when an
/// earlier one fails.
fn collect_errors(
    validators: &ValidatorRegistry,
    kinds: &[String],
    value: &FieldValue,
) -> Vec<String> {
    kinds
        .iter()
        .filter_map(|kind| validators.lookup(kind).check(value).err())
        .collect()
}

// =============================================================================
// Form Factory
// =============================================================================

/// Builds [`FormEngine`] instances from a static schema and an initial
/// entity. Holds the shared registries; clone the factory to share them with
/// another call site. Registries are read-only, so any number of engines can
/// use them concurrently.
#[derive(Clone)]
pub struct FormFactory {
    formatters: Rc<FormatterRegistry>,
    validators: Rc<ValidatorRegistry>,
}

impl FormFactory {
    /// Create a factory from caller-configured registries.
    pub fn new(formatters: FormatterRegistry, validators: ValidatorRegistry) -> Self {
        Self {
            formatters: Rc::new(formatters),
            validators: Rc::new(validators),
        }
    }

    /// Create a factory with the built-in formatters and validators.
    pub fn with_defaults() -> Self {
        Self::new(
            FormatterRegistry::with_defaults(),
            ValidatorRegistry::with_defaults(),
        )
    }

    /// Build a form engine for one entity.
    ///
    /// For every field in the schema the raw value is seeded from the entity
    /// (`Absent` when missing - extra entity keys are ignored), the display
    /// value is masked from it, and all configured validators run against it.
    /// Fields start pristine, but their errors are computed and exposed right
    /// away - suppressing them before first interaction is the presentation
    /// layer's choice, via `is_pristine`.
    ///
    /// Deterministic: identical schema + entity always yield identical state.
    ///
    /// # Panics
    /// Panics if a field references an unregistered formatter or validator
    /// kind (configuration error).
    pub fn create(&self, config: FieldConfigMap, entity: &Entity) -> FormEngine {
        let mut controls = HashMap::with_capacity(config.len());

        for (key, field) in &config {
            let formatter = self.formatters.lookup(&field.formatter);
            let raw_value = entity.get(key).cloned().unwrap_or(FieldValue::Absent);
            let display_value = formatter.mask(&raw_value);
            let errors = collect_errors(&self.validators, &field.validators, &raw_value);

            controls.insert(
                key.clone(),
                signal(Rc::new(FieldControl {
                    is_pristine: true,
                    raw_value,
                    display_value,
                    errors,
                })),
            );
        }

        debug!("form engine created with {} fields", controls.len());

        FormEngine {
            formatters: Rc::clone(&self.formatters),
            validators: Rc::clone(&self.validators),
            config,
            controls,
        }
    }
}

// =============================================================================
// Form Engine
// =============================================================================

/// The live state of one form: a reactive control slot per configured field,
/// plus derived whole-form validity and entity snapshot.
///
/// One engine per logical form; it owns its control slots for its lifetime.
/// Controls are created for every configured field at build time and never
/// destroyed, only replaced.
pub struct FormEngine {
    formatters: Rc<FormatterRegistry>,
    validators: Rc<ValidatorRegistry>,
    config: FieldConfigMap,
    controls: HashMap<String, Signal<Rc<FieldControl>>>,
}

impl FormEngine {
    /// Apply one user edit: unmask the input text, re-validate, re-mask, and
    /// atomically replace the field's control record.
    ///
    /// The display value is recomputed from the *parsed* value rather than
    /// echoing the typed text, so what the user sees may be a normalized form
    /// of what they typed (e.g. `" 7 "` on a number field displays as `"7"`).
    /// Marks the field dirty; pristine never comes back.
    ///
    /// # Panics
    /// Panics if `key` is not a configured field (programming error, never a
    /// silent no-op).
    pub fn update_field(&self, key: &str, input: &str) {
        let field = self.field_config(key);
        let formatter = self.formatters.lookup(&field.formatter);

        let raw_value = formatter.unmask(input);
        let errors = collect_errors(&self.validators, &field.validators, &raw_value);
        let display_value = formatter.mask(&raw_value);

        trace!(
            "update_field '{key}': {} error(s), display '{display_value}'",
            errors.len()
        );

        self.control_slot(key).set(Rc::new(FieldControl {
            is_pristine: false,
            raw_value,
            display_value,
            errors,
        }));
    }

    /// Get the current control record for a field.
    ///
    /// Reading through this method inside a derived or effect creates a
    /// reactive dependency on the field's slot.
    ///
    /// # Panics
    /// Panics if `key` is not a configured field.
    pub fn control(&self, key: &str) -> Rc<FieldControl> {
        self.control_slot(key).get()
    }

    /// Get a clone of the field's signal handle, for fine-grained bindings
    /// that should track exactly one field.
    ///
    /// # Panics
    /// Panics if `key` is not a configured field.
    pub fn control_signal(&self, key: &str) -> Signal<Rc<FieldControl>> {
        self.control_slot(key).clone()
    }

    /// Whole-form validity: true iff every field's error list is empty.
    ///
    /// Recomputed from the control slots on every call; inside a derived or
    /// effect the reads create reactive dependencies.
    pub fn is_valid(&self) -> bool {
        self.controls.values().all(|slot| slot.get().errors.is_empty())
    }

    /// Reconstruct the entity from the current raw values, one entry per
    /// configured field. Entity keys that were never configured do not
    /// reappear here.
    pub fn entity(&self) -> Entity {
        self.controls
            .iter()
            .map(|(key, slot)| (key.clone(), slot.get().raw_value.clone()))
            .collect()
    }

    /// Create a derived that recomputes whole-form validity whenever any
    /// field control is replaced.
    pub fn validity_derived(&self) -> Derived<bool> {
        let slots: Vec<Signal<Rc<FieldControl>>> = self.controls.values().cloned().collect();
        derived(move || slots.iter().all(|slot| slot.get().errors.is_empty()))
    }

    /// Create a derived that rebuilds the entity snapshot whenever any field
    /// control is replaced.
    pub fn entity_derived(&self) -> Derived<Entity> {
        let slots: Vec<(String, Signal<Rc<FieldControl>>)> = self
            .controls
            .iter()
            .map(|(key, slot)| (key.clone(), slot.clone()))
            .collect();
        derived(move || {
            slots
                .iter()
                .map(|(key, slot)| (key.clone(), slot.get().raw_value.clone()))
                .collect()
        })
    }

    /// Iterate the configured field names (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.config.keys().map(String::as_str)
    }

    /// Check whether a field is configured.
    pub fn contains(&self, key: &str) -> bool {
        self.config.contains_key(key)
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Check whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    fn field_config(&self, key: &str) -> &FieldConfig {
        self.config
            .get(key)
            .unwrap_or_else(|| panic!("unknown field key '{key}'"))
    }

    fn control_slot(&self, key: &str) -> &Signal<Rc<FieldControl>> {
        self.controls
            .get(key)
            .unwrap_or_else(|| panic!("unknown field key '{key}'"))
    }
}

// =============================================================================
// Tests
// =============================================================================
