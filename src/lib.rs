//! # spark-form
//!
//! Reactive form state engine for Rust user interfaces.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Three layers, leaves first. Formatters convert between typed values and
//! display strings, validators judge typed values, and the field state
//! engine runs them as a pipeline on every user edit:
//!
//! ```text
//! input text -> unmask -> validate (in order) -> mask -> Rc<FieldControl> swap
//!                                                          |-> is_valid (derived)
//!                                                          `-> entity   (derived)
//! ```
//!
//! Per-field state lives in a `Signal<Rc<FieldControl>>`; updates replace the
//! whole record, so readers never observe a half-updated field. Whole-form
//! validity and the entity snapshot are recomputed from the controls on every
//! read.
//!
//! The engine performs no I/O and owns no rendering: presentation code binds
//! `display_value` to an input, renders `errors`, and feeds each edit back
//! through `update_field`.
//!
//! ## Modules
//!
//! - [`types`] - Core types (`FieldValue`)
//! - [`formatter`] - Formatter trait, registry, and built-in kinds
//! - [`validator`] - Validator trait, registry, and built-in kinds
//! - [`engine`] - Field config, field controls, form factory and engine

pub mod engine;
pub mod formatter;
pub mod types;
pub mod validator;

// Re-export commonly used items
pub use types::FieldValue;

pub use formatter::{
    DateFormatter, Formatter, FormatterRegistry, NumberFormatter, TextFormatter,
};

pub use validator::{
    IsoDate, MinLength, Numeric, Required, Validator, ValidatorRegistry,
};

pub use engine::{
    Entity, FieldConfig, FieldConfigMap, FieldControl, FormEngine, FormFactory,
};
