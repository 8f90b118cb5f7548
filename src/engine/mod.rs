//! Field State Engine - per-form reactive state.
//!
//! The engine manages the core data structures:
//! - Config: the static per-field schema (formatter kind + validator kinds)
//! - Control: the immutable per-field state record (pristine, raw, display, errors)
//! - Form: the factory and live engine with the `update_field` pipeline
//!
//! # Architecture
//!
//! Each field is a `Signal<Rc<FieldControl>>`. An update builds a whole new
//! control record and swaps the signal - copy-on-write, so no reader ever
//! sees a half-updated field:
//!
//! ```text
//! update_field(key, text)
//!   -> unmask(text)            (formatter)
//!   -> collect errors          (validators, in order, no short-circuit)
//!   -> mask(raw)               (formatter, normalizes display)
//!   -> swap Rc<FieldControl>   (atomic replace, pristine -> false)
//! ```
//!
//! Whole-form validity and the entity snapshot are derived from the control
//! slots on read, never cached.

mod config;
mod control;
mod form;

pub use config::*;
pub use control::*;
pub use form::*;
