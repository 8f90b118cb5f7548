//! Basic Example - driving the form engine directly
//!
//! This example demonstrates the core pipeline without any terminal UI:
//! - Building a form from a field config map and an initial entity
//! - Errors visible from initialization (pristine fields included)
//! - update_field: unmask -> validate -> mask -> atomic control swap
//! - Whole-form validity and the reconstructed entity snapshot
//!
//! Run with: cargo run --example basic

use std::collections::HashMap;

use spark_form::{FieldConfig, FieldValue, FormEngine, FormFactory, formatter, validator};

const FIELDS: [&str; 3] = ["name", "age", "birthday"];

fn print_form(form: &FormEngine) {
    for key in FIELDS {
        let control = form.control(key);
        let status = if control.errors.is_empty() {
            "VALID".to_string()
        } else {
            control.errors.join("; ")
        };
        println!(
            "  {:>8}: [{}] pristine={} -> {}",
            key, control.display_value, control.is_pristine, status
        );
    }
    println!(
        "  Form status: {}",
        if form.is_valid() { "VALID" } else { "INVALID" }
    );
    println!("  Entity: {:?}\n", form.entity());
}

fn main() {
    println!("=== spark-form Basic Example ===\n");

    let factory = FormFactory::with_defaults();

    let config = HashMap::from([
        (
            "name".to_string(),
            FieldConfig::with_validators(formatter::TEXT, [validator::REQUIRED]),
        ),
        (
            "age".to_string(),
            FieldConfig::with_validators(formatter::NUMBER, [validator::NUMERIC]),
        ),
        (
            "birthday".to_string(),
            FieldConfig::with_validators(formatter::DATE, [validator::ISO_DATE]),
        ),
    ]);

    // The entity does not mention "birthday" - that field seeds as Absent
    let entity = HashMap::from([
        ("name".to_string(), FieldValue::Absent),
        ("age".to_string(), FieldValue::from(36)),
    ]);

    let form = factory.create(config, &entity);

    // Validity as a reactive derived - re-yields after each update below
    let validity = form.validity_derived();

    println!("Initial state (errors show even on pristine fields):");
    print_form(&form);

    println!("Filling in the name:");
    form.update_field("name", "Ada Lovelace");
    print_form(&form);

    println!("Typing a malformed date (kept as text, flagged by validation):");
    form.update_field("birthday", "soon");
    print_form(&form);

    println!("Correcting the date:");
    form.update_field("birthday", "1815-12-10");
    print_form(&form);

    println!("Number input is normalized through mask(unmask(..)):");
    form.update_field("age", " 37 ");
    print_form(&form);

    println!("validity_derived() agrees: {}", validity.get());
}
