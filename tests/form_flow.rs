//! End-to-end form flow tests against the public API.
//!
//! Run with: cargo test --test form_flow

use std::collections::HashMap;

use spark_form::{
    Entity, FieldConfig, FieldValue, FormEngine, FormFactory, MinLength, ValidatorRegistry,
    formatter, validator,
};

/// The reference scenario: one text field `id`, required, starting null.
fn id_form() -> FormEngine {
    let factory = FormFactory::with_defaults();
    let config = HashMap::from([(
        "id".to_string(),
        FieldConfig::with_validators(formatter::TEXT, [validator::REQUIRED]),
    )]);
    let entity = HashMap::from([("id".to_string(), FieldValue::Absent)]);
    factory.create(config, &entity)
}

#[test]
fn test_reference_scenario() {
    let form = id_form();

    // Initial: pristine, empty display, required error, form invalid
    let control = form.control("id");
    assert!(control.is_pristine);
    assert_eq!(control.raw_value, FieldValue::Absent);
    assert_eq!(control.display_value, "");
    assert_eq!(control.errors, vec!["This field is required".to_string()]);
    assert!(!form.is_valid());

    // Typing a value makes the field dirty and the form valid
    form.update_field("id", "abc");
    let control = form.control("id");
    assert!(!control.is_pristine);
    assert_eq!(control.raw_value, FieldValue::Text("abc".to_string()));
    assert_eq!(control.display_value, "abc");
    assert!(control.errors.is_empty());
    assert!(form.is_valid());
    assert_eq!(form.entity()["id"], FieldValue::Text("abc".to_string()));

    // Clearing collapses to Absent, re-fails required, stays dirty
    form.update_field("id", "");
    let control = form.control("id");
    assert!(!control.is_pristine);
    assert_eq!(control.raw_value, FieldValue::Absent);
    assert_eq!(control.display_value, "");
    assert_eq!(control.errors, vec!["This field is required".to_string()]);
    assert!(!form.is_valid());
}

#[test]
fn test_initialization_is_deterministic() {
    let form_a = id_form();
    let form_b = id_form();

    assert_eq!(form_a.control("id"), form_b.control("id"));
    assert_eq!(form_a.is_valid(), form_b.is_valid());
    assert_eq!(form_a.entity(), form_b.entity());
}

#[test]
fn test_validator_order_is_configured_order() {
    let mut validators = ValidatorRegistry::with_defaults();
    validators.register("min-3", MinLength::new(3));
    validators.register("min-8", MinLength::new(8));

    let factory = FormFactory::new(
        spark_form::FormatterRegistry::with_defaults(),
        validators,
    );
    let config = HashMap::from([
        (
            "forward".to_string(),
            FieldConfig::with_validators(formatter::TEXT, ["min-3", "min-8"]),
        ),
        (
            "reverse".to_string(),
            FieldConfig::with_validators(formatter::TEXT, ["min-8", "min-3"]),
        ),
    ]);
    let form = factory.create(config, &Entity::new());

    // Both validators fail and both messages are collected, in config order
    form.update_field("forward", "ab");
    form.update_field("reverse", "ab");
    assert_eq!(
        form.control("forward").errors,
        vec![
            "Must be at least 3 characters".to_string(),
            "Must be at least 8 characters".to_string(),
        ]
    );
    assert_eq!(
        form.control("reverse").errors,
        vec![
            "Must be at least 8 characters".to_string(),
            "Must be at least 3 characters".to_string(),
        ]
    );
}

#[test]
fn test_round_trip_is_idempotent() {
    let factory = FormFactory::with_defaults();
    let config = HashMap::from([
        ("name".to_string(), FieldConfig::new(formatter::TEXT)),
        ("age".to_string(), FieldConfig::new(formatter::NUMBER)),
        ("birthday".to_string(), FieldConfig::new(formatter::DATE)),
    ]);
    let form = factory.create(config, &Entity::new());

    for (key, input) in [("name", "Ada"), ("age", "4.25"), ("birthday", "1815-12-10")] {
        form.update_field(key, input);
        let first = form.control(key);

        // Feeding the displayed text back through the pipeline changes nothing
        form.update_field(key, &first.display_value);
        let second = form.control(key);
        assert_eq!(first.display_value, second.display_value);
        assert_eq!(first.raw_value, second.raw_value);
    }
}

#[test]
fn test_update_replaces_the_control_atomically() {
    let form = id_form();

    let before = form.control("id");
    form.update_field("id", "abc");
    let after = form.control("id");

    // The captured snapshot is all-old; the new control is all-new
    assert_eq!(
        (before.is_pristine, &before.raw_value, before.errors.len()),
        (true, &FieldValue::Absent, 1)
    );
    assert_eq!(
        (after.is_pristine, &after.raw_value, after.errors.len()),
        (false, &FieldValue::Text("abc".to_string()), 0)
    );
}

#[test]
fn test_validity_is_the_conjunction_over_fields() {
    let factory = FormFactory::with_defaults();
    let config = HashMap::from([
        (
            "a".to_string(),
            FieldConfig::new(formatter::TEXT),
        ),
        (
            "b".to_string(),
            FieldConfig::with_validators(formatter::TEXT, [validator::REQUIRED]),
        ),
    ]);
    let form = factory.create(config, &Entity::new());

    assert!(form.control("a").errors.is_empty());
    assert_eq!(
        form.control("b").errors,
        vec!["This field is required".to_string()]
    );
    assert!(!form.is_valid());

    form.update_field("b", "filled");
    assert!(form.is_valid());
}

#[test]
#[should_panic(expected = "unknown field key")]
fn test_updating_an_unconfigured_field_fails_fast() {
    let form = id_form();
    form.update_field("email", "x@example.com");
}

#[test]
fn test_derived_views_follow_updates() {
    let form = id_form();
    let validity = form.validity_derived();
    let snapshot = form.entity_derived();

    assert!(!validity.get());
    assert_eq!(snapshot.get()["id"], FieldValue::Absent);

    form.update_field("id", "abc");
    assert!(validity.get());
    assert_eq!(snapshot.get()["id"], FieldValue::Text("abc".to_string()));
}
