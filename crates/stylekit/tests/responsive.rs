//! Tests for responsive class resolution across breakpoints.

use stylekit::{
    Breakpoints, ClassAxis, ResponsiveValue, resolve_axis, resolve_axis_with, resolve_enum_class,
    resolve_responsive_class, responsive,
};

#[test]
fn test_gap_initial_and_medium() {
    let gap = responsive([("initial", 2), ("medium", 4)]);
    assert_eq!(resolve_responsive_class("gap", Some(&gap)), vec!["gap-2", "md:gap-4"]);
}

#[test]
fn test_single_value_has_no_variant() {
    let padding = ResponsiveValue::Single(6);
    assert_eq!(resolve_responsive_class("p", Some(&padding)), vec!["p-6"]);
}

#[test]
fn test_one_class_per_key_in_order() {
    let direction = responsive([
        ("xl", "row"),
        ("initial", "col"),
        ("small", "row-reverse"),
        ("2xl", "col-reverse"),
    ]);
    let classes = resolve_responsive_class("flex", Some(&direction));

    assert_eq!(classes.len(), direction.len());
    assert_eq!(
        classes,
        vec!["xl:flex-row", "flex-col", "sm:flex-row-reverse", "2xl:flex-col-reverse"]
    );
}

#[test]
fn test_every_class_carries_its_breakpoint_prefix() {
    let value = responsive([("small", 1), ("medium", 2), ("large", 3), ("custom", 4)]);
    let classes = resolve_responsive_class("px", Some(&value));

    for ((class, token), step) in classes.iter().zip(["sm", "md", "lg", "custom"]).zip(1..) {
        assert_eq!(*class, format!("{token}:px-{step}"));
    }
}

#[test]
fn test_prefix_and_value_are_not_validated() {
    let value = ResponsiveValue::Single("not-a-step");
    assert_eq!(
        resolve_responsive_class("made-up", Some(&value)),
        vec!["made-up-not-a-step"]
    );
}

#[test]
fn test_enum_values_pass_through() {
    let display = responsive([("initial", "hidden"), ("medium", "flex")]);
    assert_eq!(resolve_enum_class(Some(&display)), vec!["hidden", "md:flex"]);
}

#[test]
fn test_prefixed_enum_axis() {
    let overflow = responsive([("initial", "hidden"), ("large", "auto")]);
    assert_eq!(
        resolve_axis(ClassAxis::Prefixed("overflow"), Some(&overflow)),
        vec!["overflow-hidden", "lg:overflow-auto"]
    );
}

#[test]
fn test_empty_mapping_emits_nothing() {
    let empty: ResponsiveValue<u32> = ResponsiveValue::map();
    assert!(empty.is_empty());
    assert!(resolve_responsive_class("gap", Some(&empty)).is_empty());
}

#[test]
fn test_configured_alias_applies_to_mapping() {
    let breakpoints = Breakpoints::new().with_alias("desktop", "lg");
    let value = responsive([("initial", 1), ("desktop", 3)]);
    assert_eq!(
        resolve_axis_with(&breakpoints, ClassAxis::Prefixed("gap"), Some(&value)),
        vec!["gap-1", "lg:gap-3"]
    );
}
