//! Tests for mapping constraints onto classes and inline styles.

use stylekit::style::{StyleProperty, StyleValue};
use stylekit::{Constraint, resolve_constraint};

#[test]
fn test_mixed_classes_and_styles() {
    let resolved = resolve_constraint(&Constraint::new().top(4).left("10%").z_index(60));

    assert_eq!(resolved.classes, vec!["absolute", "top-4"]);
    assert_eq!(resolved.style.len(), 2);
    assert_eq!(resolved.style.get(&StyleProperty::Left), Some(&StyleValue::from("10%")));
    assert_eq!(resolved.style.get(&StyleProperty::ZIndex), Some(&StyleValue::from(60)));
    assert_eq!(resolved.style.to_string(), "left: 10%; z-index: 60");
}

#[test]
fn test_absolute_is_first() {
    let constraints = [
        Constraint::new(),
        Constraint::new().bottom(2).right(2),
        Constraint::new().width("50%").height(100),
        Constraint::new().z_index(10),
    ];
    for constraint in &constraints {
        let resolved = resolve_constraint(constraint);
        assert_eq!(resolved.classes[0], "absolute");
    }
}

#[test]
fn test_property_is_class_or_style_never_both() {
    let constraint = Constraint::new()
        .top(0)
        .left(96)
        .right(120)
        .bottom("auto")
        .width("full")
        .height(7.5)
        .z_index(51);
    let resolved = resolve_constraint(&constraint);

    assert_eq!(resolved.classes, vec!["absolute", "top-0", "left-96", "w-full"]);
    assert_eq!(
        resolved.style.to_string(),
        "right: 120px; bottom: auto; height: 7.5px; z-index: 51"
    );
}

#[test]
fn test_all_on_scale() {
    let constraint = Constraint::new()
        .top(1)
        .left(2)
        .right(3)
        .bottom(4)
        .width(5)
        .height("screen")
        .z_index(0);
    let resolved = resolve_constraint(&constraint);

    assert_eq!(
        resolved.classes,
        vec!["absolute", "top-1", "left-2", "right-3", "bottom-4", "w-5", "h-screen", "z-0"]
    );
    assert!(resolved.style.is_empty());
}

#[test]
fn test_unset_constraint() {
    assert!(!Constraint::new().is_set());
    assert!(Constraint::new().z_index(1).is_set());
}

#[test]
fn test_width_screen_is_a_class() {
    let resolved = resolve_constraint(&Constraint::new().width("screen"));

    assert_eq!(resolved.classes, vec!["absolute", "w-screen"]);
    assert!(resolved.style.is_empty());
}

#[test]
fn test_resolution_is_repeatable() {
    let constraint = Constraint::new().top(2).left(12.5).width("screen").height("40vh").z_index(99);

    let first = resolve_constraint(&constraint);
    let second = resolve_constraint(&constraint);
    assert_eq!(first, second);
    assert_eq!(first.style.to_string(), second.style.to_string());
}
