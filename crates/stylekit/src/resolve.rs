//! Responsive class resolution.
//!
//! Turns a property value into an ordered list of utility classes, one per
//! breakpoint. Every property declares a single [`ClassAxis`] contract:
//!
//! - [`ClassAxis::Prefixed`]: the value is a suffix, `gap` + `4` becomes `gap-4`
//! - [`ClassAxis::Complete`]: the value already is a class name, `hidden` stays
//!   `hidden`
//!
//! Breakpoint keys go through the alias table; the base breakpoint carries no
//! variant prefix:
//!
//! ```rust
//! use stylekit::{resolve_responsive_class, responsive};
//!
//! let gap = responsive([("initial", 2), ("medium", 4)]);
//! assert_eq!(resolve_responsive_class("gap", Some(&gap)), vec!["gap-2", "md:gap-4"]);
//! ```

use std::fmt::Display;

use crate::breakpoint::{Breakpoints, breakpoint_token};
use crate::value::ResponsiveValue;

/// How a property's value turns into a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassAxis<'a> {
    /// `{prefix}-{value}`.
    Prefixed(&'a str),
    /// The value is used verbatim. An empty single value produces no class.
    Complete,
}

impl ClassAxis<'_> {
    fn class_for(self, value: &str) -> String {
        match self {
            ClassAxis::Prefixed(prefix) => format!("{prefix}-{value}"),
            ClassAxis::Complete => value.to_string(),
        }
    }
}

/// Resolve a value along an axis, using the fixed breakpoint table.
pub fn resolve_axis<T: Display>(axis: ClassAxis<'_>, value: Option<&ResponsiveValue<T>>) -> Vec<String> {
    resolve_with_tokens(axis, value, breakpoint_token)
}

/// Resolve a value along an axis with configured breakpoints.
pub fn resolve_axis_with<T: Display>(
    breakpoints: &Breakpoints,
    axis: ClassAxis<'_>,
    value: Option<&ResponsiveValue<T>>,
) -> Vec<String> {
    resolve_with_tokens(axis, value, |key| breakpoints.token(key))
}

fn resolve_with_tokens<'k, T, F>(
    axis: ClassAxis<'_>,
    value: Option<&'k ResponsiveValue<T>>,
    token: F,
) -> Vec<String>
where
    T: Display,
    F: Fn(&'k str) -> &'k str,
{
    let Some(value) = value else {
        return Vec::new();
    };
    if let (ClassAxis::Complete, ResponsiveValue::Single(single)) = (axis, value) {
        if single.to_string().is_empty() {
            return Vec::new();
        }
    }

    let classes: Vec<String> = value
        .iter()
        .map(|(breakpoint, value)| {
            let class = axis.class_for(&value.to_string());
            let token = breakpoint.map(&token).unwrap_or("");
            if token.is_empty() {
                class
            } else {
                format!("{token}:{class}")
            }
        })
        .collect();

    log::trace!("resolve {:?} -> {:?}", axis, classes);
    classes
}

/// Resolve a prefixed property: `("gap", 4)` becomes `["gap-4"]`.
///
/// An absent value emits nothing. Neither prefix nor value is validated.
pub fn resolve_responsive_class<T: Display>(
    prefix: &str,
    value: Option<&ResponsiveValue<T>>,
) -> Vec<String> {
    resolve_axis(ClassAxis::Prefixed(prefix), value)
}

/// Resolve a property whose values are complete class names.
///
/// An absent value, or a single empty one, emits nothing. Mapping entries
/// always emit one class each.
pub fn resolve_enum_class<T: Display>(value: Option<&ResponsiveValue<T>>) -> Vec<String> {
    resolve_axis(ClassAxis::Complete, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::responsive;

    #[test]
    fn absent_value_emits_nothing() {
        assert!(resolve_responsive_class::<u32>("p", None).is_empty());
        assert!(resolve_enum_class::<&str>(None).is_empty());
    }

    #[test]
    fn single_value_is_prefixed() {
        let value = ResponsiveValue::Single(4);
        assert_eq!(resolve_responsive_class("px", Some(&value)), vec!["px-4"]);
    }

    #[test]
    fn single_enum_value_is_identity() {
        let value = ResponsiveValue::Single("inline-flex");
        assert_eq!(resolve_enum_class(Some(&value)), vec!["inline-flex"]);
    }

    #[test]
    fn empty_enum_value_is_falsy() {
        let value = ResponsiveValue::Single("");
        assert!(resolve_enum_class(Some(&value)).is_empty());

        let mapped = responsive([("initial", "block"), ("medium", "")]);
        assert_eq!(resolve_enum_class(Some(&mapped)), vec!["block", "md:"]);
    }

    #[test]
    fn runtime_prefix() {
        let prefix = format!("{}-{}", "grid", "cols");
        let value = ResponsiveValue::Single(3);
        assert_eq!(resolve_responsive_class(&prefix, Some(&value)), vec!["grid-cols-3"]);
    }

    #[test]
    fn mapping_uses_aliases_and_passthrough() {
        let value = responsive([("initial", "col"), ("large", "row"), ("tv", "row-reverse")]);
        assert_eq!(
            resolve_responsive_class("flex", Some(&value)),
            vec!["flex-col", "lg:flex-row", "tv:flex-row-reverse"]
        );
    }

    #[test]
    fn configured_breakpoints() {
        let breakpoints = Breakpoints::default().with_alias("tablet", "md");
        let value = responsive([("tablet", "hidden")]);
        assert_eq!(
            resolve_axis_with(&breakpoints, ClassAxis::Complete, Some(&value)),
            vec!["md:hidden"]
        );
    }
}
