//! Responsive property values.
//!
//! A [`ResponsiveValue`] is either a single value applied at every breakpoint,
//! or an ordered mapping from breakpoint name to value:
//!
//! ```rust
//! use stylekit::{ResponsiveValue, responsive};
//!
//! let gap: ResponsiveValue<u32> = 4.into();
//! assert!(gap.is_single());
//!
//! let gap = responsive([("initial", 2), ("medium", 4)]);
//! assert_eq!(gap.len(), 2);
//! ```
//!
//! Mapping keys are unique. Inserting a key that is already present replaces
//! its value without moving it, so iteration order is the order in which keys
//! were first seen.

/// A value that is either uniform or varies per breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsiveValue<T> {
    /// The same value at every breakpoint.
    Single(T),
    /// Per-breakpoint values, in declaration order.
    Breakpoints(Vec<(String, T)>),
}

impl<T> ResponsiveValue<T> {
    /// An empty breakpoint mapping.
    pub fn map() -> Self {
        ResponsiveValue::Breakpoints(Vec::new())
    }

    /// Set the value for a breakpoint.
    ///
    /// A single value is first converted into a mapping under the `initial`
    /// key so that it keeps applying at the base breakpoint.
    pub fn at(self, breakpoint: impl Into<String>, value: T) -> Self {
        let mut entries = match self {
            ResponsiveValue::Single(base) => vec![(crate::breakpoint::INITIAL.to_string(), base)],
            ResponsiveValue::Breakpoints(entries) => entries,
        };
        let breakpoint = breakpoint.into();
        match entries.iter_mut().find(|(key, _)| *key == breakpoint) {
            Some(entry) => entry.1 = value,
            None => entries.push((breakpoint, value)),
        }
        ResponsiveValue::Breakpoints(entries)
    }

    /// Whether this is a single, non-responsive value.
    pub fn is_single(&self) -> bool {
        matches!(self, ResponsiveValue::Single(_))
    }

    /// Number of breakpoints this value produces classes for.
    pub fn len(&self) -> usize {
        match self {
            ResponsiveValue::Single(_) => 1,
            ResponsiveValue::Breakpoints(entries) => entries.len(),
        }
    }

    /// True for a mapping without entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(breakpoint, value)` pairs. A single value yields `None` as
    /// its breakpoint.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &T)> {
        let (single, entries) = match self {
            ResponsiveValue::Single(value) => (Some(value), &[][..]),
            ResponsiveValue::Breakpoints(entries) => (None, entries.as_slice()),
        };
        single
            .into_iter()
            .map(|value| (None, value))
            .chain(entries.iter().map(|(key, value)| (Some(key.as_str()), value)))
    }

    /// Map every contained value.
    pub fn map_values<U>(&self, mut f: impl FnMut(&T) -> U) -> ResponsiveValue<U> {
        match self {
            ResponsiveValue::Single(value) => ResponsiveValue::Single(f(value)),
            ResponsiveValue::Breakpoints(entries) => ResponsiveValue::Breakpoints(
                entries.iter().map(|(key, value)| (key.clone(), f(value))).collect(),
            ),
        }
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Single(value)
    }
}

/// Conversion into a [`ResponsiveValue`].
///
/// Property setters take `impl IntoResponsive<T>` so callers can pass either
/// a bare value or a breakpoint mapping.
pub trait IntoResponsive<T> {
    fn into_responsive(self) -> ResponsiveValue<T>;
}

impl<T> IntoResponsive<T> for T {
    fn into_responsive(self) -> ResponsiveValue<T> {
        ResponsiveValue::Single(self)
    }
}

impl<T> IntoResponsive<T> for ResponsiveValue<T> {
    fn into_responsive(self) -> ResponsiveValue<T> {
        self
    }
}

/// Build a breakpoint mapping from `(breakpoint, value)` pairs.
///
/// Later duplicates replace earlier ones in place.
pub fn responsive<K, T, I>(entries: I) -> ResponsiveValue<T>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, T)>,
{
    entries
        .into_iter()
        .fold(ResponsiveValue::map(), |value, (key, entry)| value.at(key, entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_from_value() {
        let value: ResponsiveValue<&str> = "row".into();
        assert_eq!(value, ResponsiveValue::Single("row"));
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn duplicate_keys_replace_in_place() {
        let value = responsive([("initial", 1), ("medium", 2), ("initial", 3)]);
        let entries: Vec<_> = value.iter().collect();
        assert_eq!(entries, vec![(Some("initial"), &3), (Some("medium"), &2)]);
    }

    #[test]
    fn at_promotes_single_to_initial() {
        let value = ResponsiveValue::Single(2).at("large", 6);
        assert_eq!(
            value,
            ResponsiveValue::Breakpoints(vec![("initial".into(), 2), ("large".into(), 6)])
        );
    }

    #[test]
    fn into_responsive_accepts_both_shapes() {
        assert_eq!(7_i32.into_responsive(), ResponsiveValue::Single(7));
        let mapped = responsive([("medium", 1)]);
        assert_eq!(mapped.clone().into_responsive(), mapped);
    }

    #[test]
    fn map_values_keeps_keys() {
        let value = responsive([("small", 1), ("xl", 2)]).map_values(|n| n * 10);
        let entries: Vec<_> = value.iter().collect();
        assert_eq!(entries, vec![(Some("small"), &10), (Some("xl"), &20)]);
    }
}
