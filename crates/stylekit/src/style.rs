//! Inline style values.
//!
//! Values that have no discrete utility class fall back to inline styles. A
//! [`StyleMap`] keeps its entries in insertion order and renders to a CSS
//! declaration list:
//!
//! ```rust
//! use stylekit::style::{StyleMap, StyleProperty, StyleValue};
//!
//! let mut style = StyleMap::new();
//! style.set(StyleProperty::Left, "10%");
//! style.set(StyleProperty::ZIndex, 60);
//! assert_eq!(style.to_string(), "left: 10%; z-index: 60");
//! ```

use std::fmt;

/// CSS properties the library may emit inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Top,
    Left,
    Right,
    Bottom,
    Width,
    Height,
    ZIndex,
    /// Any other property, by its CSS (kebab-case) name.
    Custom(String),
}

impl StyleProperty {
    /// The CSS property name (`z-index`).
    pub fn css_name(&self) -> &str {
        match self {
            StyleProperty::Top => "top",
            StyleProperty::Left => "left",
            StyleProperty::Right => "right",
            StyleProperty::Bottom => "bottom",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::ZIndex => "z-index",
            StyleProperty::Custom(name) => name,
        }
    }

    /// The DOM style key (`zIndex`).
    pub fn dom_name(&self) -> String {
        match self {
            StyleProperty::ZIndex => "zIndex".to_string(),
            StyleProperty::Custom(name) => {
                let mut out = String::with_capacity(name.len());
                let mut upper = false;
                for c in name.chars() {
                    if c == '-' {
                        upper = !out.is_empty();
                    } else if upper {
                        out.extend(c.to_uppercase());
                        upper = false;
                    } else {
                        out.push(c);
                    }
                }
                out
            }
            other => other.css_name().to_string(),
        }
    }

    /// Whether a bare number is a valid value, rather than a length in pixels.
    fn is_unitless(&self) -> bool {
        matches!(self, StyleProperty::ZIndex)
            || matches!(self, StyleProperty::Custom(name) if matches!(name.as_str(), "opacity" | "order" | "flex-grow" | "flex-shrink" | "line-height"))
    }
}

/// An inline style value: a number or a raw CSS string.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

/// Ordered inline style declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(StyleProperty, StyleValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an earlier value in place.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<StyleValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &StyleProperty) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleProperty, &StyleValue)> {
        self.entries.iter().map(|(p, v)| (p, v))
    }

    /// Layer `other` on top of this map; its values win.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in &other.entries {
            self.set(property.clone(), value.clone());
        }
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property.css_name(), value)?;
            if let StyleValue::Number(n) = value {
                if *n != 0.0 && !property.is_unitless() {
                    f.write_str("px")?;
                }
            }
        }
        Ok(())
    }
}
