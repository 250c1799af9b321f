//! Constraint mapping for absolutely positioned elements.
//!
//! Each positioning property is judged on its own. Values that the utility
//! scale covers become classes, everything else becomes an inline style:
//!
//! | property                 | class when              | otherwise          |
//! |--------------------------|-------------------------|--------------------|
//! | top, left, right, bottom | integer in `0..=96`     | style `top` ...    |
//! | width, height            | `full`, `screen`, or as above | style `width` ... |
//! | z-index                  | integer in `0..=50`     | style `zIndex`     |
//!
//! The result always starts with `absolute`.
//!
//! ```rust
//! use stylekit::{Constraint, resolve_constraint};
//! use stylekit::style::{StyleProperty, StyleValue};
//!
//! let constraint = Constraint::new().top(4).left("10%").z_index(60);
//! let resolved = resolve_constraint(&constraint);
//! assert_eq!(resolved.classes, vec!["absolute", "top-4"]);
//! assert_eq!(resolved.style.get(&StyleProperty::Left), Some(&StyleValue::from("10%")));
//! assert_eq!(resolved.style.get(&StyleProperty::ZIndex), Some(&StyleValue::from(60)));
//! ```

use crate::style::{StyleMap, StyleProperty, StyleValue};

/// Largest offset or size with a discrete utility class.
pub const MAX_SCALE: f64 = 96.0;
/// Largest z-index with a discrete utility class.
pub const MAX_Z_INDEX: i32 = 50;

/// A positioning value: a number on the spacing scale, or a raw CSS string.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintValue {
    /// NaN and infinities are ignored by [`resolve_constraint`].
    Number(f64),
    Text(String),
}

impl ConstraintValue {
    /// The discrete scale step, if this value has one.
    fn scale_step(&self) -> Option<i64> {
        match self {
            ConstraintValue::Number(n) if n.fract() == 0.0 && (0.0..=MAX_SCALE).contains(n) => {
                Some(*n as i64)
            }
            _ => None,
        }
    }

    fn to_style(&self) -> StyleValue {
        match self {
            ConstraintValue::Number(n) => StyleValue::Number(*n),
            ConstraintValue::Text(s) => StyleValue::Text(s.clone()),
        }
    }
}

impl From<i32> for ConstraintValue {
    fn from(value: i32) -> Self {
        ConstraintValue::Number(f64::from(value))
    }
}

impl From<f64> for ConstraintValue {
    fn from(value: f64) -> Self {
        ConstraintValue::Number(value)
    }
}

impl From<&str> for ConstraintValue {
    fn from(value: &str) -> Self {
        ConstraintValue::Text(value.to_string())
    }
}

impl From<String> for ConstraintValue {
    fn from(value: String) -> Self {
        ConstraintValue::Text(value)
    }
}

/// The positioning properties of one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraint {
    pub top: Option<ConstraintValue>,
    pub left: Option<ConstraintValue>,
    pub right: Option<ConstraintValue>,
    pub bottom: Option<ConstraintValue>,
    pub width: Option<ConstraintValue>,
    pub height: Option<ConstraintValue>,
    pub z_index: Option<i32>,
}

impl Constraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(mut self, value: impl Into<ConstraintValue>) -> Self {
        self.top = Some(value.into());
        self
    }

    pub fn left(mut self, value: impl Into<ConstraintValue>) -> Self {
        self.left = Some(value.into());
        self
    }

    pub fn right(mut self, value: impl Into<ConstraintValue>) -> Self {
        self.right = Some(value.into());
        self
    }

    pub fn bottom(mut self, value: impl Into<ConstraintValue>) -> Self {
        self.bottom = Some(value.into());
        self
    }

    pub fn width(mut self, value: impl Into<ConstraintValue>) -> Self {
        self.width = Some(value.into());
        self
    }

    pub fn height(mut self, value: impl Into<ConstraintValue>) -> Self {
        self.height = Some(value.into());
        self
    }

    pub fn z_index(mut self, value: i32) -> Self {
        self.z_index = Some(value);
        self
    }

    /// True when at least one property is set.
    pub fn is_set(&self) -> bool {
        self.top.is_some()
            || self.left.is_some()
            || self.right.is_some()
            || self.bottom.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.z_index.is_some()
    }
}

/// Classes and inline styles for one constrained element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintStyle {
    pub classes: Vec<String>,
    pub style: StyleMap,
}

/// Map a constraint onto utility classes and inline styles.
pub fn resolve_constraint(constraint: &Constraint) -> ConstraintStyle {
    let mut out = ConstraintStyle {
        classes: vec!["absolute".to_string()],
        style: StyleMap::new(),
    };

    let offsets = [
        ("top", StyleProperty::Top, &constraint.top),
        ("left", StyleProperty::Left, &constraint.left),
        ("right", StyleProperty::Right, &constraint.right),
        ("bottom", StyleProperty::Bottom, &constraint.bottom),
    ];
    for (prefix, property, value) in offsets {
        if let Some(value) = value {
            place(&mut out, prefix, property, value);
        }
    }

    let sizes = [
        ("w", StyleProperty::Width, &constraint.width),
        ("h", StyleProperty::Height, &constraint.height),
    ];
    for (prefix, property, value) in sizes {
        match value {
            Some(ConstraintValue::Text(keyword)) if keyword == "full" || keyword == "screen" => {
                out.classes.push(format!("{prefix}-{keyword}"));
            }
            Some(value) => place(&mut out, prefix, property, value),
            None => {}
        }
    }

    if let Some(z) = constraint.z_index {
        if (0..=MAX_Z_INDEX).contains(&z) {
            out.classes.push(format!("z-{z}"));
        } else {
            out.style.set(StyleProperty::ZIndex, z);
        }
    }

    log::trace!("constraint {:?} -> {:?} / {}", constraint, out.classes, out.style);
    out
}

fn place(out: &mut ConstraintStyle, prefix: &str, property: StyleProperty, value: &ConstraintValue) {
    if let ConstraintValue::Number(n) = value {
        if !n.is_finite() {
            log::warn!("ignoring non-finite {prefix} constraint: {n}");
            return;
        }
    }
    match value.scale_step() {
        Some(step) => out.classes.push(format!("{prefix}-{step}")),
        None => out.style.set(property, value.to_style()),
    }
}
