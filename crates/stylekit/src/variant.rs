//! Variant tables.
//!
//! A component declares a base class string and a set of named axes. Each
//! axis maps its allowed values to a class fragment and names a default:
//!
//! ```rust
//! use stylekit::VariantTable;
//!
//! let table = VariantTable::new("badge", "inline-flex rounded")
//!     .axis("tone", [("neutral", "bg-muted"), ("danger", "bg-destructive")], "neutral")
//!     .axis("size", [("small", "text-xs"), ("large", "text-lg")], "small");
//!
//! assert_eq!(table.compose(&[("tone", Some("danger"))], None), "inline-flex rounded bg-destructive text-xs");
//! assert_eq!(table.compose(&[], Some("text-sm")), "inline-flex rounded bg-muted text-sm");
//! ```
//!
//! Composition order is fixed: base, then one fragment per axis in declaration
//! order, then the caller's override. The merger resolves conflicts so the
//! override wins.
//!
//! ## Unknown values
//!
//! Typed component APIs cannot express an unknown value. The string-keyed API
//! comes in two flavours:
//!
//! - [`VariantTable::try_compose`] rejects unknown axes and values
//! - [`VariantTable::compose`] logs a warning and uses the axis default

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Result, StyleError};
use crate::merge::{ClassMerger, TailwindMerge};

/// A typed axis value that knows its table key.
pub trait VariantKey: Copy {
    /// The key this value is stored under in its axis.
    fn key(self) -> &'static str;
}

/// Chosen values, by axis name. `None` or a missing axis means "default".
pub type Selection<'a> = [(&'a str, Option<&'a str>)];

/// One named axis: value -> class fragment, plus the default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: &'static str,
    options: Vec<(String, String)>,
    default: Option<String>,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Allowed values, in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(value, _)| value.as_str())
    }

    /// The fragment for `value`, if the axis lists it.
    pub fn fragment(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(key, _)| key == value)
            .map(|(_, class)| class.as_str())
    }

    fn default_fragment(&self) -> Option<&str> {
        self.default.as_deref().and_then(|value| self.fragment(value))
    }
}

/// The variant table of one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTable {
    component: &'static str,
    base: String,
    axes: Vec<Axis>,
}

impl VariantTable {
    /// Start a table for `component` with its fixed base classes.
    pub fn new(component: &'static str, base: impl Into<String>) -> Self {
        Self {
            component,
            base: base.into(),
            axes: Vec::new(),
        }
    }

    /// Declare an axis with its value -> fragment pairs and default value.
    pub fn axis<K, V, I>(mut self, name: &'static str, options: I, default: impl Into<String>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.axes.push(Axis {
            name,
            options: options
                .into_iter()
                .map(|(key, class)| (key.into(), class.into()))
                .collect(),
            default: Some(default.into()),
        });
        self
    }

    /// Declare a spacing-scale axis.
    ///
    /// Every step in `steps` maps to `{prefix}-{step}`; `keywords` supplies
    /// the non-numeric values (`auto`, `none`) ahead of the numeric ones.
    pub fn scale_axis(
        self,
        name: &'static str,
        prefix: &str,
        keywords: &[(&str, &str)],
        steps: RangeInclusive<u32>,
        default: impl Into<String>,
    ) -> Self {
        let options = keywords
            .iter()
            .map(|(key, class)| (key.to_string(), class.to_string()))
            .chain(steps.map(|step| (step.to_string(), format!("{prefix}-{step}"))))
            .collect::<Vec<_>>();
        self.axis(name, options, default)
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn get_axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Base classes followed by one fragment per axis, falling back to
    /// defaults for omitted or unknown values.
    pub fn classes<'t>(&'t self, selection: &Selection<'_>) -> Vec<&'t str> {
        for (axis, _) in selection {
            if self.get_axis(axis).is_none() {
                log::warn!("{}: ignoring unknown variant axis `{}`", self.component, axis);
            }
        }

        let fragments = self.axes.iter().filter_map(|axis| {
            match chosen(selection, axis.name) {
                Some(value) => axis.fragment(value).or_else(|| {
                    log::warn!(
                        "{}: unknown value `{}` for axis `{}`, using default",
                        self.component,
                        value,
                        axis.name
                    );
                    axis.default_fragment()
                }),
                None => axis.default_fragment(),
            }
        });

        self.with_base(fragments)
    }

    /// Like [`classes`](Self::classes), but unknown axes and values are errors.
    pub fn try_classes<'t>(&'t self, selection: &Selection<'_>) -> Result<Vec<&'t str>> {
        if let Some((axis, _)) = selection.iter().find(|(axis, _)| self.get_axis(axis).is_none()) {
            return Err(StyleError::UnknownAxis {
                component: self.component,
                axis: axis.to_string(),
            });
        }

        let mut fragments = Vec::with_capacity(self.axes.len());
        for axis in &self.axes {
            let fragment = match chosen(selection, axis.name) {
                Some(value) => Some(axis.fragment(value).ok_or_else(|| StyleError::UnknownVariant {
                    component: self.component,
                    axis: axis.name,
                    value: value.to_string(),
                })?),
                None => axis.default_fragment(),
            };
            fragments.extend(fragment);
        }

        Ok(self.with_base(fragments.into_iter()))
    }

    /// Compose the final class string with the default merger.
    pub fn compose(&self, selection: &Selection<'_>, class_override: Option<&str>) -> String {
        self.compose_with(&TailwindMerge, selection, class_override)
    }

    /// Compose with a specific merger.
    pub fn compose_with(
        &self,
        merger: &dyn ClassMerger,
        selection: &Selection<'_>,
        class_override: Option<&str>,
    ) -> String {
        let mut parts = self.classes(selection);
        parts.extend(class_override);
        merger.merge(&parts)
    }

    /// Strict composition: unknown axes and values are rejected.
    pub fn try_compose(&self, selection: &Selection<'_>, class_override: Option<&str>) -> Result<String> {
        let mut parts = self.try_classes(selection)?;
        parts.extend(class_override);
        Ok(TailwindMerge.merge(&parts))
    }

    fn with_base<'t>(&'t self, fragments: impl Iterator<Item = &'t str>) -> Vec<&'t str> {
        let base = (!self.base.is_empty()).then_some(self.base.as_str());
        base.into_iter().chain(fragments).collect()
    }
}

impl fmt::Display for VariantTable {
    /// The classes of a default-configured instance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compose(&[], None))
    }
}

fn chosen<'a>(selection: &Selection<'a>, axis: &str) -> Option<&'a str> {
    selection
        .iter()
        .rev()
        .find(|(name, _)| *name == axis)
        .and_then(|(_, value)| *value)
}

/// Convert an optional typed value into a selection entry.
pub fn pick<V: VariantKey>(axis: &'static str, value: Option<V>) -> (&'static str, Option<&'static str>) {
    (axis, value.map(VariantKey::key))
}
