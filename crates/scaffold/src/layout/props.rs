//! Props shared by the responsive layouts.
//!
//! Every prop is optional and responsive: a bare value, or a mapping from
//! breakpoint to value. Absent props emit nothing. [`LayoutProps`] emits its
//! classes in two runs around the component's own props:
//!
//! 1. display, position, overflow, visibility, pointer-events
//! 2. (component props)
//! 3. z-index, aspect ratio, opacity, size, width and height bounds,
//!    offsets, padding, margin, gaps and child spacing

use std::fmt;

use stylekit::{ClassAxis, IntoResponsive, ResponsiveValue, resolve_axis};

use crate::keyed_enum;

keyed_enum! {
    #[derive(Default)]
    pub enum Display {
        #[default]
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        InlineFlex => "inline-flex",
        Grid => "grid",
        Hidden => "hidden",
    }
}

keyed_enum! {
    pub enum Position {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
}

keyed_enum! {
    pub enum Overflow {
        Auto => "auto",
        Clip => "clip",
        Hidden => "hidden",
        Scroll => "scroll",
        Visible => "visible",
    }
}

keyed_enum! {
    pub enum Visibility {
        Visible => "visible",
        Invisible => "invisible",
    }
}

keyed_enum! {
    pub enum PointerEvents {
        None => "none",
        Auto => "auto",
    }
}

keyed_enum! {
    /// Main-axis distribution.
    pub enum Justify {
        Start => "start",
        Center => "center",
        End => "end",
        Between => "between",
        Around => "around",
        Evenly => "evenly",
    }
}

keyed_enum! {
    /// Cross-axis alignment.
    pub enum Items {
        Start => "start",
        Center => "center",
        End => "end",
        Stretch => "stretch",
        Baseline => "baseline",
        Normal => "normal",
    }
}

keyed_enum! {
    pub enum TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
}

/// A utility value suffix: a scale step (`4`, `0.5`), a fraction (`1/2`) or
/// a keyword (`full`, `screen`, `auto`). Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! value_conversions {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value(value.to_string())
                }
            }

            impl IntoResponsive<Value> for $ty {
                fn into_responsive(self) -> ResponsiveValue<Value> {
                    ResponsiveValue::Single(self.into())
                }
            }

            impl IntoResponsive<Value> for ResponsiveValue<$ty> {
                fn into_responsive(self) -> ResponsiveValue<Value> {
                    self.map_values(|value| Value(value.to_string()))
                }
            }
        )+
    };
}

value_conversions!(i32, f64, &str, String);

/// An optional responsive prop.
pub type Prop<T> = Option<ResponsiveValue<T>>;

/// The props common to every responsive layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutProps {
    pub display: Prop<Display>,
    pub position: Prop<Position>,
    pub overflow: Prop<Overflow>,
    pub visibility: Prop<Visibility>,
    pub pointer_events: Prop<PointerEvents>,

    pub z_index: Prop<Value>,
    pub aspect_ratio: Prop<Value>,
    pub opacity: Prop<Value>,

    /// Sets width and height together.
    pub size: Prop<Value>,
    pub width: Prop<Value>,
    pub height: Prop<Value>,
    pub min_width: Prop<Value>,
    pub min_height: Prop<Value>,
    pub max_width: Prop<Value>,
    pub max_height: Prop<Value>,

    pub top: Prop<Value>,
    pub bottom: Prop<Value>,
    pub left: Prop<Value>,
    pub right: Prop<Value>,

    pub padding: Prop<Value>,
    pub padding_x: Prop<Value>,
    pub padding_y: Prop<Value>,
    pub padding_top: Prop<Value>,
    pub padding_bottom: Prop<Value>,
    pub padding_left: Prop<Value>,
    pub padding_right: Prop<Value>,

    pub margin: Prop<Value>,
    pub margin_x: Prop<Value>,
    pub margin_y: Prop<Value>,
    pub margin_top: Prop<Value>,
    pub margin_bottom: Prop<Value>,
    pub margin_left: Prop<Value>,
    pub margin_right: Prop<Value>,

    pub gap: Prop<Value>,
    pub gap_x: Prop<Value>,
    pub gap_y: Prop<Value>,
    pub space_x: Prop<Value>,
    pub space_y: Prop<Value>,
}

/// Collects classes for a sequence of props.
#[derive(Debug, Default)]
pub(crate) struct ClassList(Vec<String>);

impl ClassList {
    pub fn new(base: &str) -> Self {
        ClassList(vec![base.to_string()])
    }

    pub fn complete<T: fmt::Display>(&mut self, value: &Prop<T>) -> &mut Self {
        self.0.extend(resolve_axis(ClassAxis::Complete, value.as_ref()));
        self
    }

    pub fn prefixed<T: fmt::Display>(&mut self, prefix: &str, value: &Prop<T>) -> &mut Self {
        self.0.extend(resolve_axis(ClassAxis::Prefixed(prefix), value.as_ref()));
        self
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl LayoutProps {
    /// Classes emitted before the component's own props.
    pub(crate) fn leading(&self, classes: &mut ClassList) {
        classes
            .complete(&self.display)
            .complete(&self.position)
            .prefixed("overflow", &self.overflow)
            .complete(&self.visibility)
            .prefixed("pointer-events", &self.pointer_events);
    }

    /// Classes emitted after the component's own props.
    pub(crate) fn trailing(&self, classes: &mut ClassList) {
        classes
            .prefixed("z", &self.z_index)
            .prefixed("aspect", &self.aspect_ratio)
            .prefixed("opacity", &self.opacity)
            .prefixed("w", &self.size)
            .prefixed("h", &self.size)
            .prefixed("w", &self.width)
            .prefixed("h", &self.height)
            .prefixed("min-w", &self.min_width)
            .prefixed("min-h", &self.min_height)
            .prefixed("max-w", &self.max_width)
            .prefixed("max-h", &self.max_height)
            .prefixed("top", &self.top)
            .prefixed("bottom", &self.bottom)
            .prefixed("left", &self.left)
            .prefixed("right", &self.right)
            .prefixed("p", &self.padding)
            .prefixed("px", &self.padding_x)
            .prefixed("py", &self.padding_y)
            .prefixed("pt", &self.padding_top)
            .prefixed("pb", &self.padding_bottom)
            .prefixed("pl", &self.padding_left)
            .prefixed("pr", &self.padding_right)
            .prefixed("m", &self.margin)
            .prefixed("mx", &self.margin_x)
            .prefixed("my", &self.margin_y)
            .prefixed("mt", &self.margin_top)
            .prefixed("mb", &self.margin_bottom)
            .prefixed("ml", &self.margin_left)
            .prefixed("mr", &self.margin_right)
            .prefixed("gap", &self.gap)
            .prefixed("gap-x", &self.gap_x)
            .prefixed("gap-y", &self.gap_y)
            .prefixed("space-x", &self.space_x)
            .prefixed("space-y", &self.space_y);
    }
}

keyed_enum! {
    /// Element a layout renders as.
    #[derive(Default)]
    pub enum LayoutTag {
        #[default]
        Div => "div",
        Span => "span",
    }
}

/// Generates responsive setters for every [`LayoutProps`] field on a type
/// with a `layout: LayoutProps` field, plus `with_tag`.
macro_rules! impl_layout_props {
    ($ty:ident) => {
        $crate::layout::props::impl_layout_props!(@setters $ty;
            display: $crate::layout::props::Display,
            position: $crate::layout::props::Position,
            overflow: $crate::layout::props::Overflow,
            visibility: $crate::layout::props::Visibility,
            pointer_events: $crate::layout::props::PointerEvents,
            z_index: $crate::layout::props::Value,
            aspect_ratio: $crate::layout::props::Value,
            opacity: $crate::layout::props::Value,
            size: $crate::layout::props::Value,
            width: $crate::layout::props::Value,
            height: $crate::layout::props::Value,
            min_width: $crate::layout::props::Value,
            min_height: $crate::layout::props::Value,
            max_width: $crate::layout::props::Value,
            max_height: $crate::layout::props::Value,
            top: $crate::layout::props::Value,
            bottom: $crate::layout::props::Value,
            left: $crate::layout::props::Value,
            right: $crate::layout::props::Value,
            padding: $crate::layout::props::Value,
            padding_x: $crate::layout::props::Value,
            padding_y: $crate::layout::props::Value,
            padding_top: $crate::layout::props::Value,
            padding_bottom: $crate::layout::props::Value,
            padding_left: $crate::layout::props::Value,
            padding_right: $crate::layout::props::Value,
            margin: $crate::layout::props::Value,
            margin_x: $crate::layout::props::Value,
            margin_y: $crate::layout::props::Value,
            margin_top: $crate::layout::props::Value,
            margin_bottom: $crate::layout::props::Value,
            margin_left: $crate::layout::props::Value,
            margin_right: $crate::layout::props::Value,
            gap: $crate::layout::props::Value,
            gap_x: $crate::layout::props::Value,
            gap_y: $crate::layout::props::Value,
            space_x: $crate::layout::props::Value,
            space_y: $crate::layout::props::Value,
        );

        impl $ty {
            /// Render as `<span>` instead of `<div>`.
            pub fn with_tag(mut self, tag: $crate::layout::props::LayoutTag) -> Self {
                self.tag = tag;
                self
            }
        }
    };
    (@setters $ty:ident; $($field:ident: $value:ty),+ $(,)?) => {
        impl $ty {
            $(
                pub fn $field(mut self, value: impl $crate::stylekit::IntoResponsive<$value>) -> Self {
                    self.layout.$field = Some(value.into_responsive());
                    self
                }
            )+
        }
    };
}

pub(crate) use impl_layout_props;

#[cfg(test)]
mod tests {
    use super::*;
    use stylekit::responsive;

    #[test]
    fn value_conversions() {
        assert_eq!(2_i32.into_responsive(), ResponsiveValue::Single(Value::from(2_i32)));
        assert_eq!(Value::from(0.5_f64).as_str(), "0.5");
        assert_eq!(Value::from(3.0_f64).as_str(), "3");
        assert_eq!(Value::from("1/2").to_string(), "1/2");

        let mapped: ResponsiveValue<Value> = responsive([("initial", "full"), ("large", "1/2")]).into_responsive();
        assert_eq!(mapped.len(), 2);
    }

    #[test]
    fn leading_and_trailing_order() {
        let props = LayoutProps {
            display: Some(ResponsiveValue::Single(Display::InlineFlex)),
            overflow: Some(responsive([("initial", Overflow::Hidden), ("medium", Overflow::Auto)])),
            pointer_events: Some(ResponsiveValue::Single(PointerEvents::None)),
            size: Some(4_i32.into_responsive()),
            padding: Some(2_i32.into_responsive()),
            gap: Some(responsive([("initial", 2_i32), ("medium", 4)]).into_responsive()),
            ..Default::default()
        };

        let mut classes = ClassList::new("flex");
        props.leading(&mut classes);
        props.trailing(&mut classes);
        assert_eq!(
            classes.into_vec(),
            vec![
                "flex",
                "inline-flex",
                "overflow-hidden",
                "md:overflow-auto",
                "pointer-events-none",
                "w-4",
                "h-4",
                "p-2",
                "gap-2",
                "md:gap-4",
            ]
        );
    }
}
