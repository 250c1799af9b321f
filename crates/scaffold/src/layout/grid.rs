//! Responsive grid container.

use stylekit::{IntoResponsive, cn_with};

use super::props::{ClassList, LayoutProps, LayoutTag, Prop, Value, impl_layout_props};
use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::keyed_enum;
use crate::macros::impl_element_props;

keyed_enum! {
    pub enum AutoFlow {
        Row => "row",
        Col => "col",
        RowDense => "row-dense",
        ColDense => "col-dense",
        Dense => "dense",
    }
}

keyed_enum! {
    /// Alignment keyword for the content, items and self alignment props.
    /// Not every keyword is valid for every prop.
    pub enum GridAlign {
        Auto => "auto",
        Start => "start",
        Center => "center",
        CenterSafe => "center-safe",
        End => "end",
        EndSafe => "end-safe",
        Between => "between",
        Around => "around",
        Evenly => "evenly",
        Stretch => "stretch",
        Baseline => "baseline",
        BaselineLast => "baseline-last",
        Normal => "normal",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct GridProps {
    columns: Prop<Value>,
    rows: Prop<Value>,
    auto_flow: Prop<AutoFlow>,

    justify_content: Prop<GridAlign>,
    align_content: Prop<GridAlign>,
    place_content: Prop<GridAlign>,
    justify_items: Prop<GridAlign>,
    align_items: Prop<GridAlign>,
    place_items: Prop<GridAlign>,
    justify_self: Prop<GridAlign>,
    align_self: Prop<GridAlign>,
    place_self: Prop<GridAlign>,

    col_span: Prop<Value>,
    col_start: Prop<Value>,
    col_end: Prop<Value>,
    col: Prop<Value>,
    row_span: Prop<Value>,
    row_start: Prop<Value>,
    row_end: Prop<Value>,
    row: Prop<Value>,
}

impl GridProps {
    fn classes(&self, classes: &mut ClassList) {
        classes
            .prefixed("grid-cols", &self.columns)
            .prefixed("grid-rows", &self.rows)
            .prefixed("grid-flow", &self.auto_flow)
            .prefixed("justify", &self.justify_content)
            .prefixed("content", &self.align_content)
            .prefixed("place-content", &self.place_content)
            .prefixed("justify-items", &self.justify_items)
            .prefixed("items", &self.align_items)
            .prefixed("place-items", &self.place_items)
            .prefixed("justify-self", &self.justify_self)
            .prefixed("self", &self.align_self)
            .prefixed("place-self", &self.place_self)
            .prefixed("col-span", &self.col_span)
            .prefixed("col-start", &self.col_start)
            .prefixed("col-end", &self.col_end)
            .prefixed("col", &self.col)
            .prefixed("row-span", &self.row_span)
            .prefixed("row-start", &self.row_start)
            .prefixed("row-end", &self.row_end)
            .prefixed("row", &self.row);
    }
}

/// A `grid` container; every prop is responsive.
///
/// ```rust
/// use scaffold::layout::{GridAlign, GridLayout};
/// use scaffold::stylekit::responsive;
///
/// let grid = GridLayout::new()
///     .columns(responsive([("initial", 1), ("large", 3)]))
///     .align_items(GridAlign::Start)
///     .gap(6);
/// assert_eq!(grid.class_name(), "grid grid-cols-1 lg:grid-cols-3 items-start gap-6");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    grid: GridProps,
    layout: LayoutProps,
    tag: LayoutTag,
    props: ElementProps,
}

macro_rules! grid_setters {
    ($($field:ident: $value:ty),+ $(,)?) => {
        impl GridLayout {
            $(
                pub fn $field(mut self, value: impl IntoResponsive<$value>) -> Self {
                    self.grid.$field = Some(value.into_responsive());
                    self
                }
            )+
        }
    };
}

grid_setters! {
    columns: Value,
    rows: Value,
    auto_flow: AutoFlow,
    justify_content: GridAlign,
    align_content: GridAlign,
    place_content: GridAlign,
    justify_items: GridAlign,
    align_items: GridAlign,
    place_items: GridAlign,
    justify_self: GridAlign,
    align_self: GridAlign,
    place_self: GridAlign,
    col_span: Value,
    col_start: Value,
    col_end: Value,
    col: Value,
    row_span: Value,
    row_start: Value,
    row_end: Value,
    row: Value,
}

impl GridLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(&self) -> String {
        let mut classes = ClassList::new("grid");
        self.layout.leading(&mut classes);
        self.grid.classes(&mut classes);
        self.layout.trailing(&mut classes);
        cn_with(&classes.into_vec(), self.props.class.as_deref())
    }
}

impl_layout_props!(GridLayout);
impl_element_props!(GridLayout);

impl Component for GridLayout {
    fn into_element(self) -> Element {
        let class = self.class_name();
        self.props.finish(Element::new(self.tag.key()).with_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::props::Overflow;

    #[test]
    fn alignment_prefixes() {
        let class = GridLayout::new()
            .justify_content(GridAlign::Between)
            .align_content(GridAlign::Center)
            .justify_items(GridAlign::Stretch)
            .align_self(GridAlign::End)
            .place_self(GridAlign::Auto)
            .class_name();
        assert_eq!(
            class,
            "grid justify-between content-center justify-items-stretch self-end place-self-auto"
        );
    }

    #[test]
    fn placement() {
        let class = GridLayout::new()
            .col_span("full")
            .row_start(2)
            .auto_flow(AutoFlow::RowDense)
            .class_name();
        assert_eq!(class, "grid grid-flow-row-dense col-span-full row-start-2");
    }

    #[test]
    fn overflow_is_prefixed() {
        let class = GridLayout::new().overflow(Overflow::Auto).class_name();
        assert_eq!(class, "grid overflow-auto");
    }

    #[test]
    fn spacing_props_are_emitted() {
        let class = GridLayout::new().space_y(4).class_name();
        assert_eq!(class, "grid space-y-4");
    }
}
