//! Responsive flex container.

use stylekit::{IntoResponsive, cn_with};

use super::props::{ClassList, Items, Justify, LayoutProps, LayoutTag, Prop, TextAlign, impl_layout_props};
use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::keyed_enum;
use crate::macros::impl_element_props;

keyed_enum! {
    pub enum Direction {
        Row => "row",
        Col => "col",
        RowReverse => "row-reverse",
        ColReverse => "col-reverse",
    }
}

keyed_enum! {
    pub enum Wrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

/// A `flex` container; every prop is responsive.
///
/// ```rust
/// use scaffold::layout::{Direction, FlexLayout, Items};
/// use scaffold::stylekit::responsive;
///
/// let flex = FlexLayout::new()
///     .direction(responsive([("initial", Direction::Col), ("medium", Direction::Row)]))
///     .items(Items::Center)
///     .gap(4);
/// assert_eq!(flex.class_name(), "flex flex-col md:flex-row items-center gap-4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlexLayout {
    direction: Prop<Direction>,
    wrap: Prop<Wrap>,
    justify: Prop<Justify>,
    items: Prop<Items>,
    align: Prop<TextAlign>,
    layout: LayoutProps,
    tag: LayoutTag,
    props: ElementProps,
}

impl FlexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, value: impl IntoResponsive<Direction>) -> Self {
        self.direction = Some(value.into_responsive());
        self
    }

    pub fn wrap(mut self, value: impl IntoResponsive<Wrap>) -> Self {
        self.wrap = Some(value.into_responsive());
        self
    }

    pub fn justify(mut self, value: impl IntoResponsive<Justify>) -> Self {
        self.justify = Some(value.into_responsive());
        self
    }

    pub fn items(mut self, value: impl IntoResponsive<Items>) -> Self {
        self.items = Some(value.into_responsive());
        self
    }

    pub fn align(mut self, value: impl IntoResponsive<TextAlign>) -> Self {
        self.align = Some(value.into_responsive());
        self
    }

    pub fn class_name(&self) -> String {
        let mut classes = ClassList::new("flex");
        self.layout.leading(&mut classes);
        classes
            .prefixed("flex", &self.direction)
            .prefixed("flex", &self.wrap)
            .prefixed("justify", &self.justify)
            .prefixed("items", &self.items)
            .prefixed("text", &self.align);
        self.layout.trailing(&mut classes);
        cn_with(&classes.into_vec(), self.props.class.as_deref())
    }
}

impl_layout_props!(FlexLayout);
impl_element_props!(FlexLayout);

impl Component for FlexLayout {
    fn into_element(self) -> Element {
        let class = self.class_name();
        self.props.finish(Element::new(self.tag.key()).with_class(class))
    }
}
