//! Absolute positioning inside a relative container.
//!
//! ```rust
//! use scaffold::layout::ConstraintLayout;
//! use scaffold::stylekit::Constraint;
//! use scaffold::Element;
//!
//! let badge = Element::new("span").with_class("rounded-full bg-red-500");
//! let layout = ConstraintLayout::new()
//!     .child(Element::new("img").with_attr("src", "/a.png"))
//!     .constrained(Constraint::new().top(0).right(0), badge);
//!
//! assert_eq!(
//!     Element::from(layout).to_string(),
//!     r#"<div class="relative"><img src="/a.png"><span class="absolute top-0 right-0 rounded-full bg-red-500"></span></div>"#
//! );
//! ```

use stylekit::{Constraint, cn_with, resolve_constraint};

use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::macros::impl_element_props;
use crate::render::Render;

/// An absolutely positioned element.
#[derive(Debug, Clone, Default)]
pub struct ConstraintItem {
    constraint: Constraint,
    props: ElementProps,
}

impl ConstraintItem {
    pub fn new(constraint: Constraint) -> Self {
        Self {
            constraint,
            props: ElementProps::default(),
        }
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}

impl_element_props!(ConstraintItem);

impl Component for ConstraintItem {
    fn into_element(self) -> Element {
        let resolved = resolve_constraint(&self.constraint);
        let class = cn_with(&resolved.classes, self.props.class.as_deref());
        self.props.finish(
            Element::new("div")
                .with_class(class)
                .with_style(&resolved.style),
        )
    }
}

/// A `relative` container whose constrained children are positioned
/// absolutely.
#[derive(Debug, Clone, Default)]
pub struct ConstraintLayout {
    props: ElementProps,
}

impl ConstraintLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `element` positioned by `constraint`.
    ///
    /// The element's own classes move onto the positioning wrapper, which
    /// then adopts the element. An empty constraint appends it unchanged.
    pub fn constrained(mut self, constraint: Constraint, element: impl Into<Element>) -> Self {
        let mut element = element.into();
        if !constraint.is_set() {
            self.props.children.push(element.into());
            return self;
        }

        log::debug!("wrapping <{}> in a constraint item", element.tag().html_name());
        let mut item = ConstraintItem::new(constraint);
        item.props.class = element.take_class();
        item.props.render = Render::AdoptChild(element);
        self.props.children.push(item.into());
        self
    }
}

impl_element_props!(ConstraintLayout);

impl Component for ConstraintLayout {
    fn into_element(self) -> Element {
        let class = cn_with(&["relative"], self.props.class.as_deref());
        self.props.finish(Element::new("div").with_class(class))
    }
}
