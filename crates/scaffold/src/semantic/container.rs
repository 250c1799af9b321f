//! Page-width container with horizontal padding.

use once_cell::sync::Lazy;
use stylekit::VariantTable;

use super::{Spacing, impl_spacing_setters, spacing_axes};
use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::macros::impl_element_props;

static CONTAINER: Lazy<VariantTable> =
    Lazy::new(|| spacing_axes(VariantTable::new("container", "container"), "px"));

pub fn container_variants() -> &'static VariantTable {
    &CONTAINER
}

#[derive(Debug, Clone, Default)]
pub struct Container {
    spacing: Spacing,
    props: ElementProps,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(&self) -> String {
        self.spacing.compose(&CONTAINER, self.props.class.as_deref())
    }
}

impl_spacing_setters!(Container);
impl_element_props!(Container);

impl Component for Container {
    fn into_element(self) -> Element {
        let class = self.class_name();
        self.props.finish(Element::new("div").with_class(class))
    }
}
