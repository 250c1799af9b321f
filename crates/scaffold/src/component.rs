//! The component contract.

use crate::element::{Element, Node, set_attr};
use crate::render::Render;

/// A pure mapping from typed props to an [`Element`].
pub trait Component {
    fn into_element(self) -> Element;
}

/// Props every component accepts besides its style intent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementProps {
    /// Caller class override.
    pub class: Option<String>,
    /// Pass-through attributes, in insertion order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub render: Render,
}

impl ElementProps {
    pub(crate) fn set_attr(&mut self, name: String, value: String) {
        set_attr(&mut self.attributes, name, value);
    }

    /// Attach attributes and children to `element` and apply the render
    /// directive. The class is the component's business and is not touched.
    pub(crate) fn finish(self, element: Element) -> Element {
        let element = element
            .with_attributes(self.attributes)
            .with_children(self.children);
        self.render.resolve(element)
    }
}
