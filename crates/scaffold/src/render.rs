//! Render directive.
//!
//! Every component either renders its own element or hands its computed
//! props to an element supplied by the caller ("as child"). Adopting follows
//! slot semantics:
//!
//! - tag, children and (if set) `data-slot` come from the child
//! - classes concatenate, component first
//! - styles and attributes merge, the child's entries win

use stylekit::{ClassMerger, JoinClasses};

use crate::element::{Element, set_attr};

/// How a component emits its element.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Render {
    /// Render the component's own element.
    #[default]
    Own,
    /// Apply the component's props to this element instead.
    AdoptChild(Element),
}

impl Render {
    /// Produce the final element from the component's own element.
    pub fn resolve(self, own: Element) -> Element {
        match self {
            Render::Own => own,
            Render::AdoptChild(child) => adopt(own, child),
        }
    }
}

fn adopt(slot: Element, child: Element) -> Element {
    log::trace!("adopting <{}> into slot {:?}", child.tag.html_name(), slot.slot);

    let class = match (slot.class, child.class) {
        (Some(ours), Some(theirs)) => Some(JoinClasses.merge(&[ours.as_str(), theirs.as_str()])),
        (ours, theirs) => ours.or(theirs),
    };

    let mut style = slot.style;
    style.merge(&child.style);

    let mut attributes = slot.attributes;
    for (name, value) in child.attributes {
        set_attr(&mut attributes, name, value);
    }

    Element {
        tag: child.tag,
        slot: child.slot.or(slot.slot),
        class,
        style,
        attributes,
        children: child.children,
    }
}
