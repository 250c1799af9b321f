//! Accordion parts.
//!
//! Open/close state, keyboard navigation and ARIA wiring belong to the
//! accordion primitive; these wrappers only style its parts.
//!
//! ```rust
//! use scaffold::components::{Accordion, AccordionContent, AccordionItem, AccordionTrigger};
//! use scaffold::Element;
//!
//! let faq = Accordion::new().with_attr("type", "single").child(
//!     AccordionItem::new("shipping")
//!         .child(AccordionTrigger::new().child("Do you ship abroad?"))
//!         .child(AccordionContent::new().child("Yes, worldwide.")),
//! );
//! let element = Element::from(faq);
//! assert_eq!(element.slot(), Some("accordion"));
//! ```

use stylekit::cn_with;

use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::macros::impl_element_props;
use crate::primitive::Primitive;

const ITEM_CLASSES: &str = "border-b last:border-b-0";

const TRIGGER_CLASSES: &str = "focus-visible:border-ring focus-visible:ring-ring/50 flex flex-1 items-start justify-between gap-4 rounded-md py-4 text-left text-sm font-medium transition-all outline-none hover:underline focus-visible:ring-[3px] disabled:pointer-events-none disabled:opacity-50 [&[data-state=open]>svg]:rotate-180";

const CHEVRON_CLASSES: &str = "text-muted-foreground pointer-events-none size-4 shrink-0 translate-y-0.5 transition-transform duration-200";

const CONTENT_CLASSES: &str = "data-[state=closed]:animate-accordion-up data-[state=open]:animate-accordion-down overflow-hidden text-sm";

const CONTENT_INNER_CLASSES: &str = "pt-0 pb-4";

/// Accordion root.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    props: ElementProps,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for Accordion {
    fn into_element(self) -> Element {
        let mut element = Element::new(Primitive::AccordionRoot).with_slot("accordion");
        if let Some(class) = &self.props.class {
            element = element.with_class(class.as_str());
        }
        self.props.finish(element)
    }
}

/// One collapsible section, identified by its value.
#[derive(Debug, Clone, Default)]
pub struct AccordionItem {
    props: ElementProps,
}

impl AccordionItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self::default().with_attr("value", value)
    }
}

impl Component for AccordionItem {
    fn into_element(self) -> Element {
        let class = cn_with(&[ITEM_CLASSES], self.props.class.as_deref());
        self.props.finish(
            Element::new(Primitive::AccordionItem)
                .with_slot("accordion-item")
                .with_class(class),
        )
    }
}

/// The toggle button, wrapped in the header primitive and followed by a
/// chevron that rotates while the item is open.
#[derive(Debug, Clone, Default)]
pub struct AccordionTrigger {
    props: ElementProps,
}

impl AccordionTrigger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for AccordionTrigger {
    fn into_element(self) -> Element {
        let ElementProps {
            class,
            attributes,
            children,
            render,
        } = self.props;

        let chevron = Element::new("svg")
            .with_class(CHEVRON_CLASSES)
            .with_attr("data-icon", "chevron-down")
            .with_attr("aria-hidden", "true");

        let trigger = Element::new(Primitive::AccordionTrigger)
            .with_slot("accordion-trigger")
            .with_class(cn_with(&[TRIGGER_CLASSES], class.as_deref()))
            .with_attributes(attributes)
            .with_children(children)
            .with_child(chevron);

        Element::new(Primitive::AccordionHeader)
            .with_class("flex")
            .with_child(render.resolve(trigger))
    }
}

/// The collapsible panel. The caller's classes style the inner wrapper so
/// that the panel's own animation classes stay intact.
#[derive(Debug, Clone, Default)]
pub struct AccordionContent {
    props: ElementProps,
}

impl AccordionContent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for AccordionContent {
    fn into_element(self) -> Element {
        let ElementProps {
            class,
            attributes,
            children,
            render,
        } = self.props;

        let inner = Element::new("div")
            .with_class(cn_with(&[CONTENT_INNER_CLASSES], class.as_deref()))
            .with_children(children);

        let content = Element::new(Primitive::AccordionContent)
            .with_slot("accordion-content")
            .with_class(CONTENT_CLASSES)
            .with_attributes(attributes)
            .with_child(inner);

        render.resolve(content)
    }
}

impl_element_props!(Accordion, AccordionItem, AccordionTrigger, AccordionContent);
