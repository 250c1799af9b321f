//! Handles for accessible primitives.
//!
//! Interactive behavior (open/close state, image loading, keyboard handling)
//! belongs to an external primitives toolkit. Components only name the part
//! they render; the markup layer serializes a primitive as its default HTML
//! tag with a `data-primitive` attribute.

/// A part of an accessible primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    AccordionRoot,
    AccordionItem,
    AccordionHeader,
    AccordionTrigger,
    AccordionContent,
    AvatarRoot,
    AvatarImage,
    AvatarFallback,
}

impl Primitive {
    /// Qualified part name (`accordion.trigger`).
    pub fn name(self) -> &'static str {
        match self {
            Primitive::AccordionRoot => "accordion.root",
            Primitive::AccordionItem => "accordion.item",
            Primitive::AccordionHeader => "accordion.header",
            Primitive::AccordionTrigger => "accordion.trigger",
            Primitive::AccordionContent => "accordion.content",
            Primitive::AvatarRoot => "avatar.root",
            Primitive::AvatarImage => "avatar.image",
            Primitive::AvatarFallback => "avatar.fallback",
        }
    }

    /// The element the primitive renders by default.
    pub fn html_tag(self) -> &'static str {
        match self {
            Primitive::AccordionHeader => "h3",
            Primitive::AccordionTrigger => "button",
            Primitive::AvatarRoot | Primitive::AvatarFallback => "span",
            Primitive::AvatarImage => "img",
            Primitive::AccordionRoot | Primitive::AccordionItem | Primitive::AccordionContent => "div",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tags() {
        assert_eq!(Primitive::AccordionHeader.html_tag(), "h3");
        assert_eq!(Primitive::AccordionTrigger.html_tag(), "button");
        assert_eq!(Primitive::AvatarImage.html_tag(), "img");
        assert_eq!(Primitive::AvatarRoot.name(), "avatar.root");
    }
}
