//! Button.
//!
//! A `<button>` whose classes come from four variant axes:
//!
//! | axis      | values                                                         | default  |
//! |-----------|----------------------------------------------------------------|----------|
//! | `variant` | destructive, elevated, filled, linked, outlined, text, tonal   | filled   |
//! | `size`    | see [`Size`]                                                   | natural  |
//! | `radius`  | 0, 25, 50, 75, 100                                             | 50       |
//! | `align`   | left, center, right                                            | center   |
//!
//! ```rust
//! use scaffold::components::{Button, ButtonVariant};
//! use scaffold::Element;
//!
//! let link = Button::new()
//!     .variant(ButtonVariant::Linked)
//!     .as_child(Element::new("a").with_attr("href", "/pricing").with_child("Pricing"));
//! let element = Element::from(link);
//! assert_eq!(element.tag().html_name(), "a");
//! assert!(element.classes().any(|class| class == "underline-offset-4"));
//! ```

use once_cell::sync::Lazy;
use stylekit::{VariantTable, pick};

use super::{CONTROL_BASE, SIZE_CLASSES, Size};
use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::keyed_enum;
use crate::macros::impl_element_props;

keyed_enum! {
    /// Visual treatment.
    pub enum ButtonVariant {
        Destructive => "destructive",
        Elevated => "elevated",
        Filled => "filled",
        Linked => "linked",
        Outlined => "outlined",
        Text => "text",
        Tonal => "tonal",
    }
}

keyed_enum! {
    /// Corner rounding, as a percentage of the largest radius.
    pub enum ButtonRadius {
        None => "0",
        Quarter => "25",
        Half => "50",
        ThreeQuarters => "75",
        Full => "100",
    }
}

keyed_enum! {
    /// Content alignment.
    pub enum Alignment {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

static BUTTON: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::new("button", CONTROL_BASE)
        .axis(
            "variant",
            [
                ("destructive", "bg-destructive text-destructive-foreground shadow-xs hover:bg-destructive/90"),
                ("elevated", "bg-background text-secondary-foreground shadow hover:bg-accent hover:text-accent-foreground"),
                ("filled", "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90"),
                ("linked", "text-primary underline-offset-4 hover:underline"),
                ("outlined", "border border-border bg-transparent shadow-none hover:bg-accent hover:text-accent-foreground"),
                ("text", "hover:bg-accent hover:text-accent-foreground"),
                ("tonal", "bg-secondary text-secondary-foreground shadow-none hover:bg-secondary/80"),
            ],
            "filled",
        )
        .axis("size", SIZE_CLASSES, "natural")
        .axis(
            "radius",
            [
                ("0", "rounded-none"),
                ("25", "rounded-sm"),
                ("50", "rounded-md"),
                ("75", "rounded-lg"),
                ("100", "rounded-full"),
            ],
            "50",
        )
        .axis(
            "align",
            [
                ("left", "justify-start text-left"),
                ("center", "justify-center text-center"),
                ("right", "justify-end text-right"),
            ],
            "center",
        )
});

/// The button's variant table, for styling other elements like a button.
pub fn button_variants() -> &'static VariantTable {
    &BUTTON
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    variant: Option<ButtonVariant>,
    size: Option<Size>,
    radius: Option<ButtonRadius>,
    align: Option<Alignment>,
    props: ElementProps,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a button with a text label.
    pub fn labeled(label: impl Into<String>) -> Self {
        let label: String = label.into();
        Self::new().child(label)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn radius(mut self, radius: ButtonRadius) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// The merged class string this button renders with.
    pub fn class_name(&self) -> String {
        BUTTON.compose(
            &[
                pick("variant", self.variant),
                pick("size", self.size),
                pick("radius", self.radius),
                pick("align", self.align),
            ],
            self.props.class.as_deref(),
        )
    }
}

impl_element_props!(Button);

impl Component for Button {
    fn into_element(self) -> Element {
        let class = self.class_name();
        self.props.finish(Element::new("button").with_class(class))
    }
}
