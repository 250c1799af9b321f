//! Avatar parts: the root, an image, and a fallback shown while the image
//! loads or when it fails. Loading state is the primitive's concern.

use once_cell::sync::Lazy;
use stylekit::{VariantTable, cn_with, pick};

use super::{CONTROL_BASE, SIZE_CLASSES, Size};
use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::keyed_enum;
use crate::macros::impl_element_props;
use crate::primitive::Primitive;

keyed_enum! {
    /// Corner rounding.
    pub enum Radius {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Full => "full",
    }
}

static AVATAR: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::new("avatar", CONTROL_BASE)
        .axis("size", SIZE_CLASSES, "natural")
        .axis(
            "radius",
            [
                ("none", "rounded-none"),
                ("small", "rounded-sm"),
                ("medium", "rounded-md"),
                ("large", "rounded-lg"),
                ("full", "rounded-full"),
            ],
            "medium",
        )
});

pub fn avatar_variants() -> &'static VariantTable {
    &AVATAR
}

/// Avatar root.
#[derive(Debug, Clone, Default)]
pub struct Avatar {
    size: Option<Size>,
    radius: Option<Radius>,
    props: ElementProps,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl Component for Avatar {
    fn into_element(self) -> Element {
        let class = AVATAR.compose(
            &[pick("size", self.size), pick("radius", self.radius)],
            self.props.class.as_deref(),
        );
        self.props.finish(
            Element::new(Primitive::AvatarRoot)
                .with_slot("avatar")
                .with_class(class),
        )
    }
}

/// The avatar image.
#[derive(Debug, Clone, Default)]
pub struct AvatarImage {
    props: ElementProps,
}

impl AvatarImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self::default().with_attr("src", src)
    }

    pub fn alt(self, alt: impl Into<String>) -> Self {
        self.with_attr("alt", alt)
    }
}

impl Component for AvatarImage {
    fn into_element(self) -> Element {
        let class = cn_with(&["aspect-square size-full"], self.props.class.as_deref());
        self.props.finish(
            Element::new(Primitive::AvatarImage)
                .with_slot("avatar-image")
                .with_class(class),
        )
    }
}

/// Content shown in place of the image.
#[derive(Debug, Clone, Default)]
pub struct AvatarFallback {
    props: ElementProps,
}

impl AvatarFallback {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for AvatarFallback {
    fn into_element(self) -> Element {
        let class = cn_with(
            &["bg-muted flex size-full items-center justify-center rounded-full"],
            self.props.class.as_deref(),
        );
        self.props.finish(
            Element::new(Primitive::AvatarFallback)
                .with_slot("avatar-fallback")
                .with_class(class),
        )
    }
}

impl_element_props!(Avatar, AvatarImage, AvatarFallback);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_defaults() {
        let element = Avatar::new().into_element();
        assert_eq!(element.slot(), Some("avatar"));
        let classes: Vec<_> = element.classes().collect();
        assert!(classes.ends_with(&["h-9", "px-4", "py-2", "rounded-md"]));
    }

    #[test]
    fn round_icon_avatar() {
        let element = Avatar::new().size(Size::Icon).radius(Radius::Full).into_element();
        let classes: Vec<_> = element.classes().collect();
        assert!(classes.ends_with(&["h-8", "w-8", "px-2", "py-2", "shadow-none", "rounded-full"]));
        assert!(!classes.contains(&"rounded-md"));
    }

    #[test]
    fn image_override() {
        let element = AvatarImage::new("/me.png").alt("Me").with_class("size-10").into_element();
        assert_eq!(element.class(), Some("aspect-square size-10"));
        assert_eq!(element.attr("src"), Some("/me.png"));
        assert_eq!(element.attr("alt"), Some("Me"));
    }

    #[test]
    fn fallback_markup() {
        let element = AvatarFallback::new().child("AB").into_element();
        assert_eq!(
            element.to_string(),
            r#"<span data-primitive="avatar.fallback" data-slot="avatar-fallback" class="bg-muted flex size-full items-center justify-center rounded-full">AB</span>"#
        );
    }
}
