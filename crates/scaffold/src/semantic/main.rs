//! The `<main>` landmark, with vertical padding.

use once_cell::sync::Lazy;
use stylekit::VariantTable;

use super::{Spacing, impl_spacing_setters, spacing_axes};
use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::macros::impl_element_props;

static MAIN: Lazy<VariantTable> = Lazy::new(|| spacing_axes(VariantTable::new("main", ""), "py"));

pub fn main_variants() -> &'static VariantTable {
    &MAIN
}

#[derive(Debug, Clone, Default)]
pub struct Main {
    spacing: Spacing,
    props: ElementProps,
}

impl Main {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(&self) -> String {
        self.spacing.compose(&MAIN, self.props.class.as_deref())
    }
}

impl_spacing_setters!(Main);
impl_element_props!(Main);

impl Component for Main {
    fn into_element(self) -> Element {
        let class = self.class_name();
        self.props.finish(Element::new("main").with_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::Step;

    #[test]
    fn defaults_have_no_base() {
        assert_eq!(
            Main::new().class_name(),
            "py-4 gap-0 gap-x-0 gap-y-0 space-x-none space-y-none"
        );
    }

    #[test]
    fn axis_gaps_are_applied() {
        let class = Main::new().gap_x(Step::Three).gap_y(Step::Five).class_name();
        assert_eq!(class, "py-4 gap-0 gap-x-3 gap-y-5 space-x-none space-y-none");
    }

    #[test]
    fn renders_main_element() {
        let element = Main::new().distance(Step::None).child("content").into_element();
        assert_eq!(
            element.to_string(),
            r#"<main class="py-none gap-0 gap-x-0 gap-y-0 space-x-none space-y-none">content</main>"#
        );
    }
}
