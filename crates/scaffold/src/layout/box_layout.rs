//! Block box with fixed variant axes.
//!
//! Unlike [`FlexLayout`](super::FlexLayout) and [`GridLayout`](super::GridLayout)
//! the box is not responsive: every axis takes one value and falls back to
//! its default, so the box always carries a full set of classes.

use once_cell::sync::Lazy;
use stylekit::{VariantKey, VariantTable, pick};

use super::props::{Items, Justify, TextAlign};
use crate::component::{Component, ElementProps};
use crate::element::Element;
use crate::keyed_enum;
use crate::macros::impl_element_props;
use crate::semantic::Step;

keyed_enum! {
    /// Overflow on both axes, or on one with the `X`/`Y` forms.
    pub enum BoxOverflow {
        Auto => "auto",
        Clip => "clip",
        Hidden => "hidden",
        Scroll => "scroll",
        Visible => "visible",
        AutoX => "autoX",
        AutoY => "autoY",
        ClipX => "clipX",
        ClipY => "clipY",
        HiddenX => "hiddenX",
        HiddenY => "hiddenY",
        ScrollX => "scrollX",
        ScrollY => "scrollY",
        VisibleX => "visibleX",
        VisibleY => "visibleY",
    }
}

impl BoxOverflow {
    fn class(self) -> String {
        let key = self.key();
        match key.strip_suffix('X') {
            Some(stem) => format!("overflow-x-{stem}"),
            None => match key.strip_suffix('Y') {
                Some(stem) => format!("overflow-y-{stem}"),
                None => format!("overflow-{key}"),
            },
        }
    }
}

keyed_enum! {
    pub enum BoxDisplay {
        Inline => "inline",
        Block => "block",
    }
}

keyed_enum! {
    /// Width or height keyword.
    pub enum Extent {
        Auto => "auto",
        Full => "full",
        Screen => "screen",
    }
}

fn classes_for<V: VariantKey>(values: &[V], class: impl Fn(V) -> String) -> Vec<(&'static str, String)> {
    values.iter().map(|&value| (value.key(), class(value))).collect()
}

fn step_axis(table: VariantTable, name: &'static str, prefix: &str, none: &str) -> VariantTable {
    let auto = format!("{prefix}-auto");
    table.scale_axis(name, prefix, &[("auto", auto.as_str()), ("none", none)], 0..=9, "none")
}

static BOX: Lazy<VariantTable> = Lazy::new(|| {
    let table = VariantTable::new("box", "block")
        .axis("overflow", classes_for(BoxOverflow::ALL, BoxOverflow::class), "hidden")
        .axis("display", [("inline", "inline-block"), ("block", "block")], "block")
        .axis("width", classes_for(Extent::ALL, |extent| format!("w-{extent}")), "auto")
        .axis("height", classes_for(Extent::ALL, |extent| format!("h-{extent}")), "auto")
        .axis("justify", classes_for(Justify::ALL, |justify| format!("justify-{justify}")), "center")
        .axis("items", classes_for(Items::ALL, |items| format!("items-{items}")), "center")
        .axis("align", classes_for(TextAlign::ALL, |align| format!("text-{align}")), "left");

    [
        ("padding", "p", "p-0"),
        ("paddingX", "px", "px-0"),
        ("paddingY", "py", "py-0"),
        ("margin", "m", "m-0"),
        ("marginX", "mx", "mx-0"),
        ("marginY", "my", "my-0"),
        ("gap", "gap", "gap-0"),
        ("gapX", "gap-x", "gap-x-0"),
        ("gapY", "gap-y", "gap-y-0"),
        ("spacingX", "space-x", "space-x-none"),
        ("spacingY", "space-y", "space-y-none"),
    ]
    .into_iter()
    .fold(table, |table, (name, prefix, none)| step_axis(table, name, prefix, none))
});

pub fn box_variants() -> &'static VariantTable {
    &BOX
}

/// A `div` styled entirely through the box variant table.
///
/// ```rust
/// use scaffold::layout::{BoxLayout, Extent};
/// use scaffold::semantic::Step;
///
/// let class = BoxLayout::new().width(Extent::Full).padding(Step::Four).class_name();
/// assert!(class.starts_with("overflow-hidden block w-full h-auto"));
/// assert!(class.contains(" p-4 "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoxLayout {
    overflow: Option<BoxOverflow>,
    display: Option<BoxDisplay>,
    width: Option<Extent>,
    height: Option<Extent>,
    justify: Option<Justify>,
    items: Option<Items>,
    align: Option<TextAlign>,
    padding: Option<Step>,
    padding_x: Option<Step>,
    padding_y: Option<Step>,
    margin: Option<Step>,
    margin_x: Option<Step>,
    margin_y: Option<Step>,
    gap: Option<Step>,
    gap_x: Option<Step>,
    gap_y: Option<Step>,
    spacing_x: Option<Step>,
    spacing_y: Option<Step>,
    props: ElementProps,
}

macro_rules! box_setters {
    ($($field:ident: $value:ty),+ $(,)?) => {
        impl BoxLayout {
            $(
                pub fn $field(mut self, value: $value) -> Self {
                    self.$field = Some(value);
                    self
                }
            )+
        }
    };
}

box_setters! {
    overflow: BoxOverflow,
    display: BoxDisplay,
    width: Extent,
    height: Extent,
    justify: Justify,
    items: Items,
    align: TextAlign,
    padding: Step,
    padding_x: Step,
    padding_y: Step,
    margin: Step,
    margin_x: Step,
    margin_y: Step,
    gap: Step,
    gap_x: Step,
    gap_y: Step,
    spacing_x: Step,
    spacing_y: Step,
}

impl BoxLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(&self) -> String {
        let selection = [
            pick("overflow", self.overflow),
            pick("display", self.display),
            pick("width", self.width),
            pick("height", self.height),
            pick("justify", self.justify),
            pick("items", self.items),
            pick("align", self.align),
            pick("padding", self.padding),
            pick("paddingX", self.padding_x),
            pick("paddingY", self.padding_y),
            pick("margin", self.margin),
            pick("marginX", self.margin_x),
            pick("marginY", self.margin_y),
            pick("gap", self.gap),
            pick("gapX", self.gap_x),
            pick("gapY", self.gap_y),
            pick("spacingX", self.spacing_x),
            pick("spacingY", self.spacing_y),
        ];
        BOX.compose(&selection, self.props.class.as_deref())
    }
}

impl_element_props!(BoxLayout);

impl Component for BoxLayout {
    fn into_element(self) -> Element {
        let class = self.class_name();
        self.props.finish(Element::new("div").with_class(class))
    }
}
