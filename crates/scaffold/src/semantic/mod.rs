//! Semantic containers.
//!
//! [`Container`] and [`Main`] share their axes: a distance (horizontal
//! padding for the container, vertical for main), gaps and child spacing.
//! Every axis takes a [`Step`].

pub mod container;
pub mod main;

pub use container::{Container, container_variants};
pub use main::{Main, main_variants};

use stylekit::{Selection, VariantTable, pick};

use crate::keyed_enum;

keyed_enum! {
    /// A step on the spacing scale, or one of its keywords.
    pub enum Step {
        Auto => "auto",
        None => "none",
        Zero => "0",
        One => "1",
        Two => "2",
        Three => "3",
        Four => "4",
        Five => "5",
        Six => "6",
        Seven => "7",
        Eight => "8",
        Nine => "9",
    }
}

/// Adds the axes shared by the semantic containers, with `distance` mapped
/// onto `distance_prefix`.
pub(crate) fn spacing_axes(table: VariantTable, distance_prefix: &str) -> VariantTable {
    let distance_none = format!("{distance_prefix}-none");
    let distance_auto = format!("{distance_prefix}-auto");
    table
        .scale_axis(
            "distance",
            distance_prefix,
            &[("auto", distance_auto.as_str()), ("none", distance_none.as_str())],
            0..=9,
            "4",
        )
        .scale_axis("gap", "gap", &[("auto", "gap-auto"), ("none", "gap-0")], 0..=9, "none")
        .scale_axis("gapX", "gap-x", &[("auto", "gap-x-auto"), ("none", "gap-x-0")], 0..=9, "none")
        .scale_axis("gapY", "gap-y", &[("auto", "gap-y-auto"), ("none", "gap-y-0")], 0..=9, "none")
        .scale_axis(
            "spacingX",
            "space-x",
            &[("auto", "space-x-auto"), ("none", "space-x-none")],
            0..=9,
            "none",
        )
        .scale_axis(
            "spacingY",
            "space-y",
            &[("auto", "space-y-auto"), ("none", "space-y-none")],
            0..=9,
            "none",
        )
}

/// The chosen steps of one semantic container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Spacing {
    pub distance: Option<Step>,
    pub gap: Option<Step>,
    pub gap_x: Option<Step>,
    pub gap_y: Option<Step>,
    pub spacing_x: Option<Step>,
    pub spacing_y: Option<Step>,
}

impl Spacing {
    pub fn selection(&self) -> [(&'static str, Option<&'static str>); 6] {
        [
            pick("distance", self.distance),
            pick("gap", self.gap),
            pick("gapX", self.gap_x),
            pick("gapY", self.gap_y),
            pick("spacingX", self.spacing_x),
            pick("spacingY", self.spacing_y),
        ]
    }

    pub fn compose(&self, table: &VariantTable, class: Option<&str>) -> String {
        let selection = self.selection();
        let selection: &Selection<'_> = &selection;
        table.compose(selection, class)
    }
}

/// Setters for the shared axes on a type with a `spacing: Spacing` field.
macro_rules! impl_spacing_setters {
    ($($ty:ident),+) => {
        $(
            impl $ty {
                pub fn distance(mut self, step: $crate::semantic::Step) -> Self {
                    self.spacing.distance = Some(step);
                    self
                }

                pub fn gap(mut self, step: $crate::semantic::Step) -> Self {
                    self.spacing.gap = Some(step);
                    self
                }

                pub fn gap_x(mut self, step: $crate::semantic::Step) -> Self {
                    self.spacing.gap_x = Some(step);
                    self
                }

                pub fn gap_y(mut self, step: $crate::semantic::Step) -> Self {
                    self.spacing.gap_y = Some(step);
                    self
                }

                pub fn spacing_x(mut self, step: $crate::semantic::Step) -> Self {
                    self.spacing.spacing_x = Some(step);
                    self
                }

                pub fn spacing_y(mut self, step: $crate::semantic::Step) -> Self {
                    self.spacing.spacing_y = Some(step);
                    self
                }
            }
        )+
    };
}

pub(crate) use impl_spacing_setters;
