//! Layout primitives.
//!
//! [`FlexLayout`] and [`GridLayout`] take responsive props (see [`props`]),
//! [`BoxLayout`] takes fixed variant values, and [`ConstraintLayout`]
//! positions its children absolutely.

pub mod box_layout;
pub mod constraint;
pub mod flex;
pub mod grid;
pub mod props;

pub use box_layout::{BoxDisplay, BoxLayout, BoxOverflow, Extent, box_variants};
pub use constraint::{ConstraintItem, ConstraintLayout};
pub use flex::{Direction, FlexLayout, Wrap};
pub use grid::{AutoFlow, GridAlign, GridLayout};
pub use props::{
    Display, Items, Justify, LayoutProps, LayoutTag, Overflow, PointerEvents, Position, TextAlign, Value,
    Visibility,
};
