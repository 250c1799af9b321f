//! # stylekit - utility-class resolution
//!
//! Pure, synchronous functions that turn style intent into utility class
//! names for a utility-first CSS system (Tailwind vocabulary).
//!
//! - **Responsive values**: a property is a single value or a per-breakpoint
//!   mapping ([`ResponsiveValue`])
//! - **Resolvers**: [`resolve_responsive_class`] and [`resolve_enum_class`]
//!   emit one class per breakpoint
//! - **Variant tables**: cva-style axis tables with defaults ([`VariantTable`])
//! - **Constraints**: absolute positioning as classes or inline styles
//!   ([`resolve_constraint`])
//! - **Merging**: conflict-aware class joining ([`cn`], [`ClassMerger`])
//!
//! ## Quick Start
//!
//! ```rust
//! use stylekit::{Constraint, cn, resolve_constraint, resolve_responsive_class, responsive};
//!
//! let gap = responsive([("initial", 2), ("medium", 4)]);
//! let classes = resolve_responsive_class("gap", Some(&gap));
//! assert_eq!(classes, vec!["gap-2", "md:gap-4"]);
//!
//! let positioned = resolve_constraint(&Constraint::new().top(4).left("10%"));
//! assert_eq!(cn(&positioned.classes), "absolute top-4");
//! assert_eq!(positioned.style.to_string(), "left: 10%");
//! ```
//!
//! Nothing here allocates global state after startup. Lookup tables are
//! static and every function is safe to call from any thread.
//!
//! ## Modules
//!
//! - [`breakpoint`]: breakpoint alias table and configuration
//! - [`value`]: responsive values
//! - [`resolve`]: responsive and enum class resolvers
//! - [`variant`]: variant tables
//! - [`constraint`]: constraint mapper
//! - [`style`]: inline style maps
//! - [`parser`]: class token parser
//! - [`merge`]: class merging
//! - [`error`]: error types

pub mod breakpoint;
pub mod constraint;
pub mod error;
pub mod merge;
pub mod parser;
pub mod resolve;
pub mod style;
pub mod value;
pub mod variant;

pub use breakpoint::{BREAKPOINT_ALIASES, Breakpoints, breakpoint_token};
pub use constraint::{Constraint, ConstraintStyle, ConstraintValue, resolve_constraint};
pub use error::{Result, StyleError};
pub use merge::{ClassMerger, JoinClasses, TailwindMerge, cn, cn_with};
pub use resolve::{
    ClassAxis, resolve_axis, resolve_axis_with, resolve_enum_class, resolve_responsive_class,
};
pub use style::{StyleMap, StyleProperty, StyleValue};
pub use value::{IntoResponsive, ResponsiveValue, responsive};
pub use variant::{Selection, VariantKey, VariantTable, pick};
