//! # scaffold-ui
//!
//! Component styling for a utility-first CSS system.
//!
//! - [`stylekit`]: responsive class resolution, variant tables, constraint
//!   mapping and class merging
//! - [`scaffold`]: the components, semantic containers and layouts built on
//!   top of it
//!
//! ```rust
//! use scaffold_ui::{Container, Element, Step};
//!
//! let page = Container::new().distance(Step::Eight).child("Welcome");
//! assert_eq!(
//!     Element::from(page).to_string(),
//!     r#"<div class="container px-8 gap-0 gap-x-0 gap-y-0 space-x-none space-y-none">Welcome</div>"#
//! );
//! ```

pub use scaffold::*;
