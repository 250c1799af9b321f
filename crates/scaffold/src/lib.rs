//! # scaffold - presentational components
//!
//! Stateless wrappers that turn typed style intent into an [`Element`]: a
//! tag, a `data-slot`, one merged class string and the caller's attributes
//! and children. Behavior (open state, focus, keyboard handling) belongs to
//! the accessible primitives the components render; see [`Primitive`].
//!
//! - **Components**: [`Button`], [`Avatar`], the accordion parts
//! - **Semantic containers**: [`Container`], [`Main`]
//! - **Layouts**: [`BoxLayout`], [`FlexLayout`], [`GridLayout`],
//!   [`ConstraintLayout`]
//!
//! Every component accepts a class override (merged last, so it wins
//! conflicts), pass-through attributes, children and a [`Render`] directive
//! that applies the component to a caller-supplied element instead of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use scaffold::{Button, ButtonVariant, Element, FlexLayout};
//! use scaffold::layout::Items;
//!
//! let toolbar = FlexLayout::new()
//!     .items(Items::Center)
//!     .gap(2)
//!     .child(Button::labeled("Save"))
//!     .child(Button::labeled("Delete").variant(ButtonVariant::Destructive));
//!
//! let html = Element::from(toolbar).to_string();
//! assert!(html.starts_with(r#"<div class="flex items-center gap-2"><button class="inline-flex items-center"#));
//! assert!(html.contains("bg-destructive"));
//! ```
//!
//! ## Modules
//!
//! - [`components`]: button, avatar and accordion parts
//! - [`semantic`]: page container and main landmark
//! - [`layout`]: box, flex, grid and constraint layouts
//! - [`element`]: the rendered element tree and its HTML serialization
//! - [`render`]: own-element versus adopt-child rendering

mod macros;

pub mod component;
pub mod components;
pub mod element;
pub mod layout;
pub mod primitive;
pub mod render;
pub mod semantic;

pub use stylekit;

pub use component::{Component, ElementProps};
pub use components::{
    Accordion, AccordionContent, AccordionItem, AccordionTrigger, Avatar, AvatarFallback, AvatarImage, Button,
    ButtonVariant, Size,
};
pub use element::{Element, Node, Tag};
pub use layout::{BoxLayout, ConstraintItem, ConstraintLayout, FlexLayout, GridLayout};
pub use primitive::Primitive;
pub use render::Render;
pub use semantic::{Container, Main, Step};
