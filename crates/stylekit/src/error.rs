//! Error types for class resolution.
//!
//! Every resolver in this crate is total. Errors only surface from the
//! string-keyed entry points: strict variant composition and class token
//! parsing.

use thiserror::Error;

/// Errors produced by the dynamic (string-keyed) APIs.
///
/// # Examples
///
/// ```rust
/// use stylekit::parser::parse_class;
///
/// // Unbalanced arbitrary value
/// assert!(parse_class("w-[10px").is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A variant axis that the component's table does not declare.
    #[error("unknown variant axis `{axis}` for {component}")]
    UnknownAxis {
        component: &'static str,
        axis: String,
    },

    /// A value that the axis does not list.
    #[error("unknown value `{value}` for variant axis `{axis}` of {component}")]
    UnknownVariant {
        component: &'static str,
        axis: &'static str,
        value: String,
    },

    /// A class token that could not be split into modifiers and utility.
    #[error("invalid class token: {0}")]
    InvalidClass(String),
}

/// Convenience alias for results carrying a [`StyleError`].
pub type Result<T> = std::result::Result<T, StyleError>;
